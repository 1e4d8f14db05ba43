//! Launching the platform's default PDF viewer.

use std::io;
use std::path::Path;
use std::process::Command;

use tracing::{debug, warn};

/// Open a file with the host platform's default viewer.
///
/// The viewer process is spawned and not waited on. Platforms without a
/// known open mechanism log a warning and return successfully.
pub fn open_in_viewer(path: &Path) -> io::Result<()> {
    debug!("opening {} in default viewer", path.display());

    if cfg!(target_os = "windows") {
        Command::new("cmd")
            .args(["/C", "start", ""])
            .arg(path)
            .spawn()?;
    } else if cfg!(target_os = "macos") {
        Command::new("open")
            .args(["-a", "Preview"])
            .arg(path)
            .spawn()?;
    } else if cfg!(target_os = "linux") {
        Command::new("xdg-open").arg(path).spawn()?;
    } else {
        warn!("no default viewer mechanism for this platform");
    }

    Ok(())
}
