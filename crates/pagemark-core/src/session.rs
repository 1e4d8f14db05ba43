//! Session state bridging the pipeline to an interactive surface.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam_channel::{Receiver, Sender, unbounded};
use tracing::{debug, warn};

use crate::config::PagemarkConfig;
use crate::error::{PagemarkError, Result};
use crate::ocr::TesseractEngine;
use crate::outline;
use crate::pdf::PdfExtractor;
use crate::reader::{self, PageText};

/// Events sent by the read worker back to the session's thread.
#[derive(Debug)]
pub enum ReadEvent {
    /// The worker opened the document and accepted the range.
    Started { first: u32, last: u32 },

    /// One page of the range finished OCR.
    Page(PageText),

    /// The whole range completed.
    Finished { pages: u32 },

    /// The pass aborted; no further events follow.
    Failed(PagemarkError),
}

/// Receiving side of an in-flight read pass.
pub struct ReadHandle {
    events: Receiver<ReadEvent>,
}

impl ReadHandle {
    /// Iterate events until the worker hangs up.
    pub fn iter(&self) -> crossbeam_channel::Iter<'_, ReadEvent> {
        self.events.iter()
    }
}

/// Releases the in-flight flag when the worker exits, panics included.
struct FlightGuard(Arc<AtomicBool>);

impl Drop for FlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Orchestration state: the chosen source file and the display buffer.
///
/// The buffer is mutated only on the owning thread, by folding worker events
/// in through [`Session::apply`]; the worker itself never touches shared
/// state.
pub struct Session {
    config: PagemarkConfig,
    source: Option<PathBuf>,
    buffer: String,
    read_in_flight: Arc<AtomicBool>,
}

impl Session {
    /// Create a session with the given configuration.
    pub fn new(config: PagemarkConfig) -> Self {
        Self {
            config,
            source: None,
            buffer: String::new(),
            read_in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Currently selected source PDF, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Select the source PDF for subsequent reads and outline writes.
    pub fn open(&mut self, path: impl Into<PathBuf>) {
        self.source = Some(path.into());
    }

    /// The display buffer.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the display buffer with externally edited text.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Whether a read pass is currently running.
    pub fn read_in_flight(&self) -> bool {
        self.read_in_flight.load(Ordering::SeqCst)
    }

    /// Start a read pass over an inclusive page range on a worker thread.
    ///
    /// Clears the display buffer, then streams [`ReadEvent`]s over the
    /// returned handle. At most one read pass runs at a time; a second call
    /// while one is in flight fails with [`PagemarkError::ReadInFlight`]
    /// instead of racing on the buffer.
    pub fn begin_read(&mut self, first: u32, last: u32) -> Result<ReadHandle> {
        if self.read_in_flight() {
            return Err(PagemarkError::ReadInFlight);
        }

        self.buffer.clear();

        let path = self.source.clone().ok_or(PagemarkError::NoDocument)?;
        let config = self.config.clone();

        self.spawn_worker(move |events| {
            let mut extractor = PdfExtractor::new();
            extractor.load_file(&path)?;

            let engine = TesseractEngine::from_config(&config.ocr)?;

            events.send(ReadEvent::Started { first, last }).ok();

            let pages = reader::read_range(&extractor, &engine, &config.reader, first, last)?;
            let count = pages.len() as u32;
            for page in pages {
                events.send(ReadEvent::Page(page)).ok();
            }
            Ok(count)
        })
    }

    /// Fold a worker event into the session.
    pub fn apply(&mut self, event: ReadEvent) -> Result<()> {
        match event {
            ReadEvent::Page(page) => {
                self.buffer.push_str(&page.text);
                Ok(())
            }
            ReadEvent::Failed(err) => Err(err),
            ReadEvent::Started { .. } | ReadEvent::Finished { .. } => Ok(()),
        }
    }

    /// Drain a read pass to completion, applying every event.
    pub fn finish_read(&mut self, handle: ReadHandle) -> Result<()> {
        for event in handle.events.iter() {
            self.apply(event)?;
        }
        Ok(())
    }

    /// Write the edited buffer as an outline into a copy of the source PDF.
    ///
    /// Refused while a read pass is in flight.
    pub fn write_outline(&self) -> Result<PathBuf> {
        if self.read_in_flight() {
            return Err(PagemarkError::ReadInFlight);
        }

        let path = self.source.as_deref().ok_or(PagemarkError::NoDocument)?;
        let output = outline::write_outline(path, &self.buffer, &self.config.outline)?;
        Ok(output)
    }

    /// Claim the in-flight flag and run `work` on a detached worker thread.
    ///
    /// The flag is released by a guard that drops before the event channel
    /// closes, so a drained handle implies the session accepts a new pass.
    fn spawn_worker<F>(&mut self, work: F) -> Result<ReadHandle>
    where
        F: FnOnce(&Sender<ReadEvent>) -> Result<u32> + Send + 'static,
    {
        if self
            .read_in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(PagemarkError::ReadInFlight);
        }

        let guard = FlightGuard(Arc::clone(&self.read_in_flight));
        let (tx, rx) = unbounded();

        thread::spawn(move || {
            let _guard = guard;
            match work(&tx) {
                Ok(pages) => {
                    debug!("read pass finished: {} pages", pages);
                    tx.send(ReadEvent::Finished { pages }).ok();
                }
                Err(err) => {
                    warn!("read pass failed: {}", err);
                    tx.send(ReadEvent::Failed(err)).ok();
                }
            }
        });

        Ok(ReadHandle { events: rx })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(number: u32, text: &str) -> PageText {
        PageText {
            page: number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_begin_read_without_source() {
        let mut session = Session::new(PagemarkConfig::default());
        session.set_buffer("stale");

        let result = session.begin_read(1, 2);
        assert!(matches!(result, Err(PagemarkError::NoDocument)));
        // The buffer is cleared even when the pass never starts
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn test_events_fold_into_buffer_in_order() {
        let mut session = Session::new(PagemarkConfig::default());

        let handle = session
            .spawn_worker(|events| {
                events.send(ReadEvent::Started { first: 1, last: 3 }).ok();
                events.send(ReadEvent::Page(page(1, ""))).ok();
                events.send(ReadEvent::Page(page(2, "Hello\nWorld"))).ok();
                events.send(ReadEvent::Page(page(3, ""))).ok();
                Ok(3)
            })
            .unwrap();

        session.finish_read(handle).unwrap();
        assert_eq!(session.buffer(), "Hello\nWorld");
        assert!(!session.read_in_flight());
    }

    #[test]
    fn test_at_most_one_read_pass() {
        let mut session = Session::new(PagemarkConfig::default());
        session.open("unused.pdf");

        let (release_tx, release_rx) = unbounded::<()>();
        let handle = session
            .spawn_worker(move |events| {
                events.send(ReadEvent::Page(page(1, "a"))).ok();
                release_rx.recv().ok();
                Ok(1)
            })
            .unwrap();

        assert!(matches!(
            session.begin_read(1, 1),
            Err(PagemarkError::ReadInFlight)
        ));
        assert!(matches!(
            session.write_outline(),
            Err(PagemarkError::ReadInFlight)
        ));

        release_tx.send(()).unwrap();
        session.finish_read(handle).unwrap();
        assert_eq!(session.buffer(), "a");

        // The finished pass released the flag
        let handle = session.spawn_worker(|_| Ok(0)).unwrap();
        session.finish_read(handle).unwrap();
    }

    #[test]
    fn test_failed_pass_surfaces_error_after_partial_pages() {
        let mut session = Session::new(PagemarkConfig::default());

        let handle = session
            .spawn_worker(|events| {
                events.send(ReadEvent::Page(page(1, "partial"))).ok();
                Err(PagemarkError::NoDocument)
            })
            .unwrap();

        let result = session.finish_read(handle);
        assert!(matches!(result, Err(PagemarkError::NoDocument)));
        assert_eq!(session.buffer(), "partial");
        assert!(!session.read_in_flight());
    }

    #[test]
    fn test_begin_read_on_missing_file_fails_in_worker() {
        let mut session = Session::new(PagemarkConfig::default());
        session.open("/no/such/file.pdf");

        let handle = session.begin_read(1, 1).unwrap();
        let result = session.finish_read(handle);
        assert!(matches!(result, Err(PagemarkError::Pdf(_))));
        assert_eq!(session.buffer(), "");
    }

    #[test]
    fn test_flag_released_after_worker_panic() {
        let mut session = Session::new(PagemarkConfig::default());

        let handle = session.spawn_worker(|_| panic!("worker died")).unwrap();

        // The channel closes without a terminal event; the guard still ran
        session.finish_read(handle).unwrap();
        assert!(!session.read_in_flight());
    }
}
