//! Background startup load.

use crate::loader::{load_document, AssetSource};
use crate::model::document::Document;
use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Handle to a one-shot document load running on a worker thread.
///
/// The result is delivered at most once. Cancelling (or dropping) the handle
/// discards a result that has not been taken yet.
#[derive(Debug)]
pub struct DocumentLoad {
    receiver: Option<Receiver<Document>>,
    cancelled: Arc<AtomicBool>,
}

impl DocumentLoad {
    /// Starts loading from `source` on a new thread.
    pub fn spawn<S>(source: S) -> Self
    where
        S: AssetSource + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let worker_cancelled = Arc::clone(&cancelled);

        thread::spawn(move || {
            let doc = load_document(&source);
            if worker_cancelled.load(Ordering::Acquire) {
                debug!("event=document_load module=loader status=cancelled");
                return;
            }
            // Receiver may already be gone on teardown.
            let _ = sender.send(doc);
        });

        Self {
            receiver: Some(receiver),
            cancelled,
        }
    }

    /// Returns the loaded document if it is ready, without blocking.
    pub fn try_take(&mut self) -> Option<Document> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(doc) => {
                self.receiver = None;
                Some(doc)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.receiver = None;
                None
            }
        }
    }

    /// Blocks until the load finishes.
    ///
    /// Returns `None` when cancelled or already taken.
    pub fn wait(mut self) -> Option<Document> {
        let receiver = self.receiver.take()?;
        receiver.recv().ok()
    }

    /// Discards the pending result.
    pub fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        self.receiver = None;
    }

    /// Whether a result may still arrive.
    pub fn is_pending(&self) -> bool {
        self.receiver.is_some()
    }
}

impl Drop for DocumentLoad {
    fn drop(&mut self) {
        if self.receiver.is_some() {
            self.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DocumentLoad;
    use crate::loader::{MemoryAssetSource, DOCUMENT_ASSET};

    #[test]
    fn wait_returns_loaded_document() {
        let source = MemoryAssetSource::new()
            .with_asset(DOCUMENT_ASSET, br#"{"title":"Loaded"}"#.to_vec());
        let load = DocumentLoad::spawn(source);
        let doc = load.wait().expect("load should deliver a document");
        assert_eq!(doc.title, "Loaded");
    }

    #[test]
    fn cancelled_load_never_delivers() {
        let mut load = DocumentLoad::spawn(MemoryAssetSource::new());
        load.cancel();
        assert!(!load.is_pending());
        assert!(load.try_take().is_none());
        assert!(load.wait().is_none());
    }
}
