//! Shared, swappable content.
//!
//! A [`ContentHandle`] is the one place an application reads content from. Updates
//! build a complete new value off to the side and swap it in, so a reader holding
//! [`current`](ContentHandle::current) always sees one consistent document.

use crate::store::ContentStore;
use crate::updatable::Updatable;
use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

/// Thread-safe holder of the live content value
#[derive(Debug)]
pub struct ContentHandle<T> {
    content: RwLock<Arc<T>>,
    version: AtomicU64,
}

impl<T> ContentHandle<T> {
    /// Create a handle holding `content` at version 0
    pub fn new(content: T) -> Self {
        Self {
            content: RwLock::new(Arc::new(content)),
            version: AtomicU64::new(0),
        }
    }

    /// Snapshot of the live content
    pub fn current(&self) -> Arc<T> {
        self.content.read().clone()
    }

    /// Number of swaps since creation
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Swap in `content` and return the new version
    pub fn replace(&self, content: T) -> u64 {
        let mut guard = self.content.write();
        *guard = Arc::new(content);
        self.bump()
    }

    fn bump(&self) -> u64 {
        self.version.fetch_add(1, Ordering::AcqRel) + 1
    }
}

impl<T: Updatable + Clone> ContentHandle<T> {
    /// Apply `document` on top of the live content and swap the result in.
    ///
    /// The write lock is held across the copy so concurrent applies are not lost.
    pub fn apply(&self, document: &Value) -> u64 {
        let mut guard = self.content.write();
        let mut next = T::clone(&guard);
        next.apply_document(document);
        *guard = Arc::new(next);
        self.bump()
    }
}

impl<T: Default + DeserializeOwned> ContentHandle<T> {
    /// Start from persisted content if there is any, else from the baked-in defaults.
    ///
    /// Unreadable persisted content is logged and ignored.
    pub fn restore_or_default(store: &ContentStore) -> Self {
        match store.load::<T>() {
            Ok(Some(content)) => {
                debug!(path = %store.content_path().display(), "restored persisted content");
                Self::new(content)
            }
            Ok(None) => Self::new(T::default()),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable persisted content");
                Self::new(T::default())
            }
        }
    }
}

impl<T: Default> Default for ContentHandle<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
