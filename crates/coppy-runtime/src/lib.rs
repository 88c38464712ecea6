//! coppy-runtime - Live content for generated coppy types
//!
//! This crate provides:
//! - [`Updatable`], implemented by generated root content types
//! - [`ContentHandle`] for sharing content and swapping in updates atomically
//! - [`ContentStore`] for persisting content and ETag bookkeeping on disk
//! - [`refresh`] and [`apply_pending`] for the fetch/persist/apply cycle
//!
//! Fetching itself is behind [`ContentFetcher`]; no HTTP client ships here.

mod config;
mod error;
mod handle;
mod refresh;
mod store;
mod updatable;

pub use config::{CONTENT_BASE_URL, ContentConfig, UpdateType};
pub use error::{ContentError, ContentResult};
pub use handle::ContentHandle;
pub use refresh::{
    ContentFetcher, FetchedContent, RefreshOutcome, apply_pending, normalize_etag, refresh,
};
pub use store::ContentStore;
pub use updatable::Updatable;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ContentConfig, ContentError, ContentFetcher, ContentHandle, ContentResult, ContentStore,
        RefreshOutcome, Updatable, UpdateType,
    };
}

#[cfg(test)]
pub(crate) mod test_support;
