//! Fetch, persist, and apply fresh content.
//!
//! One refresh run:
//! 1. If an ETag is stored, ask the source for its current ETag and stop when equal
//! 2. Fetch the document and build new content from the baked-in defaults
//! 3. Persist it and record its ETag
//! 4. For foreground updates, swap it into the handle right away
//!
//! Background updates stop after step 3; [`apply_pending`] performs the swap at a
//! moment the application chooses (e.g. when it is backgrounded).

use crate::config::{ContentConfig, UpdateType};
use crate::error::{ContentError, ContentResult};
use crate::handle::ContentHandle;
use crate::store::ContentStore;
use crate::updatable::Updatable;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info};

/// A fetched content document and the ETag it was served with
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedContent {
    pub etag: Option<String>,
    pub document: Value,
}

/// Source of content documents, typically the CMS content endpoint
pub trait ContentFetcher {
    /// Current ETag of the remote document, without fetching it
    fn head_etag(&self) -> ContentResult<Option<String>>;

    /// Fetch the remote document
    fn fetch(&self) -> ContentResult<FetchedContent>;
}

/// What a refresh run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The remote content matches what is stored
    Unchanged,

    /// New content was persisted but not applied
    Stored { etag: Option<String> },

    /// New content was persisted and swapped into the handle
    Applied { etag: Option<String>, version: u64 },
}

/// Strip the quotes servers wrap ETags in.
pub fn normalize_etag(etag: &str) -> String {
    etag.replace('"', "")
}

/// Run one refresh of `handle` from `fetcher`, persisting through `store`.
pub fn refresh<T, F>(
    handle: &ContentHandle<T>,
    store: &ContentStore,
    fetcher: &F,
    config: &ContentConfig,
) -> ContentResult<RefreshOutcome>
where
    T: Updatable + Default + Serialize,
    F: ContentFetcher + ?Sized,
{
    if let Some(stored) = store.etag()? {
        let remote = fetcher.head_etag()?.map(|e| normalize_etag(&e));
        if remote.as_deref() == Some(stored.as_str()) {
            debug!(etag = %stored, "content unchanged");
            return Ok(RefreshOutcome::Unchanged);
        }
    }

    let fetched = fetcher.fetch()?;
    if !fetched.document.is_object() {
        return Err(ContentError::Fetch(
            "content document is not a JSON object".to_string(),
        ));
    }

    let mut content = T::default();
    content.apply_document(&fetched.document);
    store.save(&content)?;

    let etag = fetched.etag.as_deref().map(normalize_etag);
    match &etag {
        Some(etag) => store.set_etag(etag.as_str())?,
        None => store.clear_etag()?,
    }

    match config.update_type {
        UpdateType::Foreground => {
            let version = handle.replace(content);
            if let Some(etag) = &etag {
                store.set_applied_etag(etag.as_str())?;
            }
            info!(etag = ?etag, version, "applied fresh content");
            Ok(RefreshOutcome::Applied { etag, version })
        }
        UpdateType::Background => {
            info!(etag = ?etag, "stored fresh content for later");
            Ok(RefreshOutcome::Stored { etag })
        }
    }
}

/// Swap persisted content into `handle` if it has not been applied yet.
///
/// Returns whether a swap happened.
pub fn apply_pending<T>(handle: &ContentHandle<T>, store: &ContentStore) -> ContentResult<bool>
where
    T: DeserializeOwned,
{
    let etag = store.etag()?;
    if etag.is_some() && etag == store.applied_etag()? {
        return Ok(false);
    }

    let Some(content) = store.load::<T>()? else {
        return Ok(false);
    };
    let version = handle.replace(content);
    if let Some(etag) = &etag {
        store.set_applied_etag(etag.as_str())?;
    }

    info!(etag = ?etag, version, "applied pending content");
    Ok(true)
}
