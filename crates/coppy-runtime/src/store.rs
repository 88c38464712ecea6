//! Directory-backed persistence of content and refresh bookkeeping.
//!
//! ```text
//! <root>/
//!   <space_key>/<content_version>.json   persisted content (only file in the dir)
//!   coppy.<space_key>.state.json         { "etag": ..., "applied_etag": ... }
//! ```

use crate::config::ContentConfig;
use crate::error::ContentResult;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    etag: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    applied_etag: Option<String>,
}

/// Persisted content for one content space
#[derive(Debug, Clone)]
pub struct ContentStore {
    content_dir: PathBuf,
    content_file: String,
    state_path: PathBuf,
}

impl ContentStore {
    /// Store for `config`'s content space under `root`.
    ///
    /// Fails when `config` does not validate, so the content dir is always a
    /// subdirectory of `root` and `save` never clears `root` itself.
    pub fn new(root: impl AsRef<Path>, config: &ContentConfig) -> ContentResult<Self> {
        config.validate()?;
        let root = root.as_ref();
        Ok(Self {
            content_dir: root.join(config.content_dir()),
            content_file: config.content_file_name(),
            state_path: root.join(format!("{}.state.json", config.properties_key())),
        })
    }

    /// Path of the persisted content file
    pub fn content_path(&self) -> PathBuf {
        self.content_dir.join(&self.content_file)
    }

    /// Persist `content`, replacing anything previously saved in the content dir.
    pub fn save<T: Serialize>(&self, content: &T) -> ContentResult<()> {
        let bytes = serde_json::to_vec(content)?;

        fs::create_dir_all(&self.content_dir)?;
        self.clear_files()?;
        fs::write(self.content_path(), bytes)?;

        debug!(path = %self.content_path().display(), "saved content");
        Ok(())
    }

    /// Read the persisted content, or `None` when nothing has been saved.
    pub fn load<T: DeserializeOwned>(&self) -> ContentResult<Option<T>> {
        let bytes = match fs::read(self.content_path()) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    /// ETag of the last persisted content
    pub fn etag(&self) -> ContentResult<Option<String>> {
        Ok(self.read_state()?.etag)
    }

    pub fn set_etag(&self, etag: impl Into<String>) -> ContentResult<()> {
        let mut state = self.read_state()?;
        state.etag = Some(etag.into());
        self.write_state(&state)
    }

    /// Forget the persisted content's ETag, e.g. after a fetch that carried none
    pub fn clear_etag(&self) -> ContentResult<()> {
        let mut state = self.read_state()?;
        state.etag = None;
        self.write_state(&state)
    }

    /// ETag of the content last swapped into a handle
    pub fn applied_etag(&self) -> ContentResult<Option<String>> {
        Ok(self.read_state()?.applied_etag)
    }

    pub fn set_applied_etag(&self, etag: impl Into<String>) -> ContentResult<()> {
        let mut state = self.read_state()?;
        state.applied_etag = Some(etag.into());
        self.write_state(&state)
    }

    fn clear_files(&self) -> ContentResult<()> {
        for entry in fs::read_dir(&self.content_dir)? {
            let path = entry?.path();
            if path.is_file() {
                fs::remove_file(&path)?;
            }
        }
        Ok(())
    }

    fn read_state(&self) -> ContentResult<StoreState> {
        match fs::read(&self.state_path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(StoreState::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_state(&self, state: &StoreState) -> ContentResult<()> {
        if let Some(parent) = self.state_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.state_path, serde_json::to_vec(state)?)?;
        Ok(())
    }
}
