//! Content runtime configuration

use crate::error::{ContentError, ContentResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Base URL of the content delivery service.
pub const CONTENT_BASE_URL: &str = "https://content.coppy.app";

/// When freshly fetched content becomes visible to readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateType {
    /// Swap into the live handle as soon as it is fetched
    #[default]
    Foreground,

    /// Persist only; a later [`apply_pending`](crate::apply_pending) swaps it in
    Background,
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateType::Foreground => write!(f, "foreground"),
            UpdateType::Background => write!(f, "background"),
        }
    }
}

/// Runtime configuration for one content space
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Identifier of the content space in the CMS
    #[serde(default)]
    pub space_key: String,

    /// When fetched content is applied
    #[serde(default)]
    pub update_type: UpdateType,

    /// Version of the application shape the persisted content belongs to.
    ///
    /// Names the persisted file, so content saved by an older build with a
    /// different shape is never read back.
    #[serde(default = "default_content_version")]
    pub content_version: String,
}

fn default_content_version() -> String {
    "1".to_string()
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            space_key: String::new(),
            update_type: UpdateType::default(),
            content_version: default_content_version(),
        }
    }
}

impl ContentConfig {
    /// Create configuration for `space_key` with default settings
    pub fn new(space_key: impl Into<String>) -> Self {
        Self {
            space_key: space_key.into(),
            ..Self::default()
        }
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> ContentResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    pub fn with_update_type(mut self, update_type: UpdateType) -> Self {
        self.update_type = update_type;
        self
    }

    pub fn with_content_version(mut self, content_version: impl Into<String>) -> Self {
        self.content_version = content_version.into();
        self
    }

    /// Check that the configuration can address a content space
    pub fn validate(&self) -> ContentResult<()> {
        if self.space_key.is_empty() {
            return Err(ContentError::Config("space_key is empty".to_string()));
        }
        if !self
            .space_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ContentError::Config(format!(
                "space_key contains unsupported characters: {}",
                self.space_key
            )));
        }
        if self.content_version.is_empty() || self.content_version.contains(['/', '\\']) {
            return Err(ContentError::Config(format!(
                "invalid content_version: {:?}",
                self.content_version
            )));
        }
        Ok(())
    }

    /// URL the content document is served from
    pub fn content_url(&self) -> String {
        format!("{CONTENT_BASE_URL}/{}/content", self.space_key)
    }

    /// Key the refresh bookkeeping is stored under
    pub fn properties_key(&self) -> String {
        format!("coppy.{}", self.space_key)
    }

    /// Directory, relative to the store root, holding the persisted content
    pub fn content_dir(&self) -> PathBuf {
        PathBuf::from(&self.space_key)
    }

    /// File name of the persisted content within [`content_dir`](Self::content_dir)
    pub fn content_file_name(&self) -> String {
        format!("{}.json", self.content_version)
    }
}
