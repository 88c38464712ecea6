//! Test fixtures shared by the unit tests.

use crate::error::{ContentError, ContentResult};
use crate::refresh::{ContentFetcher, FetchedContent};
use crate::updatable::Updatable;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cell::Cell;

/// Shaped like a generated root type: one required and one optional string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Greeting {
    pub title: String,
    pub subtitle: Option<String>,
}

impl Default for Greeting {
    fn default() -> Self {
        Self {
            title: "Hello".to_string(),
            subtitle: None,
        }
    }
}

impl Updatable for Greeting {
    fn update(&mut self, obj: Option<&Map<String, Value>>) {
        let Some(obj) = obj else {
            return;
        };
        if let Some(Value::String(value)) = obj.get("title") {
            self.title = value.clone();
        }
        self.subtitle = obj
            .get("subtitle")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
    }
}

pub struct FakeFetcher {
    pub etag: Option<String>,
    pub document: Value,
    pub fail: bool,
    pub fetches: Cell<usize>,
}

impl FakeFetcher {
    pub fn new(etag: Option<&str>, document: Value) -> Self {
        Self {
            etag: etag.map(str::to_string),
            document,
            fail: false,
            fetches: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(None, Value::Null)
        }
    }
}

impl ContentFetcher for FakeFetcher {
    fn head_etag(&self) -> ContentResult<Option<String>> {
        if self.fail {
            return Err(ContentError::Fetch("offline".to_string()));
        }
        Ok(self.etag.clone())
    }

    fn fetch(&self) -> ContentResult<FetchedContent> {
        if self.fail {
            return Err(ContentError::Fetch("offline".to_string()));
        }
        self.fetches.set(self.fetches.get() + 1);
        Ok(FetchedContent {
            etag: self.etag.clone(),
            document: self.document.clone(),
        })
    }
}
