//! The contract generated root content types implement.

use serde_json::{Map, Value};

/// Content that can be re-populated in place from a later document.
///
/// Generated root types implement this; the runtime only ever calls it on a
/// private copy, so implementations never need to guard against readers.
pub trait Updatable {
    /// Update from `obj`. Absent input leaves the value unchanged.
    fn update(&mut self, obj: Option<&Map<String, Value>>);

    /// Update from a whole document. Anything other than an object is treated as
    /// absent.
    fn apply_document(&mut self, document: &Value) {
        self.update(document.as_object());
    }
}
