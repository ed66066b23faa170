//! Relationship export comparison.
//!
//! # Data Flow
//! ```text
//! json1 ──▶ extract.rs (unwrap + walk entries) ──▶ HrefSet ─┐
//!                                                           ├─▶ diff.rs (set difference)
//! json2 ──▶ extract.rs (unwrap + walk entries) ──▶ HrefSet ─┘        │
//!                                                                    ▼
//!                                       format.rs (sort, strip ".com/" prefix)
//!                                                                    │
//!                                                                    ▼
//!                                                           UniqueHrefsReport
//! ```
//!
//! # Design Decisions
//! - Documents stay untyped (`serde_json::Value`): exports come either as a
//!   bare entry array or wrapped in `relationships_following`
//! - Missing optional keys are skipped, never reported
//! - Shape violations on the containers themselves are errors, so a broken
//!   export can never produce a plausible-looking but wrong result
//! - Everything here is pure and synchronous; the HTTP layer owns I/O

pub mod diff;
pub mod extract;
pub mod format;

use thiserror::Error;

pub use diff::{diff_documents, find_unique_hrefs, HrefDiff};
pub use extract::{extract_hrefs, HrefSet};
pub use format::{format_unique_hrefs, strip_domain, UniqueHrefsReport};

/// Structural problems found while walking an export document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The entry container (after unwrapping) is not an array.
    #[error("expected an array of entries at {path}, found {found}")]
    NotASequence { path: &'static str, found: &'static str },

    /// An entry's `string_list_data` is present but not an array.
    #[error("entry {entry}: string_list_data must be an array, found {found}")]
    StringListNotASequence { entry: usize, found: &'static str },

    /// An `href` holds a non-empty value that is not a string.
    #[error("entry {entry}: href must be a string, found {found}")]
    HrefNotAString { entry: usize, found: &'static str },
}

/// Compare two export documents and build the response report.
///
/// Equivalent to `format_unique_hrefs(find_unique_hrefs(first, second)?)`.
pub fn compare(
    first: &serde_json::Value,
    second: &serde_json::Value,
) -> Result<UniqueHrefsReport, DocumentError> {
    let diff = diff_documents(first, second)?;
    Ok(format_unique_hrefs(diff.unique))
}

/// Human-readable name of a JSON value's kind, used in error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
