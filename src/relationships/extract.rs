//! Href extraction.
//!
//! # Accepted Shapes
//! ```text
//! [ { "string_list_data": [ { "href": "..." }, ... ] }, ... ]
//!
//! { "relationships_following": [ ...same entries... ] }
//! ```
//!
//! Entries that are not objects, or lack `string_list_data`, are skipped.
//! Elements of `string_list_data` that are not objects, or lack `href`,
//! are skipped. Empty-ish `href` values (null, false, 0, "", [], {}) are
//! skipped as well.

use std::collections::HashSet;

use serde_json::Value;

use super::{kind_of, DocumentError};

/// Key wrapping the entry array in "following" exports.
pub const FOLLOWING_KEY: &str = "relationships_following";

/// Per-entry key holding the list of link records.
pub const STRING_LIST_KEY: &str = "string_list_data";

/// Link record key holding the href itself.
pub const HREF_KEY: &str = "href";

/// Unordered set of unique hrefs.
pub type HrefSet = HashSet<String>;

/// Collect every non-empty `href` string found in the document's entries.
pub fn extract_hrefs(document: &Value) -> Result<HrefSet, DocumentError> {
    let entries = unwrap_entries(document)?;

    let mut hrefs = HrefSet::new();
    for (index, entry) in entries.iter().enumerate() {
        let Some(string_list) = field(entry, STRING_LIST_KEY) else {
            continue;
        };

        let records = string_list
            .as_array()
            .ok_or(DocumentError::StringListNotASequence {
                entry: index,
                found: kind_of(string_list),
            })?;

        for record in records {
            let Some(href) = field(record, HREF_KEY) else {
                continue;
            };
            if !is_truthy(href) {
                continue;
            }
            match href {
                Value::String(s) => {
                    hrefs.insert(s.clone());
                }
                other => {
                    return Err(DocumentError::HrefNotAString {
                        entry: index,
                        found: kind_of(other),
                    })
                }
            }
        }
    }

    Ok(hrefs)
}

/// Resolve the entry array, looking through `relationships_following` if present.
fn unwrap_entries(document: &Value) -> Result<&Vec<Value>, DocumentError> {
    let (container, path) = match field(document, FOLLOWING_KEY) {
        Some(inner) => (inner, FOLLOWING_KEY),
        None => (document, "document root"),
    };

    container.as_array().ok_or(DocumentError::NotASequence {
        path,
        found: kind_of(container),
    })
}

/// Field lookup that only succeeds on objects.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|map| map.get(key))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
