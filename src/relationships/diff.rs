//! Set difference between two export documents.

use serde_json::Value;

use super::extract::{extract_hrefs, HrefSet};
use super::DocumentError;

/// Outcome of comparing two documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HrefDiff {
    /// Number of unique hrefs in the first document.
    pub first_len: usize,
    /// Number of unique hrefs in the second document.
    pub second_len: usize,
    /// Hrefs present in the first document and absent from the second.
    pub unique: HrefSet,
}

/// Extract both documents and subtract the second href set from the first.
pub fn diff_documents(first: &Value, second: &Value) -> Result<HrefDiff, DocumentError> {
    let first_hrefs = extract_hrefs(first)?;
    let second_hrefs = extract_hrefs(second)?;

    let first_len = first_hrefs.len();
    let unique = first_hrefs
        .into_iter()
        .filter(|href| !second_hrefs.contains(href))
        .collect();

    Ok(HrefDiff {
        first_len,
        second_len: second_hrefs.len(),
        unique,
    })
}

/// Hrefs found in `first` but not in `second`, by exact string equality.
pub fn find_unique_hrefs(first: &Value, second: &Value) -> Result<HrefSet, DocumentError> {
    diff_documents(first, second).map(|diff| diff.unique)
}
