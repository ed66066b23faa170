//! Request-level errors and their HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::relationships::DocumentError;

/// Body returned for rejected requests.
pub const MISSING_DOCUMENTS_MESSAGE: &str = "Missing 'json1' or 'json2' in request data.";

/// Body returned for malformed documents outside debug mode.
pub const MALFORMED_DOCUMENT_MESSAGE: &str = "Internal server error while processing documents.";

/// Error payload shared by every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors produced by the `/unique_hrefs` handler.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body absent, not JSON, not an object, or missing a document.
    #[error("{}", MISSING_DOCUMENTS_MESSAGE)]
    MissingDocuments,

    /// A document had an unexpected shape.
    #[error("malformed document: {source}")]
    MalformedDocument {
        #[source]
        source: DocumentError,
        /// Include `source` in the response body.
        expose: bool,
    },
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingDocuments => StatusCode::BAD_REQUEST,
            ApiError::MalformedDocument { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> ErrorBody {
        let error = match self {
            ApiError::MissingDocuments => MISSING_DOCUMENTS_MESSAGE.to_string(),
            ApiError::MalformedDocument { source, expose: true } => source.to_string(),
            ApiError::MalformedDocument { expose: false, .. } => {
                MALFORMED_DOCUMENT_MESSAGE.to_string()
            }
        };
        ErrorBody { error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn malformed(expose: bool) -> ApiError {
        ApiError::MalformedDocument {
            source: DocumentError::StringListNotASequence {
                entry: 2,
                found: "null",
            },
            expose,
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError::MissingDocuments.status(), StatusCode::BAD_REQUEST);
        assert_eq!(malformed(false).status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_documents_body() {
        assert_eq!(
            ApiError::MissingDocuments.body().error,
            "Missing 'json1' or 'json2' in request data."
        );
    }

    #[test]
    fn test_malformed_body_detail_only_when_exposed() {
        assert_eq!(malformed(false).body().error, MALFORMED_DOCUMENT_MESSAGE);
        assert_eq!(
            malformed(true).body().error,
            "entry 2: string_list_data must be an array, found null"
        );
    }
}
