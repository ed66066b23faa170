//! `POST /unique_hrefs` handler.

use std::time::Instant;

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::error::ApiError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::relationships::{diff_documents, format_unique_hrefs, UniqueHrefsReport};

/// Compare `json1` against `json2` and return the hrefs only `json1` has.
pub async fn unique_hrefs_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UniqueHrefsReport>, ApiError> {
    let start_time = Instant::now();

    let result = compare_body(&body, state.expose_errors);

    let status = match &result {
        Ok(report) => {
            metrics::record_result_size(report.count);
            200
        }
        Err(e) => e.status().as_u16(),
    };
    metrics::record_request(status, start_time);

    result.map(Json)
}

fn compare_body(body: &[u8], expose_errors: bool) -> Result<UniqueHrefsReport, ApiError> {
    let (json1, json2) = split_documents(body)?;

    let diff = diff_documents(&json1, &json2).map_err(|source| {
        tracing::warn!(error = %source, "Malformed document");
        ApiError::MalformedDocument {
            source,
            expose: expose_errors,
        }
    })?;

    tracing::debug!(
        first_hrefs = diff.first_len,
        second_hrefs = diff.second_len,
        unique_hrefs = diff.unique.len(),
        "Documents compared"
    );

    Ok(format_unique_hrefs(diff.unique))
}

/// Parse the body and take out the two documents.
fn split_documents(body: &[u8]) -> Result<(Value, Value), ApiError> {
    let parsed: Value = serde_json::from_slice(body).map_err(|e| {
        tracing::warn!(error = %e, body_len = body.len(), "Request body is not JSON");
        ApiError::MissingDocuments
    })?;

    let Value::Object(mut fields) = parsed else {
        tracing::warn!("Request body is not a JSON object");
        return Err(ApiError::MissingDocuments);
    };

    match (fields.remove("json1"), fields.remove("json2")) {
        (Some(json1), Some(json2)) => Ok((json1, json2)),
        _ => {
            tracing::warn!("Request body is missing json1 or json2");
            Err(ApiError::MissingDocuments)
        }
    }
}
