use serde::Deserialize;

use crate::{FailureKind, FetchError};

/// Search response body exactly as the movie API sends it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchPayload {
    /// `"True"` or `"False"`.
    #[serde(rename = "Response")]
    pub response: String,
    #[serde(rename = "Search", default)]
    pub search: Vec<MovieRecord>,
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
    #[serde(rename = "Error", default)]
    pub error: Option<String>,
}

impl SearchPayload {
    pub fn is_found(&self) -> bool {
        self.response == "True"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MovieRecord {
    pub title: String,
    pub year: String,
    pub poster: String,
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Type")]
    pub kind: String,
}

/// Parses a response body. Anything that is not JSON with a `Response` of
/// `"True"` or `"False"` is a malformed body, and so is a `"False"` without an
/// `Error` message to show.
pub fn decode_payload(bytes: &[u8]) -> Result<SearchPayload, FetchError> {
    let payload: SearchPayload = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::MalformedBody, err.to_string()))?;
    match payload.response.as_str() {
        "True" => Ok(payload),
        "False" if payload.error.is_some() => Ok(payload),
        "False" => Err(FetchError::new(
            FailureKind::MalformedBody,
            "Response \"False\" without an Error message",
        )),
        other => Err(FetchError::new(
            FailureKind::MalformedBody,
            format!("unexpected Response value {other:?}"),
        )),
    }
}
