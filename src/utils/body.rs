/*---------- Imports ----------*/
use lambda_http::Body;
use serde::de::DeserializeOwned;
use thiserror::Error;

/*---------- Enums ----------*/
#[derive(Debug, Error)]
pub enum BodyError {
    /// Display is the parser's own description, which is sent back to the caller.
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parses the request body as JSON. Empty bodies are not valid JSON and fail.
pub fn parse_body<T: DeserializeOwned>(body: &Body) -> Result<T, BodyError> {
    let parsed_value = match body {
        Body::Text(value) => serde_json::from_str(value)?,
        Body::Binary(bytes) => serde_json::from_slice(bytes)?,
        Body::Empty => serde_json::from_str("")?,
    };

    Ok(parsed_value)
}
