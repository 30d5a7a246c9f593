/*---------- Imports ----------*/
use serde::{Deserialize, Serialize};

pub const MESSAGE_SENT: &str = "Message sent successfully";
pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/*---------- Enums ----------*/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/*---------- Structs ----------*/
/// Body of every JSON response. Field order is part of the wire format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub status: ResponseStatus,
    pub message: String,
}

impl MessageResponse {
    pub fn success() -> Self {
        Self {
            status: ResponseStatus::Success,
            message: MESSAGE_SENT.to_owned(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }

    pub fn method_not_allowed() -> Self {
        Self::error(METHOD_NOT_ALLOWED)
    }
}
