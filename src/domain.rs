use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CheckRequest {
    pub urls: Vec<String>,
}

/// Wire response: either a link -> status map or an error description.
/// A status of 0 means no response was ever obtained for that link.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CheckResponse {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub url_codes: HashMap<String, u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResponse {
    pub fn codes(url_codes: HashMap<String, u16>) -> Self {
        Self {
            url_codes,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            url_codes: HashMap::new(),
            error: Some(message.into()),
        }
    }
}
