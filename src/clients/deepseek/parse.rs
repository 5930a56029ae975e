use reqwest::StatusCode;

use crate::models::chat_response::ChatResponse;
use crate::models::ErrorResponse;

/// What a completion response body turned out to contain.
///
/// Produced by a pure parse over the status and raw body text, so the
/// mapping from remote responses to results stays unambiguous and can be
/// tested without a transport.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedResponse {
    Success { content: String },
    Error { code: Option<String>, message: String },
    Malformed { raw: String },
}

pub fn parse_response(status: StatusCode, body: &str) -> ParsedResponse {
    if status.is_success() {
        match ChatResponse::from_json(body) {
            Ok(response) => ParsedResponse::Success {
                // A response without choices or content degrades to an
                // empty string, it is not an error.
                content: response.first_content().unwrap_or_default().to_string(),
            },
            Err(_) => ParsedResponse::Malformed {
                raw: body.to_string(),
            },
        }
    } else {
        match serde_json::from_str::<ErrorResponse>(body) {
            Ok(response) => ParsedResponse::Error {
                code: response.error.code,
                message: response.error.message,
            },
            Err(_) => ParsedResponse::Malformed {
                raw: body.to_string(),
            },
        }
    }
}
