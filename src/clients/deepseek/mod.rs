mod parse;

pub use parse::{parse_response, ParsedResponse};

use reqwest::header;
use tracing::{debug, error};

use crate::models::chat_request::ChatRequest;
use crate::repos::config::Credentials;

pub const DEEPSEEK_API_URL: &str = "https://api.deepseek.com/chat/completions";

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The credential was missing before any network I/O happened.
    #[error("DeepSeek API key not configured")]
    Configuration,

    /// The endpoint answered with a non-success status.
    #[error("{message}")]
    RemoteApi { message: String },

    /// The transport itself failed.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Client for the DeepSeek chat-completion endpoint.
///
/// Holds no mutable state, so one instance can be shared and called from
/// any number of places. Credentials are injected at construction; the
/// client never reads process-wide configuration itself.
#[derive(Debug, Clone)]
pub struct DeepSeekClient {
    client: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl DeepSeekClient {
    #[allow(dead_code)]
    pub fn new(credentials: Credentials) -> Self {
        Self::with_base_url(credentials, DEEPSEEK_API_URL)
    }

    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Self {
        DeepSeekClient {
            client: reqwest::Client::new(),
            credentials,
            base_url: base_url.into(),
        }
    }

    /// One request/response cycle against the completion endpoint.
    ///
    /// Returns the first choice's message content. A well-formed response
    /// without choices or content yields an empty string rather than an
    /// error. No retry is attempted on failure.
    pub async fn complete(&self, chat_request: &ChatRequest) -> Result<String, ChatError> {
        let key = self
            .credentials
            .credential()
            .ok_or(ChatError::Configuration)?;

        debug!(
            "Sending completion request to {} with model {}",
            self.base_url, chat_request.model
        );

        let response = self
            .client
            .post(&self.base_url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", key))
            .json(chat_request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match parse_response(status, &body) {
            ParsedResponse::Success { content } => Ok(content),
            ParsedResponse::Error { code, message } => {
                error!("DeepSeek returned error status {}: {}", status, message);
                let message = match code {
                    Some(code) => format!("DeepSeek {}: {}", code, message),
                    None => format!("DeepSeek {}: {}", status.as_u16(), message),
                };
                Err(ChatError::RemoteApi { message })
            }
            ParsedResponse::Malformed { raw } if !status.is_success() => {
                error!(
                    "DeepSeek returned error status {} with an unrecognized body",
                    status
                );
                Err(ChatError::RemoteApi {
                    message: format!("DeepSeek error {}: {}", status.as_u16(), raw),
                })
            }
            ParsedResponse::Malformed { raw } => {
                error!("Failed to parse DeepSeek response JSON");
                Err(ChatError::RemoteApi {
                    message: format!(
                        "Failed to parse DeepSeek response JSON. Raw response: {}",
                        raw
                    ),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Message;
    use bytes::Bytes;
    use http_body_util::Full;
    use hyper::server::conn::http1;
    use hyper::service::service_fn;
    use hyper::{Request, Response, StatusCode};
    use hyper_util::rt::TokioIo;
    use std::convert::Infallible;
    use std::net::SocketAddr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::net::TcpListener;

    // Loopback http1 server standing in for the DeepSeek endpoint. Always
    // answers with the given status and body, and counts requests served.
    async fn spawn_mock_endpoint(status: u16, body: &'static str) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let server_hits = hits.clone();

        tokio::task::spawn(async move {
            loop {
                let (stream, _) = match listener.accept().await {
                    Ok(accepted) => accepted,
                    Err(_) => break,
                };
                let io = TokioIo::new(stream);
                let hits = server_hits.clone();
                tokio::task::spawn(async move {
                    let service = service_fn(move |_req: Request<hyper::body::Incoming>| {
                        let hits = hits.clone();
                        async move {
                            hits.fetch_add(1, Ordering::SeqCst);
                            let mut response = Response::new(Full::new(Bytes::from(body)));
                            *response.status_mut() = StatusCode::from_u16(status).unwrap();
                            Ok::<_, Infallible>(response)
                        }
                    });
                    let _ = http1::Builder::new().serve_connection(io, service).await;
                });
            }
        });

        (format!("http://{}", addr), hits)
    }

    fn request() -> ChatRequest {
        ChatRequest::new(vec![Message::user("hello")])
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_content() {
        let (url, _hits) =
            spawn_mock_endpoint(200, r#"{"choices":[{"message":{"content":"X"}}]}"#).await;
        let client = DeepSeekClient::with_base_url(Credentials::new("sk-test"), url);

        let content = client.complete(&request()).await.unwrap();
        assert_eq!(content, "X");
    }

    #[tokio::test]
    async fn test_complete_with_no_choices_returns_empty_string() {
        let (url, _hits) = spawn_mock_endpoint(200, r#"{"choices":[]}"#).await;
        let client = DeepSeekClient::with_base_url(Credentials::new("sk-test"), url);

        let content = client.complete(&request()).await.unwrap();
        assert_eq!(content, "");
    }

    #[tokio::test]
    async fn test_complete_surfaces_remote_error_envelope() {
        let (url, _hits) =
            spawn_mock_endpoint(400, r#"{"error":{"message":"bad request","code":"E1"}}"#).await;
        let client = DeepSeekClient::with_base_url(Credentials::new("sk-test"), url);

        let err = client.complete(&request()).await.unwrap_err();
        match err {
            ChatError::RemoteApi { message } => {
                assert!(message.contains("bad request"));
                assert!(message.contains("E1"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_surfaces_non_json_error_body() {
        let (url, _hits) = spawn_mock_endpoint(500, "oops").await;
        let client = DeepSeekClient::with_base_url(Credentials::new("sk-test"), url);

        let err = client.complete(&request()).await.unwrap_err();
        match err {
            ChatError::RemoteApi { message } => {
                assert!(message.contains("oops"));
                assert!(message.contains("500"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_complete_without_credential_makes_no_network_call() {
        let (url, hits) =
            spawn_mock_endpoint(200, r#"{"choices":[{"message":{"content":"X"}}]}"#).await;
        let client = DeepSeekClient::with_base_url(Credentials::none(), url);

        let err = client.complete(&request()).await.unwrap_err();
        assert!(matches!(err, ChatError::Configuration));
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_complete_is_idempotent_across_calls() {
        let (url, hits) =
            spawn_mock_endpoint(200, r#"{"choices":[{"message":{"content":"X"}}]}"#).await;
        let client = DeepSeekClient::with_base_url(Credentials::new("sk-test"), url);

        let first = client.complete(&request()).await.unwrap();
        let second = client.complete(&request()).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
