//! Mock completion backend for integration tests
//!
//! Implements just enough of the `OpenAI` chat completions API to stand in
//! for Groq.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum::{Json, Router, routing};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Canned reply used when no custom content is set
pub const DEFAULT_REPLY: &str = "Hello from the mock backend.";

/// Mock completion backend that returns predictable responses
pub struct MockLlm {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockLlmState>,
}

struct MockLlmState {
    completion_count: AtomicU32,
    reply: Reply,
    /// Body of the most recent completion request
    last_request: Mutex<Option<serde_json::Value>>,
}

/// How the mock answers every completion request
enum Reply {
    /// Well-formed completion with this content
    Content(String),
    /// Well-formed completion whose message content is `null`
    NullContent,
    /// 500 with an error envelope
    Fail,
    /// 200 with this body verbatim, served as `text/html`
    Raw(&'static str),
}

impl MockLlm {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(Reply::Content(DEFAULT_REPLY.to_owned())).await
    }

    /// Start a mock server that answers every request with 500
    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_inner(Reply::Fail).await
    }

    /// Start a mock server with a custom response content
    pub async fn start_with_response(content: &str) -> anyhow::Result<Self> {
        Self::start_inner(Reply::Content(content.to_owned())).await
    }

    /// Start a mock server whose completions carry `null` content
    pub async fn start_with_null_content() -> anyhow::Result<Self> {
        Self::start_inner(Reply::NullContent).await
    }

    /// Start a mock server that answers 200 with a body that is not a completion
    pub async fn start_with_raw_body(body: &'static str) -> anyhow::Result<Self> {
        Self::start_inner(Reply::Raw(body)).await
    }

    async fn start_inner(reply: Reply) -> anyhow::Result<Self> {
        let state = Arc::new(MockLlmState {
            completion_count: AtomicU32::new(0),
            reply,
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1/chat/completions", routing::post(handle_chat_completions))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the completion API
    ///
    /// Includes `/v1` since the client appends `/chat/completions`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of completion requests received
    pub fn completion_count(&self) -> u32 {
        self.state.completion_count.load(Ordering::Relaxed)
    }

    /// Body of the most recent completion request
    pub fn last_request(&self) -> Option<serde_json::Value> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockLlm {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

// -- Wire types matching OpenAI format --

#[derive(Debug, Serialize)]
struct ChatCompletionResponse {
    id: String,
    object: String,
    created: u64,
    model: String,
    choices: Vec<Choice>,
    usage: Usage,
}

#[derive(Debug, Serialize)]
struct Choice {
    index: u32,
    message: ResponseMessage,
    finish_reason: String,
}

#[derive(Debug, Serialize)]
struct ResponseMessage {
    role: String,
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct Usage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

// -- Handlers --

async fn handle_chat_completions(
    State(state): State<Arc<MockLlmState>>,
    Json(req): Json<serde_json::Value>,
) -> impl IntoResponse {
    state.completion_count.fetch_add(1, Ordering::Relaxed);

    let model = req
        .get("model")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_owned();
    *state.last_request.lock().unwrap() = Some(req);

    let content = match &state.reply {
        Reply::Content(content) => Some(content.clone()),
        Reply::NullContent => None,
        Reply::Fail => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": {
                        "message": "mock server intentional failure",
                        "type": "server_error"
                    }
                })),
            )
                .into_response();
        }
        Reply::Raw(body) => {
            return (StatusCode::OK, [(header::CONTENT_TYPE, "text/html")], *body).into_response();
        }
    };

    let response = ChatCompletionResponse {
        id: "chatcmpl-mock-001".to_owned(),
        object: "chat.completion".to_owned(),
        created: 1_700_000_000,
        model,
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                role: "assistant".to_owned(),
                content,
            },
            finish_reason: "stop".to_owned(),
        }],
        usage: Usage {
            prompt_tokens: 10,
            completion_tokens: 8,
            total_tokens: 18,
        },
    };

    (StatusCode::OK, Json(response)).into_response()
}
