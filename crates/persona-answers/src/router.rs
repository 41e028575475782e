use axum::extract::State;
use axum::{Json, Router, routing};

use crate::dispatcher::Dispatcher;
use crate::types::{Answer, Question};

/// Build the router exposing `POST /ask`
pub fn ask_router(dispatcher: Dispatcher) -> Router {
    Router::new().route("/ask", routing::post(ask)).with_state(dispatcher)
}

/// Handle `POST /ask`
///
/// Always answers 200 once the body parses; failures travel inside the answer.
async fn ask(State(dispatcher): State<Dispatcher>, Json(question): Json<Question>) -> Json<Answer> {
    Json(dispatcher.handle(question).await)
}
