use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("Topic queue capacity must be greater than zero")]
    ZeroCapacity,
    #[error("Topic queue is closed")]
    Closed,
}

/// Failures surfaced to webhook callers as a JSON `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Could not parse connection state event: {0}")]
    MalformedConnectionMsg(#[from] serde_json::Error),
    #[error("Failed to add event to the topic queue: {0}")]
    Queue(#[from] QueueError),
}

impl ResponseError for WebhookError {
    fn status_code(&self) -> StatusCode {
        match self {
            WebhookError::MalformedConnectionMsg(_) => StatusCode::BAD_REQUEST,
            WebhookError::Queue(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
