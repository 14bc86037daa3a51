//! Request handlers for the two pipelines
//!
//! The handlers are transport-agnostic: each takes a decoded request and
//! returns an [`ApiResponse`] (status plus JSON body) for the embedding HTTP
//! layer to write out. Routing, CORS and preflight stay outside the crate.

pub mod meetings;
pub mod tasks;

pub use meetings::{GatewayRequest, IdentityResolver, MeetingGateway, MeetingsHandler};
pub use tasks::{TaskDispatcher, TaskRequest, TasksHandler};

use crate::error::AppError;
use serde_json::Value;

/// A status code and optional JSON body, ready for the transport layer
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self {
            status: 200,
            body: Some(body),
        }
    }

    pub fn created(body: Value) -> Self {
        Self {
            status: 201,
            body: Some(body),
        }
    }

    pub fn no_content() -> Self {
        Self {
            status: 204,
            body: None,
        }
    }

    /// Error body of the form `{ "error": ..., "details": ... }`, with the
    /// details key present only when the error carries diagnostics.
    pub fn from_error(err: &AppError) -> Self {
        let mut body = serde_json::json!({ "error": err.to_string() });
        if let Some(details) = err.details() {
            body["details"] = Value::String(details);
        }
        Self {
            status: err.status(),
            body: Some(body),
        }
    }
}
