//! meeting-clerk: core library for an AI meeting assistant backend
//!
//! Two independent pipelines share no state:
//!
//! - the **task pipeline** turns meeting artifacts into a structured
//!   extraction record, a narrative summary, or a query answer by calling an
//!   external text-generation service and deterministically normalising its
//!   free-text output;
//! - the **gateway pipeline** lists, creates and deletes meeting records,
//!   with every store operation scoped to an identity resolved from a bearer
//!   credential.
//!
//! The HTTP server, routing and CORS policy live outside this crate; the
//! handlers return a status code plus JSON body for the embedding layer.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod ports;

use adapters::services::{GeminiService, GoTrueVerifier};
use adapters::storage::SqliteMeetingStore;
use handlers::{MeetingsHandler, TasksHandler};
use std::sync::Arc;

pub use config::AppConfig;
pub use error::{AppError, Result};

/// Fully wired application surface
///
/// Owns one handler per pipeline, each built over its production adapters.
pub struct App {
    pub tasks: TasksHandler,
    pub meetings: MeetingsHandler,
}

impl App {
    /// Wire both pipelines from explicit configuration.
    ///
    /// Opens the store and runs migrations; upstream services are only
    /// contacted once requests arrive.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let generation = Arc::new(GeminiService::new(&config.generation)?);
        let verifier = Arc::new(GoTrueVerifier::new(&config.auth)?);

        let store = SqliteMeetingStore::new(config.database_path.clone())?;
        store.run_migrations()?;

        Ok(Self {
            tasks: TasksHandler::new(generation),
            meetings: MeetingsHandler::new(verifier, Arc::new(store)),
        })
    }
}
