//! AI task dispatch
//!
//! Top-level entry point for the task pipeline: validates the task type,
//! builds the prompt, makes exactly one generation call and normalises the
//! output. Generation failures pass through untouched; normalisation never
//! fails.

use crate::domain::models::{TaskOutput, TaskType};
use crate::domain::normalize::normalize;
use crate::domain::prompts::PromptTemplates;
use crate::error::Result;
use crate::handlers::ApiResponse;
use crate::ports::generation::GenerationPort;
use serde::Deserialize;
use std::sync::Arc;

/// Request accepted by the task pipeline.
///
/// `content` carries the text to analyse; `prompt` is the legacy alias some
/// clients still send and is used only when `content` is absent.
#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    #[serde(rename = "type")]
    pub task_type: String,
    pub content: Option<String>,
    pub prompt: Option<String>,
}

impl TaskRequest {
    fn content(&self) -> &str {
        self.content
            .as_deref()
            .or(self.prompt.as_deref())
            .unwrap_or_default()
    }
}

/// Runs the prompt → generate → normalise pipeline for one request
pub struct TaskDispatcher {
    generation: Arc<dyn GenerationPort>,
}

impl TaskDispatcher {
    pub fn new(generation: Arc<dyn GenerationPort>) -> Self {
        Self { generation }
    }

    /// Dispatch a task over the given content.
    ///
    /// An unknown task type fails before any upstream call. Empty content is
    /// passed through unvalidated; the model decides what to make of it.
    pub async fn dispatch(&self, task_type: &str, content: &str) -> Result<TaskOutput> {
        let task = TaskType::parse(task_type)?;

        log::info!(
            "Dispatching {} task, content length: {}",
            task,
            content.len()
        );

        let request = PromptTemplates::build(task, content);
        let raw = self.generation.generate(&request).await?;

        Ok(normalize(task, &raw))
    }
}

/// Maps task pipeline outcomes onto the response surface
pub struct TasksHandler {
    dispatcher: TaskDispatcher,
}

impl TasksHandler {
    pub fn new(generation: Arc<dyn GenerationPort>) -> Self {
        Self {
            dispatcher: TaskDispatcher::new(generation),
        }
    }

    pub async fn handle(&self, request: TaskRequest) -> ApiResponse {
        match self
            .dispatcher
            .dispatch(&request.task_type, request.content())
            .await
        {
            Ok(output) => ApiResponse::ok(serde_json::json!({ "result": output })),
            Err(err) => {
                log::error!("Task {} failed: {}", request.task_type, err);
                ApiResponse::from_error(&err)
            }
        }
    }
}
