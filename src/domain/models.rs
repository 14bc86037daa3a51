/// Domain models for meeting-clerk
///
/// These models represent core business entities and are transport-agnostic.
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Marker value for extraction fields that could not be recovered.
///
/// Downstream consumers rely on every record carrying all seven keys, so an
/// unresolved field is marked rather than omitted.
pub const UNKNOWN_FIELD: &str = "unknown";

/// Represents an AI task the dispatcher can run
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Extract,
    Summarize,
    Query,
}

impl TaskType {
    /// Parse a wire value ("extract", "summarize", "query")
    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "extract" => Ok(TaskType::Extract),
            "summarize" => Ok(TaskType::Summarize),
            "query" => Ok(TaskType::Query),
            _ => Err(AppError::InvalidTaskType),
        }
    }
}

impl std::fmt::Display for TaskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskType::Extract => write!(f, "extract"),
            TaskType::Summarize => write!(f, "summarize"),
            TaskType::Query => write!(f, "query"),
        }
    }
}

/// Structured meeting details recovered from model output
///
/// All seven fields are always present; unresolved ones carry [`UNKNOWN_FIELD`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionRecord {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub client: String,
    pub project: String,
    pub attendees: String,
}

impl ExtractionRecord {
    /// The seven extraction keys, in wire order
    pub const FIELDS: [&'static str; 7] = [
        "title",
        "date",
        "time",
        "location",
        "client",
        "project",
        "attendees",
    ];

    /// A record with every field unresolved
    pub fn unknown() -> Self {
        Self {
            title: UNKNOWN_FIELD.to_string(),
            date: UNKNOWN_FIELD.to_string(),
            time: UNKNOWN_FIELD.to_string(),
            location: UNKNOWN_FIELD.to_string(),
            client: UNKNOWN_FIELD.to_string(),
            project: UNKNOWN_FIELD.to_string(),
            attendees: UNKNOWN_FIELD.to_string(),
        }
    }

    /// Set a field by its wire key. Unrecognised keys are ignored.
    pub fn set_field(&mut self, key: &str, value: String) {
        match key {
            "title" => self.title = value,
            "date" => self.date = value,
            "time" => self.time = value,
            "location" => self.location = value,
            "client" => self.client = value,
            "project" => self.project = value,
            "attendees" => self.attendees = value,
            _ => {}
        }
    }

    /// Read a field by its wire key
    pub fn field(&self, key: &str) -> Option<&str> {
        match key {
            "title" => Some(&self.title),
            "date" => Some(&self.date),
            "time" => Some(&self.time),
            "location" => Some(&self.location),
            "client" => Some(&self.client),
            "project" => Some(&self.project),
            "attendees" => Some(&self.attendees),
            _ => None,
        }
    }
}

/// A single generation invocation
///
/// Built once by the prompt layer per dispatch; immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenerationRequest {
    /// Full instruction payload, template plus content
    pub prompt: String,

    /// Sampling temperature (0.0 to 1.0)
    pub temperature: f32,

    /// Cap on generated output length
    pub max_output_tokens: u32,
}

/// Output of a dispatched task
///
/// Serializes as an object for `extract` and a plain string for the
/// text-producing tasks.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum TaskOutput {
    Record(ExtractionRecord),
    Text(String),
}

/// Caller identity resolved from a bearer credential
///
/// Lives for a single request; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

/// Descriptive meeting fields supplied by the client on create
///
/// Ownership and timestamps are stamped server-side, never accepted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMeeting {
    pub title: Option<String>,
    pub meeting_date: Option<String>,
    pub meeting_time: Option<String>,
    pub location: Option<String>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub attendees: Option<String>,
}

/// A persisted meeting record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingRecord {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub meeting_date: Option<String>,
    pub meeting_time: Option<String>,
    pub location: Option<String>,
    pub client: Option<String>,
    pub project: Option<String>,
    pub attendees: Option<String>,
    pub created_by: String,
    pub created_at: i64, // Unix timestamp
}

impl MeetingRecord {
    /// Creates a record from client-supplied fields, stamping ownership from
    /// the resolved caller identity
    pub fn new(fields: NewMeeting, owner: &Identity) -> Self {
        Self {
            id: None,
            title: fields.title,
            meeting_date: fields.meeting_date,
            meeting_time: fields.meeting_time,
            location: fields.location,
            client: fields.client,
            project: fields.project,
            attendees: fields.attendees,
            created_by: owner.email.clone(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_type_parse() {
        assert_eq!(TaskType::parse("extract").unwrap(), TaskType::Extract);
        assert_eq!(TaskType::parse("summarize").unwrap(), TaskType::Summarize);
        assert_eq!(TaskType::parse("query").unwrap(), TaskType::Query);
        assert!(matches!(
            TaskType::parse("bogus"),
            Err(AppError::InvalidTaskType)
        ));
        // Case-sensitive like the source API
        assert!(TaskType::parse("Extract").is_err());
    }

    #[test]
    fn test_unknown_record_fills_every_field() {
        let record = ExtractionRecord::unknown();
        for key in ExtractionRecord::FIELDS {
            assert_eq!(record.field(key), Some(UNKNOWN_FIELD));
        }
    }

    #[test]
    fn test_set_field_ignores_unrecognised_keys() {
        let mut record = ExtractionRecord::unknown();
        record.set_field("title", "Sprint Review".to_string());
        record.set_field("organiser", "should be dropped".to_string());
        assert_eq!(record.title, "Sprint Review");
        assert_eq!(record.date, UNKNOWN_FIELD);
    }

    #[test]
    fn test_task_output_serialization_shapes() {
        let text = serde_json::to_value(TaskOutput::Text("done".to_string())).unwrap();
        assert_eq!(text, serde_json::json!("done"));

        let record = serde_json::to_value(TaskOutput::Record(ExtractionRecord::unknown())).unwrap();
        assert!(record.is_object());
        assert_eq!(record.as_object().unwrap().len(), 7);
    }

    #[test]
    fn test_meeting_record_stamps_owner() {
        let identity = Identity {
            id: "u-1".to_string(),
            email: "lead@example.org".to_string(),
        };
        let fields = NewMeeting {
            title: Some("Budget Review".to_string()),
            meeting_date: Some("2024-03-01".to_string()),
            ..Default::default()
        };

        let record = MeetingRecord::new(fields, &identity);
        assert_eq!(record.created_by, "lead@example.org");
        assert!(record.id.is_none());
        assert!(record.created_at > 0);
    }
}
