/// Domain layer - core business models and pure task logic
///
/// These models are transport-agnostic and represent core business entities.
pub mod models;
pub mod normalize;
pub mod prompts;

pub use models::{
    ExtractionRecord, GenerationRequest, Identity, MeetingRecord, NewMeeting, TaskOutput,
    TaskType, UNKNOWN_FIELD,
};
pub use normalize::{normalize, recover_record};
pub use prompts::{GenerationProfile, PromptTemplates};
