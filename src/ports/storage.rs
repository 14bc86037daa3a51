/// Storage port trait
///
/// Defines the interface for meeting store operations. Every read and delete
/// is scoped to an owner; ownership enforcement lives in the store queries,
/// not in the caller.
/// Implementation: SQLite adapter
use crate::domain::models::MeetingRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for meeting store operations
#[async_trait]
pub trait MeetingStorePort: Send + Sync {
    /// Persist a new meeting, returning the generated id
    async fn create_meeting(&self, meeting: &MeetingRecord) -> Result<i64>;

    /// Get a meeting by id
    async fn get_meeting(&self, id: i64) -> Result<Option<MeetingRecord>>;

    /// List meetings owned by `owner`, ordered by meeting date descending
    async fn list_meetings(&self, owner: &str) -> Result<Vec<MeetingRecord>>;

    /// Delete the meeting with `id` when it is owned by `owner`.
    ///
    /// Returns whether a row was removed; a mismatched owner removes nothing.
    async fn delete_meeting(&self, id: i64, owner: &str) -> Result<bool>;
}
