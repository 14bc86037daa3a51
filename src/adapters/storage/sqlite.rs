/// SQLite storage adapter
///
/// Implements MeetingStorePort for SQLite database operations. Ownership
/// scoping is enforced in the queries themselves; a caller can never reach
/// another owner's rows through this adapter.
use crate::domain::models::MeetingRecord;
use crate::error::{AppError, Result};
use crate::ports::storage::MeetingStorePort;
use async_trait::async_trait;
use rusqlite::{params, Connection, Row};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// SQLite meeting store implementation
pub struct SqliteMeetingStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteMeetingStore {
    /// Create a new SQLite store with the given database path
    pub fn new(db_path: PathBuf) -> Result<Self> {
        let conn = Connection::open(db_path)?;

        // Enable foreign keys
        conn.execute("PRAGMA foreign_keys = ON", [])?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// An in-memory store, for tests and local experiments
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run database migrations
    pub fn run_migrations(&self) -> Result<()> {
        use rusqlite_migration::{Migrations, M};

        let migrations = Migrations::new(vec![M::up(include_str!(
            "../../../migrations/001_initial.sql"
        ))]);

        let mut conn = self.conn.lock().unwrap();
        migrations
            .to_latest(&mut conn)
            .map_err(|e| AppError::Database(rusqlite::Error::ToSqlConversionFailure(Box::new(e))))?;

        Ok(())
    }

    fn row_to_meeting(row: &Row<'_>) -> rusqlite::Result<MeetingRecord> {
        Ok(MeetingRecord {
            id: Some(row.get(0)?),
            title: row.get(1)?,
            meeting_date: row.get(2)?,
            meeting_time: row.get(3)?,
            location: row.get(4)?,
            client: row.get(5)?,
            project: row.get(6)?,
            attendees: row.get(7)?,
            created_by: row.get(8)?,
            created_at: row.get(9)?,
        })
    }
}

const MEETING_COLUMNS: &str = "id, title, meeting_date, meeting_time, location, client, project, attendees, created_by, created_at";

#[async_trait]
impl MeetingStorePort for SqliteMeetingStore {
    async fn create_meeting(&self, meeting: &MeetingRecord) -> Result<i64> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO meetings (title, meeting_date, meeting_time, location, client, project, attendees, created_by, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                meeting.title,
                meeting.meeting_date,
                meeting.meeting_time,
                meeting.location,
                meeting.client,
                meeting.project,
                meeting.attendees,
                meeting.created_by,
                meeting.created_at,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    async fn get_meeting(&self, id: i64) -> Result<Option<MeetingRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM meetings WHERE id = ?1",
            MEETING_COLUMNS
        ))?;

        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => Ok(Some(Self::row_to_meeting(row)?)),
            None => Ok(None),
        }
    }

    async fn list_meetings(&self, owner: &str) -> Result<Vec<MeetingRecord>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM meetings WHERE created_by = ?1 ORDER BY meeting_date DESC",
            MEETING_COLUMNS
        ))?;

        let rows = stmt.query_map(params![owner], |row| Self::row_to_meeting(row))?;

        let mut meetings = Vec::new();
        for meeting_result in rows {
            meetings.push(meeting_result?);
        }

        Ok(meetings)
    }

    async fn delete_meeting(&self, id: i64, owner: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let removed = conn.execute(
            "DELETE FROM meetings WHERE id = ?1 AND created_by = ?2",
            params![id, owner],
        )?;
        Ok(removed > 0)
    }
}
