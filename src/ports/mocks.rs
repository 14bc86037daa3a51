//! Mock implementations for testing

use crate::domain::models::{GenerationRequest, Identity, MeetingRecord};
use crate::error::{AppError, Result};
use crate::ports::auth::AuthVerifierPort;
use crate::ports::generation::GenerationPort;
use crate::ports::storage::MeetingStorePort;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

/// Mock generation service with canned responses and call recording
#[derive(Default)]
pub struct MockGeneration {
    responses: Mutex<VecDeque<Result<String>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl MockGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that returns the given text on the next call
    pub fn returning(text: &str) -> Self {
        let mock = Self::new();
        mock.push(Ok(text.to_string()));
        mock
    }

    /// A mock that fails with the given error on the next call
    pub fn failing(err: AppError) -> Self {
        let mock = Self::new();
        mock.push(Err(err));
        mock
    }

    pub fn push(&self, response: Result<String>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl GenerationPort for MockGeneration {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(AppError::UpstreamUnavailable {
                    status: None,
                    body: "no canned response".to_string(),
                })
            })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }

    fn is_configured(&self) -> bool {
        true
    }
}

/// Mock auth verifier with a fixed set of accepted tokens
#[derive(Clone, Default)]
pub struct MockAuthVerifier {
    accepted: Arc<Mutex<HashMap<String, Identity>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockAuthVerifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that resolves `token` to the given id and email
    pub fn accepting(token: &str, id: &str, email: &str) -> Self {
        let mock = Self::new();
        mock.accept(token, id, email);
        mock
    }

    pub fn accept(&self, token: &str, id: &str, email: &str) {
        self.accepted.lock().unwrap().insert(
            token.to_string(),
            Identity {
                id: id.to_string(),
                email: email.to_string(),
            },
        );
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl AuthVerifierPort for MockAuthVerifier {
    async fn verify(&self, token: &str) -> Result<Identity> {
        *self.calls.lock().unwrap() += 1;
        self.accepted
            .lock()
            .unwrap()
            .get(token)
            .cloned()
            .ok_or(AppError::InvalidCredential)
    }
}

/// Mock meeting store backed by an in-memory map
#[derive(Clone, Default)]
pub struct MockMeetingStore {
    meetings: Arc<Mutex<HashMap<i64, MeetingRecord>>>,
    next_id: Arc<Mutex<i64>>,
    calls: Arc<Mutex<usize>>,
}

impl MockMeetingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> i64 {
        let mut id = self.next_id.lock().unwrap();
        *id += 1;
        *id
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    pub fn len(&self) -> usize {
        self.meetings.lock().unwrap().len()
    }
}

#[async_trait]
impl MeetingStorePort for MockMeetingStore {
    async fn create_meeting(&self, meeting: &MeetingRecord) -> Result<i64> {
        *self.calls.lock().unwrap() += 1;
        let id = self.next_id();
        let mut m = meeting.clone();
        m.id = Some(id);
        self.meetings.lock().unwrap().insert(id, m);
        Ok(id)
    }

    async fn get_meeting(&self, id: i64) -> Result<Option<MeetingRecord>> {
        *self.calls.lock().unwrap() += 1;
        Ok(self.meetings.lock().unwrap().get(&id).cloned())
    }

    async fn list_meetings(&self, owner: &str) -> Result<Vec<MeetingRecord>> {
        *self.calls.lock().unwrap() += 1;
        let meetings = self.meetings.lock().unwrap();
        let mut list: Vec<_> = meetings
            .values()
            .filter(|m| m.created_by == owner)
            .cloned()
            .collect();
        // Descending meeting date, unset dates last, matching the SQL adapter
        list.sort_by(|a, b| b.meeting_date.cmp(&a.meeting_date));
        Ok(list)
    }

    async fn delete_meeting(&self, id: i64, owner: &str) -> Result<bool> {
        *self.calls.lock().unwrap() += 1;
        let mut meetings = self.meetings.lock().unwrap();
        let owned = meetings
            .get(&id)
            .map(|m| m.created_by == owner)
            .unwrap_or(false);
        if owned {
            meetings.remove(&id);
        }
        Ok(owned)
    }
}
