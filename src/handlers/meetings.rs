//! Authenticated meeting gateway
//!
//! Resolves the caller's identity from a bearer credential, then performs
//! list/create/delete against the meeting store with every operation scoped
//! to that identity. The two concerns are kept separate: the resolver never
//! touches the store, the gateway never sees a raw credential.

use crate::domain::models::{Identity, MeetingRecord, NewMeeting};
use crate::error::{AppError, Result};
use crate::handlers::ApiResponse;
use crate::ports::auth::AuthVerifierPort;
use crate::ports::storage::MeetingStorePort;
use std::sync::Arc;

/// Decoded gateway request, one per inbound call
#[derive(Debug, Clone)]
pub struct GatewayRequest {
    /// HTTP-level method name ("GET", "POST", "DELETE")
    pub method: String,
    /// Raw Authorization header, if one was sent
    pub authorization: Option<String>,
    /// Meeting id for delete
    pub meeting_id: Option<i64>,
    /// Meeting fields for create
    pub payload: Option<NewMeeting>,
}

/// Resolves a bearer credential to a caller identity
pub struct IdentityResolver {
    verifier: Arc<dyn AuthVerifierPort>,
}

impl IdentityResolver {
    pub fn new(verifier: Arc<dyn AuthVerifierPort>) -> Self {
        Self { verifier }
    }

    /// Resolve the Authorization header to an identity.
    ///
    /// A missing or malformed header fails before any verification call;
    /// everything else is decided by the upstream auth service.
    pub async fn resolve(&self, authorization: Option<&str>) -> Result<Identity> {
        let header = authorization.ok_or(AppError::MissingCredential)?;
        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AppError::MissingCredential)?;

        self.verifier.verify(token).await
    }
}

/// Ownership-scoped CRUD over the meeting store
pub struct MeetingGateway {
    store: Arc<dyn MeetingStorePort>,
}

impl MeetingGateway {
    pub fn new(store: Arc<dyn MeetingStorePort>) -> Self {
        Self { store }
    }

    /// List the caller's meetings, newest meeting date first
    pub async fn list(&self, identity: &Identity) -> Result<Vec<MeetingRecord>> {
        self.store.list_meetings(&identity.email).await
    }

    /// Persist a new meeting owned by the caller and return the stored record
    pub async fn create(&self, identity: &Identity, fields: NewMeeting) -> Result<MeetingRecord> {
        let mut record = MeetingRecord::new(fields, identity);
        let id = self.store.create_meeting(&record).await?;
        record.id = Some(id);

        log::info!("Created meeting {} for {}", id, identity.email);
        Ok(record)
    }

    /// Delete one of the caller's meetings.
    ///
    /// A record owned by someone else is indistinguishable from a missing one.
    pub async fn delete(&self, identity: &Identity, meeting_id: Option<i64>) -> Result<()> {
        let id = meeting_id.ok_or(AppError::MissingIdentifier)?;

        if self.store.delete_meeting(id, &identity.email).await? {
            log::info!("Deleted meeting {} for {}", id, identity.email);
            Ok(())
        } else {
            Err(AppError::NotFound(format!("meeting {}", id)))
        }
    }
}

/// Maps gateway outcomes onto the response surface
pub struct MeetingsHandler {
    resolver: IdentityResolver,
    gateway: MeetingGateway,
}

impl MeetingsHandler {
    pub fn new(verifier: Arc<dyn AuthVerifierPort>, store: Arc<dyn MeetingStorePort>) -> Self {
        Self {
            resolver: IdentityResolver::new(verifier),
            gateway: MeetingGateway::new(store),
        }
    }

    pub async fn handle(&self, request: GatewayRequest) -> ApiResponse {
        // Method check first, mirroring the task surface
        match request.method.as_str() {
            "GET" | "POST" | "DELETE" => {}
            _ => return ApiResponse::from_error(&AppError::MethodNotSupported),
        }

        let identity = match self
            .resolver
            .resolve(request.authorization.as_deref())
            .await
        {
            Ok(identity) => identity,
            Err(err) => {
                log::warn!("Gateway auth failed: {}", err);
                return ApiResponse::from_error(&err);
            }
        };

        let outcome = match request.method.as_str() {
            "GET" => self
                .gateway
                .list(&identity)
                .await
                .map(|meetings| ApiResponse::ok(serde_json::json!(meetings))),
            "POST" => self
                .gateway
                .create(&identity, request.payload.unwrap_or_default())
                .await
                .map(|record| ApiResponse::created(serde_json::json!(record))),
            "DELETE" => self
                .gateway
                .delete(&identity, request.meeting_id)
                .await
                .map(|_| ApiResponse::no_content()),
            _ => unreachable!("method validated above"),
        };

        outcome.unwrap_or_else(|err| {
            log::error!("Gateway {} failed: {}", request.method, err);
            ApiResponse::from_error(&err)
        })
    }
}
