/// Auth verification port trait
///
/// Defines the interface for upstream bearer-token verification.
/// Implementation: Supabase GoTrue adapter
use crate::domain::models::Identity;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for credential verification services
#[async_trait]
pub trait AuthVerifierPort: Send + Sync {
    /// Verify a bearer token with the upstream auth service and return the
    /// identity it belongs to. Verification happens on every call; results
    /// are never cached across requests.
    async fn verify(&self, token: &str) -> Result<Identity>;
}
