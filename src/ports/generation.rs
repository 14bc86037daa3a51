/// Generation service port trait
///
/// Defines the interface for external text-generation services.
/// Implementation: Google Gemini adapter
use crate::domain::models::GenerationRequest;
use crate::error::Result;
use async_trait::async_trait;

/// Port trait for text-generation services
#[async_trait]
pub trait GenerationPort: Send + Sync {
    /// Send one generation request and return the raw model text.
    ///
    /// Exactly one outbound call per invocation; no retries.
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is configured (has API key)
    fn is_configured(&self) -> bool;
}
