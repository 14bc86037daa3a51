/// Port trait definitions (interfaces)
///
/// These traits define the contracts for adapters to implement.
/// Following the ports-and-adapters (hexagonal) architecture pattern.
pub mod auth;
pub mod generation;
pub mod storage;

#[cfg(test)]
pub mod mocks;

pub use auth::AuthVerifierPort;
pub use generation::GenerationPort;
pub use storage::MeetingStorePort;
