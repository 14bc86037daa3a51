/// Adapters - implementations of the port traits
///
/// These modules implement the port traits for specific services and stores.
pub mod services;
pub mod storage;
