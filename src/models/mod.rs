//! Data models representing database entities and request bodies.

/// Bank account entity and creation request
pub mod account;
/// Transfer request body
pub mod transfer;
