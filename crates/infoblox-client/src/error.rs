//! Infoblox client errors

use thiserror::Error;

/// Errors that can occur when interacting with the Infoblox WAPI
#[derive(Debug, Error)]
pub enum InfobloxError {
    /// WAPI returned an error
    #[error("WAPI error: {0}")]
    Api(String),

    /// Object or network view not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request (malformed CIDR, impossible prefix length, missing reference)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// An object with the same key already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No free block of the requested size is left in the parent
    #[error("Address space exhausted: {0}")]
    Exhausted(String),

    /// Response body could not be decoded (see `NetworkContainer::from_wapi_json`)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
