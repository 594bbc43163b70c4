//! InfobloxClient trait for mocking
//!
//! This trait is the boundary to the Infoblox grid. A WAPI connector
//! implements it in production and tests use `MockInfobloxClient`.

use crate::error::InfobloxError;
use crate::models::*;

/// Trait for Infoblox network container operations
///
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait InfobloxClientTrait: Send + Sync {
    /// Find a network container by its exact block within a network view.
    ///
    /// Returns `Ok(None)` when no such container exists.
    async fn find_network_container(&self, network_view: &str, cidr: &str) -> Result<Option<NetworkContainer>, InfobloxError>;

    /// Reserve the next available `/prefix_len` block inside `parent_cidr` as a new container
    async fn allocate_network_container(&self, network_view: &str, parent_cidr: &str, prefix_len: u32, extattrs: ExtAttrs) -> Result<NetworkContainer, InfobloxError>;

    /// Create a container at an explicit block
    async fn create_network_container(&self, network_view: &str, cidr: &str, extattrs: ExtAttrs) -> Result<NetworkContainer, InfobloxError>;

    /// Fetch a container through its reference.
    ///
    /// The returned object may carry a different reference than the one asked
    /// for when the grid has re-issued it.
    async fn get_network_container_by_ref(&self, reference: &str) -> Result<NetworkContainer, InfobloxError>;

    /// Delete a container, returning the reference of the deleted object
    async fn delete_network_container(&self, reference: &str, network_view: &str) -> Result<String, InfobloxError>;
}
