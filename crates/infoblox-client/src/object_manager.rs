//! Object manager
//!
//! A thin handle bundling a connector with the actor label and tenant that
//! every object created through it is tagged with. Build one per operation
//! and pass it explicitly; there is no shared global client.

use crate::error::InfobloxError;
use crate::infoblox_trait::InfobloxClientTrait;
use crate::models::*;
use tracing::debug;

/// Tenant-scoped view over an Infoblox connector
#[derive(Debug)]
pub struct ObjectManager<'a, C: ?Sized> {
    connector: &'a C,
    cmp_type: String,
    tenant_id: String,
}

impl<'a, C: InfobloxClientTrait + ?Sized> ObjectManager<'a, C> {
    /// Create a new object manager
    ///
    /// # Arguments
    /// * `connector` - Transport to the grid
    /// * `cmp_type` - Cloud management platform label stamped as `CMP Type`
    /// * `tenant_id` - Owning tenant stamped as `Tenant ID`
    pub fn new(connector: &'a C, cmp_type: impl Into<String>, tenant_id: impl Into<String>) -> Self {
        Self {
            connector,
            cmp_type: cmp_type.into(),
            tenant_id: tenant_id.into(),
        }
    }

    /// Value stamped as the `CMP Type` extensible attribute
    pub fn cmp_type(&self) -> &str {
        &self.cmp_type
    }

    /// Value stamped as the `Tenant ID` extensible attribute
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Extensible attributes for a new object. An empty network name is omitted.
    fn ext_attrs(&self, network_name: &str) -> ExtAttrs {
        let mut ea = ExtAttrs::new();
        ea.insert(EA_TENANT_ID.to_string(), self.tenant_id.as_str().into());
        ea.insert(EA_CMP_TYPE.to_string(), self.cmp_type.as_str().into());
        if !network_name.is_empty() {
            ea.insert(EA_NETWORK_NAME.to_string(), network_name.into());
        }
        ea
    }

    /// Find a network container by block within a network view
    pub async fn get_network_container(&self, network_view: &str, cidr: &str) -> Result<Option<NetworkContainer>, InfobloxError> {
        debug!("Looking up network container {} in network view {}", cidr, network_view);
        self.connector.find_network_container(network_view, cidr).await
    }

    /// Allocate the next available `/prefix_len` container under `parent_cidr`
    pub async fn allocate_network_container(
        &self,
        network_view: &str,
        parent_cidr: &str,
        prefix_len: u32,
        network_name: &str,
    ) -> Result<NetworkContainer, InfobloxError> {
        debug!(
            "Allocating next /{} from {} in network view {} for tenant {}",
            prefix_len, parent_cidr, network_view, self.tenant_id
        );
        self.connector
            .allocate_network_container(network_view, parent_cidr, prefix_len, self.ext_attrs(network_name))
            .await
    }

    /// Create a network container at an explicit block
    pub async fn create_network_container(
        &self,
        network_view: &str,
        cidr: &str,
        network_name: &str,
    ) -> Result<NetworkContainer, InfobloxError> {
        debug!("Creating network container {} in network view {} for tenant {}", cidr, network_view, self.tenant_id);
        self.connector
            .create_network_container(network_view, cidr, self.ext_attrs(network_name))
            .await
    }

    /// Fetch a network container by reference
    pub async fn get_network_container_by_ref(&self, reference: &str) -> Result<NetworkContainer, InfobloxError> {
        self.connector.get_network_container_by_ref(reference).await
    }

    /// Delete a network container, returning the deleted reference
    pub async fn delete_network_container(&self, reference: &str, network_view: &str) -> Result<String, InfobloxError> {
        debug!("Deleting network container {} from network view {}", reference, network_view);
        self.connector.delete_network_container(reference, network_view).await
    }
}
