//! Reconciliation logic for network containers.
//!
//! The host framework calls one handler per lifecycle event:
//! create, read, update, delete. Each handler runs its client calls in
//! sequence and returns once the grid has answered.

pub mod network_container;

use crate::config::ReconcilerConfig;
use infoblox_client::{InfobloxClientTrait, ObjectManager};

/// Label used in log lines for a network container, bound or not
pub fn resource_id_string(reference: Option<&str>) -> String {
    let id = reference.filter(|r| !r.is_empty()).unwrap_or("<new resource>");
    format!("infoblox_network_container (ID = {})", id)
}

/// Reconciles network containers against an Infoblox grid.
pub struct Reconciler {
    pub(crate) infoblox_client: Box<dyn InfobloxClientTrait>,
    pub(crate) config: ReconcilerConfig,
}

impl std::fmt::Debug for Reconciler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reconciler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Reconciler {
    /// Creates a new reconciler instance.
    pub fn new(infoblox_client: Box<dyn InfobloxClientTrait>, config: ReconcilerConfig) -> Self {
        Self {
            infoblox_client,
            config,
        }
    }

    pub fn config(&self) -> &ReconcilerConfig {
        &self.config
    }

    /// Object manager scoped to `tenant_id`, built fresh for each operation
    pub(crate) fn object_manager(&self, tenant_id: &str) -> ObjectManager<'_, dyn InfobloxClientTrait> {
        ObjectManager::new(&*self.infoblox_client, self.config.cmp_type.as_str(), tenant_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_id_string() {
        assert_eq!(resource_id_string(None), "infoblox_network_container (ID = <new resource>)");
        assert_eq!(resource_id_string(Some("")), "infoblox_network_container (ID = <new resource>)");
        assert_eq!(
            resource_id_string(Some("networkcontainer/abc:10.10.0.0/24/default")),
            "infoblox_network_container (ID = networkcontainer/abc:10.10.0.0/24/default)"
        );
    }
}
