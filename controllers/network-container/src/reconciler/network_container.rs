//! Network container lifecycle handlers

use super::{Reconciler, resource_id_string};
use crate::error::ContainerError;
use crate::plan::{CreatePlan, plan_create};
use crate::resource::{ContainerState, NetworkContainerResource};
use infoblox_client::InfobloxError;
use tracing::{debug, error, info, warn};

fn missing_reference() -> InfobloxError {
    InfobloxError::InvalidRequest("network container has no reference".to_string())
}

impl Reconciler {
    /// Creates the container described by `resource.spec` and binds the
    /// resource to the grid's reference.
    ///
    /// This method:
    /// 1. Decides between allocation from a parent and an explicit block
    /// 2. For allocation, confirms the parent exists before asking for a block
    /// 3. Records the returned reference and block
    /// 4. Reads the container back so state matches what the grid stored
    pub async fn create_network_container(&self, resource: &mut NetworkContainerResource) -> Result<(), ContainerError> {
        let id = resource_id_string(resource.id());
        debug!("{}: Beginning network container creation", id);

        let plan = plan_create(&resource.spec)
            .inspect_err(|e| error!("{}: {}", id, e))?;
        let obj_mgr = self.object_manager(&resource.spec.tenant_id);

        let container = match plan {
            CreatePlan::AllocateFromParent { network_view, parent_cidr, prefix_len, network_name } => {
                debug!("{}: Searching for parent network container {} in network view {}", id, parent_cidr, network_view);

                let parent = match obj_mgr.get_network_container(&network_view, &parent_cidr).await {
                    Ok(Some(parent)) => parent,
                    Ok(None) => {
                        let err = ContainerError::ParentNotFound { network_view, parent_cidr, source: None };
                        error!("{}: {}", id, err);
                        return Err(err);
                    }
                    Err(e) => {
                        warn!("{}: Lookup of parent network container {} failed: {}", id, parent_cidr, e);
                        return Err(ContainerError::ParentNotFound { network_view, parent_cidr, source: Some(e) });
                    }
                };

                debug!("{}: Found parent container: {}", id, parent.reference);
                debug!("{}: Attempting to allocate next /{} from parent", id, prefix_len);

                let container = obj_mgr
                    .allocate_network_container(&network_view, &parent_cidr, prefix_len, &network_name)
                    .await
                    .map_err(|source| ContainerError::AllocationFailed { network_view, source })
                    .inspect_err(|e| error!("{}: {}", id, e))?;

                info!("{}: Allocated network container {} ({})", id, container.network, container.reference);
                container
            }
            CreatePlan::Explicit { network_view, cidr, network_name } => {
                debug!("{}: Creating network container at {} in network view {}", id, cidr, network_view);

                let container = obj_mgr
                    .create_network_container(&network_view, &cidr, &network_name)
                    .await
                    .map_err(|source| ContainerError::CreationFailed { network_view, source })
                    .inspect_err(|e| error!("{}: {}", id, e))?;

                info!("{}: Created network container {} ({})", id, container.network, container.reference);
                container
            }
        };

        resource.state = ContainerState {
            reference: Some(container.reference),
            cidr: Some(container.network),
        };

        debug!("{}: Creation of network container complete", resource_id_string(resource.id()));
        self.read_network_container(resource).await
    }

    /// Refreshes state from the grid by reference.
    ///
    /// On failure the state is left untouched; deciding whether the
    /// container is gone is up to the caller.
    pub async fn read_network_container(&self, resource: &mut NetworkContainerResource) -> Result<(), ContainerError> {
        let id = resource_id_string(resource.id());
        debug!("{}: Reading network container", id);

        let network_view = resource.spec.network_view_name.clone();
        let Some(reference) = resource.id().map(str::to_string) else {
            return Err(ContainerError::ReadFailed { network_view, source: missing_reference() });
        };

        let container = self
            .object_manager(&resource.spec.tenant_id)
            .get_network_container_by_ref(&reference)
            .await
            .map_err(|source| ContainerError::ReadFailed { network_view, source })
            .inspect_err(|e| warn!("{}: {}", id, e))?;

        resource.state.reference = Some(container.reference);
        resource.state.cidr = Some(container.network);

        debug!("{}: Completed reading network container", resource_id_string(resource.id()));
        Ok(())
    }

    /// Network containers are never changed in place; a different block is a
    /// different object on the grid and has to be recreated.
    pub fn update_network_container(&self, resource: &NetworkContainerResource) -> Result<(), ContainerError> {
        let err = ContainerError::UpdateUnsupported {
            network_view: resource.spec.network_view_name.clone(),
        };
        warn!("{}: {}", resource_id_string(resource.id()), err);
        Err(err)
    }

    /// Deletes the container and unbinds the resource.
    ///
    /// The reference survives a failed delete so the call can be retried.
    pub async fn delete_network_container(&self, resource: &mut NetworkContainerResource) -> Result<(), ContainerError> {
        let id = resource_id_string(resource.id());
        debug!("{}: Beginning deletion of network container", id);

        let network_view = resource.spec.network_view_name.clone();
        let Some(reference) = resource.id().map(str::to_string) else {
            return Err(ContainerError::DeletionFailed { network_view, source: missing_reference() });
        };

        self.object_manager(&resource.spec.tenant_id)
            .delete_network_container(&reference, &network_view)
            .await
            .map_err(|source| ContainerError::DeletionFailed { network_view, source })
            .inspect_err(|e| error!("{}: {}", id, e))?;

        resource.state = ContainerState::default();

        info!("{}: Deletion of network container complete", id);
        Ok(())
    }
}
