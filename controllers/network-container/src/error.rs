//! Reconciler error types.
//!
//! Every variant names the network view the operation acted on. Client
//! failures are kept as the error source and rendered verbatim.

use infoblox_client::InfobloxError;
use thiserror::Error;

/// Errors returned by the network container lifecycle handlers.
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Parent container for an allocation does not exist (or could not be looked up)
    #[error("Allocation of network container failed in network view ({network_view}) : Parent network container {parent_cidr} not found.")]
    ParentNotFound {
        network_view: String,
        parent_cidr: String,
        #[source]
        source: Option<InfobloxError>,
    },

    /// Next-available allocation was rejected by the grid
    #[error("Allocation of network container failed in network view ({network_view}) : {source}")]
    AllocationFailed {
        network_view: String,
        #[source]
        source: InfobloxError,
    },

    /// Creation at an explicit block was rejected by the grid
    #[error("Creation of network container failed in network view ({network_view}) : {source}")]
    CreationFailed {
        network_view: String,
        #[source]
        source: InfobloxError,
    },

    /// Neither an explicit block nor a complete allocation request
    #[error("Creation of network container failed: neither cidr nor parent_cidr with allocate_prefix_len was specified.")]
    UnderSpecified { network_view: String },

    /// Containers are immutable once created
    #[error("container updation is not supported")]
    UpdateUnsupported { network_view: String },

    /// Fetch by reference failed
    #[error("Getting Network container from network view ({network_view}) failed : {source}")]
    ReadFailed {
        network_view: String,
        #[source]
        source: InfobloxError,
    },

    /// Delete by reference failed; the reference is kept for a retry
    #[error("Deletion of Network container failed from network view({network_view}): {source}")]
    DeletionFailed {
        network_view: String,
        #[source]
        source: InfobloxError,
    },
}

impl ContainerError {
    /// Network view the failed operation acted on
    pub fn network_view(&self) -> &str {
        match self {
            Self::ParentNotFound { network_view, .. }
            | Self::AllocationFailed { network_view, .. }
            | Self::CreationFailed { network_view, .. }
            | Self::UnderSpecified { network_view }
            | Self::UpdateUnsupported { network_view }
            | Self::ReadFailed { network_view, .. }
            | Self::DeletionFailed { network_view, .. } => network_view,
        }
    }
}
