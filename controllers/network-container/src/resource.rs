//! Network container resource types
//!
//! `ContainerSpec` is the desired state handed over by the host framework,
//! using the framework's field names. `ContainerState` is what the grid
//! reported back; its reference is the resource's only identity.

use serde::{Deserialize, Serialize};

/// Network view used when none is given
pub const DEFAULT_NETWORK_VIEW: &str = "default";

/// Desired state of a network container
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContainerSpec {
    /// Network view on the grid (defaults to "default")
    #[serde(default = "default_network_view_name")]
    pub network_view_name: String,

    /// Free-form name stamped on the container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,

    /// Explicit block, e.g. "10.10.0.0/24". Wins over allocation when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,

    /// Owning tenant
    pub tenant_id: String,

    /// Allocate the next available block of this prefix length from
    /// `parent_cidr` when greater than 1
    #[serde(default)]
    pub allocate_prefix_len: u32,

    /// Parent container block to allocate from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_cidr: Option<String>,
}

fn default_network_view_name() -> String {
    DEFAULT_NETWORK_VIEW.to_string()
}

impl ContainerSpec {
    /// Spec for `tenant_id` with every other field at its default
    pub fn new(tenant_id: impl Into<String>) -> Self {
        Self {
            network_view_name: default_network_view_name(),
            network_name: None,
            cidr: None,
            tenant_id: tenant_id.into(),
            allocate_prefix_len: 0,
            parent_cidr: None,
        }
    }

    #[must_use]
    pub fn with_network_view(mut self, network_view_name: impl Into<String>) -> Self {
        self.network_view_name = network_view_name.into();
        self
    }

    #[must_use]
    pub fn with_network_name(mut self, network_name: impl Into<String>) -> Self {
        self.network_name = Some(network_name.into());
        self
    }

    #[must_use]
    pub fn with_cidr(mut self, cidr: impl Into<String>) -> Self {
        self.cidr = Some(cidr.into());
        self
    }

    #[must_use]
    pub fn with_parent(mut self, parent_cidr: impl Into<String>, allocate_prefix_len: u32) -> Self {
        self.parent_cidr = Some(parent_cidr.into());
        self.allocate_prefix_len = allocate_prefix_len;
        self
    }

    // Absent and empty strings are the same thing to every decision.

    pub fn cidr_str(&self) -> &str {
        self.cidr.as_deref().unwrap_or_default()
    }

    pub fn parent_cidr_str(&self) -> &str {
        self.parent_cidr.as_deref().unwrap_or_default()
    }

    pub fn network_name_str(&self) -> &str {
        self.network_name.as_deref().unwrap_or_default()
    }
}

/// Observed state of a network container
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerState {
    /// Grid object reference; `None` while unbound
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Block the grid reports for the container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr: Option<String>,
}

impl ContainerState {
    pub fn is_bound(&self) -> bool {
        self.reference.as_deref().is_some_and(|r| !r.is_empty())
    }
}

/// Record passed to every lifecycle handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkContainerResource {
    pub spec: ContainerSpec,
    #[serde(default)]
    pub state: ContainerState,
}

impl NetworkContainerResource {
    /// New, unbound resource
    pub fn new(spec: ContainerSpec) -> Self {
        Self {
            spec,
            state: ContainerState::default(),
        }
    }

    /// Identity of the resource, if bound
    pub fn id(&self) -> Option<&str> {
        self.state.reference.as_deref().filter(|r| !r.is_empty())
    }
}
