//! Mock InfobloxClient for unit testing
//!
//! This module provides an in-memory grid implementing `InfobloxClientTrait`
//! so reconcilers can be tested without a running NIOS appliance.
//!
//! - `network_container.rs` - network container operations
//! - `helpers.rs` - object references and CIDR helpers

mod helpers;
mod network_container;

use crate::error::InfobloxError;
use crate::models::*;
use crate::infoblox_trait::InfobloxClientTrait;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Operations recorded by the mock, in call order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockOperation {
    Find,
    Allocate,
    Create,
    GetByRef,
    Delete,
}

/// Mock InfobloxClient for testing
///
/// Stores network containers in memory keyed by reference. Next-available
/// allocation walks the parent block first-fit, skipping anything already
/// carved out of it in the same network view. Failures can be injected one
/// call at a time with [`MockInfobloxClient::fail_next`].
#[derive(Debug, Clone)]
pub struct MockInfobloxClient {
    pub(crate) network_views: Arc<Mutex<Vec<String>>>,
    pub(crate) containers: Arc<Mutex<BTreeMap<String, NetworkContainer>>>,
    pub(crate) calls: Arc<Mutex<Vec<MockOperation>>>,
    pub(crate) failures: Arc<Mutex<HashMap<MockOperation, String>>>,
    // Superseded reference -> current reference
    pub(crate) aliases: Arc<Mutex<HashMap<String, String>>>,
}

impl Default for MockInfobloxClient {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockInfobloxClient {
    /// Create a new mock grid containing only the `default` network view
    pub fn new() -> Self {
        Self {
            network_views: Arc::new(Mutex::new(vec!["default".to_string()])),
            containers: Arc::new(Mutex::new(BTreeMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            aliases: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Add a network view (for test setup)
    pub fn add_network_view(&self, name: &str) {
        let mut views = lock(&self.network_views);
        if !views.iter().any(|v| v == name) {
            views.push(name.to_string());
        }
    }

    /// Add a network container directly to the store (for test setup).
    /// The view is created if missing. Not recorded as a call.
    pub fn add_network_container(&self, network_view: &str, cidr: &str) -> NetworkContainer {
        self.add_network_view(network_view);
        let view_index = self.view_index(network_view).unwrap_or_default();
        let container = NetworkContainer {
            reference: helpers::container_ref(cidr, network_view, view_index),
            network_view: network_view.to_string(),
            network: cidr.to_string(),
            comment: None,
            extattrs: ExtAttrs::new(),
        };
        lock(&self.containers).insert(container.reference.clone(), container.clone());
        container
    }

    /// Make the next call of `operation` fail with a WAPI error carrying `message`
    pub fn fail_next(&self, operation: MockOperation, message: impl Into<String>) {
        lock(&self.failures).insert(operation, message.into());
    }

    /// All operations invoked so far, in order
    pub fn calls(&self) -> Vec<MockOperation> {
        lock(&self.calls).clone()
    }

    /// Number of times `operation` has been invoked
    pub fn call_count(&self, operation: MockOperation) -> usize {
        lock(&self.calls).iter().filter(|op| **op == operation).count()
    }

    /// Re-issue the reference of a stored container, as the grid does when an
    /// object is renamed or moved (for test setup).
    ///
    /// Lookups and deletes by `old` keep resolving to the object, which now
    /// reports `new` as its `_ref`. Returns `false` if `old` is unknown.
    pub fn reissue_reference(&self, old: &str, new: &str) -> bool {
        let mut containers = lock(&self.containers);
        if old == new {
            return containers.contains_key(old);
        }
        let Some(mut container) = containers.remove(old) else {
            return false;
        };
        container.reference = new.to_string();
        containers.insert(new.to_string(), container);
        let mut aliases = lock(&self.aliases);
        aliases.remove(new);
        aliases.insert(old.to_string(), new.to_string());
        true
    }

    /// Snapshot of every stored container
    pub fn network_containers(&self) -> Vec<NetworkContainer> {
        lock(&self.containers).values().cloned().collect()
    }

    /// Record a call and consume any failure injected for it
    pub(crate) fn record(&self, operation: MockOperation) -> Result<(), InfobloxError> {
        lock(&self.calls).push(operation);
        match lock(&self.failures).remove(&operation) {
            Some(message) => Err(InfobloxError::Api(message)),
            None => Ok(()),
        }
    }

    /// Follow re-issued references to the current one
    pub(crate) fn resolve_reference(&self, reference: &str) -> String {
        let aliases = lock(&self.aliases);
        let mut current = reference;
        while let Some(next) = aliases.get(current) {
            current = next.as_str();
        }
        current.to_string()
    }

    pub(crate) fn view_index(&self, network_view: &str) -> Option<usize> {
        lock(&self.network_views).iter().position(|v| v == network_view)
    }
}

#[async_trait::async_trait]
impl InfobloxClientTrait for MockInfobloxClient {
    async fn find_network_container(&self, network_view: &str, cidr: &str) -> Result<Option<NetworkContainer>, InfobloxError> {
        network_container::find_network_container(self, network_view, cidr).await
    }

    async fn allocate_network_container(&self, network_view: &str, parent_cidr: &str, prefix_len: u32, extattrs: ExtAttrs) -> Result<NetworkContainer, InfobloxError> {
        network_container::allocate_network_container(self, network_view, parent_cidr, prefix_len, extattrs).await
    }

    async fn create_network_container(&self, network_view: &str, cidr: &str, extattrs: ExtAttrs) -> Result<NetworkContainer, InfobloxError> {
        network_container::create_network_container(self, network_view, cidr, extattrs).await
    }

    async fn get_network_container_by_ref(&self, reference: &str) -> Result<NetworkContainer, InfobloxError> {
        network_container::get_network_container_by_ref(self, reference).await
    }

    async fn delete_network_container(&self, reference: &str, network_view: &str) -> Result<String, InfobloxError> {
        network_container::delete_network_container(self, reference, network_view).await
    }
}
