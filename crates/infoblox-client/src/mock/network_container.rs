//! Network container operations for MockInfobloxClient

use super::helpers::{container_ref, overlaps, parse_cidr};
use super::{MockInfobloxClient, MockOperation, lock};
use crate::error::InfobloxError;
use crate::models::*;
use ipnet::IpNet;
use tracing::debug;

fn view_not_found(network_view: &str) -> InfobloxError {
    InfobloxError::NotFound(format!("network view {} not found", network_view))
}

/// Blocks of every container stored in `network_view`
fn blocks_in_view(client: &MockInfobloxClient, network_view: &str) -> Vec<IpNet> {
    lock(&client.containers)
        .values()
        .filter(|c| c.network_view == network_view)
        .filter_map(|c| c.network.parse::<IpNet>().ok())
        .collect()
}

pub async fn find_network_container(client: &MockInfobloxClient, network_view: &str, cidr: &str) -> Result<Option<NetworkContainer>, InfobloxError> {
        client.record(MockOperation::Find)?;
        let wanted = parse_cidr(cidr)?;

        Ok(lock(&client.containers)
            .values()
            .find(|c| {
                c.network_view == network_view
                    && c.network.parse::<IpNet>().is_ok_and(|net| net == wanted)
            })
            .cloned())
}

pub async fn allocate_network_container(
    client: &MockInfobloxClient,
    network_view: &str,
    parent_cidr: &str,
    prefix_len: u32,
    extattrs: ExtAttrs,
) -> Result<NetworkContainer, InfobloxError> {
        client.record(MockOperation::Allocate)?;
        let view_index = client.view_index(network_view).ok_or_else(|| view_not_found(network_view))?;
        let parent = parse_cidr(parent_cidr)?;

        let new_len = u8::try_from(prefix_len)
            .ok()
            .filter(|len| *len > parent.prefix_len() && *len <= parent.max_prefix_len())
            .ok_or_else(|| InfobloxError::InvalidRequest(format!(
                "cannot allocate a /{} network from {}",
                prefix_len, parent
            )))?;

        let in_view = blocks_in_view(client, network_view);
        if !in_view.contains(&parent) {
            return Err(InfobloxError::NotFound(format!(
                "network container {} not found in network view {}",
                parent_cidr, network_view
            )));
        }

        // Anything already carved out of the parent is off limits
        let occupied: Vec<IpNet> = in_view
            .into_iter()
            .filter(|net| *net != parent && parent.contains(net))
            .collect();

        let candidate = parent
            .subnets(new_len)
            .map_err(|e| InfobloxError::InvalidRequest(format!("cannot split {}: {}", parent, e)))?
            .find(|candidate| !occupied.iter().any(|net| overlaps(candidate, net)))
            .ok_or_else(|| InfobloxError::Exhausted(format!(
                "no /{} network available in {} (network view {})",
                new_len, parent, network_view
            )))?;

        let network = candidate.to_string();
        debug!("Mock grid allocated {} from {}", network, parent);
        let container = NetworkContainer {
            reference: container_ref(&network, network_view, view_index),
            network_view: network_view.to_string(),
            network,
            comment: None,
            extattrs,
        };

        lock(&client.containers).insert(container.reference.clone(), container.clone());
        Ok(container)
}

pub async fn create_network_container(
    client: &MockInfobloxClient,
    network_view: &str,
    cidr: &str,
    extattrs: ExtAttrs,
) -> Result<NetworkContainer, InfobloxError> {
        client.record(MockOperation::Create)?;
        let view_index = client.view_index(network_view).ok_or_else(|| view_not_found(network_view))?;
        let net = parse_cidr(cidr)?;

        if blocks_in_view(client, network_view).contains(&net) {
            return Err(InfobloxError::Conflict(format!(
                "network container {} already exists in network view {}",
                net, network_view
            )));
        }

        let network = net.to_string();
        let container = NetworkContainer {
            reference: container_ref(&network, network_view, view_index),
            network_view: network_view.to_string(),
            network,
            comment: None,
            extattrs,
        };

        lock(&client.containers).insert(container.reference.clone(), container.clone());
        Ok(container)
}

pub async fn get_network_container_by_ref(client: &MockInfobloxClient, reference: &str) -> Result<NetworkContainer, InfobloxError> {
        client.record(MockOperation::GetByRef)?;
        let current = client.resolve_reference(reference);
        lock(&client.containers)
            .get(&current)
            .cloned()
            .ok_or_else(|| InfobloxError::NotFound(format!("reference {} not found", reference)))
}

pub async fn delete_network_container(client: &MockInfobloxClient, reference: &str, _network_view: &str) -> Result<String, InfobloxError> {
        client.record(MockOperation::Delete)?;
        let current = client.resolve_reference(reference);
        lock(&client.containers)
            .remove(&current)
            .map(|c| c.reference)
            .ok_or_else(|| InfobloxError::NotFound(format!("reference {} not found", reference)))
}

#[cfg(test)]
mod tests {
    use crate::{InfobloxClientTrait, InfobloxError, MockInfobloxClient, MockOperation};
    use crate::models::ExtAttrs;

    #[tokio::test]
    async fn test_allocate_is_first_fit_and_skips_taken_blocks() {
        let client = MockInfobloxClient::new();
        client.add_network_container("default", "10.0.0.0/16");
        client.add_network_container("default", "10.0.1.0/24");

        let first = client.allocate_network_container("default", "10.0.0.0/16", 24, ExtAttrs::new()).await.unwrap();
        let second = client.allocate_network_container("default", "10.0.0.0/16", 24, ExtAttrs::new()).await.unwrap();

        assert_eq!(first.network, "10.0.0.0/24");
        assert_eq!(second.network, "10.0.2.0/24");
        assert_ne!(first.reference, second.reference);
    }

    #[tokio::test]
    async fn test_allocate_ignores_other_views() {
        let client = MockInfobloxClient::new();
        client.add_network_container("default", "10.0.0.0/16");
        client.add_network_container("lab", "10.0.0.0/24");

        let container = client.allocate_network_container("default", "10.0.0.0/16", 24, ExtAttrs::new()).await.unwrap();
        assert_eq!(container.network, "10.0.0.0/24");
    }

    #[tokio::test]
    async fn test_allocate_exhausted() {
        let client = MockInfobloxClient::new();
        client.add_network_container("default", "10.0.0.0/23");

        for _ in 0..2 {
            client.allocate_network_container("default", "10.0.0.0/23", 24, ExtAttrs::new()).await.unwrap();
        }
        let err = client.allocate_network_container("default", "10.0.0.0/23", 24, ExtAttrs::new()).await.unwrap_err();
        assert!(matches!(err, InfobloxError::Exhausted(_)));
    }

    #[tokio::test]
    async fn test_allocate_rejects_prefix_not_longer_than_parent() {
        let client = MockInfobloxClient::new();
        client.add_network_container("default", "10.0.0.0/16");

        let err = client.allocate_network_container("default", "10.0.0.0/16", 16, ExtAttrs::new()).await.unwrap_err();
        assert!(matches!(err, InfobloxError::InvalidRequest(_)));
        let err = client.allocate_network_container("default", "10.0.0.0/16", 300, ExtAttrs::new()).await.unwrap_err();
        assert!(matches!(err, InfobloxError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn test_allocate_without_parent() {
        let client = MockInfobloxClient::new();
        let err = client.allocate_network_container("default", "11.11.0.0/16", 24, ExtAttrs::new()).await.unwrap_err();
        assert!(matches!(err, InfobloxError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_create_duplicate_conflicts() {
        let client = MockInfobloxClient::new();
        client.create_network_container("default", "10.10.0.0/24", ExtAttrs::new()).await.unwrap();
        let err = client.create_network_container("default", "10.10.0.0/24", ExtAttrs::new()).await.unwrap_err();
        assert!(matches!(err, InfobloxError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_create_in_unknown_view() {
        let client = MockInfobloxClient::new();
        let err = client.create_network_container("missing", "10.10.0.0/24", ExtAttrs::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "Not found: network view missing not found");
    }

    #[tokio::test]
    async fn test_find_get_delete() {
        let client = MockInfobloxClient::new();
        let created = client.create_network_container("default", "10.10.0.0/24", ExtAttrs::new()).await.unwrap();

        let found = client.find_network_container("default", "10.10.0.0/24").await.unwrap();
        assert_eq!(found.as_ref(), Some(&created));
        assert!(client.find_network_container("other", "10.10.0.0/24").await.unwrap().is_none());

        let fetched = client.get_network_container_by_ref(&created.reference).await.unwrap();
        assert_eq!(fetched, created);

        let deleted = client.delete_network_container(&created.reference, "default").await.unwrap();
        assert_eq!(deleted, created.reference);
        assert!(matches!(
            client.get_network_container_by_ref(&created.reference).await,
            Err(InfobloxError::NotFound(_))
        ));
        assert!(matches!(
            client.delete_network_container(&created.reference, "default").await,
            Err(InfobloxError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_reissued_reference_resolves_from_old_one() {
        let client = MockInfobloxClient::new();
        let created = client.create_network_container("default", "10.10.0.0/24", ExtAttrs::new()).await.unwrap();
        let renewed = "networkcontainer/cmVuZXdlZA:10.10.0.0/24/default";

        assert!(client.reissue_reference(&created.reference, renewed));
        assert!(!client.reissue_reference("networkcontainer/unknown", "x"));

        let fetched = client.get_network_container_by_ref(&created.reference).await.unwrap();
        assert_eq!(fetched.reference, renewed);
        assert_eq!(fetched.network, "10.10.0.0/24");

        let deleted = client.delete_network_container(&created.reference, "default").await.unwrap();
        assert_eq!(deleted, renewed);
        assert!(client.network_containers().is_empty());
    }

    #[tokio::test]
    async fn test_injected_failure_fires_once() {
        let client = MockInfobloxClient::new();
        client.fail_next(MockOperation::Create, "grid is read-only");

        let err = client.create_network_container("default", "10.10.0.0/24", ExtAttrs::new()).await.unwrap_err();
        assert_eq!(err.to_string(), "WAPI error: grid is read-only");
        assert!(client.create_network_container("default", "10.10.0.0/24", ExtAttrs::new()).await.is_ok());
        assert_eq!(client.call_count(MockOperation::Create), 2);
    }
}
