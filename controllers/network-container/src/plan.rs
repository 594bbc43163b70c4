//! Create-time decision: explicit block, allocation from a parent, or neither.

use crate::error::ContainerError;
use crate::resource::ContainerSpec;
use serde::Serialize;

/// What a create request resolves to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CreatePlan {
    /// Take the next available `/prefix_len` out of `parent_cidr`
    AllocateFromParent {
        network_view: String,
        parent_cidr: String,
        prefix_len: u32,
        network_name: String,
    },
    /// Create the container at exactly `cidr`
    Explicit {
        network_view: String,
        cidr: String,
        network_name: String,
    },
}

/// Decide how a container should be created.
///
/// The first matching rule wins:
/// 1. no `cidr`, a `parent_cidr` and `allocate_prefix_len > 1` allocates from the parent
/// 2. a `cidr` creates at that block, whatever the allocation fields say
/// 3. anything else is rejected as under-specified
pub fn plan_create(spec: &ContainerSpec) -> Result<CreatePlan, ContainerError> {
    let network_view = spec.network_view_name.clone();
    let network_name = spec.network_name_str().to_string();

    if spec.cidr_str().is_empty() && !spec.parent_cidr_str().is_empty() && spec.allocate_prefix_len > 1 {
        Ok(CreatePlan::AllocateFromParent {
            network_view,
            parent_cidr: spec.parent_cidr_str().to_string(),
            prefix_len: spec.allocate_prefix_len,
            network_name,
        })
    } else if !spec.cidr_str().is_empty() {
        Ok(CreatePlan::Explicit {
            network_view,
            cidr: spec.cidr_str().to_string(),
            network_name,
        })
    } else {
        Err(ContainerError::UnderSpecified { network_view })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_cidr_wins_over_allocation() {
        for (parent, prefix_len) in [("", 0), ("10.0.0.0/16", 0), ("10.0.0.0/16", 24), ("", 24)] {
            let mut spec = ContainerSpec::new("foo").with_cidr("10.10.0.0/24");
            if !parent.is_empty() {
                spec = spec.with_parent(parent, prefix_len);
            } else {
                spec.allocate_prefix_len = prefix_len;
            }
            let plan = plan_create(&spec).unwrap();
            assert!(
                matches!(plan, CreatePlan::Explicit { ref cidr, .. } if cidr == "10.10.0.0/24"),
                "parent={parent:?} prefix_len={prefix_len}: {plan:?}"
            );
        }
    }

    #[test]
    fn test_allocation_from_parent() {
        let spec = ContainerSpec::new("foo")
            .with_network_name("demo-network")
            .with_parent("10.0.0.0/16", 24);
        assert_eq!(
            plan_create(&spec).unwrap(),
            CreatePlan::AllocateFromParent {
                network_view: "default".to_string(),
                parent_cidr: "10.0.0.0/16".to_string(),
                prefix_len: 24,
                network_name: "demo-network".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_cidr_string_counts_as_absent() {
        let spec = ContainerSpec::new("foo").with_cidr("").with_parent("10.0.0.0/16", 24);
        assert!(matches!(plan_create(&spec).unwrap(), CreatePlan::AllocateFromParent { .. }));
    }

    #[test]
    fn test_under_specified() {
        let cases = [
            ContainerSpec::new("foo"),
            ContainerSpec::new("foo").with_parent("10.0.0.0/16", 0),
            ContainerSpec::new("foo").with_parent("10.0.0.0/16", 1),
            ContainerSpec::new("foo").with_parent("", 24),
            ContainerSpec::new("foo").with_network_view("lab").with_network_name("demo-network"),
        ];
        for spec in cases {
            let err = plan_create(&spec).unwrap_err();
            assert!(matches!(err, ContainerError::UnderSpecified { .. }), "{spec:?}: {err:?}");
            assert_eq!(err.network_view(), spec.network_view_name);
        }
    }

    #[test]
    fn test_plan_serializes_with_action_tag() {
        let plan = plan_create(&ContainerSpec::new("foo").with_cidr("10.10.0.0/24")).unwrap();
        assert_eq!(
            serde_json::to_value(&plan).unwrap(),
            serde_json::json!({
                "action": "explicit",
                "network_view": "default",
                "cidr": "10.10.0.0/24",
                "network_name": ""
            })
        );
    }
}
