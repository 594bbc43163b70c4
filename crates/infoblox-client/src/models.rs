//! Infoblox WAPI models
//!
//! These models match the WAPI `networkcontainer` object as returned with
//! `_return_fields+=extattrs`.

use crate::error::InfobloxError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Extensible attribute carrying the owning tenant
pub const EA_TENANT_ID: &str = "Tenant ID";

/// Extensible attribute carrying the cloud management platform type
pub const EA_CMP_TYPE: &str = "CMP Type";

/// Extensible attribute carrying the free-form network name
pub const EA_NETWORK_NAME: &str = "Network Name";

/// Single extensible attribute value (`{"value": "..."}` on the wire)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtAttrValue {
    pub value: String,
}

impl From<&str> for ExtAttrValue {
    fn from(value: &str) -> Self {
        Self { value: value.to_string() }
    }
}

/// Extensible attributes keyed by attribute name
pub type ExtAttrs = BTreeMap<String, ExtAttrValue>;

/// Network container model matching the WAPI `networkcontainer` object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkContainer {
    /// Opaque object reference, e.g.
    /// `networkcontainer/ZG5zLm5ldHdvcmtfY29udGFpbmVyJDEwLjAuMC4wLzE2LzA:10.0.0.0/16/default`
    #[serde(rename = "_ref")]
    pub reference: String,
    pub network_view: String,
    pub network: String, // e.g., "10.0.0.0/16"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extattrs: ExtAttrs,
}

impl NetworkContainer {
    /// Parse a single object from a WAPI response body.
    ///
    /// Connectors call this on every `networkcontainer` body they receive.
    /// Missing `_ref`, `network` or `network_view` fails with
    /// [`InfobloxError::Serialization`].
    pub fn from_wapi_json(body: &str) -> Result<Self, InfobloxError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Look up an extensible attribute value by name
    pub fn ext_attr(&self, name: &str) -> Option<&str> {
        self.extattrs.get(name).map(|ea| ea.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAPI_BODY: &str = r#"{
        "_ref": "networkcontainer/ZG5zLm5ldHdvcmtfY29udGFpbmVyJDEwLjEwLjAuMC8yNC8w:10.10.0.0/24/default",
        "network": "10.10.0.0/24",
        "network_view": "default",
        "extattrs": {
            "CMP Type": {"value": "Terraform"},
            "Network Name": {"value": "demo-network"},
            "Tenant ID": {"value": "foo"}
        }
    }"#;

    #[test]
    fn test_parse_network_container() {
        let container = NetworkContainer::from_wapi_json(WAPI_BODY).unwrap();
        assert!(container.reference.starts_with("networkcontainer/"));
        assert_eq!(container.network, "10.10.0.0/24");
        assert_eq!(container.network_view, "default");
        assert_eq!(container.comment, None);
        assert_eq!(container.ext_attr(EA_TENANT_ID), Some("foo"));
        assert_eq!(container.ext_attr(EA_NETWORK_NAME), Some("demo-network"));
        assert_eq!(container.ext_attr("Site"), None);
    }

    #[test]
    fn test_parse_without_extattrs() {
        let body = r#"{"_ref": "networkcontainer/abc:10.0.0.0/8/default", "network": "10.0.0.0/8", "network_view": "default"}"#;
        let container = NetworkContainer::from_wapi_json(body).unwrap();
        assert!(container.extattrs.is_empty());
    }

    #[test]
    fn test_parse_missing_ref_is_serialization_error() {
        let body = r#"{"network": "10.0.0.0/8", "network_view": "default"}"#;
        let err = NetworkContainer::from_wapi_json(body).unwrap_err();
        assert!(matches!(err, InfobloxError::Serialization(_)));
    }

    #[test]
    fn test_serialize_uses_wapi_field_names() {
        let container = NetworkContainer::from_wapi_json(WAPI_BODY).unwrap();
        let value = serde_json::to_value(&container).unwrap();
        assert!(value.get("_ref").is_some());
        assert!(value.get("reference").is_none());
        assert!(value.get("comment").is_none());
        assert_eq!(value["extattrs"]["CMP Type"]["value"], "Terraform");
    }
}
