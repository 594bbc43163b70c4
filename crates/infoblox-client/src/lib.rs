//! Infoblox NIOS IPAM Client
//!
//! Contract types for talking to an Infoblox grid about network containers.
//! The transport is supplied by the caller through [`InfobloxClientTrait`];
//! this crate owns the wire models, the error type and the [`ObjectManager`]
//! handle that tags every object with its tenant and cloud-management type.
//!
//! # Example
//!
//! ```no_run
//! use infoblox_client::{InfobloxClientTrait, ObjectManager};
//!
//! # async fn example<C: InfobloxClientTrait>(connector: &C) -> Result<(), Box<dyn std::error::Error>> {
//! let obj_mgr = ObjectManager::new(connector, "Terraform", "tenant-a");
//!
//! // Find the parent block, then carve the next /24 out of it
//! if obj_mgr.get_network_container("default", "10.0.0.0/16").await?.is_some() {
//!     let container = obj_mgr
//!         .allocate_network_container("default", "10.0.0.0/16", 24, "demo-network")
//!         .await?;
//!     println!("allocated {} as {}", container.network, container.reference);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Implementing a connector
//!
//! A WAPI transport implements [`InfobloxClientTrait`] and decodes each
//! response body with [`NetworkContainer::from_wapi_json`]. A body that is
//! not a `networkcontainer` object comes back as
//! [`InfobloxError::Serialization`], which the controller reports like any
//! other client failure.
//!
//! ```
//! use infoblox_client::{InfobloxError, NetworkContainer};
//!
//! let body = r#"{
//!     "_ref": "networkcontainer/ZG5zLm5ldHdvcmtfY29udGFpbmVyJDEwLjAuMC4wLzE2LzA:10.0.0.0/16/default",
//!     "network": "10.0.0.0/16",
//!     "network_view": "default",
//!     "extattrs": {"Tenant ID": {"value": "tenant-a"}}
//! }"#;
//! let container = NetworkContainer::from_wapi_json(body)?;
//! assert_eq!(container.network, "10.0.0.0/16");
//! assert_eq!(container.ext_attr("Tenant ID"), Some("tenant-a"));
//!
//! let err = NetworkContainer::from_wapi_json(r#"{"Error": "AdmConProtoError"}"#).unwrap_err();
//! assert!(matches!(err, InfobloxError::Serialization(_)));
//! # Ok::<(), InfobloxError>(())
//! ```
//!
//! # Features
//!
//! - **test-util**: exposes [`MockInfobloxClient`], an in-memory grid with
//!   next-available allocation, call recording and one-shot fault injection

pub mod error;
pub mod models;
pub mod object_manager;
#[path = "trait.rs"]
pub mod infoblox_trait;
#[cfg(any(test, feature = "test-util"))]
pub mod mock;

pub use error::InfobloxError;
pub use models::*;
pub use object_manager::ObjectManager;
pub use infoblox_trait::InfobloxClientTrait;
#[cfg(any(test, feature = "test-util"))]
pub use mock::{MockInfobloxClient, MockOperation};
