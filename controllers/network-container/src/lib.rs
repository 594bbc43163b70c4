//! Network Container Reconciler
//!
//! Reconciles desired-state network containers against an Infoblox grid.
//! A container is either created at an explicit block or carved out of a
//! parent container as the next available block of a given size. The
//! remote object reference is the only identity kept locally.
//!
//! The host framework owns scheduling and persistence; it hands a
//! [`NetworkContainerResource`] to one of the lifecycle handlers on
//! [`Reconciler`] and stores whatever reference comes back.

pub mod config;
pub mod error;
pub mod plan;
pub mod reconciler;
pub mod resource;

pub use config::ReconcilerConfig;
pub use error::ContainerError;
pub use plan::{CreatePlan, plan_create};
pub use reconciler::{Reconciler, resource_id_string};
pub use resource::{ContainerSpec, ContainerState, NetworkContainerResource};
