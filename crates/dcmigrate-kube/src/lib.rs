//! DCMigrate Kube - cluster access for the DeploymentConfig migration
//!
//! Everything with a network in it lives here, behind a thin boundary: the
//! conversion engine only ever sees already-decoded documents. This crate
//! provides:
//! - client construction from a kubeconfig or the in-cluster environment
//! - a preflight check for connectivity and permissions
//! - namespace validation with a reserved-namespace skip list
//! - DeploymentConfig listing through the dynamic API
//! - Deployment apply via Server-Side Apply

pub mod client;
pub mod error;
pub mod namespaces;
pub mod resources;

pub use client::{connect, preflight};
pub use error::{KubeError, Result};
pub use namespaces::{is_reserved, validate};
pub use resources::{apply_deployment, list_deployment_configs};
