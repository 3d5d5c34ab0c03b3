//! DCMigrate Convert - OpenShift DeploymentConfig to Deployment converter
//!
//! This crate provides the structural conversion engine that maps a
//! DeploymentConfig, represented as a semi-structured document, into the
//! equivalent `apps/v1` Deployment. The engine is pure: it performs no I/O,
//! holds no shared state, and is safe to invoke concurrently across any
//! number of documents.
//!
//! # Field mapping
//!
//! | DeploymentConfig                  | Deployment                          |
//! |-----------------------------------|-------------------------------------|
//! | `spec.replicas` (default 1)       | `spec.replicas`                     |
//! | `spec.selector` (map)             | `spec.selector.matchLabels`         |
//! | `spec.template`                   | `spec.template`                     |
//! | `spec.strategy.type: Rolling`     | `strategy.type: RollingUpdate`      |
//! | `spec.strategy.type: Recreate`    | `strategy.type: Recreate`           |
//! | `spec.strategy.type: <other>`     | `strategy.type: RollingUpdate`      |
//! | `spec.triggers` / `test` / `paused` | removed                           |
//!
//! The `deploymentconfig` selector key and the OpenShift bookkeeping
//! labels/annotations are stripped; a provenance marker and a migration
//! timestamp are always injected into the target's annotations.
//!
//! # Example
//!
//! ```
//! use chrono::Local;
//! use dcmigrate_convert::{Document, convert};
//!
//! let source = Document::from_yaml(r#"
//! metadata:
//!   name: web
//!   namespace: shop
//! spec:
//!   replicas: 3
//!   selector:
//!     app: web
//!     deploymentconfig: web
//!   template:
//!     metadata:
//!       labels:
//!         app: web
//!     spec:
//!       containers:
//!         - name: web
//!           image: web:latest
//! "#).unwrap();
//!
//! let (record, result) = convert(&source, Local::now().fixed_offset());
//! let deployment = result.unwrap();
//! assert_eq!(deployment.get_str("kind"), Some("Deployment"));
//! assert_eq!(record.name, "web");
//! ```
//!
//! Conversion failures are per-document: a missing `spec.selector` aborts
//! that document's conversion with [`ConvertError::MissingField`], but the
//! [`ConversionRecord`] is still produced so reporting stays complete.

pub mod converter;
pub mod document;
pub mod error;
pub mod policy;
pub mod predicates;
pub mod record;

// Re-exports
pub use converter::{API_VERSION, Converter, KIND, convert};
pub use document::Document;
pub use error::{ConvertError, Result};
pub use policy::{ConversionPolicy, DC_SELECTOR_KEY, annotations};
pub use record::ConversionRecord;
