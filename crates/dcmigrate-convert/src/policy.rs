//! Conversion policy

use std::collections::BTreeSet;

/// Annotations written to every converted Deployment
pub mod annotations {
    /// Provenance marker identifying how the resource was produced
    pub const GENERATED_BY: &str = "openshift.io/generated-by";
    /// When the conversion ran (RFC 3339 with timezone offset)
    pub const MIGRATION_TIMESTAMP: &str = "openshift.io/migration-timestamp";
}

/// Selector/label key tying a pod back to its owning DeploymentConfig.
/// Meaningless after migration and stripped from selectors and template
/// labels.
pub const DC_SELECTOR_KEY: &str = "deploymentconfig";

/// Immutable configuration governing a conversion.
///
/// A policy is threaded explicitly into every [`Converter`] call; the engine
/// never reads ambient or process-wide state.
///
/// [`Converter`]: crate::converter::Converter
#[derive(Debug, Clone)]
pub struct ConversionPolicy {
    /// Copy source labels onto the converted Deployment
    pub preserve_labels: bool,
    /// Copy source annotations onto the converted Deployment
    pub preserve_annotations: bool,
    /// Label keys meaningful only to DeploymentConfigs, removed even when
    /// labels are preserved
    pub strip_labels: BTreeSet<String>,
    /// Annotation keys meaningful only to DeploymentConfigs, removed even
    /// when annotations are preserved
    pub strip_annotations: BTreeSet<String>,
    /// Value written under the provenance-marker annotation
    pub generated_by: String,
}

impl Default for ConversionPolicy {
    fn default() -> Self {
        Self {
            preserve_labels: true,
            preserve_annotations: true,
            strip_labels: ["openshift.io/deployment-config.name"]
                .map(String::from)
                .into(),
            strip_annotations: [
                "openshift.io/deployment-config.name",
                "openshift.io/deployment-config.latest-version",
                "openshift.io/deployment.phase",
            ]
            .map(String::from)
            .into(),
            generated_by: "deploymentconfig-to-deployment-migration".to_string(),
        }
    }
}
