//! Per-conversion diagnostic records

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::predicates;

/// One record per processed DeploymentConfig, aggregated by the caller for
/// reporting. Immutable after capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRecord {
    /// When the conversion ran (caller-supplied, keeps the engine
    /// deterministic)
    pub timestamp: DateTime<FixedOffset>,

    /// Source DeploymentConfig name (empty when metadata is malformed)
    pub name: String,

    /// Source namespace
    pub namespace: String,

    /// Source declared update triggers
    pub has_triggers: bool,

    /// Source declared recreate lifecycle hooks
    pub has_lifecycle_hooks: bool,

    /// Source enabled automatic rollback
    pub has_auto_rollback: bool,

    /// Source used a Custom strategy
    pub uses_custom_strategy: bool,
}

impl ConversionRecord {
    /// Classify a source document. Always computed from the unmodified
    /// source, whether or not its conversion subsequently succeeds.
    pub fn capture(source: &Document, now: DateTime<FixedOffset>) -> Self {
        Self {
            timestamp: now,
            name: source
                .get_str("metadata.name")
                .unwrap_or_default()
                .to_string(),
            namespace: source
                .get_str("metadata.namespace")
                .unwrap_or_default()
                .to_string(),
            has_triggers: predicates::has_triggers(source),
            has_lifecycle_hooks: predicates::has_lifecycle_hooks(source),
            has_auto_rollback: predicates::has_auto_rollback(source),
            uses_custom_strategy: predicates::uses_custom_strategy(source),
        }
    }
}
