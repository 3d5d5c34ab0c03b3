//! DeploymentConfig to Deployment conversion
//!
//! The pipeline runs in fixed order: metadata sanitization, spec mapping,
//! then a cleanup pass that drops fields with no Deployment equivalent. Each
//! stage builds fresh output and never aliases the source document. Any
//! missing required field aborts the whole conversion; no partial Deployment
//! escapes.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use serde_json::{Map, Value as JsonValue, json};

use crate::document::Document;
use crate::error::{ConvertError, Result};
use crate::policy::{ConversionPolicy, DC_SELECTOR_KEY, annotations};
use crate::record::ConversionRecord;

/// API version of the produced resource
pub const API_VERSION: &str = "apps/v1";
/// Kind of the produced resource
pub const KIND: &str = "Deployment";

/// Convert DeploymentConfig documents under a fixed policy
#[derive(Debug, Clone)]
pub struct Converter {
    policy: ConversionPolicy,
}

impl Converter {
    pub fn new(policy: ConversionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ConversionPolicy {
        &self.policy
    }

    /// Convert one DeploymentConfig into a Deployment.
    ///
    /// The [`ConversionRecord`] is captured from the unmodified source and
    /// returned even when the conversion itself fails, so reporting covers
    /// unconvertible documents too. `now` stamps both the record and the
    /// migration-timestamp annotation.
    pub fn convert(
        &self,
        source: &Document,
        now: DateTime<FixedOffset>,
    ) -> (ConversionRecord, Result<Document>) {
        let record = ConversionRecord::capture(source, now);
        let result = self.convert_document(source, now);

        match &result {
            Ok(_) => tracing::debug!(name = %record.name, namespace = %record.namespace, "converted DeploymentConfig"),
            Err(e) => tracing::debug!(name = %record.name, namespace = %record.namespace, error = %e, "conversion failed"),
        }

        (record, result)
    }

    fn convert_document(
        &self,
        source: &Document,
        now: DateTime<FixedOffset>,
    ) -> Result<Document> {
        let metadata = source
            .get_map("metadata")
            .ok_or_else(|| ConvertError::missing("metadata"))?;
        let spec = source
            .get_map("spec")
            .ok_or_else(|| ConvertError::missing("spec"))?;

        let mut deployment = Document::new(json!({
            "apiVersion": API_VERSION,
            "kind": KIND,
        }));

        let sanitized = self.sanitize_metadata(metadata, now)?;
        deployment.set("metadata", JsonValue::Object(sanitized));

        let mapped = map_spec(spec)?;
        deployment.set("spec", JsonValue::Object(mapped));

        cleanup(&mut deployment);

        Ok(deployment)
    }

    /// Copy identifying metadata, filtering labels and annotations per
    /// policy. The provenance marker and migration timestamp are injected
    /// unconditionally.
    fn sanitize_metadata(
        &self,
        metadata: &Map<String, JsonValue>,
        now: DateTime<FixedOffset>,
    ) -> Result<Map<String, JsonValue>> {
        let name = metadata
            .get("name")
            .ok_or_else(|| ConvertError::missing("metadata"))?;

        let mut sanitized = Map::new();
        sanitized.insert("name".to_string(), name.clone());
        if let Some(namespace) = metadata.get("namespace") {
            sanitized.insert("namespace".to_string(), namespace.clone());
        }

        if self.policy.preserve_labels
            && let Some(JsonValue::Object(labels)) = metadata.get("labels")
        {
            let kept: Map<String, JsonValue> = labels
                .iter()
                .filter(|(key, _)| !self.policy.strip_labels.contains(key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            if !kept.is_empty() {
                sanitized.insert("labels".to_string(), JsonValue::Object(kept));
            }
        }

        let mut annotations_out = Map::new();
        if self.policy.preserve_annotations
            && let Some(JsonValue::Object(source_annotations)) = metadata.get("annotations")
        {
            for (key, value) in source_annotations {
                if !self.policy.strip_annotations.contains(key.as_str()) {
                    annotations_out.insert(key.clone(), value.clone());
                }
            }
        }
        annotations_out.insert(
            annotations::GENERATED_BY.to_string(),
            JsonValue::String(self.policy.generated_by.clone()),
        );
        annotations_out.insert(
            annotations::MIGRATION_TIMESTAMP.to_string(),
            JsonValue::String(now.to_rfc3339_opts(SecondsFormat::Secs, false)),
        );
        sanitized.insert("annotations".to_string(), JsonValue::Object(annotations_out));

        Ok(sanitized)
    }
}

/// Convert with the default policy
pub fn convert(
    source: &Document,
    now: DateTime<FixedOffset>,
) -> (ConversionRecord, Result<Document>) {
    Converter::new(ConversionPolicy::default()).convert(source, now)
}

/// Translate the workload spec: replicas, selector, pod template, strategy
fn map_spec(spec: &Map<String, JsonValue>) -> Result<Map<String, JsonValue>> {
    let mut mapped = Map::new();

    let replicas = spec
        .get("replicas")
        .and_then(JsonValue::as_i64)
        .unwrap_or(1);
    mapped.insert("replicas".to_string(), json!(replicas));

    let selector = spec
        .get("selector")
        .and_then(JsonValue::as_object)
        .ok_or_else(|| ConvertError::missing("spec.selector"))?;
    let mut match_labels = selector.clone();
    match_labels.remove(DC_SELECTOR_KEY);
    mapped.insert(
        "selector".to_string(),
        json!({ "matchLabels": match_labels }),
    );

    let template = spec
        .get("template")
        .and_then(JsonValue::as_object)
        .ok_or_else(|| ConvertError::missing("spec.template"))?;
    let mut template = template.clone();
    // Pod labels must not retain the DeploymentConfig linkage key either
    if let Some(JsonValue::Object(template_metadata)) = template.get_mut("metadata")
        && let Some(JsonValue::Object(labels)) = template_metadata.get_mut("labels")
    {
        labels.remove(DC_SELECTOR_KEY);
    }
    mapped.insert("template".to_string(), JsonValue::Object(template));

    if let Some(strategy) = spec.get("strategy") {
        mapped.insert(
            "strategy".to_string(),
            JsonValue::Object(map_strategy(strategy)),
        );
    }

    Ok(mapped)
}

/// Translate the update strategy. Unrecognized or custom strategies degrade
/// to plain RollingUpdate semantics rather than failing the conversion.
fn map_strategy(strategy: &JsonValue) -> Map<String, JsonValue> {
    let mut mapped = Map::new();

    match strategy.get("type").and_then(JsonValue::as_str) {
        Some("Rolling") => {
            mapped.insert("type".to_string(), json!("RollingUpdate"));
            if let Some(JsonValue::Object(params)) = strategy.get("rollingParams") {
                let mut rolling_update = Map::new();
                if let Some(max_unavailable) = params.get("maxUnavailable") {
                    rolling_update.insert("maxUnavailable".to_string(), max_unavailable.clone());
                }
                if let Some(max_surge) = params.get("maxSurge") {
                    rolling_update.insert("maxSurge".to_string(), max_surge.clone());
                }
                mapped.insert(
                    "rollingUpdate".to_string(),
                    JsonValue::Object(rolling_update),
                );
            }
        }
        Some("Recreate") => {
            mapped.insert("type".to_string(), json!("Recreate"));
        }
        _ => {
            mapped.insert("type".to_string(), json!("RollingUpdate"));
        }
    }

    mapped
}

/// Strip fields meaningful only to DeploymentConfigs
fn cleanup(deployment: &mut Document) {
    deployment.remove("spec.triggers");
    deployment.remove("spec.test");
    deployment.remove("spec.paused");
}
