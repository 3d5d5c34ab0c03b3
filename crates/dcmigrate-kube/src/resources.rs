//! Dynamic-API access to DeploymentConfigs and Deployments
//!
//! DeploymentConfigs are an aggregated OpenShift type with no compile-time
//! bindings in k8s-openapi, so both kinds go through `DynamicObject` with an
//! `ApiResource` built from the GVK.

use kube::Client;
use kube::api::{Api, DynamicObject, ListParams, Patch, PatchParams};
use kube::core::{ApiResource, GroupVersionKind};
use serde_json::Value as JsonValue;

use crate::error::Result;

/// Field manager name for Server-Side Apply
const FIELD_MANAGER: &str = "dcmigrate";

fn deploymentconfig_resource() -> ApiResource {
    ApiResource::from_gvk(&GroupVersionKind::gvk(
        "apps.openshift.io",
        "v1",
        "DeploymentConfig",
    ))
}

fn deployment_resource() -> ApiResource {
    ApiResource::from_gvk(&GroupVersionKind::gvk("apps", "v1", "Deployment"))
}

/// List all DeploymentConfigs in a namespace, decoded to plain JSON values
/// ready for the conversion engine.
pub async fn list_deployment_configs(client: &Client, namespace: &str) -> Result<Vec<JsonValue>> {
    let api: Api<DynamicObject> =
        Api::namespaced_with(client.clone(), namespace, &deploymentconfig_resource());
    let list = api.list(&ListParams::default()).await?;

    tracing::debug!(
        namespace = %namespace,
        count = list.items.len(),
        "listed DeploymentConfigs"
    );

    list.items
        .into_iter()
        .map(|obj| Ok(serde_json::to_value(obj)?))
        .collect()
}

/// Apply a converted Deployment with Server-Side Apply. Idempotent: a
/// re-run updates the existing object instead of failing on conflict.
pub async fn apply_deployment(client: &Client, namespace: &str, deployment: &JsonValue) -> Result<()> {
    let name = deployment
        .pointer("/metadata/name")
        .and_then(JsonValue::as_str)
        .unwrap_or_default();

    let api: Api<DynamicObject> =
        Api::namespaced_with(client.clone(), namespace, &deployment_resource());
    api.patch(
        name,
        &PatchParams::apply(FIELD_MANAGER).force(),
        &Patch::Apply(deployment),
    )
    .await?;

    tracing::debug!(namespace = %namespace, name = %name, "applied Deployment");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploymentconfig_gvk() {
        let resource = deploymentconfig_resource();

        assert_eq!(resource.group, "apps.openshift.io");
        assert_eq!(resource.version, "v1");
        assert_eq!(resource.kind, "DeploymentConfig");
        assert_eq!(resource.plural, "deploymentconfigs");
    }

    #[test]
    fn test_deployment_gvk() {
        let resource = deployment_resource();

        assert_eq!(resource.api_version, "apps/v1");
        assert_eq!(resource.plural, "deployments");
    }
}
