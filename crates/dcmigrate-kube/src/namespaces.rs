//! Namespace validation

use k8s_openapi::api::core::v1::Namespace;
use kube::Client;
use kube::api::Api;

use crate::error::{KubeError, Result};

/// Namespaces the migration must never touch, beyond the configured list
const RESERVED_PREFIXES: [&str; 2] = ["openshift-", "kube-"];

/// Check whether a namespace is off-limits for conversion
pub fn is_reserved(namespace: &str, reserved: &[String]) -> bool {
    RESERVED_PREFIXES
        .iter()
        .any(|prefix| namespace.starts_with(prefix))
        || reserved.iter().any(|r| r == namespace)
}

/// Filter the requested namespaces down to the ones that exist, are
/// accessible, and are not reserved. Unusable namespaces are logged and
/// skipped; an empty result is an error.
pub async fn validate(
    client: &Client,
    requested: &[String],
    reserved: &[String],
) -> Result<Vec<String>> {
    let api: Api<Namespace> = Api::all(client.clone());
    let mut valid = Vec::new();

    for namespace in requested {
        if is_reserved(namespace, reserved) {
            tracing::warn!(namespace = %namespace, "skipping reserved namespace");
            continue;
        }

        match api.get_opt(namespace).await {
            Ok(Some(_)) => valid.push(namespace.clone()),
            Ok(None) => {
                tracing::warn!(namespace = %namespace, "namespace not found, skipping");
            }
            Err(e) => {
                tracing::warn!(namespace = %namespace, error = %e, "namespace not accessible, skipping");
            }
        }
    }

    if valid.is_empty() {
        return Err(KubeError::NoValidNamespaces);
    }
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_prefixes() {
        assert!(is_reserved("openshift-infra", &[]));
        assert!(is_reserved("kube-system", &[]));
        assert!(!is_reserved("shop", &[]));
    }

    #[test]
    fn test_reserved_list() {
        let reserved = vec!["default".to_string(), "openshift".to_string()];

        assert!(is_reserved("default", &reserved));
        assert!(is_reserved("openshift", &reserved));
        assert!(!is_reserved("default-app", &reserved));
    }
}
