//! Client construction and preflight checks

use std::path::Path;

use k8s_openapi::api::authorization::v1::{SelfSubjectRulesReview, SelfSubjectRulesReviewSpec};
use k8s_openapi::api::core::v1::Namespace;
use kube::api::{Api, ListParams, PostParams};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config};

use crate::error::{KubeError, Result};

/// Build a client from an explicit kubeconfig path, or fall back to the
/// standard discovery chain (KUBECONFIG, ~/.kube/config, in-cluster).
pub async fn connect(kubeconfig: Option<&Path>) -> Result<Client> {
    let config = match kubeconfig {
        Some(path) => {
            let kubeconfig = Kubeconfig::read_from(path)?;
            Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default()).await?
        }
        None => Config::infer().await?,
    };

    Ok(Client::try_from(config)?)
}

/// Verify the cluster is reachable and the caller holds enough permissions
/// before any conversion work starts.
///
/// Three probes, mirroring what the migration later needs: list namespaces,
/// read the API server version, and create a `SelfSubjectRulesReview`.
pub async fn preflight(client: &Client) -> Result<()> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    namespaces
        .list(&ListParams::default().limit(1))
        .await
        .map_err(|e| KubeError::Preflight {
            message: format!("failed to list namespaces: {e}"),
        })?;

    client
        .apiserver_version()
        .await
        .map_err(|e| KubeError::Preflight {
            message: format!("failed to read API server version: {e}"),
        })?;

    let review = SelfSubjectRulesReview {
        spec: SelfSubjectRulesReviewSpec {
            namespace: Some("default".to_string()),
        },
        ..Default::default()
    };
    let reviews: Api<SelfSubjectRulesReview> = Api::all(client.clone());
    reviews
        .create(&PostParams::default(), &review)
        .await
        .map_err(|e| KubeError::Preflight {
            message: format!("failed to check permissions: {e}"),
        })?;

    tracing::debug!("preflight check passed");
    Ok(())
}
