//! Error types for dcmigrate-kube

use thiserror::Error;

/// Result type for cluster operations
pub type Result<T> = std::result::Result<T, KubeError>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KubeError {
    /// Kubernetes API error
    #[error("Kubernetes API error: {0}")]
    Api(#[from] kube::Error),

    /// Kubeconfig could not be read or parsed
    #[error("kubeconfig error: {0}")]
    Kubeconfig(#[from] kube::config::KubeconfigError),

    /// No usable client configuration could be inferred
    #[error("cluster configuration error: {0}")]
    InferConfig(#[from] kube::config::InferConfigError),

    /// Preflight connectivity or permission check failed
    #[error("preflight check failed: {message}")]
    Preflight { message: String },

    /// None of the requested namespaces are usable
    #[error("no valid namespaces found among the requested namespaces")]
    NoValidNamespaces,

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
