//! YAML persistence for converted Deployments

use std::fs;
use std::path::{Path, PathBuf};

use dcmigrate_convert::Document;
use miette::{IntoDiagnostic, Result, WrapErr};

/// Write a converted Deployment to `<output_dir>/<namespace>/<name>.yaml`.
///
/// The file is written to a temporary sibling first and renamed into place,
/// so a crash mid-write never leaves a truncated manifest behind.
pub fn save_deployment(
    output_dir: &Path,
    namespace: &str,
    name: &str,
    deployment: &Document,
) -> Result<PathBuf> {
    let yaml = deployment.to_yaml().into_diagnostic()?;

    let dir = output_dir.join(namespace);
    fs::create_dir_all(&dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to create output directory {}", dir.display()))?;

    let path = dir.join(format!("{name}.yaml"));
    let tmp = dir.join(format!(".{name}.yaml.tmp"));
    fs::write(&tmp, &yaml)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write {}", tmp.display()))?;
    fs::rename(&tmp, &path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to move manifest into place at {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_deployment_writes_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let deployment = Document::new(json!({
            "apiVersion": "apps/v1",
            "kind": "Deployment",
            "metadata": { "name": "web", "namespace": "shop" }
        }));

        let path = save_deployment(dir.path(), "shop", "web", &deployment).unwrap();

        assert_eq!(path, dir.path().join("shop").join("web.yaml"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("kind: Deployment"));
        // No temp file left behind
        assert!(!dir.path().join("shop").join(".web.yaml.tmp").exists());
    }

    #[test]
    fn test_save_failure_is_an_error_value() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the namespace directory should go makes the save fail
        fs::write(dir.path().join("shop"), "not a directory").unwrap();
        let deployment = Document::new(json!({ "kind": "Deployment" }));

        let result = save_deployment(dir.path(), "shop", "web", &deployment);

        // The caller gets an error to log-and-continue on; nothing panics
        assert!(result.is_err());
    }

    #[test]
    fn test_save_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let first = Document::new(json!({ "spec": { "replicas": 1 } }));
        let second = Document::new(json!({ "spec": { "replicas": 2 } }));

        save_deployment(dir.path(), "shop", "web", &first).unwrap();
        let path = save_deployment(dir.path(), "shop", "web", &second).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("replicas: 2"));
    }
}
