//! Structural classification of source DeploymentConfigs
//!
//! These predicates feed the conversion report: they flag features that have
//! no Deployment equivalent and need manual follow-up (triggers, lifecycle
//! hooks, automatic rollback, custom strategies). They always inspect the
//! original source document, never the converted output, and treat any
//! missing intermediate path as `false`.

use crate::document::Document;

/// True iff `spec.triggers` is a non-empty sequence
pub fn has_triggers(doc: &Document) -> bool {
    doc.get_seq("spec.triggers").is_some_and(|t| !t.is_empty())
}

/// True iff any recreate-strategy lifecycle hook (`pre`, `mid`, `post`) is
/// present
pub fn has_lifecycle_hooks(doc: &Document) -> bool {
    ["pre", "mid", "post"].iter().any(|hook| {
        doc.get(&format!("spec.strategy.recreateParams.{hook}"))
            .is_some()
    })
}

/// True iff `spec.strategy.rollingParams.autoRollbackEnabled` is boolean true
pub fn has_auto_rollback(doc: &Document) -> bool {
    doc.get_bool("spec.strategy.rollingParams.autoRollbackEnabled")
        .unwrap_or(false)
}

/// True iff `spec.strategy.type` is exactly `Custom`
pub fn uses_custom_strategy(doc: &Document) -> bool {
    doc.get_str("spec.strategy.type") == Some("Custom")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_has_triggers() {
        let with = Document::new(json!({
            "spec": { "triggers": [{"type": "ConfigChange"}] }
        }));
        let empty = Document::new(json!({ "spec": { "triggers": [] } }));
        let absent = Document::new(json!({ "spec": {} }));

        assert!(has_triggers(&with));
        assert!(!has_triggers(&empty));
        assert!(!has_triggers(&absent));
    }

    #[test]
    fn test_has_lifecycle_hooks() {
        let with_mid = Document::new(json!({
            "spec": {
                "strategy": {
                    "recreateParams": {
                        "mid": { "execNewPod": { "command": ["migrate"] } }
                    }
                }
            }
        }));
        let without = Document::new(json!({
            "spec": { "strategy": { "recreateParams": {} } }
        }));

        assert!(has_lifecycle_hooks(&with_mid));
        assert!(!has_lifecycle_hooks(&without));
        assert!(!has_lifecycle_hooks(&Document::new(json!({}))));
    }

    #[test]
    fn test_has_auto_rollback() {
        let enabled = Document::new(json!({
            "spec": { "strategy": { "rollingParams": { "autoRollbackEnabled": true } } }
        }));
        let disabled = Document::new(json!({
            "spec": { "strategy": { "rollingParams": { "autoRollbackEnabled": false } } }
        }));
        // Present but non-boolean counts as false
        let wrong_type = Document::new(json!({
            "spec": { "strategy": { "rollingParams": { "autoRollbackEnabled": "yes" } } }
        }));

        assert!(has_auto_rollback(&enabled));
        assert!(!has_auto_rollback(&disabled));
        assert!(!has_auto_rollback(&wrong_type));
    }

    #[test]
    fn test_uses_custom_strategy() {
        let custom = Document::new(json!({
            "spec": { "strategy": { "type": "Custom" } }
        }));
        let rolling = Document::new(json!({
            "spec": { "strategy": { "type": "Rolling" } }
        }));

        assert!(uses_custom_strategy(&custom));
        assert!(!uses_custom_strategy(&rolling));
        assert!(!uses_custom_strategy(&Document::new(json!({}))));
    }
}
