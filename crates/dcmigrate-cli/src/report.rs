//! Markdown conversion report
//!
//! One table row per processed DeploymentConfig, with the structural flags
//! that need manual follow-up after migration (triggers, lifecycle hooks,
//! auto rollback, custom strategies).

use std::fs;
use std::path::Path;

use dcmigrate_convert::ConversionRecord;
use miette::{IntoDiagnostic, Result, WrapErr};

/// Render the report as Markdown
pub fn render(records: &[ConversionRecord]) -> String {
    let mut out = String::new();
    out.push_str("# DeploymentConfig to Deployment Conversion Report\n\n");
    out.push_str(
        "| Date | Namespace | DeploymentConfig | Triggers | Lifecycle Hooks | Auto Rollback | Custom Strategy |\n",
    );
    out.push_str("|------|-----------|------------------|----------|-----------------|---------------|-----------------|\n");

    for record in records {
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            record.timestamp.format("%Y-%m-%d"),
            record.namespace,
            record.name,
            yes_no(record.has_triggers),
            yes_no(record.has_lifecycle_hooks),
            yes_no(record.has_auto_rollback),
            yes_no(record.uses_custom_strategy),
        ));
    }

    out.push_str(&format!("\nTotal conversions: {}\n", records.len()));
    out
}

/// Write the report to disk
pub fn write(path: &Path, records: &[ConversionRecord]) -> Result<()> {
    fs::write(path, render(records))
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to write report to {}", path.display()))
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
