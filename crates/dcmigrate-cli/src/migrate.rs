//! The migration run
//!
//! Orchestrates the whole pass: connect, preflight, validate namespaces,
//! then convert every DeploymentConfig in every valid namespace. Failures
//! are per-document: a DeploymentConfig that cannot be converted, saved, or
//! applied is reported and skipped, never aborting the batch.

use chrono::Local;
use console::style;
use dcmigrate_convert::{ConversionPolicy, ConversionRecord, Converter, Document};
use dcmigrate_kube::{client, namespaces, resources};
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::Cli;
use crate::output;
use crate::report;

pub async fn run(cli: &Cli) -> Result<()> {
    let client = client::connect(cli.kubeconfig.as_deref())
        .await
        .into_diagnostic()
        .wrap_err("failed to connect to the cluster")?;

    client::preflight(&client)
        .await
        .into_diagnostic()
        .wrap_err("preflight check failed")?;

    let valid = namespaces::validate(&client, &cli.projects, &cli.reserved_namespaces)
        .await
        .into_diagnostic()?;

    let converter = Converter::new(ConversionPolicy {
        preserve_labels: cli.preserve_labels,
        preserve_annotations: cli.preserve_annotations,
        ..Default::default()
    });

    let mut records: Vec<ConversionRecord> = Vec::new();
    let mut converted = 0usize;

    for namespace in &valid {
        println!();
        println!(
            "  {} {}",
            style("Project").bold(),
            style(namespace).cyan()
        );

        let docs = match resources::list_deployment_configs(&client, namespace).await {
            Ok(docs) => docs,
            Err(e) => {
                println!(
                    "  {} {}",
                    style("✗").red().bold(),
                    style(format!("failed to list DeploymentConfigs: {e}")).dim()
                );
                continue;
            }
        };

        if docs.is_empty() {
            println!("  {}", style("no DeploymentConfigs found").dim());
            continue;
        }

        for value in docs {
            let source = Document::new(value);
            let now = Local::now().fixed_offset();
            let (record, result) = converter.convert(&source, now);

            match result {
                Ok(deployment) => {
                    let path = match output::save_deployment(
                        &cli.output_dir,
                        namespace,
                        &record.name,
                        &deployment,
                    ) {
                        Ok(path) => path,
                        Err(e) => {
                            println!(
                                "  {} {} {}",
                                style("✗").red().bold(),
                                record.name,
                                style(format!("save failed: {e}")).dim()
                            );
                            records.push(record);
                            continue;
                        }
                    };
                    converted += 1;
                    println!(
                        "  {} {} {}",
                        style("✓").green().bold(),
                        record.name,
                        style(format!("→ {}", path.display())).dim()
                    );

                    if cli.apply {
                        match resources::apply_deployment(&client, namespace, deployment.inner())
                            .await
                        {
                            Ok(()) => {
                                println!("    {}", style("applied to cluster").dim());
                            }
                            Err(e) => {
                                println!(
                                    "    {} {}",
                                    style("apply failed:").red(),
                                    style(&e).dim()
                                );
                            }
                        }
                    }
                }
                Err(e) => {
                    println!(
                        "  {} {} {}",
                        style("✗").red().bold(),
                        record.name,
                        style(&e).dim()
                    );
                }
            }

            records.push(record);
        }
    }

    report::write(&cli.report, &records)?;
    print_summary(&records, converted, valid.len(), cli);

    Ok(())
}

fn print_summary(records: &[ConversionRecord], converted: usize, project_count: usize, cli: &Cli) {
    let flagged = records
        .iter()
        .filter(|r| {
            r.has_triggers || r.has_lifecycle_hooks || r.has_auto_rollback || r.uses_custom_strategy
        })
        .count();

    println!();
    println!("  {}", style("Summary").bold());
    println!("  {}", style("───────").dim());
    println!(
        "  {} project{}, {} DeploymentConfig{} processed, {} converted",
        project_count,
        if project_count == 1 { "" } else { "s" },
        records.len(),
        if records.len() == 1 { "" } else { "s" },
        converted,
    );
    if flagged > 0 {
        println!(
            "  {} {} need{} manual follow-up (see {})",
            style("⚠").yellow(),
            flagged,
            if flagged == 1 { "s" } else { "" },
            cli.report.display(),
        );
    }
    println!(
        "  {} {}",
        style("Report:").dim(),
        style(cli.report.display()).green()
    );
}
