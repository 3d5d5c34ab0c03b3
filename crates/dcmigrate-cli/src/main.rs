//! dcmigrate - convert OpenShift DeploymentConfigs to Kubernetes Deployments

use clap::Parser;
use miette::Result;
use std::path::PathBuf;

mod migrate;
mod output;
mod report;

#[derive(Parser)]
#[command(name = "dcmigrate")]
#[command(version)]
#[command(about = "Convert OpenShift DeploymentConfigs to Kubernetes Deployments", long_about = None)]
pub struct Cli {
    /// OpenShift projects to scan and convert
    #[arg(long = "projects", required = true, value_delimiter = ',')]
    pub projects: Vec<String>,

    /// Path to the kubeconfig file (default: standard discovery chain)
    #[arg(long)]
    pub kubeconfig: Option<PathBuf>,

    /// Directory for the converted Deployment manifests
    #[arg(long, default_value = "./converted-deployments")]
    pub output_dir: PathBuf,

    /// Apply the converted Deployments to the cluster
    #[arg(long)]
    pub apply: bool,

    /// Preserve existing labels on the converted Deployments
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub preserve_labels: bool,

    /// Preserve existing annotations on the converted Deployments
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub preserve_annotations: bool,

    /// Namespaces to skip, in addition to openshift-* and kube-*
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = ["default".to_string(), "openshift".to_string(), "openshift-infra".to_string()]
    )]
    pub reserved_namespaces: Vec<String>,

    /// Where to write the Markdown conversion report
    #[arg(long, default_value = "conversion-report.md")]
    pub report: PathBuf,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);
    migrate::run(&cli).await
}
