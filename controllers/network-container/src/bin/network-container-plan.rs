//! Network Container Planner
//!
//! Reads a network container spec (JSON, same field names the host
//! framework uses) and prints how a create would be carried out, without
//! talking to the grid.

use anyhow::{Context, Result};
use clap::Parser;
use network_container::{CreatePlan, ContainerSpec, ReconcilerConfig, plan_create};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "network-container-plan")]
#[command(about = "Show how a network container would be created, without contacting the grid", long_about = None)]
struct Args {
    /// Spec file in JSON; read from stdin when omitted or "-"
    spec: Option<PathBuf>,
}

fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read network container spec from {}", path.display())),
        _ => {
            let mut document = String::new();
            std::io::stdin()
                .read_to_string(&mut document)
                .context("failed to read network container spec from stdin")?;
            Ok(document)
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the plan
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = ReconcilerConfig::from_env();

    info!("Configuration:");
    info!("  CMP Type: {}", config.cmp_type);
    info!(
        "  Spec: {}",
        args.spec.as_deref().map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
    );

    let document = read_document(args.spec.as_deref())?;
    let spec: ContainerSpec = serde_json::from_str(&document).context("invalid network container spec")?;
    debug!("Parsed spec: {:?}", spec);

    let plan = plan_create(&spec)?;
    match &plan {
        CreatePlan::AllocateFromParent { network_view, parent_cidr, prefix_len, .. } => {
            info!("Would allocate next /{} from {} in network view {}", prefix_len, parent_cidr, network_view);
        }
        CreatePlan::Explicit { network_view, cidr, .. } => {
            info!("Would create {} in network view {}", cidr, network_view);
        }
    }

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
