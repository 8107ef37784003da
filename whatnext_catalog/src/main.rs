// CLI entry point: "what moves can I do from this pose?"
//
// With no arguments, prints the moves available from open position, closed
// position, and half open left to right, using the embedded salsa catalog.
//
// Usage:
//   whatnext [OPTIONS]
//     --data <PATH>        Load a catalog JSON file instead of the embedded one
//     --pose <KEY>         Query this pose key (repeatable)
//     --routines           Also print every routine
//     --log-level <LEVEL>  Log filter when RUST_LOG is unset (default: warn)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use whatnext_catalog::demo::{DEMO_POSES, render_pose_reports, render_routine};
use whatnext_catalog::{DanceCatalog, default_catalog};

#[derive(Parser, Debug)]
#[command(
    name = "whatnext",
    about = "List the dance moves that can start from a pose"
)]
struct Args {
    /// Catalog JSON file to load instead of the embedded salsa catalog
    #[arg(long)]
    data: Option<PathBuf>,

    /// Pose key to query; may be given more than once
    #[arg(long = "pose", value_name = "KEY")]
    poses: Vec<String>,

    /// Also print every routine in the catalog
    #[arg(long)]
    routines: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let catalog = match &args.data {
        Some(path) => load_catalog(path)?,
        None => default_catalog(),
    };

    let keys: Vec<&str> = if args.poses.is_empty() {
        DEMO_POSES.to_vec()
    } else {
        args.poses.iter().map(String::as_str).collect()
    };
    print!("{}", render_pose_reports(&catalog, keys)?);

    if args.routines {
        for (key, _) in catalog.routines() {
            print!("{}", render_routine(&catalog, key)?);
        }
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<DanceCatalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog {}", path.display()))?;
    let catalog = DanceCatalog::from_json(&json)
        .with_context(|| format!("failed to load catalog {}", path.display()))?;
    info!(path = %path.display(), "loaded catalog");
    Ok(catalog)
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
