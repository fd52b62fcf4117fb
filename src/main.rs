//! pipstrap - main entry point

use anyhow::{Context, Result};
use std::io::stdout;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use pipstrap::cli::Cli;
use pipstrap::{Bootstrap, CommandRunner, DryRunRunner, PackageList, SystemRunner};

/// Initialize tracing on stderr; stdout belongs to the installer and the marker
fn init_logger(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_logger(cli.log_level());
    debug!("CLI arguments parsed: {:?}", cli);

    let packages = match &cli.manifest {
        Some(path) => {
            info!("Loading package manifest: {}", path.display());
            PackageList::from_manifest(path)?
        }
        None => PackageList::defaults(),
    };

    let bootstrap = Bootstrap::new(&cli.installer, cli.effective_variant());
    let mut runner: Box<dyn CommandRunner> = if cli.dry_run {
        info!("Dry-run mode: no installer will be executed");
        Box::new(DryRunRunner)
    } else {
        Box::new(SystemRunner)
    };

    let report = bootstrap
        .run(&packages, runner.as_mut(), &mut stdout().lock())
        .with_context(|| format!("bootstrap with `{}` did not complete", cli.installer))?;

    if !report.all_succeeded() {
        let failed: Vec<&str> = report.failures().map(|o| o.package.as_str()).collect();
        warn!("{} package(s) failed to install: {}", failed.len(), failed.join(", "));
    }

    Ok(())
}
