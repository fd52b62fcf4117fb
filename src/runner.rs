//! Installer execution
//!
//! `CommandRunner` is the seam between the bootstrap loop and the outside
//! world. `SystemRunner` spawns the real installer; `DryRunRunner` only logs.
//! Tests substitute their own recording runner.

use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::error::{BootstrapError, Result};
use crate::invocation::InstallArgs;

/// Result of one installer call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Exit code (None if terminated by signal or skipped).
    pub exit_code: Option<i32>,
    /// Whether the installer exited successfully (exit code 0).
    pub success: bool,
    /// Whether the call was skipped because of dry-run mode.
    pub dry_run: bool,
}

impl Outcome {
    pub fn exited(code: Option<i32>) -> Self {
        Self {
            exit_code: code,
            success: code == Some(0),
            dry_run: false,
        }
    }

    pub fn skipped() -> Self {
        Self {
            exit_code: None,
            success: true,
            dry_run: true,
        }
    }
}

/// Executes one installer invocation and reports how it ended.
///
/// # Contract
///
/// - Blocks until the invocation is finished.
/// - A non-zero exit is an `Ok(Outcome)` with `success == false`.
/// - `Err` is reserved for invocations that could not be started at all.
pub trait CommandRunner {
    fn run(&mut self, args: &InstallArgs) -> Result<Outcome>;
}

/// Spawns the installer as a child process.
///
/// stdout and stderr are inherited so installer output lands on the
/// terminal in the same stream as the completion marker.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, args: &InstallArgs) -> Result<Outcome> {
        let cli_args = args.to_cli_args();
        info!("Running: {} {:?}", args.program, cli_args);

        let status = Command::new(&args.program)
            .args(&cli_args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| BootstrapError::spawn(&args.program, e))?;

        debug!("{} exited with {:?}", args, status.code());
        Ok(Outcome::exited(status.code()))
    }
}

/// Logs what would be executed without spawning anything
#[derive(Debug, Default)]
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&mut self, args: &InstallArgs) -> Result<Outcome> {
        info!("[DRY RUN] Skipped: {}", args);
        Ok(Outcome::skipped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::Variant;

    #[test]
    fn test_outcome_exited() {
        assert!(Outcome::exited(Some(0)).success);
        assert!(!Outcome::exited(Some(1)).success);
        // Terminated by signal
        let killed = Outcome::exited(None);
        assert!(!killed.success);
        assert!(!killed.dry_run);
    }

    #[test]
    fn test_dry_run_runner_skips() {
        let mut runner = DryRunRunner;
        let outcome = runner
            .run(&InstallArgs::new("pip", "numpy", Variant::Install))
            .unwrap();
        assert_eq!(outcome, Outcome::skipped());
        assert!(outcome.success);
        assert!(outcome.dry_run);
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_reports_exit_status() {
        let mut runner = SystemRunner;
        // `true`/`false` ignore their arguments
        let ok = runner
            .run(&InstallArgs::new("true", "numpy", Variant::Install))
            .unwrap();
        assert_eq!(ok.exit_code, Some(0));
        assert!(ok.success);

        let failed = runner
            .run(&InstallArgs::new("false", "numpy", Variant::Upgrade))
            .unwrap();
        assert_eq!(failed.exit_code, Some(1));
        assert!(!failed.success);
    }

    #[test]
    fn test_system_runner_missing_program() {
        let mut runner = SystemRunner;
        let err = runner
            .run(&InstallArgs::new(
                "pipstrap-installer-that-does-not-exist",
                "numpy",
                Variant::Install,
            ))
            .unwrap_err();
        assert!(err.is_installer_missing());
    }
}
