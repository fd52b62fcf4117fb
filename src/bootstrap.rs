//! The bootstrap pass.
//!
//! One linear walk over the package list: issue an installer call per
//! package, in order, never branching on the result, then print the
//! completion marker.
//!
//! # Failure Modes
//!
//! - Installer exits non-zero: recorded in the report, iteration continues
//! - Installer cannot be spawned: iteration stops, no marker, error returned
//! - Marker cannot be written: IO error returned

use std::io::Write;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::invocation::{InstallArgs, DEFAULT_INSTALLER};
use crate::packages::PackageList;
use crate::runner::{CommandRunner, Outcome};
use crate::variant::Variant;

/// Printed on its own line once every package has been attempted
pub const COMPLETION_MARKER: &str = "END";

/// Outcome of the installer call for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOutcome {
    pub package: String,
    pub outcome: Outcome,
}

/// Per-package results of one pass, in list order.
///
/// The report is informational: nothing in the pass reads it back, so the
/// marker and exit status are the same whether every install worked or none
/// did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub outcomes: Vec<PackageOutcome>,
}

impl BootstrapReport {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.outcome.success).count()
    }

    /// Packages whose installer call exited unsuccessfully
    pub fn failures(&self) -> impl Iterator<Item = &PackageOutcome> {
        self.outcomes.iter().filter(|o| !o.outcome.success)
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Bootstrap installer settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bootstrap {
    installer: String,
    variant: Variant,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new(DEFAULT_INSTALLER, Variant::default())
    }
}

impl Bootstrap {
    pub fn new(installer: impl Into<String>, variant: Variant) -> Self {
        Self {
            installer: installer.into(),
            variant,
        }
    }

    pub fn installer(&self) -> &str {
        &self.installer
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The invocations a pass over `packages` issues, in order
    pub fn plan(&self, packages: &PackageList) -> Vec<InstallArgs> {
        packages
            .iter()
            .map(|name| InstallArgs::new(&self.installer, name, self.variant))
            .collect()
    }

    /// Run one pass over `packages`, then write the completion marker to `out`.
    ///
    /// # Invariants
    ///
    /// - `runner` is called exactly once per entry, in list order
    /// - the marker is written exactly once, after the last call
    /// - an empty list writes only the marker
    pub fn run<R, W>(
        &self,
        packages: &PackageList,
        runner: &mut R,
        out: &mut W,
    ) -> Result<BootstrapReport>
    where
        R: CommandRunner + ?Sized,
        W: Write + ?Sized,
    {
        info!(
            "Bootstrapping {} package(s) with `{}` ({} variant)",
            packages.len(),
            self.installer,
            self.variant
        );

        let mut report = BootstrapReport::default();
        for args in self.plan(packages) {
            debug!("Installing {}", args.package);
            let outcome = runner.run(&args)?;
            if !outcome.success {
                warn!(
                    "Installer returned {:?} for {}, continuing",
                    outcome.exit_code, args.package
                );
            }
            report.outcomes.push(PackageOutcome {
                package: args.package,
                outcome,
            });
        }

        writeln!(out, "{}", COMPLETION_MARKER)?;
        out.flush()?;

        info!(
            "Bootstrap finished: {}/{} succeeded",
            report.succeeded(),
            report.len()
        );
        Ok(report)
    }
}
