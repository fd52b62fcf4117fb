//! Typed installer invocations.
//!
//! Each package becomes one `InstallArgs`, which is the single source of
//! truth for the argument vector handed to the installer. Callers never
//! assemble raw string vectors themselves.

use std::fmt;

use crate::variant::Variant;

/// Installer used when none is given on the command line
pub const DEFAULT_INSTALLER: &str = "pip";

/// Installer subcommand that precedes flags and the package name
pub const INSTALL_SUBCOMMAND: &str = "install";

/// One installer call for one package.
///
/// # Contract
///
/// `to_cli_args()` yields exactly `install [--upgrade] <package>`; the package
/// name is always the last and only positional argument after the
/// subcommand, passed through byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallArgs {
    pub program: String,
    pub package: String,
    pub variant: Variant,
}

impl InstallArgs {
    pub fn new(program: impl Into<String>, package: impl Into<String>, variant: Variant) -> Self {
        Self {
            program: program.into(),
            package: package.into(),
            variant,
        }
    }

    /// Arguments passed to `program`, in order
    pub fn to_cli_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(2 + self.variant.flags().len());
        args.push(INSTALL_SUBCOMMAND.to_string());
        args.extend(self.variant.flags().iter().map(|f| f.to_string()));
        args.push(self.package.clone());
        args
    }
}

impl fmt::Display for InstallArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.program, self.to_cli_args().join(" "))
    }
}
