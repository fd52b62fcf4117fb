//! pipstrap library
//!
//! Runs an external package installer once per entry of a fixed dependency
//! list, in order, and prints `END` when the pass is over.

pub mod bootstrap;
pub mod cli;
pub mod error;
pub mod invocation;
pub mod packages;
pub mod runner;
pub mod variant;

// Re-export main types for convenience
pub use bootstrap::{Bootstrap, BootstrapReport, PackageOutcome, COMPLETION_MARKER};
pub use error::{BootstrapError, Result};
pub use invocation::{InstallArgs, DEFAULT_INSTALLER};
pub use packages::{PackageList, DEFAULT_PACKAGES};
pub use runner::{CommandRunner, DryRunRunner, Outcome, SystemRunner};
pub use variant::Variant;
