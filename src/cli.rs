use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::invocation::DEFAULT_INSTALLER;
use crate::variant::Variant;

/// pipstrap - install a project's Python dependencies one by one
///
/// With no arguments, runs `pip install <package>` for each built-in package
/// and prints END when done.
#[derive(Parser, Debug)]
#[command(name = "pipstrap")]
#[command(about = "Install a fixed list of Python dependencies, then print END")]
#[command(version)]
pub struct Cli {
    /// Invocation variant: `install` or `upgrade` (adds --upgrade to every call)
    #[arg(long, default_value_t = Variant::Install, conflicts_with = "upgrade")]
    pub variant: Variant,

    /// Shorthand for `--variant upgrade`
    #[arg(short = 'U', long)]
    pub upgrade: bool,

    /// Package installer program to invoke (e.g. pip3)
    #[arg(long, default_value = DEFAULT_INSTALLER)]
    pub installer: String,

    /// JSON manifest replacing the built-in package list
    ///
    /// Either `["numpy", "pandas"]` or `{"packages": ["numpy", "pandas"]}`.
    #[arg(short, long)]
    pub manifest: Option<PathBuf>,

    /// Dry-run mode: log each installer call without executing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Variant after folding in the `-U` shorthand
    pub fn effective_variant(&self) -> Variant {
        if self.upgrade {
            Variant::Upgrade
        } else {
            self.variant
        }
    }

    /// Default tracing filter directive for the requested verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
