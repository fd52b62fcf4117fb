//! Installer variants
//!
//! The bootstrap ships in two flavours that differ only in whether every
//! installer call forces the latest release of the package.

use strum::{Display, EnumString};

/// Flag passed to the installer by the upgrade variant
pub const UPGRADE_FLAG: &str = "--upgrade";

/// Which flavour of installer invocation to issue for each package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Variant {
    /// `<installer> install <package>`
    #[default]
    Install,
    /// `<installer> install --upgrade <package>`
    Upgrade,
}

impl Variant {
    /// Extra flags placed between the subcommand and the package name.
    ///
    /// | Variant   | Flags           |
    /// |-----------|-----------------|
    /// | `Install` | none            |
    /// | `Upgrade` | `--upgrade`     |
    pub fn flags(&self) -> &'static [&'static str] {
        match self {
            Variant::Install => &[],
            Variant::Upgrade => &[UPGRADE_FLAG],
        }
    }

    pub fn is_upgrade(&self) -> bool {
        matches!(self, Variant::Upgrade)
    }
}
