//! The package request list.
//!
//! An ordered sequence of package identifiers handed to the installer one at
//! a time. Names are passed through untouched: no validation, no
//! de-duplication, no version constraints.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{manifest_error, Result};

/// Packages installed when no manifest is given.
///
/// Numeric and scientific libraries, an HTTP client, the Google API client
/// and its OAuth helper used by the analytics page-path reporter.
pub const DEFAULT_PACKAGES: &[&str] = &[
    "numpy",
    "scipy",
    "pandas",
    "requests",
    "google-api-python-client",
    "oauth2client",
];

/// Ordered, immutable list of package identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageList {
    names: Vec<String>,
}

/// Accepted manifest shapes: `["numpy"]` or `{"packages": ["numpy"]}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Manifest {
    Bare(Vec<String>),
    Table { packages: Vec<String> },
}

impl PackageList {
    /// Wrap `names` in order, keeping duplicates and malformed entries
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in bootstrap list
    pub fn defaults() -> Self {
        Self::new(DEFAULT_PACKAGES.iter().copied())
    }

    /// Load a replacement list from a JSON manifest on disk.
    ///
    /// # Errors
    ///
    /// - File cannot be read: `BootstrapError::Manifest` naming the path
    /// - Content is neither a string array nor `{"packages": [...]}`
    pub fn from_manifest(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| manifest_error(path, e))?;
        let list = Self::from_json(&content).map_err(|e| manifest_error(path, e))?;
        debug!(
            "Loaded {} package(s) from manifest {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    /// Parse a manifest body
    pub fn from_json(content: &str) -> Result<Self> {
        let manifest: Manifest = serde_json::from_str(content)?;
        let names = match manifest {
            Manifest::Bare(names) => names,
            Manifest::Table { packages } => packages,
        };
        Ok(Self { names })
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for PackageList {
    fn default() -> Self {
        Self::defaults()
    }
}

impl<'a> IntoIterator for &'a PackageList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BootstrapError;

    #[test]
    fn test_defaults_order() {
        let list = PackageList::defaults();
        assert_eq!(list.len(), DEFAULT_PACKAGES.len());
        let names: Vec<&str> = list.iter().collect();
        assert_eq!(names, DEFAULT_PACKAGES);
        assert_eq!(PackageList::default(), list);
    }

    #[test]
    fn test_new_keeps_duplicates_and_garbage() {
        let list = PackageList::new(["numpy", "numpy", "", "not a package!"]);
        assert_eq!(list.len(), 4);
        assert_eq!(list.names()[1], "numpy");
        assert_eq!(list.names()[2], "");
        assert_eq!(list.names()[3], "not a package!");
    }

    #[test]
    fn test_empty_list() {
        let list = PackageList::new(Vec::<String>::new());
        assert!(list.is_empty());
        assert_eq!(list.iter().count(), 0);
    }

    #[test]
    fn test_from_json_bare_array() {
        let list = PackageList::from_json(r#"["numpy", "pandas"]"#).unwrap();
        assert_eq!(list.names(), &["numpy".to_string(), "pandas".to_string()]);
    }

    #[test]
    fn test_from_json_table() {
        let list = PackageList::from_json(r#"{"packages": ["requests"]}"#).unwrap();
        assert_eq!(list.names(), &["requests".to_string()]);
    }

    #[test]
    fn test_from_json_rejects_other_shapes() {
        let err = PackageList::from_json(r#"{"deps": ["requests"]}"#).unwrap_err();
        assert!(matches!(err, BootstrapError::Json(_)));

        assert!(PackageList::from_json(r#"[1, 2]"#).is_err());
        assert!(PackageList::from_json("").is_err());
    }

    #[test]
    fn test_from_manifest_missing_file() {
        let err = PackageList::from_manifest(Path::new("/nonexistent/pipstrap.json")).unwrap_err();
        assert!(matches!(err, BootstrapError::Manifest(_)));
        assert!(err.to_string().contains("/nonexistent/pipstrap.json"));
    }
}
