use std::path::Path;
use serde_json::{Map, Value};
use anyhow::{bail, Context, Result};

pub const MANIFEST_FILE: &str = "package.json";

/// Represents the contents of a project's `package.json`.
///
/// Only read access is offered; the resolver never writes the manifest back.
#[derive(Debug, Clone, Default)]
pub struct Manifest {
    fields: Map<String, Value>,
}

impl Manifest {
    /// Parses a manifest from its JSON text.
    ///
    /// # Errors
    /// Returns an error if the text is not JSON or its top level is not an object.
    pub fn parse(content: &str) -> Result<Manifest> {
        let value: Value = serde_json::from_str(content)
            .context("Could not parse package.json")?;
        match value {
            Value::Object(fields) => Ok(Manifest { fields }),
            _ => bail!("package.json must contain a JSON object"),
        }
    }
    /// Loads a manifest from a file path.
    ///
    /// # Errors
    /// Returns an error if the file can't be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Manifest> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read {}", path.display()))?;
        Manifest::parse(&content)
    }
    /// Looks up a top-level field, `None` when the manifest omits it.
    pub fn fetch(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
    /// The `packageManager` pin, e.g. `yarn@3.2.1`.
    ///
    /// A non-string value is treated as if the field was absent.
    pub fn package_manager(&self) -> Option<&str> {
        self.fetch("packageManager").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_package_manager_present() {
        let manifest = Manifest::parse(r#"{"name": "app", "packageManager": "yarn@3.2.1"}"#).unwrap();
        assert_eq!(manifest.package_manager(), Some("yarn@3.2.1"));
        assert_eq!(manifest.fetch("name").and_then(Value::as_str), Some("app"));
    }

    #[test]
    fn test_package_manager_absent_or_not_a_string() {
        let manifest = Manifest::parse(r#"{"name": "app"}"#).unwrap();
        assert!(manifest.package_manager().is_none());
        let manifest = Manifest::parse(r#"{"packageManager": 3}"#).unwrap();
        assert!(manifest.package_manager().is_none());
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(Manifest::parse("[]").is_err());
        assert!(Manifest::parse("{ nope").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, r#"{"packageManager": "pnpm@8.6.0"}"#).unwrap();
        let manifest = Manifest::load(&path).unwrap();
        assert_eq!(manifest.package_manager(), Some("pnpm@8.6.0"));
        assert!(Manifest::load(dir.path().join("missing.json")).is_err());
    }
}
