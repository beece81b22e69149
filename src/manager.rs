use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use anyhow::{bail, Result};

/// The package managers a JavaScript project can be pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManagerName {
    Npm,
    Yarn,
    Pnpm,
}

/// Major versions a manager is known to work with.
///
/// Only the lower bound is enforced, `description` is what gets reported back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportedRange {
    pub min_major: u64,
    pub description: &'static str,
}

impl SupportedRange {
    pub fn contains_major(&self, major: u64) -> bool {
        major >= self.min_major
    }
}

impl ManagerName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManagerName::Npm => "npm",
            ManagerName::Yarn => "yarn",
            ManagerName::Pnpm => "pnpm",
        }
    }

    /// Label used in user-facing errors, e.g. `PNPM`.
    pub fn label(&self) -> String {
        self.as_str().to_uppercase()
    }

    /// The lockfile this manager writes at the project root.
    pub fn lockfile_name(&self) -> &'static str {
        match self {
            ManagerName::Npm => "package-lock.json",
            ManagerName::Yarn => "yarn.lock",
            ManagerName::Pnpm => "pnpm-lock.yaml",
        }
    }

    pub fn supported_range(&self) -> Option<SupportedRange> {
        match self {
            ManagerName::Pnpm => Some(SupportedRange {
                min_major: 7,
                description: "7.*, 8.*",
            }),
            ManagerName::Npm | ManagerName::Yarn => None,
        }
    }

    /// npm ships with node, corepack never provisions it here.
    pub fn is_host_provided(&self) -> bool {
        matches!(self, ManagerName::Npm)
    }
}

impl fmt::Display for ManagerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ManagerName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(ManagerName::Npm),
            "yarn" => Ok(ManagerName::Yarn),
            "pnpm" => Ok(ManagerName::Pnpm),
            other => bail!("Unknown package manager: {}", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_manager_name() {
        assert_eq!("yarn".parse::<ManagerName>().unwrap(), ManagerName::Yarn);
        assert_eq!(" PNPM ".parse::<ManagerName>().unwrap(), ManagerName::Pnpm);
        assert!("bun".parse::<ManagerName>().is_err());
    }

    #[test]
    fn test_only_pnpm_has_a_range() {
        let range = ManagerName::Pnpm.supported_range().unwrap();
        assert_eq!(range.description, "7.*, 8.*");
        assert!(!range.contains_major(6));
        assert!(range.contains_major(7));
        assert!(range.contains_major(8));
        assert!(ManagerName::Yarn.supported_range().is_none());
        assert!(ManagerName::Npm.supported_range().is_none());
    }

    #[test]
    fn test_label_and_lockfile() {
        assert_eq!(ManagerName::Pnpm.label(), "PNPM");
        assert_eq!(ManagerName::Yarn.lockfile_name(), "yarn.lock");
        assert_eq!(ManagerName::Pnpm.to_string(), "pnpm");
    }
}
