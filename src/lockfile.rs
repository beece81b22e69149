use std::collections::HashMap;
use std::path::Path;
use anyhow::{Context, Result};
use regex::Regex;
use crate::manager::ManagerName;

/// A lockfile found at the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockfile {
    pub name: String,
    pub content: String,
}

impl Lockfile {
    pub fn new(name: &str, content: &str) -> Lockfile {
        Lockfile {
            name: name.to_string(),
            content: content.to_string(),
        }
    }
}

/// The lockfiles present in a project, keyed by the manager that writes them.
#[derive(Debug, Clone, Default)]
pub struct LockfileSet {
    files: HashMap<ManagerName, Lockfile>,
}

impl LockfileSet {
    pub fn new() -> LockfileSet {
        LockfileSet::default()
    }
    /// Reads `yarn.lock` and `pnpm-lock.yaml` from `dir`, skipping the ones that don't exist.
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<LockfileSet> {
        let mut set = LockfileSet::new();
        for name in [ManagerName::Yarn, ManagerName::Pnpm] {
            let path = dir.as_ref().join(name.lockfile_name());
            if !path.exists() {
                continue;
            }
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Could not read {}", path.display()))?;
            set.insert(name, Lockfile::new(name.lockfile_name(), &content));
        }
        Ok(set)
    }

    pub fn insert(&mut self, name: ManagerName, lockfile: Lockfile) {
        self.files.insert(name, lockfile);
    }

    pub fn get(&self, name: ManagerName) -> Option<&Lockfile> {
        self.files.get(&name)
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Guesses the major version of `name` that produced `lockfile`.
pub fn guess_version(name: ManagerName, lockfile: &Lockfile) -> Option<String> {
    match name {
        ManagerName::Yarn => yarn_version_numeric(lockfile),
        ManagerName::Pnpm => pnpm_version_numeric(lockfile),
        ManagerName::Npm => None,
    }
}

/// Yarn Berry lockfiles carry a top-level `__metadata` key, classic ones don't.
pub fn yarn_version_numeric(lockfile: &Lockfile) -> Option<String> {
    if lockfile.content.trim().is_empty() {
        return None;
    }
    let berry = Regex::new(r"(?m)^__metadata:").ok()?;
    if berry.is_match(&lockfile.content) {
        Some("3".to_string())
    } else {
        Some("1".to_string())
    }
}

/// Maps the `lockfileVersion` of a `pnpm-lock.yaml` to the pnpm major that writes it.
pub fn pnpm_version_numeric(lockfile: &Lockfile) -> Option<String> {
    let re = Regex::new(r#"(?m)^lockfileVersion: ['"]?(?P<major>\d+)(?:\.(?P<minor>\d+))?"#).ok()?;
    let caps = re.captures(&lockfile.content)?;
    let major: u64 = caps.name("major")?.as_str().parse().ok()?;
    let minor: u64 = match caps.name("minor") {
        Some(minor) => minor.as_str().parse().ok()?,
        None => 0,
    };

    let version = if major >= 6 {
        "8"
    } else if (major, minor) >= (5, 4) {
        "7"
    } else {
        "6"
    };
    Some(version.to_string())
}
