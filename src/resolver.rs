use log::{debug, info};
use regex::Regex;
use crate::error::ResolveError;
use crate::lockfile::{guess_version, LockfileSet};
use crate::manager::ManagerName;
use crate::manifest::Manifest;
use crate::shell::CommandRunner;
use crate::version::ManagerVersion;

pub const DEFAULT_COREPACK_BIN: &str = "corepack";

/// Decides which version of a package manager a project needs and provisions it through corepack.
///
/// The manifest pin and the lockfiles are captured once at construction; every
/// [`setup`](PackageManagerResolver::setup) call recomputes its answer from them.
pub struct PackageManagerResolver<R: CommandRunner> {
    package_manager: Option<String>,
    lockfiles: LockfileSet,
    runner: R,
    corepack_bin: String,
}

impl<R: CommandRunner> PackageManagerResolver<R> {
    pub fn new(manifest: &Manifest, lockfiles: LockfileSet, runner: R) -> Self {
        PackageManagerResolver {
            package_manager: manifest.package_manager().map(str::to_string),
            lockfiles,
            runner,
            corepack_bin: DEFAULT_COREPACK_BIN.to_string(),
        }
    }

    /// Uses another corepack executable (or wrapper) for installs.
    pub fn with_corepack_bin(mut self, bin: &str) -> Self {
        self.corepack_bin = bin.to_string();
        self
    }

    /// Resolves the version of `name` the project expects, installing it when needed.
    ///
    /// Returns `Ok(None)` when there is nothing to do: `name` is host provided, the
    /// manifest pins a different manager, or there is neither a pin nor a usable lockfile.
    ///
    /// # Errors
    ///
    /// [`ResolveError::ToolVersionNotSupported`] when a version guessed from a lockfile
    /// falls below the manager's supported range. Install failures are passed through as
    /// [`ResolveError::Shell`].
    pub fn setup(&self, name: ManagerName) -> Result<Option<ManagerVersion>, ResolveError> {
        if name.is_host_provided() {
            debug!("{} is provided by the host, skipping", name);
            return Ok(None);
        }
        if let Some(declared) = &self.package_manager {
            if !declared.starts_with(&format!("{name}@")) {
                debug!("Project is pinned to '{}', skipping {}", declared, name);
                return Ok(None);
            }
        }

        if let Some(version) = self.requested_version(name) {
            let version = ManagerVersion::parse(&version)?;
            self.install(name, &version)?;
            return Ok(Some(version));
        }

        let guessed = match self.guessed_version(name) {
            Some(guessed) => ManagerVersion::parse(&guessed)?,
            None => {
                debug!("No {} version declared or guessed", name);
                return Ok(None);
            }
        };
        debug!("Guessed {} version {} from lockfile", name, guessed);

        if name == ManagerName::Pnpm {
            if let Some(range) = name.supported_range() {
                if !range.contains_major(guessed.major) {
                    return Err(ResolveError::ToolVersionNotSupported {
                        tool: name.label(),
                        version: guessed.to_string(),
                        supported: range.description.to_string(),
                    });
                }
            }
            self.install(name, &guessed)?;
        }
        Ok(Some(guessed))
    }

    fn install(&self, name: ManagerName, version: &ManagerVersion) -> Result<(), ResolveError> {
        info!("Installing {}@{}", name, version);
        let command = format!(
            "{} install {}@{} --global --cache-only",
            self.corepack_bin, name, version
        );
        let fingerprint = format!(
            "{} install <name>@<version> --global --cache-only",
            self.corepack_bin
        );
        self.runner.run(&command, &fingerprint)?;
        Ok(())
    }

    fn requested_version(&self, name: ManagerName) -> Option<String> {
        let declared = self.package_manager.as_deref()?;
        let re = Regex::new(&format!(
            r"{}@(?P<version>\d+\.\d+\.\d+)",
            regex::escape(name.as_str())
        ))
        .ok()?;
        re.captures(declared)
            .and_then(|caps| caps.name("version"))
            .map(|m| m.as_str().to_string())
    }

    fn guessed_version(&self, name: ManagerName) -> Option<String> {
        let lockfile = self.lockfiles.get(name)?;
        guess_version(name, lockfile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::DryRunShell;

    fn resolver(package_json: &str) -> PackageManagerResolver<DryRunShell> {
        let manifest = Manifest::parse(package_json).unwrap();
        PackageManagerResolver::new(&manifest, LockfileSet::new(), DryRunShell)
    }

    #[test]
    fn test_requested_version_ignores_hash_suffix() {
        let resolver = resolver(r#"{"packageManager": "yarn@3.2.1+sha224.abcdef"}"#);
        assert_eq!(resolver.requested_version(ManagerName::Yarn).as_deref(), Some("3.2.1"));
    }

    #[test]
    fn test_requested_version_needs_full_triple() {
        let resolver = resolver(r#"{"packageManager": "yarn@3"}"#);
        assert!(resolver.requested_version(ManagerName::Yarn).is_none());
        assert!(resolver.setup(ManagerName::Yarn).unwrap().is_none());
    }

    #[test]
    fn test_requested_version_without_pin() {
        let resolver = resolver(r#"{"name": "app"}"#);
        assert!(resolver.requested_version(ManagerName::Pnpm).is_none());
    }

    #[test]
    fn test_npm_is_never_resolved() {
        let resolver = resolver(r#"{"packageManager": "npm@9.8.1"}"#);
        assert!(resolver.setup(ManagerName::Npm).unwrap().is_none());
    }
}
