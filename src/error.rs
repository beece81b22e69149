use thiserror::Error;
use crate::shell::ShellError;
use crate::version::VersionError;

/// Errors raised while resolving or provisioning a package manager.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A version guessed from a lockfile is outside the range the manager supports.
    #[error(
        "Detected {tool} version '{version}' for this project, but only {tool} {supported} is supported"
    )]
    ToolVersionNotSupported {
        tool: String,
        version: String,
        supported: String,
    },

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Shell(#[from] ShellError),
}
