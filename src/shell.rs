use std::process::Command;
use log::{debug, info};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Could not start `{fingerprint}`: {source}")]
    Spawn {
        fingerprint: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{fingerprint}` failed with {}: {stderr}", exit_label(.code))]
    Failed {
        fingerprint: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code".to_string(),
    }
}

/// Runs a shell command and returns its stdout.
///
/// `fingerprint` is a redacted form of `command` (placeholders instead of
/// concrete names/versions) that is safe to log and to group failures by.
pub trait CommandRunner {
    fn run(&self, command: &str, fingerprint: &str) -> Result<String, ShellError>;
}

impl<T: CommandRunner + ?Sized> CommandRunner for &T {
    fn run(&self, command: &str, fingerprint: &str) -> Result<String, ShellError> {
        (**self).run(command, fingerprint)
    }
}

/// Runs commands through the platform shell.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl CommandRunner for SystemShell {
    fn run(&self, command: &str, fingerprint: &str) -> Result<String, ShellError> {
        info!("Running `{}`", fingerprint);
        debug!("Command: {}", command);

        #[cfg(windows)]
        let output = Command::new("cmd").args(["/C", command]).output();
        #[cfg(not(windows))]
        let output = Command::new("sh").args(["-c", command]).output();

        let output = output.map_err(|source| ShellError::Spawn {
            fingerprint: fingerprint.to_string(),
            source,
        })?;
        if !output.status.success() {
            return Err(ShellError::Failed {
                fingerprint: fingerprint.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

/// Logs commands instead of running them.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunShell;

impl CommandRunner for DryRunShell {
    fn run(&self, command: &str, _fingerprint: &str) -> Result<String, ShellError> {
        info!("Dry run, skipping `{}`", command);
        Ok(String::new())
    }
}
