use std::path::PathBuf;
use clap::{Parser, Subcommand};
use pmprovision::ManagerName;

#[derive(Debug, Parser, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct CLI {
    #[command(subcommand)]
    pub(crate) command: Command,
    /// Project directory containing `package.json`. Defaults to the current directory
    #[clap(long, global = true)]
    pub(crate) dir: Option<PathBuf>,
    /// Job id for log lines. `cli` omits the job prefix
    #[clap(long, global = true)]
    pub(crate) job_id: Option<String>,
    /// Log level (error, warn, info, debug, trace)
    #[clap(long, global = true)]
    pub(crate) log_level: Option<String>,
}

#[derive(Debug, Subcommand, Clone, PartialEq)]
pub enum Command {
    /// Resolves and installs the package managers through corepack. Defaults to the configured managers
    Setup {
        names: Vec<ManagerName>,
    },
    /// Resolves like `setup` but only prints what would be installed
    Detect {
        names: Vec<ManagerName>,
    },
    /// Writes a default `pmprovision.toml` into the project directory
    Init,
}
