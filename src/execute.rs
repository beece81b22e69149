use std::path::{Path, PathBuf};
use anyhow::{bail, Result};
use colored::Colorize;
use pmprovision::config::{Config, CONFIG_FILE};
use pmprovision::logger;
use pmprovision::{
    CommandRunner, DryRunShell, LockfileSet, ManagerName, Manifest, PackageManagerResolver,
    ResolveError, SystemShell, MANIFEST_FILE,
};
use crate::cli::{Command, CLI};

pub fn execute(cli: CLI) -> Result<()> {
    let dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    if cli.command == Command::Init {
        return execute_init(&dir);
    }

    let mut config = Config::discover(&dir)?;
    if let Some(job_id) = cli.job_id {
        config.job_id = Some(job_id);
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    let level = logger::parse_level(&config.log_level)?;
    logger::init(config.job_id.as_deref(), level)?;

    match cli.command {
        Command::Setup { names } => {
            execute_setup(&dir, &config, names)
        }
        Command::Detect { names } => {
            execute_detect(&dir, &config, names)
        }
        Command::Init => {
            Ok(())
        }
    }
}

fn load_resolver<R: CommandRunner>(
    dir: &Path,
    config: &Config,
    runner: R
) -> Result<PackageManagerResolver<R>> {
    let manifest_path = dir.join(MANIFEST_FILE);
    if !manifest_path.exists() {
        bail!("{} not found in {}", MANIFEST_FILE, dir.display());
    }
    let manifest = Manifest::load(&manifest_path)?;
    let lockfiles = LockfileSet::discover(dir)?;
    Ok(PackageManagerResolver::new(&manifest, lockfiles, runner)
        .with_corepack_bin(&config.corepack_bin))
}

fn managers_or_default(names: Vec<ManagerName>, config: &Config) -> Vec<ManagerName> {
    if names.is_empty() {
        config.managers.clone()
    } else {
        names
    }
}

pub fn execute_setup(dir: &Path, config: &Config, names: Vec<ManagerName>) -> Result<()> {
    let resolver = load_resolver(dir, config, SystemShell)?;
    for name in managers_or_default(names, config) {
        match resolver.setup(name)? {
            Some(version) => {
                println!("{}: {}", name.to_string().bold(), version.to_string().green());
            }
            None => {
                println!("{}: nothing to do", name.to_string().bold());
            }
        }
    }
    Ok(())
}

pub fn execute_detect(dir: &Path, config: &Config, names: Vec<ManagerName>) -> Result<()> {
    let resolver = load_resolver(dir, config, DryRunShell)?;
    for name in managers_or_default(names, config) {
        match resolver.setup(name) {
            Ok(Some(version)) => {
                println!("{}: {}", name.to_string().bold(), version.to_string().green());
            }
            Ok(None) => {
                println!("{}: nothing to do", name.to_string().bold());
            }
            Err(e @ ResolveError::ToolVersionNotSupported { .. }) => {
                println!("{}: {}", name.to_string().bold(), e.to_string().red());
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

pub fn execute_init(dir: &Path) -> Result<()> {
    let path: PathBuf = dir.join(CONFIG_FILE);
    if path.exists() {
        bail!("{} already exists", path.display());
    }
    Config::default().save(&path)?;
    println!("Created {}", path.display());
    Ok(())
}
