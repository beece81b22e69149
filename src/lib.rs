//! # pmprovision
//!
//! Works out which package manager (yarn, pnpm) and which version of it a JavaScript project
//! expects, and provisions that version through corepack before any dependency operation runs.
//!
//! Evidence is taken, in order, from the `packageManager` pin in `package.json` and from the
//! project's lockfiles. npm is assumed to come with the host and is never provisioned.
//!
//! ## Modules Overview
//! - [`resolver`] – The resolution routine ([`PackageManagerResolver::setup`])
//! - [`manifest`] – Read access to `package.json`
//! - [`lockfile`] – Lockfile discovery and version heuristics
//! - [`manager`] – Supported managers and their version ranges
//! - [`version`] – Comparable package manager versions
//! - [`shell`] – Running (or dry-running) the corepack command
//! - [`logger`] – Log line formatting and the `log` backend
//! - [`config`] – `pmprovision.toml` configuration


pub mod config;
pub mod error;
pub mod lockfile;
pub mod logger;
pub mod manager;
pub mod manifest;
pub mod resolver;
pub mod shell;
pub mod version;

pub use config::*;
pub use error::*;
pub use lockfile::*;
pub use manager::*;
pub use manifest::*;
pub use resolver::*;
pub use shell::*;
pub use version::*;
