//! High-level commands for listen-agent operations.
//!
//! Each command takes an [`AppContext`](crate::context::AppContext) and is
//! designed to be called by the CLI frontend.

pub mod create;
pub mod install;
pub mod list;
pub mod setup;

pub use create::{CreateCommand, CreateReport, SkillTemplate, UnknownTemplate};
pub use install::{InstallCommand, InstallOptions, InstallOutcome};
pub use list::{ListCommand, ListOutcome};
pub use setup::{SetupCommand, SetupReport};
