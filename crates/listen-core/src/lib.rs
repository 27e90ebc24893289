//! Listen Agent Core Library
//!
//! Discovers agent skills in a project, parses their front matter and
//! propagates them into the configuration folders of AI coding assistants.

pub mod client;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod fs;
pub mod install;
pub mod skills;

/// Re-exports of commonly used types
pub mod prelude {
    // Assistants
    pub use crate::client::{AssistantLayout, AssistantSelection, AssistantType, Detection};

    // Commands
    pub use crate::commands::{
        CreateCommand, InstallCommand, InstallOptions, InstallOutcome, ListCommand, ListOutcome,
        SetupCommand, SkillTemplate,
    };

    // Configuration
    pub use crate::config::ProjectConfig;
    pub use crate::context::AppContext;

    // Errors
    pub use crate::error::{ConfigError, InstallError};

    // Installation
    pub use crate::install::{InstallOrchestrator, InstallReport};
    pub use crate::skills::{InstallResult, SkillInstaller, SkillRecord};
}
