//! Application context shared by every command.

use std::path::{Path, PathBuf};

use crate::config::{self, ProjectConfig};
use crate::error::ConfigError;

/// Project root plus its loaded configuration.
///
/// Frontends create this once and pass it to commands.
#[derive(Debug, Clone)]
pub struct AppContext {
    project_root: PathBuf,
    config: ProjectConfig,
}

impl AppContext {
    /// Create a context with an explicit configuration.
    pub fn new(project_root: PathBuf, config: ProjectConfig) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Load `listen-agent.toml` from `project_root`, or defaults if absent.
    pub async fn load(project_root: PathBuf) -> Result<Self, ConfigError> {
        let config = config::load_project_config(&project_root).await?;
        Ok(Self::new(project_root, config))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn config_path(&self) -> PathBuf {
        config::config_path(&self.project_root)
    }

    pub fn skills_dir(&self) -> PathBuf {
        self.project_root.join(&self.config.skills_dir)
    }

    pub fn templates_dir(&self) -> PathBuf {
        self.project_root.join(&self.config.templates_dir)
    }
}
