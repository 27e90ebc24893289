//! Setup command: create the project skeleton.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use crate::config::{self, ProjectConfig};
use crate::context::AppContext;

/// Items the setup run created or found in place, relative to the project root.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetupReport {
    pub created: Vec<PathBuf>,
    pub existing: Vec<PathBuf>,
}

/// Creates the skills and templates directories plus `listen-agent.toml`.
///
/// Never overwrites an existing config file.
#[derive(Debug, Clone)]
pub struct SetupCommand {
    ctx: AppContext,
}

impl SetupCommand {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self) -> anyhow::Result<SetupReport> {
        let mut report = SetupReport::default();

        for dir in [self.ctx.skills_dir(), self.ctx.templates_dir()] {
            let existed = crate::fs::is_dir(&dir).await;
            crate::fs::ensure_dir(&dir)
                .await
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
            self.record(&mut report, &dir, existed);
        }

        let config_path = self.ctx.config_path();
        let existed = crate::fs::exists(&config_path).await;
        if !existed {
            let content = config::to_toml(&config_for(self.ctx.config()))
                .context("Failed to serialize default config")?;
            tokio::fs::write(&config_path, content)
                .await
                .with_context(|| {
                    format!("Failed to write config file: {}", config_path.display())
                })?;
        }
        self.record(&mut report, &config_path, existed);

        tracing::info!(
            created = report.created.len(),
            existing = report.existing.len(),
            "project setup finished"
        );
        Ok(report)
    }

    fn record(&self, report: &mut SetupReport, path: &Path, existed: bool) {
        let relative = crate::fs::relative_to(self.ctx.project_root(), path);
        if existed {
            report.existing.push(relative);
        } else {
            report.created.push(relative);
        }
    }
}

/// Config written by setup: the context's directories with default settings.
fn config_for(current: &ProjectConfig) -> ProjectConfig {
    ProjectConfig {
        skills_dir: current.skills_dir.clone(),
        templates_dir: current.templates_dir.clone(),
        ..ProjectConfig::default()
    }
}
