//! List command implementation.

use std::path::PathBuf;

use serde::Serialize;

use crate::context::AppContext;
use crate::skills::{SkillRecord, discover_skills};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ListOutcome {
    /// The configured skills directory does not exist
    MissingSkillsDir { path: PathBuf },
    /// Skills in discovery order, possibly none
    Skills { skills: Vec<SkillRecord> },
}

/// Reports the skills available for installation.
#[derive(Debug, Clone)]
pub struct ListCommand {
    ctx: AppContext,
}

impl ListCommand {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    pub async fn execute(&self) -> anyhow::Result<ListOutcome> {
        let skills_dir = self.ctx.skills_dir();
        if !crate::fs::is_dir(&skills_dir).await {
            return Ok(ListOutcome::MissingSkillsDir { path: skills_dir });
        }

        let skills = discover_skills(&skills_dir).await;
        tracing::debug!(count = skills.len(), "listed skills");
        Ok(ListOutcome::Skills { skills })
    }
}
