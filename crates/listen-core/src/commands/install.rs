//! Install command implementation.
//!
//! Discovers the project's skills, narrows them to the requested names and
//! hands them to the orchestrator for every selected assistant.

use std::path::PathBuf;

use serde::Serialize;

use crate::client::AssistantSelection;
use crate::context::AppContext;
use crate::install::{InstallOrchestrator, InstallReport};
use crate::skills::{SkillRecord, discover_skills};

/// Options for the install command
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Assistants to install for
    pub selection: AssistantSelection,
    /// Replace documents that already exist
    pub force: bool,
    /// Restrict installation to these skill names (empty means all)
    pub skills: Vec<String>,
}

impl InstallOptions {
    pub fn new(selection: AssistantSelection) -> Self {
        Self {
            selection,
            force: false,
            skills: Vec::new(),
        }
    }

    /// Set the force flag
    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Add a skill name to install
    pub fn with_skill(mut self, name: impl Into<String>) -> Self {
        self.skills.push(name.into());
        self
    }

    /// Replace the skill name filter
    pub fn with_skills<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = names.into_iter().map(Into::into).collect();
        self
    }
}

/// What an install run ended with.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InstallOutcome {
    /// The configured skills directory does not exist
    MissingSkillsDir { path: PathBuf },
    /// The skills directory holds no skills
    NoSkills,
    /// No assistant was chosen, so nothing ran
    Cancelled,
    Completed {
        report: InstallReport,
        /// Requested names that matched no discovered skill
        unknown_skills: Vec<String>,
    },
}

/// Install command orchestrator
#[derive(Debug, Clone)]
pub struct InstallCommand {
    ctx: AppContext,
}

impl InstallCommand {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Execute the install command
    pub async fn execute(&self, options: &InstallOptions) -> anyhow::Result<InstallOutcome> {
        let skills_dir = self.ctx.skills_dir();
        if !crate::fs::is_dir(&skills_dir).await {
            return Ok(InstallOutcome::MissingSkillsDir { path: skills_dir });
        }

        let discovered = discover_skills(&skills_dir).await;
        if discovered.is_empty() {
            return Ok(InstallOutcome::NoSkills);
        }

        let (skills, unknown_skills) = select_skills(discovered, &options.skills);
        for name in &unknown_skills {
            tracing::warn!(skill = %name, "requested skill not found, skipping");
        }

        let orchestrator = InstallOrchestrator::new(self.ctx.project_root());
        let report = orchestrator
            .install(&skills, options.selection, options.force)
            .await?;

        Ok(InstallOutcome::Completed {
            report,
            unknown_skills,
        })
    }
}

/// Keep the skills named in `requested`, preserving discovery order.
///
/// An empty request keeps everything. Returns the kept skills and the
/// requested names with no match.
fn select_skills(
    discovered: Vec<SkillRecord>,
    requested: &[String],
) -> (Vec<SkillRecord>, Vec<String>) {
    if requested.is_empty() {
        return (discovered, Vec::new());
    }

    let unknown = requested
        .iter()
        .filter(|name| !discovered.iter().any(|skill| &skill.name == *name))
        .cloned()
        .collect();
    let kept = discovered
        .into_iter()
        .filter(|skill| requested.contains(&skill.name))
        .collect();

    (kept, unknown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::AssistantType;
    use crate::config::ProjectConfig;
    use crate::skills::SkillMetadata;
    use tempfile::TempDir;

    fn record(name: &str) -> SkillRecord {
        SkillRecord::from_metadata(
            name,
            SkillMetadata::default(),
            PathBuf::from("skills").join(name),
        )
    }

    fn write_skill(root: &std::path::Path, name: &str, body: &str) {
        let dir = root.join("skills").join(name);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("SKILL.md"), body).unwrap();
    }

    #[test]
    fn test_install_options_builder() {
        let opts = InstallOptions::new(AssistantSelection::All)
            .with_force(true)
            .with_skill("demo")
            .with_skill("other");

        assert_eq!(opts.selection, AssistantSelection::All);
        assert!(opts.force);
        assert_eq!(opts.skills, vec!["demo", "other"]);

        let opts = opts.with_skills(["only"]);
        assert_eq!(opts.skills, vec!["only"]);
    }

    #[test]
    fn test_select_skills_keeps_all_without_request() {
        let (kept, unknown) = select_skills(vec![record("a"), record("b")], &[]);
        assert_eq!(kept.len(), 2);
        assert!(unknown.is_empty());
    }

    #[test]
    fn test_select_skills_reports_unknown_names() {
        let requested = vec!["b".to_string(), "missing".to_string()];
        let (kept, unknown) = select_skills(vec![record("a"), record("b")], &requested);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "b");
        assert_eq!(unknown, vec!["missing"]);
    }

    #[tokio::test]
    async fn test_missing_skills_dir() {
        let temp = TempDir::new().unwrap();
        let ctx = AppContext::new(temp.path().to_path_buf(), ProjectConfig::default());

        let outcome = InstallCommand::new(ctx)
            .execute(&InstallOptions::new(AssistantSelection::All))
            .await
            .unwrap();

        match outcome {
            InstallOutcome::MissingSkillsDir { path } => {
                assert_eq!(path, temp.path().join("skills"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(!temp.path().join(".shared").exists());
    }

    #[tokio::test]
    async fn test_empty_skills_dir() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("skills")).unwrap();
        let ctx = AppContext::new(temp.path().to_path_buf(), ProjectConfig::default());

        let outcome = InstallCommand::new(ctx)
            .execute(&InstallOptions::new(AssistantSelection::All))
            .await
            .unwrap();

        assert!(matches!(outcome, InstallOutcome::NoSkills));
    }

    #[tokio::test]
    async fn test_install_requested_skill_for_claude() {
        let temp = TempDir::new().unwrap();
        write_skill(temp.path(), "demo", "---\nname: demo\n---\n# Demo\n");
        write_skill(temp.path(), "other", "# Other\n");
        let ctx = AppContext::new(temp.path().to_path_buf(), ProjectConfig::default());

        let options = InstallOptions::new(AssistantSelection::Only(AssistantType::Claude))
            .with_skill("demo")
            .with_skill("ghost");
        let outcome = InstallCommand::new(ctx).execute(&options).await.unwrap();

        let InstallOutcome::Completed {
            report,
            unknown_skills,
        } = outcome
        else {
            panic!("expected a completed install");
        };
        assert_eq!(unknown_skills, vec!["ghost"]);
        assert_eq!(report.installed.len(), 1);
        assert_eq!(
            report.installed[0].target_path,
            PathBuf::from(".claude/skills/demo/skill.md")
        );

        let written =
            std::fs::read_to_string(temp.path().join(".claude/skills/demo/skill.md")).unwrap();
        assert_eq!(written, "# Demo\n");
        assert!(!temp.path().join(".claude/skills/other").exists());
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let json = serde_json::to_value(InstallOutcome::NoSkills).unwrap();
        assert_eq!(json["status"], "no_skills");
    }

    #[test]
    fn test_cancelled_outcome_serializes_as_status_only() {
        let json = serde_json::to_value(InstallOutcome::Cancelled).unwrap();
        assert_eq!(json, serde_json::json!({ "status": "cancelled" }));
    }
}
