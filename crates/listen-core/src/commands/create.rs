//! Create command: scaffold a new skill from a template.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::context::AppContext;
use crate::skills::{SCRIPTS_DIR, SKILL_FILE, is_directory_safe};

/// Placeholder replaced with the skill name in project templates.
pub const TEMPLATE_NAME_PLACEHOLDER: &str = "{{name}}";

/// Built-in skill scaffolds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillTemplate {
    /// `SKILL.md` and `README.md`
    #[default]
    Basic,
    /// Basic plus `config.json` and an empty `scripts/` directory
    Advanced,
}

impl SkillTemplate {
    pub const ALL: [SkillTemplate; 2] = [SkillTemplate::Basic, SkillTemplate::Advanced];

    pub fn as_str(self) -> &'static str {
        match self {
            SkillTemplate::Basic => "basic",
            SkillTemplate::Advanced => "advanced",
        }
    }
}

impl fmt::Display for SkillTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown template '{0}' (valid: basic, advanced)")]
pub struct UnknownTemplate(pub String);

impl FromStr for SkillTemplate {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillTemplate::ALL
            .into_iter()
            .find(|template| template.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

/// Files written for a new skill, relative to the project root.
#[derive(Debug, Clone, Serialize)]
pub struct CreateReport {
    pub name: String,
    pub template: SkillTemplate,
    pub skill_dir: PathBuf,
    pub files: Vec<PathBuf>,
    /// Whether the `SKILL.md` body came from the project's templates directory
    pub used_project_template: bool,
}

#[derive(Debug, Clone)]
pub struct CreateCommand {
    ctx: AppContext,
}

impl CreateCommand {
    pub fn new(ctx: AppContext) -> Self {
        Self { ctx }
    }

    /// Create `skills/<name>/`. Falls back to the configured default template.
    pub async fn execute(
        &self,
        name: &str,
        template: Option<SkillTemplate>,
    ) -> anyhow::Result<CreateReport> {
        let template = template.unwrap_or(self.ctx.config().default_template);

        if !is_directory_safe(name) {
            anyhow::bail!(
                "Invalid skill name '{}': must be a single directory name without separators",
                name
            );
        }

        let skills_dir = self.ctx.skills_dir();
        if !crate::fs::is_dir(&skills_dir).await {
            anyhow::bail!(
                "Skills directory not found: {}. Run `listen-agent setup` first.",
                skills_dir.display()
            );
        }

        let skill_dir = skills_dir.join(name);
        if crate::fs::exists(&skill_dir).await {
            anyhow::bail!("Skill '{}' already exists", name);
        }

        crate::fs::ensure_dir(&skill_dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", skill_dir.display()))?;

        let project_body = self.project_template(template, name).await?;
        let used_project_template = project_body.is_some();
        let body = project_body.unwrap_or_else(|| default_body(name));

        let mut files = Vec::new();
        let skill_md = skill_dir.join(SKILL_FILE);
        write_file(&skill_md, &format!("{}{}", front_matter(name), body)).await?;
        files.push(skill_md);

        let readme = skill_dir.join("README.md");
        write_file(&readme, &readme_content(name)).await?;
        files.push(readme);

        if template == SkillTemplate::Advanced {
            let config = skill_dir.join("config.json");
            let content = serde_json::to_string_pretty(&serde_json::json!({
                "parameters": {},
                "settings": {},
                "dependencies": [],
            }))
            .context("Failed to serialize config.json")?;
            write_file(&config, &format!("{content}\n")).await?;
            files.push(config);

            let scripts = skill_dir.join(SCRIPTS_DIR);
            crate::fs::ensure_dir(&scripts)
                .await
                .with_context(|| format!("Failed to create directory: {}", scripts.display()))?;
            files.push(scripts);
        }

        let root = self.ctx.project_root();
        tracing::info!(skill = name, %template, "created skill");
        Ok(CreateReport {
            name: name.to_string(),
            template,
            skill_dir: crate::fs::relative_to(root, &skill_dir),
            files: files
                .iter()
                .map(|path| crate::fs::relative_to(root, path))
                .collect(),
            used_project_template,
        })
    }

    /// Body from `<templates_dir>/<template>.md`, if the project provides one.
    async fn project_template(
        &self,
        template: SkillTemplate,
        name: &str,
    ) -> anyhow::Result<Option<String>> {
        let path = self
            .ctx
            .templates_dir()
            .join(format!("{}.md", template.as_str()));
        if !crate::fs::exists(&path).await {
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read template: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "using project template");
        Ok(Some(content.replace(TEMPLATE_NAME_PLACEHOLDER, name)))
    }
}

async fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

fn front_matter(name: &str) -> String {
    format!(
        "---\nname: {name}\ndescription: Agent skill: {name}\nversion: 1.0.0\ntags: []\n---\n\n"
    )
}

fn default_body(name: &str) -> String {
    format!(
        "# {name} Skill

You are an AI assistant with the {name} skill.

## Capabilities

- Describe what this skill can do
- List specific functions or features
- Explain any limitations

## Instructions

Provide detailed instructions for how to use this skill effectively.

## Examples

Show examples of input/output or usage patterns.
"
    )
}

fn readme_content(name: &str) -> String {
    format!(
        "# {name}

## Description

Agent skill for {name}.

## Usage

Describe how to use this skill with your AI assistant.

## Configuration

Any configuration options or requirements.
"
    )
}
