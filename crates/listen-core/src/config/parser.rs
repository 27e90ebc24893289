//! TOML parser with helpful error messages

use std::path::Path;

use super::schema::ProjectConfig;
use crate::error::ConfigError;

/// Load the project's config, falling back to defaults when the file is absent.
pub async fn load_project_config(project_root: &Path) -> Result<ProjectConfig, ConfigError> {
    let path = super::config_path(project_root);
    if !crate::fs::exists(&path).await {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ProjectConfig::default());
    }
    parse_config(&path).await
}

/// Parse listen-agent.toml with detailed error messages
pub async fn parse_config(path: &Path) -> Result<ProjectConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    parse_config_str(&content)
}

/// Parse listen-agent.toml content from string
pub fn parse_config_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| enhance_toml_error(e, content))?;

    config.validate()?;

    Ok(config)
}

/// Enhance TOML parsing errors with the offending lines
fn enhance_toml_error(error: toml::de::Error, content: &str) -> ConfigError {
    let message = error.message().to_string();

    let line_num = error
        .span()
        .map(|span| content[..span.start.min(content.len())].matches('\n').count() + 1);

    match line_num {
        Some(line_num) => ConfigError::Parse(format!(
            "TOML parsing error at line {}:\n{}\n\nError: {}",
            line_num,
            get_line_context(content, line_num),
            message
        )),
        None => ConfigError::Parse(format!("TOML parsing error: {}", message)),
    }
}

/// Get context lines around an error
fn get_line_context(content: &str, line_num: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let start = line_num.saturating_sub(2).min(lines.len());
    let end = (line_num + 1).min(lines.len());

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let num = start + i + 1;
            let marker = if num == line_num { ">>>" } else { "   " };
            format!("{} {:4} | {}", marker, num, line)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Serialize a configuration to TOML string
pub fn to_toml(config: &ProjectConfig) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}
