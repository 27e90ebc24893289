//! Configuration schema for listen-agent.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::client::AssistantSelection;
use crate::commands::SkillTemplate;
use crate::error::ConfigError;

/// Root configuration structure for listen-agent.toml
///
/// Every field is optional in the file; missing fields take the defaults
/// below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Directory holding one subdirectory per skill, relative to the project root
    pub skills_dir: PathBuf,

    /// Directory holding `<template>.md` overrides for `create`
    pub templates_dir: PathBuf,

    /// Template used by `create` when none is given
    pub default_template: SkillTemplate,

    /// Assistant used by `init` when no prompt can be shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_assistant: Option<AssistantSelection>,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            skills_dir: PathBuf::from("skills"),
            templates_dir: PathBuf::from("templates"),
            default_template: SkillTemplate::Basic,
            default_assistant: None,
        }
    }
}

impl ProjectConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.skills_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "skills_dir must not be empty".to_string(),
            ));
        }
        if self.templates_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "templates_dir must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProjectConfig::default();
        assert_eq!(config.skills_dir, PathBuf::from("skills"));
        assert_eq!(config.templates_dir, PathBuf::from("templates"));
        assert_eq!(config.default_template, SkillTemplate::Basic);
        assert!(config.default_assistant.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_skills_dir_is_invalid() {
        let config = ProjectConfig {
            skills_dir: PathBuf::new(),
            ..ProjectConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
