//! Skills: on-disk bundles of a `SKILL.md` document plus resources.

pub mod discovery;
pub mod installer;
pub mod metadata;

use std::path::PathBuf;

use serde::Serialize;

use crate::client::AssistantType;

pub use discovery::discover_skills;
pub use installer::{InstallResult, SkillInstaller};
pub use metadata::{
    ParsedDocument, SkillMetadata, TargetAssistants, parse_document, strip_front_matter,
};

/// File name of a skill's primary document.
pub const SKILL_FILE: &str = "SKILL.md";

/// Subdirectory holding a skill's executable scripts.
pub const SCRIPTS_DIR: &str = "scripts";

/// A discovered skill. Built fresh on every discovery pass and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillRecord {
    /// Directory-safe identifier, unique within one discovery pass
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub tags: Vec<String>,
    /// Assistants this skill declares support for
    pub targets: TargetAssistants,
    /// Directory owning `SKILL.md` and the skill's resources
    pub source_root: PathBuf,
}

impl SkillRecord {
    /// Build a record from parsed metadata, falling back to `dir_name`.
    pub fn from_metadata(dir_name: &str, metadata: SkillMetadata, source_root: PathBuf) -> Self {
        let name = match metadata.name {
            Some(name) if is_directory_safe(&name) => name,
            Some(name) => {
                tracing::warn!(
                    skill = dir_name,
                    declared = %name,
                    "declared skill name is not directory-safe, using directory name"
                );
                dir_name.to_string()
            }
            None => dir_name.to_string(),
        };

        Self {
            name,
            description: metadata.description,
            version: metadata.version,
            author: metadata.author,
            tags: metadata.tags,
            targets: metadata.targets,
            source_root,
        }
    }

    /// Path of the primary document in the source tree.
    pub fn primary_doc(&self) -> PathBuf {
        self.source_root.join(SKILL_FILE)
    }

    /// Whether this skill should be installed for `assistant`.
    pub fn supports(&self, assistant: AssistantType) -> bool {
        self.targets.includes(assistant)
    }
}

/// Whether `name` can be used verbatim as a single path component.
pub fn is_directory_safe(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.starts_with('.')
        && !name
            .chars()
            .any(|c| c == '/' || c == '\\' || c == ':' || c.is_control())
}
