//! Propagate one skill into one destination root.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::client::{AssistantLayout, AssistantType};
use crate::error::InstallError;
use crate::fs::{self, CopySummary, copy_path_filtered, copy_tree_filtered};
use crate::skills::metadata::strip_front_matter;
use crate::skills::{SCRIPTS_DIR, SKILL_FILE, SkillRecord};

/// A primary document written to a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallResult {
    /// Skill name
    pub name: String,
    /// Assistant whose layout placed the document
    pub assistant: AssistantType,
    /// Destination document, relative to the installer's base directory
    pub target_path: PathBuf,
    /// Resources that could not be copied
    pub warnings: Vec<String>,
}

/// Copies skills into destination trees.
///
/// Paths in results are expressed relative to `base_dir` instead of the
/// process working directory.
#[derive(Debug, Clone)]
pub struct SkillInstaller {
    base_dir: PathBuf,
}

impl SkillInstaller {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Install `skill` below `destination_root` following `layout`.
    ///
    /// Returns `Ok(None)` without touching the destination when the source
    /// has no `SKILL.md`, or when the destination document already exists
    /// and `overwrite` is false. Resource copy failures are downgraded to
    /// warnings on the result; only failing to produce the primary document
    /// is an error.
    pub async fn install(
        &self,
        skill: &SkillRecord,
        layout: &AssistantLayout,
        destination_root: &Path,
        overwrite: bool,
    ) -> Result<Option<InstallResult>, InstallError> {
        let source_doc = skill.primary_doc();
        if !fs::exists(&source_doc).await {
            tracing::debug!(skill = %skill.name, "source has no SKILL.md, not installable");
            return Ok(None);
        }

        let skill_dir = layout.skill_dir_in(destination_root, &skill.name);
        let target_doc = layout.primary_doc_in(destination_root, &skill.name);
        if !overwrite && fs::exists(&target_doc).await {
            tracing::debug!(
                skill = %skill.name,
                path = %target_doc.display(),
                "already installed, skipping"
            );
            return Ok(None);
        }

        let content = tokio::fs::read_to_string(&source_doc)
            .await
            .map_err(|source| InstallError::ReadDocument {
                path: source_doc.clone(),
                source,
            })?;
        fs::ensure_dir(&skill_dir)
            .await
            .map_err(|source| InstallError::CreateDir {
                path: skill_dir.clone(),
                source,
            })?;
        tokio::fs::write(&target_doc, strip_front_matter(&content))
            .await
            .map_err(|source| InstallError::WriteDocument {
                path: target_doc.clone(),
                source,
            })?;

        let mut warnings = Vec::new();

        let scripts = skill.source_root.join(SCRIPTS_DIR);
        // A symlinked `scripts` goes through the resource path, which refuses it.
        let has_scripts = tokio::fs::symlink_metadata(&scripts)
            .await
            .is_ok_and(|meta| meta.is_dir());
        if has_scripts {
            let summary = copy_tree_filtered(&scripts, &skill_dir.join(SCRIPTS_DIR)).await;
            self.collect_warnings(skill, "scripts", summary, &mut warnings);
        }

        self.copy_resources(skill, &skill_dir, &target_doc, has_scripts, &mut warnings)
            .await;

        let target_path = fs::relative_to(&self.base_dir, &target_doc);
        tracing::info!(
            skill = %skill.name,
            assistant = %layout.assistant,
            path = %target_path.display(),
            warnings = warnings.len(),
            "installed skill"
        );

        Ok(Some(InstallResult {
            name: skill.name.clone(),
            assistant: layout.assistant,
            target_path,
            warnings,
        }))
    }

    /// Copy every source entry other than `SKILL.md` and `scripts/`.
    async fn copy_resources(
        &self,
        skill: &SkillRecord,
        skill_dir: &Path,
        target_doc: &Path,
        skip_scripts: bool,
        warnings: &mut Vec<String>,
    ) {
        let mut entries = match tokio::fs::read_dir(&skill.source_root).await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!(skill = %skill.name, %err, "failed to list skill resources");
                warnings.push(format!("failed to list resources: {err}"));
                return;
            }
        };

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(err) => {
                    tracing::warn!(skill = %skill.name, %err, "stopped listing skill resources");
                    warnings.push(format!("failed to list resources: {err}"));
                    break;
                }
            };

            let name = entry.file_name();
            if name == SKILL_FILE || (skip_scripts && name == SCRIPTS_DIR) {
                continue;
            }

            let to = skill_dir.join(&name);
            if to == target_doc {
                tracing::debug!(
                    skill = %skill.name,
                    path = %to.display(),
                    "resource would shadow the installed document, skipping"
                );
                continue;
            }

            let summary = copy_path_filtered(&entry.path(), &to).await;
            self.collect_warnings(skill, "resource", summary, warnings);
        }
    }

    fn collect_warnings(
        &self,
        skill: &SkillRecord,
        what: &str,
        summary: CopySummary,
        warnings: &mut Vec<String>,
    ) {
        if summary.is_clean() {
            tracing::trace!(
                skill = %skill.name,
                files = summary.files_copied,
                excluded = summary.excluded,
                "copied skill {what}"
            );
            return;
        }
        for failure in summary.failures {
            let path = fs::relative_to(&self.base_dir, &failure.path);
            tracing::warn!(
                skill = %skill.name,
                path = %path.display(),
                error = %failure.error,
                "failed to copy skill {what}"
            );
            warnings.push(format!(
                "failed to copy {what} {}: {}",
                path.display(),
                failure.error
            ));
        }
    }
}
