//! Core install orchestration across assistants.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::client::{AssistantSelection, layout};
use crate::error::InstallError;
use crate::fs;
use crate::skills::{InstallResult, SkillInstaller, SkillRecord};

/// Aggregated outcome of one installation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct InstallReport {
    /// One entry per primary document written, in processing order
    pub installed: Vec<InstallResult>,
    /// (skill, destination) pairs left untouched, already installed or not installable
    pub skipped: usize,
    /// (skill, destination) pairs excluded by the skill's declared targets
    pub unsupported: usize,
    /// Destination roots ensured during the run, relative to the base directory
    pub roots: Vec<PathBuf>,
}

impl InstallReport {
    pub fn is_empty(&self) -> bool {
        self.installed.is_empty()
    }

    /// Total per-item copy warnings across all results.
    pub fn warning_count(&self) -> usize {
        self.installed.iter().map(|result| result.warnings.len()).sum()
    }
}

/// Drives the propagation engine over skills × assistants × roots.
///
/// Runs strictly sequentially: each file operation is awaited before the
/// next one starts. Nothing is retried.
#[derive(Debug, Clone)]
pub struct InstallOrchestrator {
    installer: SkillInstaller,
}

impl InstallOrchestrator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            installer: SkillInstaller::new(base_dir),
        }
    }

    pub fn base_dir(&self) -> &Path {
        self.installer.base_dir()
    }

    /// Install `skills` for every assistant in `selection`.
    ///
    /// Each distinct destination root is created once even when several
    /// assistants list it; failing to create one aborts the run. Assistants
    /// sharing a root still write independently, so a later writer hitting
    /// an existing document is governed by `overwrite` like any other.
    pub async fn install(
        &self,
        skills: &[SkillRecord],
        selection: AssistantSelection,
        overwrite: bool,
    ) -> Result<InstallReport, InstallError> {
        let mut report = InstallReport::default();
        if skills.is_empty() {
            return Ok(report);
        }

        let mut prepared: Vec<PathBuf> = Vec::new();
        for layout in layout::resolve(selection) {
            for root_name in layout.roots {
                let root = self.base_dir().join(root_name);
                if !prepared.contains(&root) {
                    fs::ensure_dir(&root)
                        .await
                        .map_err(|source| InstallError::CreateDir {
                            path: root.clone(),
                            source,
                        })?;
                    report.roots.push(fs::relative_to(self.base_dir(), &root));
                    prepared.push(root.clone());
                }

                for skill in skills {
                    if !skill.supports(layout.assistant) {
                        tracing::debug!(
                            skill = %skill.name,
                            assistant = %layout.assistant,
                            "skill does not target assistant"
                        );
                        report.unsupported += 1;
                        continue;
                    }

                    let installed = self
                        .installer
                        .install(skill, layout, &root, overwrite)
                        .await
                        .inspect_err(|err| {
                            tracing::error!(
                                skill = %skill.name,
                                assistant = %layout.assistant,
                                path = %err.path().display(),
                                "installation aborted"
                            );
                        })?;
                    match installed {
                        Some(result) => report.installed.push(result),
                        None => report.skipped += 1,
                    }
                }
            }
        }

        Ok(report)
    }
}
