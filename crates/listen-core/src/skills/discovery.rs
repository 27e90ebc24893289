//! Enumerate skills below a skills root.

use std::path::Path;

use super::metadata::parse_document;
use super::{SKILL_FILE, SkillRecord, is_directory_safe};

/// Scan the immediate subdirectories of `root` for skills.
///
/// A missing or unreadable root yields an empty list: "no skills" is a
/// normal outcome for callers to report. Results follow the directory
/// listing order, which is platform dependent.
pub async fn discover_skills(root: &Path) -> Vec<SkillRecord> {
    let mut skills: Vec<SkillRecord> = Vec::new();

    let mut entries = match tokio::fs::read_dir(root).await {
        Ok(entries) => entries,
        Err(err) => {
            tracing::debug!(root = %root.display(), %err, "skills root is not readable");
            return skills;
        }
    };

    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(err) => {
                tracing::warn!(root = %root.display(), %err, "stopped reading skills root");
                break;
            }
        };

        let skill_dir = entry.path();
        if !crate::fs::is_dir(&skill_dir).await {
            continue;
        }
        let dir_name = entry.file_name().to_string_lossy().into_owned();
        if !is_directory_safe(&dir_name) {
            tracing::debug!(dir = %skill_dir.display(), "skipping hidden or unsafe directory");
            continue;
        }

        let skill_md = skill_dir.join(SKILL_FILE);
        if !crate::fs::exists(&skill_md).await {
            tracing::debug!(dir = %skill_dir.display(), "no SKILL.md, skipping");
            continue;
        }
        let content = match tokio::fs::read_to_string(&skill_md).await {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %skill_md.display(), %err, "failed to read SKILL.md");
                continue;
            }
        };

        let parsed = parse_document(&content);
        if !parsed.has_front_matter {
            tracing::debug!(path = %skill_md.display(), "no front matter, using defaults");
        }
        let metadata = parsed.metadata;
        let record = SkillRecord::from_metadata(&dir_name, metadata, skill_dir);
        if skills.iter().any(|existing| existing.name == record.name) {
            tracing::warn!(
                skill = %record.name,
                dir = %record.source_root.display(),
                "duplicate skill name, skipping"
            );
            continue;
        }

        tracing::debug!(skill = %record.name, "discovered skill");
        skills.push(record);
    }

    skills
}
