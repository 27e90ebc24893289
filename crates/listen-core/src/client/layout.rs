//! Static destination layout table.
//!
//! Adding an assistant is a data change: append a row to [`LAYOUTS`] and a
//! variant to [`AssistantType`]. Templates use the literal `{name}`
//! placeholder and nothing else.

use std::path::{Path, PathBuf};

use super::{AssistantSelection, AssistantType};

/// Placeholder substituted with the skill name in layout templates.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Cross-assistant destination root shared by most layouts.
pub const SHARED_ROOT: &str = ".shared";

/// Where one assistant expects installed skills to live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantLayout {
    pub assistant: AssistantType,
    /// Menu label
    pub label: &'static str,
    /// Destination root folders, primary first
    pub roots: &'static [&'static str],
    /// Per-skill directory below a root
    pub skill_dir: &'static str,
    /// Primary document name inside the skill directory
    pub primary_file: &'static str,
}

pub static LAYOUTS: [AssistantLayout; 10] = [
    AssistantLayout {
        assistant: AssistantType::Claude,
        label: "Claude Code (.claude/skills/)",
        roots: &[".claude"],
        skill_dir: "skills/{name}",
        primary_file: "skill.md",
    },
    AssistantLayout {
        assistant: AssistantType::Cursor,
        label: "Cursor (.cursor/commands/ + .shared/)",
        roots: &[".cursor", SHARED_ROOT],
        skill_dir: "commands/{name}",
        primary_file: "{name}.md",
    },
    AssistantLayout {
        assistant: AssistantType::Windsurf,
        label: "Windsurf (.windsurf/workflows/ + .shared/)",
        roots: &[".windsurf", SHARED_ROOT],
        skill_dir: "workflows/{name}",
        primary_file: "{name}.md",
    },
    AssistantLayout {
        assistant: AssistantType::Antigravity,
        label: "Antigravity (.agent/workflows/ + .shared/)",
        roots: &[".agent", SHARED_ROOT],
        skill_dir: "workflows/{name}",
        primary_file: "{name}.md",
    },
    AssistantLayout {
        assistant: AssistantType::Copilot,
        label: "GitHub Copilot (.github/prompts/ + .shared/)",
        roots: &[".github", SHARED_ROOT],
        skill_dir: "prompts/{name}",
        primary_file: "{name}.prompt.md",
    },
    AssistantLayout {
        assistant: AssistantType::Kiro,
        label: "Kiro (.kiro/steering/ + .shared/)",
        roots: &[".kiro", SHARED_ROOT],
        skill_dir: "steering/{name}",
        primary_file: "{name}.md",
    },
    AssistantLayout {
        assistant: AssistantType::Codex,
        label: "Codex (.codex/skills/)",
        roots: &[".codex"],
        skill_dir: "skills/{name}",
        primary_file: "skill.md",
    },
    AssistantLayout {
        assistant: AssistantType::Roocode,
        label: "RooCode (.roo/commands/ + .shared/)",
        roots: &[".roo", SHARED_ROOT],
        skill_dir: "commands/{name}",
        primary_file: "{name}.md",
    },
    AssistantLayout {
        assistant: AssistantType::Qoder,
        label: "Qoder (.qoder/rules/ + .shared/)",
        roots: &[".qoder", SHARED_ROOT],
        skill_dir: "rules/{name}",
        primary_file: "{name}.md",
    },
    AssistantLayout {
        assistant: AssistantType::Gemini,
        label: "Gemini CLI (.gemini/skills/ + .shared/)",
        roots: &[".gemini", SHARED_ROOT],
        skill_dir: "skills/{name}",
        primary_file: "skill.md",
    },
];

/// Layout entry for a concrete assistant.
pub fn layout_for(assistant: AssistantType) -> &'static AssistantLayout {
    // Rows are declared in `AssistantType` discriminant order.
    &LAYOUTS[assistant as usize]
}

/// Layouts for a selection; `all` yields every entry, applied independently.
pub fn resolve(selection: AssistantSelection) -> Vec<&'static AssistantLayout> {
    selection.expand().into_iter().map(layout_for).collect()
}

impl AssistantLayout {
    /// The first root, where the assistant itself looks.
    pub fn primary_root(&self) -> &'static str {
        self.roots[0]
    }

    /// Skill directory below `root` for `skill_name`.
    pub fn skill_dir_in(&self, root: &Path, skill_name: &str) -> PathBuf {
        root.join(substitute(self.skill_dir, skill_name))
    }

    /// Primary document path below `root` for `skill_name`.
    pub fn primary_doc_in(&self, root: &Path, skill_name: &str) -> PathBuf {
        self.skill_dir_in(root, skill_name)
            .join(substitute(self.primary_file, skill_name))
    }
}

fn substitute(template: &str, skill_name: &str) -> String {
    template.replace(NAME_PLACEHOLDER, skill_name)
}
