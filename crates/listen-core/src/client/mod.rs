//! AI assistant identities and their on-disk layouts.
//!
//! Each supported assistant has exactly one entry in the static layout
//! table (see [`layout`]). `all` is never an assistant in its own right; it
//! is an [`AssistantSelection`] that expands to every concrete identifier.

pub mod detect;
pub mod layout;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use detect::{Detection, detect_assistants};
pub use layout::{AssistantLayout, LAYOUTS, layout_for, resolve};

/// Concrete assistant identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantType {
    Claude,
    Cursor,
    Windsurf,
    Antigravity,
    Copilot,
    Kiro,
    Codex,
    Roocode,
    Qoder,
    Gemini,
}

impl AssistantType {
    /// Every concrete assistant, in expansion order.
    pub const ALL: [AssistantType; 10] = [
        AssistantType::Claude,
        AssistantType::Cursor,
        AssistantType::Windsurf,
        AssistantType::Antigravity,
        AssistantType::Copilot,
        AssistantType::Kiro,
        AssistantType::Codex,
        AssistantType::Roocode,
        AssistantType::Qoder,
        AssistantType::Gemini,
    ];

    /// Order shown in the interactive menu.
    pub const MENU_ORDER: [AssistantType; 10] = [
        AssistantType::Claude,
        AssistantType::Cursor,
        AssistantType::Windsurf,
        AssistantType::Antigravity,
        AssistantType::Copilot,
        AssistantType::Roocode,
        AssistantType::Kiro,
        AssistantType::Codex,
        AssistantType::Qoder,
        AssistantType::Gemini,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AssistantType::Claude => "claude",
            AssistantType::Cursor => "cursor",
            AssistantType::Windsurf => "windsurf",
            AssistantType::Antigravity => "antigravity",
            AssistantType::Copilot => "copilot",
            AssistantType::Kiro => "kiro",
            AssistantType::Codex => "codex",
            AssistantType::Roocode => "roocode",
            AssistantType::Qoder => "qoder",
            AssistantType::Gemini => "gemini",
        }
    }

    /// Static layout entry for this assistant.
    pub fn layout(self) -> &'static AssistantLayout {
        layout_for(self)
    }
}

impl fmt::Display for AssistantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssistantType {
    type Err = UnknownAssistant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AssistantType::ALL
            .into_iter()
            .find(|assistant| assistant.as_str() == s)
            .ok_or_else(|| UnknownAssistant(s.to_string()))
    }
}

/// Error for identifiers that name no known assistant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown AI assistant '{0}' (valid: {valid})", valid = valid_identifiers())]
pub struct UnknownAssistant(pub String);

/// Every accepted identifier, including `all`, comma-separated.
pub fn valid_identifiers() -> String {
    AssistantSelection::choices()
        .iter()
        .map(|choice| choice.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Which assistants an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum AssistantSelection {
    /// Expand to every concrete assistant
    All,
    /// A single concrete assistant
    Only(AssistantType),
}

impl AssistantSelection {
    /// Concrete assistants this selection expands to, in table order.
    pub fn expand(self) -> Vec<AssistantType> {
        match self {
            AssistantSelection::All => AssistantType::ALL.to_vec(),
            AssistantSelection::Only(assistant) => vec![assistant],
        }
    }

    /// Menu choices: every concrete assistant in menu order, then `all`.
    pub fn choices() -> Vec<AssistantSelection> {
        AssistantType::MENU_ORDER
            .into_iter()
            .map(AssistantSelection::Only)
            .chain(std::iter::once(AssistantSelection::All))
            .collect()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AssistantSelection::All => "all",
            AssistantSelection::Only(assistant) => assistant.as_str(),
        }
    }

    /// Human-readable label for menus and summaries.
    pub fn label(self) -> &'static str {
        match self {
            AssistantSelection::All => "All AI assistants",
            AssistantSelection::Only(assistant) => assistant.layout().label,
        }
    }
}

impl fmt::Display for AssistantSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssistantSelection {
    type Err = UnknownAssistant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(AssistantSelection::All);
        }
        s.parse().map(AssistantSelection::Only)
    }
}

impl TryFrom<String> for AssistantSelection {
    type Error = UnknownAssistant;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AssistantSelection> for String {
    fn from(value: AssistantSelection) -> Self {
        value.as_str().to_string()
    }
}

impl From<AssistantType> for AssistantSelection {
    fn from(value: AssistantType) -> Self {
        AssistantSelection::Only(value)
    }
}
