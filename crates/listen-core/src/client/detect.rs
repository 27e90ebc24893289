//! Detect which assistants a project already uses.

use std::path::Path;

use serde::Serialize;

use super::{AssistantSelection, AssistantType};

/// Assistants whose primary root folder exists, plus a menu suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub detected: Vec<AssistantType>,
    pub suggested: Option<AssistantSelection>,
}

/// Check each assistant's primary root under `project_root`.
///
/// One hit suggests that assistant, several suggest `all`, none suggest
/// nothing and leave the choice to the user.
pub async fn detect_assistants(project_root: &Path) -> Detection {
    let mut detected = Vec::new();
    for assistant in AssistantType::ALL {
        let root = project_root.join(assistant.layout().primary_root());
        if crate::fs::is_dir(&root).await {
            detected.push(assistant);
        }
    }

    let suggested = match detected.as_slice() {
        [] => None,
        [only] => Some(AssistantSelection::Only(*only)),
        _ => Some(AssistantSelection::All),
    };

    tracing::debug!(?detected, ?suggested, "detected AI assistants");
    Detection {
        detected,
        suggested,
    }
}
