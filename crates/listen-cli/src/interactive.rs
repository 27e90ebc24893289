//! Interactive assistant selection for the init command.
//!
//! Uses dialoguer for terminal UI prompts.

use std::io::{self, Write};

use anyhow::Result;
use console::style;
use dialoguer::{Select, theme::ColorfulTheme};

use listen_core::client::{AssistantSelection, Detection};

/// Prompts for the assistant to install skills for.
///
/// The menu lists every concrete assistant followed by "all", with the
/// cursor on the detection suggestion, then the configured default.
pub struct AssistantPrompt<W: Write = io::Stdout> {
    /// Detection result shown above the menu
    detection: Detection,
    /// Configured default assistant
    fallback: Option<AssistantSelection>,
    /// Output writer (for testing)
    writer: W,
    /// Theme for dialoguer prompts
    theme: ColorfulTheme,
}

impl AssistantPrompt<io::Stdout> {
    pub fn new(detection: Detection, fallback: Option<AssistantSelection>) -> Self {
        Self {
            detection,
            fallback,
            writer: io::stdout(),
            theme: ColorfulTheme::default(),
        }
    }
}

impl<W: Write> AssistantPrompt<W> {
    /// Create a prompt with custom writer (for testing).
    #[cfg(test)]
    pub fn with_writer(
        detection: Detection,
        fallback: Option<AssistantSelection>,
        writer: W,
    ) -> Self {
        Self {
            detection,
            fallback,
            writer,
            theme: ColorfulTheme::default(),
        }
    }

    /// Selection the menu starts on.
    pub fn initial(&self) -> Option<AssistantSelection> {
        self.detection.suggested.or(self.fallback)
    }

    /// Show the menu. Returns `None` when the user cancels with Esc or q.
    pub fn collect(&mut self) -> Result<Option<AssistantSelection>> {
        self.print_detection()?;

        let choices = AssistantSelection::choices();
        let labels: Vec<&str> = choices.iter().map(|choice| choice.label()).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt("Select AI assistant to install skills for")
            .items(&labels)
            .default(initial_index(&choices, self.initial()))
            .interact_opt()?;

        Ok(selection.map(|index| choices[index]))
    }

    fn print_detection(&mut self) -> Result<()> {
        if self.detection.detected.is_empty() {
            return Ok(());
        }

        let names: Vec<String> = self
            .detection
            .detected
            .iter()
            .map(|assistant| style(assistant.as_str()).cyan().to_string())
            .collect();
        writeln!(self.writer, "{} Detected: {}", style("ℹ").blue(), names.join(", "))?;
        Ok(())
    }
}

/// Menu position of `initial`, or the first entry.
fn initial_index(choices: &[AssistantSelection], initial: Option<AssistantSelection>) -> usize {
    initial
        .and_then(|initial| choices.iter().position(|choice| *choice == initial))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use listen_core::client::AssistantType;

    fn detection(detected: Vec<AssistantType>) -> Detection {
        let suggested = match detected.as_slice() {
            [] => None,
            [only] => Some(AssistantSelection::Only(*only)),
            _ => Some(AssistantSelection::All),
        };
        Detection {
            detected,
            suggested,
        }
    }

    #[test]
    fn test_initial_index_defaults_to_first() {
        let choices = AssistantSelection::choices();
        assert_eq!(initial_index(&choices, None), 0);
    }

    #[test]
    fn test_initial_index_points_at_all() {
        let choices = AssistantSelection::choices();
        assert_eq!(
            initial_index(&choices, Some(AssistantSelection::All)),
            choices.len() - 1
        );
    }

    #[test]
    fn test_detection_wins_over_config_default() {
        let prompt = AssistantPrompt::with_writer(
            detection(vec![AssistantType::Cursor]),
            Some(AssistantSelection::Only(AssistantType::Claude)),
            Vec::new(),
        );
        assert_eq!(
            prompt.initial(),
            Some(AssistantSelection::Only(AssistantType::Cursor))
        );
    }

    #[test]
    fn test_config_default_used_without_detection() {
        let prompt = AssistantPrompt::with_writer(
            detection(vec![]),
            Some(AssistantSelection::Only(AssistantType::Kiro)),
            Vec::new(),
        );
        assert_eq!(
            prompt.initial(),
            Some(AssistantSelection::Only(AssistantType::Kiro))
        );
    }

    #[test]
    fn test_detection_summary_lists_assistants() {
        let mut output = Vec::new();
        let mut prompt = AssistantPrompt::with_writer(
            detection(vec![AssistantType::Claude, AssistantType::Codex]),
            None,
            &mut output,
        );

        prompt.print_detection().unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("Detected"));
        assert!(output_str.contains("claude"));
        assert!(output_str.contains("codex"));
    }

    #[test]
    fn test_no_detection_prints_nothing() {
        let mut output = Vec::new();
        let mut prompt = AssistantPrompt::with_writer(detection(vec![]), None, &mut output);

        prompt.print_detection().unwrap();

        assert!(output.is_empty());
    }
}
