//! `SKILL.md` front matter parsing.
//!
//! Only a flat subset is understood: a leading block fenced by `---` lines
//! whose interior is read line by line as `key: value`. Nested structures,
//! multi-line values and block lists are not YAML here; such lines are
//! ignored rather than rejected. Do not grow this into a general parser.

use serde::{Serialize, Serializer};

use crate::client::AssistantType;

/// Fence line opening and closing the metadata block.
pub const MARKER: &str = "---";

/// Version assumed when a skill does not declare one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Assistants a skill declares support for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetAssistants {
    #[default]
    All,
    Only(Vec<AssistantType>),
}

impl TargetAssistants {
    pub fn includes(&self, assistant: AssistantType) -> bool {
        match self {
            TargetAssistants::All => true,
            TargetAssistants::Only(list) => list.contains(&assistant),
        }
    }
}

impl std::fmt::Display for TargetAssistants {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TargetAssistants::All => f.write_str("all"),
            TargetAssistants::Only(list) => {
                let names: Vec<&str> = list.iter().map(|a| a.as_str()).collect();
                f.write_str(&names.join(", "))
            }
        }
    }
}

impl Serialize for TargetAssistants {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            TargetAssistants::All => serializer.serialize_str("all"),
            TargetAssistants::Only(list) => list.serialize(serializer),
        }
    }
}

/// Fields recognized in the metadata block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillMetadata {
    /// Declared name; `None` keeps the directory name
    pub name: Option<String>,
    pub description: String,
    pub version: String,
    pub author: String,
    pub tags: Vec<String>,
    pub targets: TargetAssistants,
}

impl Default for SkillMetadata {
    fn default() -> Self {
        Self {
            name: None,
            description: String::new(),
            version: DEFAULT_VERSION.to_string(),
            author: String::new(),
            tags: Vec::new(),
            targets: TargetAssistants::All,
        }
    }
}

/// A primary document split into metadata and installable body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDocument<'a> {
    pub metadata: SkillMetadata,
    /// Document text with the metadata block and its fences removed
    pub body: &'a str,
    pub has_front_matter: bool,
}

/// Parse a primary document. Never fails: malformed lines are skipped.
pub fn parse_document(content: &str) -> ParsedDocument<'_> {
    let Some((block, body)) = split_front_matter(content) else {
        return ParsedDocument {
            metadata: SkillMetadata::default(),
            body: content,
            has_front_matter: false,
        };
    };

    let mut metadata = SkillMetadata::default();
    for (key, value) in block.lines().filter_map(parse_line) {
        match key {
            "name" => metadata.name = Some(unquote(value).to_string()),
            "description" => metadata.description = unquote(value).to_string(),
            "version" => metadata.version = unquote(value).to_string(),
            "author" => metadata.author = unquote(value).to_string(),
            "tags" => metadata.tags = parse_inline_list(value).unwrap_or_default(),
            "targets" => metadata.targets = parse_targets(value),
            _ => {}
        }
    }

    ParsedDocument {
        metadata,
        body,
        has_front_matter: true,
    }
}

/// The installable body of a primary document.
pub fn strip_front_matter(content: &str) -> &str {
    split_front_matter(content).map_or(content, |(_, body)| body)
}

/// Split into (block interior, body) when the document opens with a fence.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let mut offset = 0;
    let mut interior_start = None;

    for line in content.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();
        let is_marker = line.trim_end() == MARKER;

        match interior_start {
            None if is_marker => interior_start = Some(offset),
            None => return None,
            Some(start) if is_marker => return Some((&content[start..line_start], &content[offset..])),
            Some(_) => {}
        }
    }

    None
}

/// Match `<identifier>: <rest>` anchored at column zero.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once(':')?;
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    let value = rest.trim();
    if value.is_empty() {
        return None;
    }
    Some((key, value))
}

/// Strip one layer of matching surrounding quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse a single-line `[a, b, c]` literal.
fn parse_inline_list(value: &str) -> Option<Vec<String>> {
    let inner = value.strip_prefix('[')?.strip_suffix(']')?;
    Some(
        inner
            .split(',')
            .map(|item| unquote(item.trim()))
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

fn parse_targets(value: &str) -> TargetAssistants {
    if unquote(value) == "all" {
        return TargetAssistants::All;
    }
    let Some(items) = parse_inline_list(value) else {
        tracing::debug!(value, "targets is not an inline list, assuming all assistants");
        return TargetAssistants::All;
    };
    if items.iter().any(|item| item == "all") {
        return TargetAssistants::All;
    }

    let mut known = Vec::new();
    for item in &items {
        match item.parse::<AssistantType>() {
            Ok(assistant) if !known.contains(&assistant) => known.push(assistant),
            Ok(_) => {}
            Err(_) => tracing::debug!(target_id = %item, "ignoring unknown assistant in targets"),
        }
    }

    if known.is_empty() {
        TargetAssistants::All
    } else {
        TargetAssistants::Only(known)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_and_tags() {
        let doc = "---\nname: foo\ntags: [a, b]\n---\n# Foo\n";
        let parsed = parse_document(doc);
        assert!(parsed.has_front_matter);
        assert_eq!(parsed.metadata.name.as_deref(), Some("foo"));
        assert_eq!(parsed.metadata.tags, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(parsed.body, "# Foo\n");
    }

    #[test]
    fn test_no_block_yields_defaults_and_full_body() {
        let doc = "# Plain skill\n\nNo metadata here.\n";
        let parsed = parse_document(doc);
        assert!(!parsed.has_front_matter);
        assert_eq!(parsed.metadata, SkillMetadata::default());
        assert_eq!(parsed.metadata.version, "1.0.0");
        assert_eq!(parsed.body, doc);
    }

    #[test]
    fn test_unterminated_block_is_body() {
        let doc = "---\nname: foo\n# never closed\n";
        let parsed = parse_document(doc);
        assert!(!parsed.has_front_matter);
        assert_eq!(parsed.metadata.name, None);
        assert_eq!(parsed.body, doc);
    }

    #[test]
    fn test_block_must_open_on_first_line() {
        let doc = "\n---\nname: foo\n---\nbody\n";
        let parsed = parse_document(doc);
        assert!(!parsed.has_front_matter);
        assert_eq!(parsed.body, doc);
    }

    #[test]
    fn test_all_recognized_fields() {
        let doc = "---\n\
                   name: \"quoted-name\"\n\
                   description: 'Analyze survey data'\n\
                   version: 2.1.0\n\
                   author: Jane Doe\n\
                   tags: [\"data\", 'survey', stats]\n\
                   ---\n\
                   Body\n";
        let meta = parse_document(doc).metadata;
        assert_eq!(meta.name.as_deref(), Some("quoted-name"));
        assert_eq!(meta.description, "Analyze survey data");
        assert_eq!(meta.version, "2.1.0");
        assert_eq!(meta.author, "Jane Doe");
        assert_eq!(meta.tags, vec!["data", "survey", "stats"]);
    }

    #[test]
    fn test_only_one_quote_layer_is_stripped() {
        let meta = parse_document("---\ndescription: \"'nested'\"\n---\n").metadata;
        assert_eq!(meta.description, "'nested'");
    }

    #[test]
    fn test_mismatched_quotes_are_kept() {
        let meta = parse_document("---\ndescription: \"half'\n---\n").metadata;
        assert_eq!(meta.description, "\"half'");
    }

    #[test]
    fn test_value_keeps_inner_colons() {
        let meta = parse_document("---\ndescription: Usage: run it\n---\n").metadata;
        assert_eq!(meta.description, "Usage: run it");
    }

    #[test]
    fn test_non_matching_lines_are_ignored() {
        let doc = "---\n\
                   name: foo\n\
                   \x20 indented: value\n\
                   metadata:\n\
                   \x20 nested: true\n\
                   - list item\n\
                   bad key: value\n\
                   # comment\n\
                   unknown_key: dropped\n\
                   ---\n";
        let meta = parse_document(doc).metadata;
        assert_eq!(meta.name.as_deref(), Some("foo"));
        assert_eq!(meta.description, "");
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_multiline_tags_yield_empty() {
        let doc = "---\ntags:\n  - a\n  - b\n---\n";
        assert!(parse_document(doc).metadata.tags.is_empty());

        let doc = "---\ntags: a, b\n---\n";
        assert!(parse_document(doc).metadata.tags.is_empty());
    }

    #[test]
    fn test_empty_tag_list() {
        let doc = "---\ntags: []\n---\n";
        assert!(parse_document(doc).metadata.tags.is_empty());
    }

    #[test]
    fn test_crlf_documents() {
        let doc = "---\r\nname: foo\r\nversion: 3.0.0\r\n---\r\nBody\r\n";
        let parsed = parse_document(doc);
        assert_eq!(parsed.metadata.name.as_deref(), Some("foo"));
        assert_eq!(parsed.metadata.version, "3.0.0");
        assert_eq!(parsed.body, "Body\r\n");
    }

    #[test]
    fn test_closing_fence_at_end_of_file() {
        let parsed = parse_document("---\nname: foo\n---");
        assert!(parsed.has_front_matter);
        assert_eq!(parsed.body, "");
    }

    #[test]
    fn test_body_keeps_later_rules() {
        let doc = "---\nname: foo\n---\nIntro\n\n---\n\nMore\n";
        assert_eq!(strip_front_matter(doc), "Intro\n\n---\n\nMore\n");
    }

    #[test]
    fn test_targets_list() {
        let doc = "---\ntargets: [claude, cursor, vim]\n---\n";
        assert_eq!(
            parse_document(doc).metadata.targets,
            TargetAssistants::Only(vec![AssistantType::Claude, AssistantType::Cursor])
        );
    }

    #[test]
    fn test_targets_all_forms() {
        for doc in [
            "---\ntargets: all\n---\n",
            "---\ntargets: [all]\n---\n",
            "---\ntargets: [vim, emacs]\n---\n",
            "---\ntargets: claude\n---\n",
            "---\n---\n",
        ] {
            assert_eq!(parse_document(doc).metadata.targets, TargetAssistants::All, "{doc}");
        }
    }

    #[test]
    fn test_targets_serialize() {
        let all = serde_json::to_string(&TargetAssistants::All).expect("serialize");
        assert_eq!(all, "\"all\"");
        let only = serde_json::to_string(&TargetAssistants::Only(vec![AssistantType::Kiro]))
            .expect("serialize");
        assert_eq!(only, "[\"kiro\"]");
    }

    #[test]
    fn test_targets_display() {
        assert_eq!(TargetAssistants::All.to_string(), "all");
        let only = TargetAssistants::Only(vec![AssistantType::Claude, AssistantType::Gemini]);
        assert_eq!(only.to_string(), "claude, gemini");
    }
}
