use crate::editor::WordAt;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SuggestionKind {
    Text,
    Keyword,
    Snippet,
}

/// One completion entry. Template insertions use `${n:placeholder}` and `$0`
/// tab stops, which the editor expands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    pub label: &'static str,
    pub kind: SuggestionKind,
    pub insertion_text: &'static str,
    pub is_template: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<&'static str>,
    /// Byte range the insertion replaces: the word under the cursor.
    pub replace: std::ops::Range<usize>,
}

struct CatalogueEntry {
    label: &'static str,
    kind: SuggestionKind,
    insertion_text: &'static str,
    is_template: bool,
    documentation: Option<&'static str>,
}

const CATALOGUE: &[CatalogueEntry] = &[
    CatalogueEntry {
        label: "simpleText",
        kind: SuggestionKind::Text,
        insertion_text: "simpleText",
        is_template: false,
        documentation: None,
    },
    CatalogueEntry {
        label: "testing",
        kind: SuggestionKind::Keyword,
        insertion_text: "testing(${1:condition})",
        is_template: true,
        documentation: None,
    },
    CatalogueEntry {
        label: "ifelse",
        kind: SuggestionKind::Snippet,
        insertion_text: "if (${1:condition}) {\n\t$0\n} else {\n\t\n}",
        is_template: true,
        documentation: Some("If-Else Statement"),
    },
];

/// Returns the whole catalogue for any word; nothing is filtered by prefix.
pub fn complete(word: &WordAt) -> Vec<Suggestion> {
    CATALOGUE
        .iter()
        .map(|entry| Suggestion {
            label: entry.label,
            kind: entry.kind,
            insertion_text: entry.insertion_text,
            is_template: entry.is_template,
            documentation: entry.documentation,
            replace: word.start..word.end,
        })
        .collect()
}
