use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Keyword,
    Identifier,
    NumberInteger,
    NumberFloat,
    String,
    StringEscape,
    StringEscapeInvalid,
    StringInvalid,
    Comment,
    CommentDoc,
    Delimiter,
    BracketOpen,
    BracketClose,
    Operator,
    Whitespace,
    Unknown,
}

impl Category {
    /// Dotted highlight scope, most general segment first, so a theme rule for
    /// `string` also styles `string.escape`.
    pub fn scope(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Identifier => "identifier",
            Category::NumberInteger => "number",
            Category::NumberFloat => "number.float",
            Category::String => "string",
            Category::StringEscape => "string.escape",
            Category::StringEscapeInvalid => "string.escape.invalid",
            Category::StringInvalid => "string.invalid",
            Category::Comment => "comment",
            Category::CommentDoc => "comment.doc",
            Category::Delimiter => "delimiter",
            Category::BracketOpen | Category::BracketClose => "delimiter.bracket",
            Category::Operator => "operator",
            Category::Whitespace => "",
            Category::Unknown => "invalid",
        }
    }

    pub fn is_bracket(&self) -> bool {
        matches!(self, Category::BracketOpen | Category::BracketClose)
    }

    /// Categories that mark input the language would reject.
    pub fn is_anomaly(&self) -> bool {
        matches!(
            self,
            Category::StringInvalid | Category::StringEscapeInvalid | Category::Unknown
        )
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Keyword => "keyword",
            Category::Identifier => "identifier",
            Category::NumberInteger => "number-integer",
            Category::NumberFloat => "number-float",
            Category::String => "string",
            Category::StringEscape => "string-escape",
            Category::StringEscapeInvalid => "string-escape-invalid",
            Category::StringInvalid => "string-invalid",
            Category::Comment => "comment",
            Category::CommentDoc => "comment-doc",
            Category::Delimiter => "delimiter",
            Category::BracketOpen => "bracket-open",
            Category::BracketClose => "bracket-close",
            Category::Operator => "operator",
            Category::Whitespace => "whitespace",
            Category::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub category: Category,
    pub lexeme: String,
    pub span: std::ops::Range<usize>,
}
