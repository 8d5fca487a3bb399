use super::keywords::{ALL_KEYWORDS, ALL_OPERATORS, AUTO_CLOSING_PAIRS, BRACKET_PAIRS};
use super::token::Category;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::str::FromStr;

pub const SYMBOLS: &str = r"[=><!\~?:\&|+\-*/\^%]+";
pub const ESCAPES: &str =
    r#"\\(?:[abfnrtv\\"']|x[0-9A-Fa-f]{1,4}|u[0-9A-Fa-f]{4}|U[0-9A-Fa-f]{8})"#;

lazy_static! {
    static ref RULE_TABLE: RuleTable = RuleTable::build();
}

/// The grammar shared by every lexing pass.
pub fn rule_table() -> &'static RuleTable {
    &RULE_TABLE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexerState {
    #[default]
    Root,
    Whitespace,
    Comment,
    DocComment,
    StringBody,
}

impl LexerState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LexerState::Root => "root",
            LexerState::Whitespace => "whitespace",
            LexerState::Comment => "comment",
            LexerState::DocComment => "doc-comment",
            LexerState::StringBody => "string-body",
        }
    }
}

impl std::fmt::Display for LexerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LexerState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "root" => Ok(LexerState::Root),
            "whitespace" => Ok(LexerState::Whitespace),
            "comment" => Ok(LexerState::Comment),
            "doc-comment" | "doccomment" => Ok(LexerState::DocComment),
            "string-body" | "string" => Ok(LexerState::StringBody),
            _ => Err(format!("Unknown lexer state: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Push(LexerState),
    /// Modes never nest, so popping always lands back in `Root`.
    Pop,
}

impl Transition {
    pub fn apply(self, state: LexerState) -> LexerState {
        match self {
            Transition::Stay => state,
            Transition::Push(next) => next,
            Transition::Pop => LexerState::Root,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Emit(Category),
    /// Identifier unless the lexeme is in the keyword set.
    IdentOrKeyword,
    /// Operator if the whole run is a known operator, delimiter otherwise.
    Symbols,
    /// Open or close, decided by the character.
    Bracket,
}

#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    action: Action,
    transition: Transition,
}

impl Rule {
    fn new(pattern: &str, action: Action, transition: Transition) -> Self {
        Self {
            pattern: Regex::new(&format!("^(?:{pattern})")).unwrap(),
            action,
            transition,
        }
    }

    fn emit(pattern: &str, category: Category) -> Self {
        Self::new(pattern, Action::Emit(category), Transition::Stay)
    }

    /// The lexeme this rule matches at the very start of `rest`, if any.
    /// Empty matches never count so the caller always makes progress.
    pub fn match_at<'t>(&self, rest: &'t str) -> Option<&'t str> {
        self.pattern
            .find(rest)
            .filter(|m| m.start() == 0 && !m.as_str().is_empty())
            .map(|m| m.as_str())
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }
}

/// Rules for one lexer state, tried in declaration order.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub rules: Vec<Rule>,
    /// State to retry in when no rule matches, without consuming input.
    pub fallback: Option<LexerState>,
}

pub struct RuleTable {
    root: RuleSet,
    whitespace: RuleSet,
    comment: RuleSet,
    doc_comment: RuleSet,
    string_body: RuleSet,
    keywords: HashSet<&'static str>,
    operators: HashSet<&'static str>,
    escapes: Regex,
}

impl RuleTable {
    fn build() -> Self {
        use Category as C;
        use LexerState as S;

        let whitespace = vec![
            Rule::emit(r"[ \t\r\n]+", C::Whitespace),
            Rule::emit(r"/\*\*/", C::Comment),
            Rule::new(r"/\*\*", Action::Emit(C::CommentDoc), Transition::Push(S::DocComment)),
            Rule::new(r"/\*", Action::Emit(C::Comment), Transition::Push(S::Comment)),
            Rule::emit(r"//.*", C::Comment),
        ];

        let mut root = vec![Rule::new(
            r"[a-zA-Z_][a-zA-Z0-9_]*",
            Action::IdentOrKeyword,
            Transition::Stay,
        )];
        root.extend(whitespace.iter().cloned());
        root.extend([
            Rule::new(r"[{}()\[\]]", Action::Bracket, Transition::Stay),
            Rule::new(SYMBOLS, Action::Symbols, Transition::Stay),
            Rule::emit(r"[0-9]*[0-9]+[eE](?:[\-+]?[0-9]+)?", C::NumberFloat),
            Rule::emit(r"[0-9]*\.[0-9]+(?:[eE][\-+]?[0-9]+)?", C::NumberFloat),
            Rule::emit(r"[0-9][0-9']*", C::NumberInteger),
            Rule::emit(r"[0-9]", C::NumberInteger),
            // after the numbers so `.5` and `1.5` stay floats
            Rule::emit(r"[;,.]", C::Delimiter),
            // a trailing lone backslash still leaves the string open; CRLF mode keeps
            // the `\r` of a line break out of the token
            Rule::emit(r"\$(?:[^$\\\r\n]|\\[^\r\n])*\\?(?Rm:$)", C::StringInvalid),
            Rule::new(r"\$", Action::Emit(C::String), Transition::Push(S::StringBody)),
        ]);

        let comment = vec![
            Rule::emit(r"[^/*]+", C::Comment),
            Rule::new(r"\*/", Action::Emit(C::Comment), Transition::Pop),
            Rule::emit(r"[/*]", C::Comment),
        ];

        let doc_comment = vec![
            Rule::emit(r"[^/*]+", C::CommentDoc),
            Rule::emit(r"/\*", C::CommentDoc),
            Rule::new(r"\*/", Action::Emit(C::CommentDoc), Transition::Pop),
            Rule::emit(r"[/*]", C::CommentDoc),
        ];

        let string_body = vec![
            Rule::emit(r"[^\\$]+", C::String),
            Rule::emit(ESCAPES, C::StringEscape),
            Rule::emit(r"\\(?s:.)?", C::StringEscapeInvalid),
            Rule::new(r"\$", Action::Emit(C::String), Transition::Pop),
        ];

        let set = |rules| RuleSet {
            rules,
            fallback: None,
        };

        Self {
            root: set(root),
            whitespace: RuleSet {
                rules: whitespace,
                fallback: Some(S::Root),
            },
            comment: set(comment),
            doc_comment: set(doc_comment),
            string_body: set(string_body),
            keywords: ALL_KEYWORDS.iter().copied().collect(),
            operators: ALL_OPERATORS.iter().copied().collect(),
            escapes: Regex::new(&format!("^(?:{ESCAPES})$")).unwrap(),
        }
    }

    pub fn rules(&self, state: LexerState) -> &RuleSet {
        match state {
            LexerState::Root => &self.root,
            LexerState::Whitespace => &self.whitespace,
            LexerState::Comment => &self.comment,
            LexerState::DocComment => &self.doc_comment,
            LexerState::StringBody => &self.string_body,
        }
    }

    pub fn is_keyword(&self, lexeme: &str) -> bool {
        self.keywords.contains(lexeme)
    }

    pub fn is_operator(&self, lexeme: &str) -> bool {
        self.operators.contains(lexeme)
    }

    /// Whether `lexeme` is exactly one well-formed escape sequence.
    pub fn is_escape(&self, lexeme: &str) -> bool {
        self.escapes.is_match(lexeme)
    }

    /// Resolves the category a rule assigns to the lexeme it matched.
    pub fn classify(&self, action: Action, lexeme: &str) -> Category {
        match action {
            Action::Emit(category) => category,
            Action::IdentOrKeyword if self.is_keyword(lexeme) => Category::Keyword,
            Action::IdentOrKeyword => Category::Identifier,
            Action::Symbols if self.is_operator(lexeme) => Category::Operator,
            Action::Symbols => Category::Delimiter,
            Action::Bracket if BRACKET_PAIRS.iter().any(|(open, _)| lexeme.starts_with(*open)) => {
                Category::BracketOpen
            }
            Action::Bracket => Category::BracketClose,
        }
    }
}

/// Editor behaviour that comes with the grammar: bracket matching and
/// auto-closing.
#[derive(Debug, Clone, Serialize)]
pub struct LanguageConfig {
    pub brackets: Vec<(char, char)>,
    pub auto_closing_pairs: Vec<(char, char)>,
    pub surrounding_pairs: Vec<(char, char)>,
}

pub fn language_config() -> LanguageConfig {
    LanguageConfig {
        brackets: BRACKET_PAIRS.to_vec(),
        auto_closing_pairs: AUTO_CLOSING_PAIRS.to_vec(),
        surrounding_pairs: AUTO_CLOSING_PAIRS.to_vec(),
    }
}
