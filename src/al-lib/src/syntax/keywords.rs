pub const KW_LET: &str = "let";
pub const KW_FUNC: &str = "func";
pub const KW_WHILE: &str = "while";
pub const KW_RETURN: &str = "return";
pub const KW_NULL: &str = "null";
pub const KW_IF: &str = "if";
pub const KW_ELSE: &str = "else";
pub const KW_TRUE: &str = "true";
pub const KW_FALSE: &str = "false";
pub const ALL_KEYWORDS: &[&str] = &[
    KW_LET, KW_FUNC, KW_WHILE, KW_RETURN, KW_NULL, KW_IF, KW_ELSE, KW_TRUE, KW_FALSE,
];

pub const OP_PLUS: &str = "+";
pub const OP_MINUS: &str = "-";
pub const OP_STAR: &str = "*";
pub const OP_SLASH: &str = "/";
pub const OP_MOD: &str = "%";
pub const OP_PLUS_ASSIGN: &str = "+=";
pub const OP_MINUS_ASSIGN: &str = "-=";
pub const OP_STAR_ASSIGN: &str = "*=";
pub const OP_SLASH_ASSIGN: &str = "/=";
pub const OP_AND: &str = "&&";
pub const OP_OR: &str = "||";
pub const OP_EQ: &str = "==";
pub const OP_LT: &str = "<";
pub const OP_GT: &str = ">";
pub const OP_ASSIGN: &str = "=";
pub const OP_BANG: &str = "!";
pub const OP_NEQ: &str = "!=";
pub const OP_LTE: &str = "<=";
pub const OP_GTE: &str = ">=";
pub const ALL_OPERATORS: &[&str] = &[
    OP_PLUS,
    OP_MINUS,
    OP_STAR,
    OP_SLASH,
    OP_MOD,
    OP_PLUS_ASSIGN,
    OP_MINUS_ASSIGN,
    OP_STAR_ASSIGN,
    OP_SLASH_ASSIGN,
    OP_AND,
    OP_OR,
    OP_EQ,
    OP_LT,
    OP_GT,
    OP_ASSIGN,
    OP_BANG,
    OP_NEQ,
    OP_LTE,
    OP_GTE,
];

pub const STRING_DELIMITER: char = '$';

pub const BRACKET_PAIRS: &[(char, char)] = &[('{', '}'), ('[', ']'), ('(', ')')];

/// Pairs the editor closes automatically and wraps selections with.
pub const AUTO_CLOSING_PAIRS: &[(char, char)] = &[
    ('{', '}'),
    ('[', ']'),
    ('(', ')'),
    (STRING_DELIMITER, STRING_DELIMITER),
];
