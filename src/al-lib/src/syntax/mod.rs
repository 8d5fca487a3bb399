pub mod keywords;
pub mod rules;
pub mod token;
pub mod tokenize;

pub use rules::{language_config, rule_table, LanguageConfig, LexerState, RuleTable};
pub use token::{Category, Token};
pub use tokenize::{tokenize, tokenize_lines, LineTokens, Tokenized};
