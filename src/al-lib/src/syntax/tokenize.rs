use super::{
    rules::{rule_table, LexerState},
    token::{Category, Token},
};
use crate::debug_log;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tokenized {
    pub tokens: Vec<Token>,
    pub end_state: LexerState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTokens {
    pub line: usize,
    pub start_state: LexerState,
    pub tokens: Vec<Token>,
    pub end_state: LexerState,
}

/// Classifies every character of `input`, starting in `start`.
///
/// The first rule of the active state that matches at the cursor wins, even
/// when a later rule would match more text. Input no rule accepts becomes a
/// one-character `Unknown` token, so the result always covers `input`
/// exactly and this never fails.
pub fn tokenize(input: &str, start: LexerState) -> Tokenized {
    let table = rule_table();
    let mut tokens = Vec::new();
    let mut state = start;
    let mut position = 0;
    let mut remaining = input;
    while !remaining.is_empty() {
        let rule_set = table.rules(state);
        let matched = rule_set
            .rules
            .iter()
            .find_map(|rule| rule.match_at(remaining).map(|lexeme| (rule, lexeme)));

        let (category, len) = match matched {
            Some((rule, lexeme)) => {
                state = rule.transition().apply(state);
                (table.classify(rule.action(), lexeme), lexeme.len())
            }
            None => {
                if let Some(fallback) = rule_set.fallback {
                    state = fallback;
                    continue;
                }
                let len = remaining.chars().next().map_or(1, char::len_utf8);
                debug_log!("No rule matched in state {state} at offset {position}");
                (Category::Unknown, len)
            }
        };

        tokens.push(Token {
            category,
            lexeme: remaining[..len].to_string(),
            span: position..position + len,
        });
        position += len;
        remaining = &remaining[len..];
    }
    Tokenized {
        tokens,
        end_state: state,
    }
}

/// Lexes one line at a time, carrying the state across line breaks. Each
/// line's `start_state` is a valid point to resume lexing from after an edit.
pub fn tokenize_lines(input: &str, start: LexerState) -> Vec<LineTokens> {
    let mut lines = Vec::new();
    let mut state = start;
    let mut offset = 0;
    for (line, text) in input.split_inclusive('\n').enumerate() {
        let Tokenized { tokens, end_state } = tokenize(text, state);
        let tokens = tokens
            .into_iter()
            .map(|token| Token {
                span: token.span.start + offset..token.span.end + offset,
                ..token
            })
            .collect();
        lines.push(LineTokens {
            line,
            start_state: state,
            tokens,
            end_state,
        });
        state = end_state;
        offset += text.len();
    }
    lines
}
