use serde::Serialize;

/// The word around a cursor, as byte offsets into the editor text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordAt {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// What the playground needs from an editor widget.
pub trait Editor {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn word_at(&self, position: usize) -> WordAt;
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Plain in-memory editor contents, for front ends without a widget of
/// their own.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Editor for TextBuffer {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn word_at(&self, position: usize) -> WordAt {
        let mut cursor = position.min(self.text.len());
        while !self.text.is_char_boundary(cursor) {
            cursor -= 1;
        }

        let start = self.text[..cursor]
            .char_indices()
            .rev()
            .take_while(|(_, c)| is_word_char(*c))
            .last()
            .map_or(cursor, |(i, _)| i);
        let end = self.text[cursor..]
            .char_indices()
            .find(|(_, c)| !is_word_char(*c))
            .map_or(self.text.len(), |(i, _)| cursor + i);

        WordAt {
            text: self.text[start..end].to_string(),
            start,
            end,
        }
    }
}
