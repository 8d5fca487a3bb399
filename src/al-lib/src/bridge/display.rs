use serde::Serialize;

/// An ordered, append-only log the user watches.
pub trait DisplaySink {
    fn clear(&mut self);
    fn append(&mut self, text: &str);
}

/// Keeps everything appended since the last clear.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn text(&self) -> String {
        self.entries.concat()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DisplaySink for Transcript {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, text: &str) {
        self.entries.push(text.to_string());
    }
}

/// The terminal panel under the editor: a sink that can be shown and hidden.
/// Hiding never discards output.
#[derive(Debug, Clone, Default)]
pub struct TerminalPanel<S> {
    sink: S,
    visible: bool,
}

impl<S: DisplaySink> TerminalPanel<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            visible: false,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}

impl<S: DisplaySink> DisplaySink for TerminalPanel<S> {
    fn clear(&mut self) {
        self.sink.clear();
    }

    fn append(&mut self, text: &str) {
        self.sink.append(text);
    }
}
