use crate::bridge::{DisplaySink, ExecutionBridge, ExecutionModule, RunHandle, TerminalPanel};
use crate::completion::{complete, Suggestion};
use crate::editor::Editor;
use crate::error::{BridgeError, SampleError};
use crate::samples;
use crate::syntax::{tokenize, LexerState, Tokenized};
use std::rc::Rc;

/// The page shell: an editor, a terminal panel, and the bridge between them.
pub struct Playground<E, S> {
    editor: E,
    bridge: ExecutionBridge<TerminalPanel<S>>,
}

impl<E: Editor, S: DisplaySink + 'static> Playground<E, S> {
    pub fn new(editor: E, display: S) -> Self {
        Self {
            editor,
            bridge: ExecutionBridge::new(TerminalPanel::new(display)),
        }
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    pub fn bridge(&self) -> &ExecutionBridge<TerminalPanel<S>> {
        &self.bridge
    }

    pub fn attach_module(&mut self, module: Rc<dyn ExecutionModule>) {
        self.bridge.attach(module);
    }

    pub fn is_ready(&self) -> bool {
        self.bridge.is_ready()
    }

    /// Runs whatever is in the editor and pops the terminal open.
    pub fn run(&self) -> Result<RunHandle, BridgeError> {
        let handle = self.bridge.run(&self.editor.text())?;
        self.bridge.with_display(|terminal| terminal.show());
        Ok(handle)
    }

    pub fn select_sample(&mut self, name: &str) -> Result<(), SampleError> {
        samples::load_sample(&mut self.editor, name)
    }

    pub fn complete_at(&self, position: usize) -> Vec<Suggestion> {
        complete(&self.editor.word_at(position))
    }

    pub fn highlight(&self) -> Tokenized {
        tokenize(&self.editor.text(), LexerState::Root)
    }

    pub fn terminal_visible(&self) -> bool {
        self.bridge.with_display(|terminal| terminal.is_visible())
    }

    pub fn close_terminal(&self) {
        self.bridge.with_display(|terminal| terminal.hide());
    }

    pub fn clear_terminal(&self) {
        self.bridge.with_display(|terminal| terminal.clear());
    }
}
