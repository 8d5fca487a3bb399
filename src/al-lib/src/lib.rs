pub mod bridge;
pub mod completion;
pub mod editor;
pub mod error;
pub mod logger;
pub mod playground;
pub mod samples;
pub mod syntax;

pub use bridge::{
    DisplaySink, ExecutionBridge, ExecutionModule, Notification, OutputRecord, RunHandle,
    SessionId, SessionStatus, TerminalPanel, Transcript,
};
pub use completion::{complete, Suggestion, SuggestionKind};
pub use editor::{Editor, TextBuffer, WordAt};
pub use error::{BridgeError, ModuleError, SampleError};
pub use playground::Playground;
pub use syntax::{tokenize, tokenize_lines, Category, LexerState, Token, Tokenized};
