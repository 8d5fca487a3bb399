use crate::error::ModuleError;
use serde::Serialize;
use tokio::sync::mpsc;

/// One piece of output raised by a running program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub text: String,
}

impl Notification {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Output of one run, in emission order. The run is over once every
/// [`OutputEmitter`] for it has been dropped.
pub type OutputStream = mpsc::UnboundedReceiver<Notification>;
pub type OutputEmitter = mpsc::UnboundedSender<Notification>;

pub fn output_channel() -> (OutputEmitter, OutputStream) {
    mpsc::unbounded_channel()
}

/// Sends `text` on `emitter`. Returns false once nobody is listening, which a
/// module may use to stop early but is free to ignore.
pub fn emit(emitter: &OutputEmitter, text: impl Into<String>) -> bool {
    emitter.send(Notification::new(text)).is_ok()
}

/// The interpreter the playground hands programs to.
pub trait ExecutionModule {
    /// Starts running `source` and returns its output. An error means the
    /// module could not be invoked at all; faults inside the program are
    /// reported as ordinary output instead.
    fn execute(&self, source: &str) -> Result<OutputStream, ModuleError>;
}
