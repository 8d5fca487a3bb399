//! Turns a "run" press into a live stream of output on a display sink.
//!
//! Every run gets its own [`RunSession`] and its own relay task. Starting a
//! new run supersedes the old session: the old module may keep emitting, but
//! its relay drops everything it receives from then on. Sessions are told
//! apart by id, so nothing needs to reach back and cancel the producer.
//!
//! All of this runs on one thread. The sink and the current session sit in
//! an `Rc<RefCell<_>>` that only the bridge and its relay tasks touch, and no
//! borrow is held across an await.

pub mod display;
pub mod module;
pub mod session;

pub use display::{DisplaySink, TerminalPanel, Transcript};
pub use module::{emit, output_channel, ExecutionModule, Notification, OutputEmitter, OutputStream};
pub use session::{OutputRecord, RunSession, SessionId, SessionStatus};

use crate::debug_log;
use crate::error::BridgeError;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use tokio::sync::oneshot;

struct Shared<S> {
    display: S,
    session: Option<RunSession>,
    next_id: u64,
}

impl<S: DisplaySink> Shared<S> {
    /// Relays `text` if `id` is still the running session.
    fn accept(&mut self, id: SessionId, text: String) -> bool {
        match self.session.as_mut() {
            Some(session) if session.id == id && session.is_running() => {
                let record = session.record(text);
                self.display.append(&record.text);
                true
            }
            _ => false,
        }
    }

    fn finish(&mut self, id: SessionId) -> SessionStatus {
        match self.session.as_mut() {
            Some(session) if session.id == id => {
                session.status = SessionStatus::Completed;
                SessionStatus::Completed
            }
            _ => SessionStatus::Superseded,
        }
    }
}

/// Returned by [`ExecutionBridge::run`]. Dropping it does not affect the run.
#[derive(Debug)]
pub struct RunHandle {
    pub id: SessionId,
    done: oneshot::Receiver<SessionStatus>,
}

impl RunHandle {
    /// Waits until the module stops emitting for this run.
    pub async fn finished(self) -> SessionStatus {
        self.done.await.unwrap_or(SessionStatus::Superseded)
    }
}

pub struct ExecutionBridge<S> {
    module: Option<Rc<dyn ExecutionModule>>,
    shared: Rc<RefCell<Shared<S>>>,
}

impl<S: DisplaySink + 'static> ExecutionBridge<S> {
    pub fn new(display: S) -> Self {
        Self {
            module: None,
            shared: Rc::new(RefCell::new(Shared {
                display,
                session: None,
                next_id: 0,
            })),
        }
    }

    pub fn with_module(display: S, module: Rc<dyn ExecutionModule>) -> Self {
        let mut bridge = Self::new(display);
        bridge.attach(module);
        bridge
    }

    /// Installs the execution module once it has finished loading.
    pub fn attach(&mut self, module: Rc<dyn ExecutionModule>) {
        self.module = Some(module);
    }

    pub fn is_ready(&self) -> bool {
        self.module.is_some()
    }

    /// Starts running `source` and returns without waiting for output.
    ///
    /// The module is invoked first; if it cannot start, the previous session
    /// and the display are left exactly as they were. Otherwise the previous
    /// session is superseded, the display cleared, and a relay task spawned
    /// that forwards output as it arrives.
    ///
    /// # Panics
    ///
    /// On native targets this spawns with `tokio::task::spawn_local`, so it
    /// must be called from inside a `tokio::task::LocalSet`.
    pub fn run(&self, source: &str) -> Result<RunHandle, BridgeError> {
        let Some(module) = self.module.as_ref() else {
            debug_log!("Run requested before the execution module was attached");
            return Err(BridgeError::ModuleNotReady);
        };
        let stream = module.execute(source).map_err(|err| {
            debug_log!("Execution module failed to start: {err}");
            BridgeError::from(err)
        })?;

        let id = {
            let mut shared = self.shared.borrow_mut();
            shared.next_id += 1;
            let id = SessionId(shared.next_id);
            if let Some(previous) = shared.session.as_mut() {
                if previous.is_running() {
                    previous.status = SessionStatus::Superseded;
                    debug_log!("Session {} superseded by {id}", previous.id);
                }
            }
            shared.session = Some(RunSession::new(id, source));
            shared.display.clear();
            id
        };
        debug_log!("Session {id} started ({} bytes of source)", source.len());

        let (done_tx, done) = oneshot::channel();
        spawn_relay(relay(Rc::clone(&self.shared), id, stream, done_tx));
        Ok(RunHandle { id, done })
    }

    /// The id the next successful `run` will assign. A run whose module
    /// fails to start does not use it up.
    pub fn next_session_id(&self) -> SessionId {
        SessionId(self.shared.borrow().next_id + 1)
    }

    pub fn current_session(&self) -> Option<SessionId> {
        self.shared.borrow().session.as_ref().map(|session| session.id)
    }

    pub fn status(&self) -> Option<SessionStatus> {
        self.shared.borrow().session.as_ref().map(|session| session.status)
    }

    /// Output records of the current session, in sequence order.
    pub fn records(&self) -> Vec<OutputRecord> {
        self.shared
            .borrow()
            .session
            .as_ref()
            .map(|session| session.records().to_vec())
            .unwrap_or_default()
    }

    pub fn with_display<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.shared.borrow_mut().display)
    }
}

async fn relay<S: DisplaySink>(
    shared: Rc<RefCell<Shared<S>>>,
    id: SessionId,
    mut stream: OutputStream,
    done: oneshot::Sender<SessionStatus>,
) {
    let mut dropped = 0usize;
    while let Some(notification) = stream.recv().await {
        if !shared.borrow_mut().accept(id, notification.text) {
            dropped += 1;
        }
    }
    if dropped > 0 {
        debug_log!("Session {id} dropped {dropped} late notification(s)");
    }
    let status = shared.borrow_mut().finish(id);
    debug_log!("Session {id} finished: {status:?}");
    let _ = done.send(status);
}

#[cfg(not(target_arch = "wasm32"))]
fn spawn_relay<F: Future<Output = ()> + 'static>(future: F) {
    tokio::task::spawn_local(future);
}

#[cfg(target_arch = "wasm32")]
fn spawn_relay<F: Future<Output = ()> + 'static>(future: F) {
    wasm_bindgen_futures::spawn_local(future);
}
