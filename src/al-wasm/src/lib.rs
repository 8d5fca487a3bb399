//! Browser bindings for the AntiLang playground.
//!
//! Results that carry structure cross the boundary as JSON strings so the
//! page can hand them straight to the editor. The interpreter itself stays on
//! the JS side: [`WebPlayground::attach_module`] takes the function that
//! starts it, and the page forwards each line the interpreter prints through
//! [`WebPlayground::push_output`].

use al_lib::bridge::{emit, output_channel, OutputEmitter, OutputStream};
use al_lib::syntax::{language_config as grammar_config, tokenize_lines as lex_lines};
use al_lib::{
    complete as complete_word, samples, Category, DisplaySink, Editor, ExecutionModule, LexerState,
    ModuleError, Playground, TextBuffer,
};
use serde::Serialize;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn parse_state(state: &str) -> Result<LexerState, JsValue> {
    if state.is_empty() {
        return Ok(LexerState::Root);
    }
    state.parse().map_err(|e: String| JsValue::from_str(&e))
}

/// Tokens of `text` lexed from `state` (empty means root), as JSON.
#[wasm_bindgen]
pub fn tokenize(text: &str, state: &str) -> Result<String, JsValue> {
    to_json(&al_lib::tokenize(text, parse_state(state)?))
}

/// Per-line tokens with the state at each line boundary, as JSON.
#[wasm_bindgen(js_name = tokenizeLines)]
pub fn tokenize_lines(text: &str, state: &str) -> Result<String, JsValue> {
    to_json(&lex_lines(text, parse_state(state)?))
}

/// One highlighted range for the editor: a dotted theme scope over a byte
/// range of the text.
#[derive(Serialize)]
struct ScopedRange {
    scope: &'static str,
    start: usize,
    end: usize,
    bracket: bool,
}

/// Highlight ranges for `text`, whitespace left out, as JSON.
#[wasm_bindgen]
pub fn scopes(text: &str, state: &str) -> Result<String, JsValue> {
    let ranges: Vec<ScopedRange> = al_lib::tokenize(text, parse_state(state)?)
        .tokens
        .iter()
        .filter(|token| token.category != Category::Whitespace)
        .map(|token| ScopedRange {
            scope: token.category.scope(),
            start: token.span.start,
            end: token.span.end,
            bracket: token.category.is_bracket(),
        })
        .collect();
    to_json(&ranges)
}

/// Completions for the word around byte offset `position` in `text`.
#[wasm_bindgen]
pub fn complete(text: &str, position: usize) -> Result<String, JsValue> {
    let word = TextBuffer::new(text).word_at(position);
    to_json(&complete_word(&word))
}

#[wasm_bindgen(js_name = languageConfig)]
pub fn language_config() -> Result<String, JsValue> {
    to_json(&grammar_config())
}

#[wasm_bindgen(js_name = sampleNames)]
pub fn sample_names() -> Result<String, JsValue> {
    to_json(&samples::names())
}

#[wasm_bindgen(js_name = sampleSource)]
pub fn sample_source(name: &str) -> Result<String, JsValue> {
    samples::source_for(name)
        .map(str::to_string)
        .ok_or_else(|| JsValue::from_str(&format!("Sample not found: {name}")))
}

/// Terminal element callbacks supplied by the page.
struct JsSink {
    clear: js_sys::Function,
    append: js_sys::Function,
}

impl DisplaySink for JsSink {
    fn clear(&mut self) {
        if let Err(err) = self.clear.call0(&JsValue::NULL) {
            al_lib::debug_log!("Terminal clear callback threw: {err:?}");
        }
    }

    fn append(&mut self, text: &str) {
        if let Err(err) = self.append.call1(&JsValue::NULL, &JsValue::from_str(text)) {
            al_lib::debug_log!("Terminal append callback threw: {err:?}");
        }
    }
}

/// Routes output the page pushes to the run it was tagged with.
///
/// Run ids are the bridge's session ids: [`WebPlayground::run`] records the
/// id the bridge is about to assign in `starting` before the module is
/// invoked. Only the newest run holds an emitter, so text tagged with any
/// other id is dropped.
#[derive(Default)]
struct OutputRouter {
    starting: Option<u64>,
    current: Option<(u64, OutputEmitter)>,
}

impl OutputRouter {
    /// Makes `run` the run that receives output. Returns its stream and the
    /// route it replaced, which [`OutputRouter::restore`] puts back if the
    /// run fails to start.
    fn open(&mut self, run: u64) -> (OutputStream, Option<(u64, OutputEmitter)>) {
        let (emitter, stream) = output_channel();
        (stream, self.current.replace((run, emitter)))
    }

    fn restore(&mut self, previous: Option<(u64, OutputEmitter)>) {
        self.current = previous;
    }

    fn push(&self, run: u64, text: &str) -> bool {
        match &self.current {
            Some((current, emitter)) if *current == run => emit(emitter, text),
            _ => false,
        }
    }

    /// Ends the stream of `run` unless a newer run replaced it.
    fn release(&mut self, run: u64) {
        if matches!(self.current, Some((current, _)) if current == run) {
            self.current = None;
        }
    }
}

/// Starts the interpreter by calling `execute(source, run)` in JS.
///
/// If that function returns a promise the run lasts until it settles,
/// otherwise it is over as soon as the call returns.
struct JsModule {
    execute: js_sys::Function,
    router: Rc<RefCell<OutputRouter>>,
}

impl ExecutionModule for JsModule {
    fn execute(&self, source: &str) -> Result<OutputStream, ModuleError> {
        let run = self
            .router
            .borrow_mut()
            .starting
            .take()
            .ok_or_else(|| ModuleError::new("no run id was reserved for this run".to_string()))?;
        let (stream, previous) = self.router.borrow_mut().open(run);

        let returned = match self.execute.call2(
            &JsValue::NULL,
            &JsValue::from_str(source),
            &JsValue::from_f64(run as f64),
        ) {
            Ok(returned) => returned,
            Err(err) => {
                self.router.borrow_mut().restore(previous);
                return Err(ModuleError::new(
                    err.as_string()
                        .unwrap_or_else(|| "execute callback threw".to_string()),
                ));
            }
        };
        drop(previous);

        match returned.dyn_into::<js_sys::Promise>() {
            Ok(promise) => {
                let router = Rc::clone(&self.router);
                wasm_bindgen_futures::spawn_local(async move {
                    if let Err(err) = JsFuture::from(promise).await {
                        al_lib::debug_log!("Execution promise rejected: {err:?}");
                    }
                    router.borrow_mut().release(run);
                });
            }
            Err(_) => self.router.borrow_mut().release(run),
        }
        Ok(stream)
    }
}

/// The playground page: editor text, terminal callbacks and the bridge to
/// the interpreter.
#[wasm_bindgen]
pub struct WebPlayground {
    inner: Playground<TextBuffer, JsSink>,
    router: Rc<RefCell<OutputRouter>>,
}

#[wasm_bindgen]
impl WebPlayground {
    /// `clear()` empties the terminal element and `append(text)` adds to it.
    ///
    /// Both callbacks run while the playground holds its terminal state, so
    /// they must not call back into `run`, `terminalVisible` or
    /// `closeTerminal`; doing so panics with a `BorrowMutError`. Defer such
    /// calls with `queueMicrotask`. `pushOutput` is safe to call from them.
    #[wasm_bindgen(constructor)]
    pub fn new(clear: js_sys::Function, append: js_sys::Function) -> WebPlayground {
        let mut inner = Playground::new(TextBuffer::default(), JsSink { clear, append });
        if let Err(err) = inner.select_sample(samples::DEFAULT_SAMPLE) {
            al_lib::debug_log!("Default sample not loaded: {err}");
        }
        WebPlayground {
            inner,
            router: Rc::new(RefCell::new(OutputRouter::default())),
        }
    }

    /// Called once the interpreter has loaded. `execute(source, run)` starts
    /// a run and may return a promise that settles when the run ends; every
    /// line it prints goes to `pushOutput(run, text)`.
    #[wasm_bindgen(js_name = attachModule)]
    pub fn attach_module(&mut self, execute: js_sys::Function) {
        let module = JsModule {
            execute,
            router: Rc::clone(&self.router),
        };
        self.inner.attach_module(Rc::new(module));
    }

    #[wasm_bindgen(js_name = isReady)]
    pub fn is_ready(&self) -> bool {
        self.inner.is_ready()
    }

    pub fn text(&self) -> String {
        self.inner.editor().text()
    }

    #[wasm_bindgen(js_name = setText)]
    pub fn set_text(&mut self, text: &str) {
        self.inner.editor_mut().set_text(text);
    }

    #[wasm_bindgen(js_name = selectSample)]
    pub fn select_sample(&mut self, name: &str) -> Result<(), JsValue> {
        self.inner
            .select_sample(name)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Runs the editor contents and returns the run id, the same id the
    /// execute callback received.
    pub fn run(&self) -> Result<f64, JsValue> {
        let run = self.inner.bridge().next_session_id().0;
        self.router.borrow_mut().starting = Some(run);
        let started = self.inner.run();
        self.router.borrow_mut().starting = None;
        let handle = started.map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(handle.id.0 as f64)
    }

    /// Forwards one piece of output from run `run`. Returns false, and drops
    /// the text, unless `run` is the newest run and still accepting output.
    #[wasm_bindgen(js_name = pushOutput)]
    pub fn push_output(&self, run: f64, text: &str) -> bool {
        self.router.borrow().push(run as u64, text)
    }

    pub fn highlight(&self) -> Result<String, JsValue> {
        to_json(&self.inner.highlight())
    }

    #[wasm_bindgen(js_name = completeAt)]
    pub fn complete_at(&self, position: usize) -> Result<String, JsValue> {
        to_json(&self.inner.complete_at(position))
    }

    #[wasm_bindgen(js_name = terminalVisible)]
    pub fn terminal_visible(&self) -> bool {
        self.inner.terminal_visible()
    }

    #[wasm_bindgen(js_name = closeTerminal)]
    pub fn close_terminal(&self) {
        self.inner.close_terminal();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use al_lib::{ExecutionBridge, SessionStatus, Transcript};
    use tokio::task::LocalSet;

    fn drain(mut stream: OutputStream) -> Vec<String> {
        let mut texts = Vec::new();
        while let Ok(notification) = stream.try_recv() {
            texts.push(notification.text);
        }
        texts
    }

    /// Stands in for the page: reserves ids through the bridge and opens
    /// routes the way `JsModule` does, without calling into JS.
    struct PageModule {
        router: Rc<RefCell<OutputRouter>>,
        fail: bool,
    }

    impl ExecutionModule for PageModule {
        fn execute(&self, _source: &str) -> Result<OutputStream, ModuleError> {
            let run = self.router.borrow_mut().starting.take().unwrap();
            let (stream, previous) = self.router.borrow_mut().open(run);
            if self.fail {
                self.router.borrow_mut().restore(previous);
                return Err(ModuleError::new("threw".to_string()));
            }
            Ok(stream)
        }
    }

    fn start<S: DisplaySink + 'static>(
        bridge: &ExecutionBridge<S>,
        router: &Rc<RefCell<OutputRouter>>,
    ) -> Result<al_lib::RunHandle, al_lib::BridgeError> {
        router.borrow_mut().starting = Some(bridge.next_session_id().0);
        let started = bridge.run("src");
        router.borrow_mut().starting = None;
        started
    }

    #[test]
    fn test_output_tagged_with_old_run_is_dropped() {
        let mut router = OutputRouter::default();
        let (first, _) = router.open(1);
        let (second, replaced) = router.open(2);
        drop(replaced);

        assert!(!router.push(1, "a-late"));
        assert!(router.push(2, "b1"));
        assert!(!router.push(1, "a-later"));
        assert!(router.push(2, "b2"));

        assert!(drain(first).is_empty());
        assert_eq!(drain(second), vec!["b1", "b2"]);
    }

    #[test]
    fn test_failed_start_restores_previous_route() {
        let mut router = OutputRouter::default();
        let (first, _) = router.open(1);
        let (_second, replaced) = router.open(2);
        router.restore(replaced);

        assert!(router.push(1, "still running"));
        assert!(!router.push(2, "never started"));
        assert_eq!(drain(first), vec!["still running"]);
    }

    #[test]
    fn test_release_ignores_stale_run() {
        let mut router = OutputRouter::default();
        let (_stream, _) = router.open(2);
        router.release(1);
        assert!(router.push(2, "kept"));
        router.release(2);
        assert!(!router.push(2, "closed"));
    }

    #[tokio::test]
    async fn test_superseded_run_never_reaches_new_transcript() {
        LocalSet::new()
            .run_until(async {
                let router = Rc::new(RefCell::new(OutputRouter::default()));
                let module = Rc::new(PageModule {
                    router: Rc::clone(&router),
                    fail: false,
                });
                let bridge = ExecutionBridge::with_module(Transcript::new(), module);

                let first = start(&bridge, &router).unwrap();
                let second = start(&bridge, &router).unwrap();
                let (a, b) = (first.id.0, second.id.0);

                router.borrow().push(a, "a-late");
                router.borrow().push(b, "b1");
                router.borrow().push(a, "a-later");
                router.borrow().push(b, "b2");
                router.borrow_mut().release(b);

                assert_eq!(second.finished().await, SessionStatus::Completed);
                assert_eq!(first.finished().await, SessionStatus::Superseded);
                let shown = bridge.with_display(|display| display.entries().to_vec());
                assert_eq!(shown, vec!["b1", "b2"]);
            })
            .await;
    }

    #[tokio::test]
    async fn test_failed_start_keeps_run_ids_in_step() {
        LocalSet::new()
            .run_until(async {
                let router = Rc::new(RefCell::new(OutputRouter::default()));
                let broken = ExecutionBridge::with_module(
                    Transcript::new(),
                    Rc::new(PageModule {
                        router: Rc::clone(&router),
                        fail: true,
                    }),
                );
                assert!(start(&broken, &router).is_err());
                assert_eq!(broken.next_session_id().0, 1);

                let mut bridge = broken;
                bridge.attach(Rc::new(PageModule {
                    router: Rc::clone(&router),
                    fail: false,
                }));
                let handle = start(&bridge, &router).unwrap();
                assert_eq!(handle.id.0, 1);
                assert!(router.borrow().push(1, "out"));
                router.borrow_mut().release(1);
                handle.finished().await;
                assert_eq!(bridge.with_display(|display| display.text()), "out");
            })
            .await;
    }

    #[test]
    fn test_parse_state_defaults_to_root() {
        assert_eq!(parse_state("").ok(), Some(LexerState::Root));
        assert_eq!(parse_state("comment").ok(), Some(LexerState::Comment));
    }
}
