use al_lib::bridge::{emit, output_channel, OutputEmitter, OutputStream};
use al_lib::debug_log;
use al_lib::{ExecutionModule, ModuleError};
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tokio::process::Command;

/// Runs programs by piping them into an external interpreter process.
///
/// Every line the child writes to stdout or stderr becomes one notification,
/// newline included. The run ends when both pipes close. A superseded child
/// is left to finish on its own.
pub struct ProcessModule {
    program: String,
    args: Vec<String>,
}

impl ProcessModule {
    pub fn new(program: &str, args: &[String]) -> Self {
        Self {
            program: program.to_string(),
            args: args.to_vec(),
        }
    }
}

impl ExecutionModule for ProcessModule {
    fn execute(&self, source: &str) -> Result<OutputStream, ModuleError> {
        debug_log!("Starting execution module: {} {:?}", self.program, self.args);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ModuleError::new(format!("{}: {e}", self.program)))?;

        let (tx, rx) = output_channel();

        if let Some(mut stdin) = child.stdin.take() {
            let source = source.to_string();
            tokio::task::spawn_local(async move {
                if let Err(e) = stdin.write_all(source.as_bytes()).await {
                    debug_log!("Failed to send source to execution module: {e}");
                }
            });
        }
        if let Some(stderr) = child.stderr.take() {
            tokio::task::spawn_local(forward_lines(stderr, tx.clone()));
        }
        if let Some(stdout) = child.stdout.take() {
            tokio::task::spawn_local(forward_lines(stdout, tx));
        }
        tokio::task::spawn_local(async move {
            match child.wait().await {
                Ok(status) => debug_log!("Execution module exited: {status}"),
                Err(e) => debug_log!("Failed to wait for execution module: {e}"),
            }
        });

        Ok(rx)
    }
}

async fn forward_lines<R: AsyncRead + Unpin>(reader: R, emitter: OutputEmitter) {
    let mut reader = BufReader::new(reader);
    let mut line = Vec::new();
    loop {
        line.clear();
        match reader.read_until(b'\n', &mut line).await {
            Ok(0) => break,
            Ok(_) => {
                emit(&emitter, String::from_utf8_lossy(&line));
            }
            Err(e) => {
                debug_log!("Failed to read execution module output: {e}");
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::LocalSet;

    #[tokio::test]
    async fn test_missing_program_is_a_module_error() {
        let module = ProcessModule::new("/definitely/not/an/interpreter", &[]);
        let err = module.execute("x").unwrap_err();
        assert!(err.message.contains("/definitely/not/an/interpreter"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_output_lines_arrive_in_order() {
        LocalSet::new()
            .run_until(async {
                let module = ProcessModule::new("cat", &[]);
                let mut stream = module.execute("one\ntwo\nthree").unwrap();
                let mut lines = Vec::new();
                while let Some(notification) = stream.recv().await {
                    lines.push(notification.text);
                }
                assert_eq!(lines, vec!["one\n", "two\n", "three"]);
            })
            .await;
    }
}
