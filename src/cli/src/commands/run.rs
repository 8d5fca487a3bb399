use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::core::error::AlError;
use crate::core::formatter::OutputFormat;
use crate::display::StdoutSink;
use crate::module::ProcessModule;
use al_lib::{
    DisplaySink, ExecutionBridge, ExecutionModule, OutputRecord, SessionId, SessionStatus,
    Transcript,
};
use clap::Args;
use serde::Serialize;
use std::rc::Rc;
use tokio::task::LocalSet;

#[derive(Serialize)]
pub struct RunResultView {
    pub session: SessionId,
    pub status: SessionStatus,
    pub records: Vec<OutputRecord>,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(
        short = 'm',
        long = "module",
        env = "AL_MODULE",
        default_value = "anti-lang",
        help = "Program that executes AntiLang source read from stdin"
    )]
    pub module: String,

    #[arg(
        long = "module-arg",
        value_name = "ARG",
        allow_hyphen_values = true,
        default_values_t = vec!["run".to_string(), "/dev/stdin".to_string()],
        help = "Argument passed to the module program (repeatable)"
    )]
    pub module_args: Vec<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Runs `source` to completion on `display`, returning the bridge so the
/// caller can inspect the final session.
async fn run_to_completion<S: DisplaySink + 'static>(
    display: S,
    module: Rc<dyn ExecutionModule>,
    source: &str,
) -> Result<(ExecutionBridge<S>, SessionId, SessionStatus), AlError> {
    let bridge = ExecutionBridge::with_module(display, module);
    let handle = bridge.run(source)?;
    let id = handle.id;
    let status = handle.finished().await;
    Ok((bridge, id, status))
}

pub async fn execute_run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let source = args.source.load()?;
    let module: Rc<dyn ExecutionModule> =
        Rc::new(ProcessModule::new(&args.module, &args.module_args));

    LocalSet::new()
        .run_until(async move {
            match args.output.output {
                OutputFormat::Text => {
                    run_to_completion(StdoutSink::new(), module, &source).await?;
                }
                OutputFormat::Json => {
                    let (bridge, session, status) =
                        run_to_completion(Transcript::new(), module, &source).await?;
                    let view = RunResultView {
                        session,
                        status,
                        records: bridge.records(),
                    };
                    let formatter = crate::core::formatter::get_formatter(&args.output.output);
                    print!("{}", formatter.format(&view));
                }
            }
            Ok::<(), AlError>(())
        })
        .await?;
    Ok(())
}
