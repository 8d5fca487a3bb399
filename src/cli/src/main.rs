use al_lib::logger::Logger;
use clap::Parser;

mod commands;
mod core;
mod display;
mod module;

use commands::Commands;
use core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "al")]
#[command(about = "AntiLang playground: highlight, complete and run AntiLang programs.")]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    Logger::init(args.debug);
    Logger::debug(&crate::core::version::app_banner());

    match args.command {
        Commands::Tokenize(tokenize_args) => commands::tokenize::execute_tokenize(&tokenize_args),
        Commands::Complete(complete_args) => commands::complete::execute_complete(&complete_args),
        Commands::Sample(sample_command) => match sample_command.command {
            commands::sample::SampleSubcommand::List(list_args) => {
                commands::sample::execute_list(&list_args)
            }
            commands::sample::SampleSubcommand::Show(show_args) => {
                commands::sample::execute_show(&show_args)
            }
        },
        Commands::Run(run_args) => commands::run::execute_run(&run_args).await,
    }
}
