pub mod complete;
pub mod run;
pub mod sample;
pub mod shared;
pub mod tokenize;
pub mod validators;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Classify source text into highlighting tokens")]
    Tokenize(tokenize::TokenizeArgs),
    #[command(about = "List completion suggestions")]
    Complete(complete::CompleteArgs),
    Sample(sample::SampleCommand),
    #[command(about = "Run a program through the execution module")]
    Run(run::RunArgs),
}
