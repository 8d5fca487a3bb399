use crate::commands::shared::OutputArgs;
use crate::commands::validators;
use crate::core::error::AlError;
use crate::core::formatter::OutputFormat;
use al_lib::{samples, SampleError};
use clap::{Args, Subcommand};
use serde::Serialize;

#[derive(Serialize)]
pub struct SampleListEntry {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Args)]
#[command(name = "sample")]
#[command(about = "Browse the bundled sample programs")]
pub struct SampleCommand {
    #[command(subcommand)]
    pub command: SampleSubcommand,
}

#[derive(Subcommand)]
pub enum SampleSubcommand {
    #[command(about = "List sample programs")]
    List(ListArgs),
    #[command(about = "Print a sample program")]
    Show(ShowArgs),
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(
        short = 'n',
        long = "name",
        help = "Name of the sample",
        value_parser = validators::validate_name
    )]
    pub name: String,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_list(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let entries: Vec<SampleListEntry> = samples::samples()
        .iter()
        .map(|sample| SampleListEntry {
            name: sample.name,
            description: sample.description,
        })
        .collect();

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(&entries, "Samples:", "No samples available")
    );
    Ok(())
}

pub fn execute_show(args: &ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let sample = samples::samples()
        .iter()
        .find(|sample| sample.name == args.name)
        .ok_or_else(|| AlError::Sample(SampleError::new(args.name.clone())))?;

    match args.output.output {
        OutputFormat::Text => println!("{}", sample.source),
        OutputFormat::Json => {
            let formatter = crate::core::formatter::get_formatter(&args.output.output);
            print!("{}", formatter.format(sample));
        }
    }
    Ok(())
}
