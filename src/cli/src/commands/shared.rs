use crate::commands::validators;
use crate::core::error::AlError;
use crate::core::formatter::OutputFormat;
use al_lib::samples;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
#[group(multiple = false)]
pub struct SourceArgs {
    #[arg(
        short = 's',
        long = "source",
        help = "Path to an AntiLang source file",
        value_parser = validators::validate_path_exists
    )]
    pub source: Option<String>,

    #[arg(
        long = "sample",
        help = "Use a bundled sample program instead of a file",
        value_parser = validators::validate_name
    )]
    pub sample: Option<String>,
}

impl SourceArgs {
    /// The program text to work on; the default sample when neither a file
    /// nor a sample was given.
    pub fn load(&self) -> Result<String, AlError> {
        if let Some(path) = &self.source {
            return Ok(std::fs::read_to_string(path)?);
        }
        let name = self.sample.as_deref().unwrap_or(samples::DEFAULT_SAMPLE);
        samples::source_for(name)
            .map(str::to_string)
            .ok_or_else(|| AlError::Sample(al_lib::SampleError::new(name.to_string())))
    }
}
