use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::core::error::AlError;
use al_lib::{complete, Editor, TextBuffer, WordAt};
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    #[arg(
        short = 'w',
        long = "word",
        help = "Word under the cursor",
        default_value = "",
        conflicts_with = "position"
    )]
    pub word: String,

    #[arg(
        short = 'p',
        long = "position",
        help = "Byte offset of the cursor in the source; the word there is completed"
    )]
    pub position: Option<usize>,

    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_complete(args: &CompleteArgs) -> Result<(), Box<dyn std::error::Error>> {
    let word = match args.position {
        Some(position) => {
            let text = args.source.load()?;
            if position > text.len() {
                return Err(AlError::Validation(format!(
                    "Position {position} is past the end of the source ({} bytes)",
                    text.len()
                ))
                .into());
            }
            TextBuffer::new(text).word_at(position)
        }
        None => WordAt {
            text: args.word.clone(),
            start: 0,
            end: args.word.len(),
        },
    };

    let formatter = crate::core::formatter::get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(&complete(&word), "", "No suggestions")
    );
    Ok(())
}
