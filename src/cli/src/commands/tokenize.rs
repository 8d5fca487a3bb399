use crate::commands::shared::{OutputArgs, SourceArgs};
use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use al_lib::syntax::{tokenize, tokenize_lines, LexerState, Token};
use clap::Args;

#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(
        long = "state",
        help = "Lexer state to start in (root, whitespace, comment, doc-comment, string-body)",
        default_value = "root",
        value_parser = validators::validate_state
    )]
    pub state: LexerState,

    #[arg(long = "lines", help = "Lex line by line, reporting the state at each line end")]
    pub lines: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn render_token(token: &Token) -> String {
    format!(
        "{:>5}..{:<5} {:<22} {:?}\n",
        token.span.start,
        token.span.end,
        token.category.to_string(),
        token.lexeme
    )
}

pub fn execute_tokenize(args: &TokenizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = args.source.load()?;
    let formatter = crate::core::formatter::get_formatter(&args.output.output);

    if args.lines {
        let lines = tokenize_lines(&text, args.state);
        match args.output.output {
            OutputFormat::Json => print!("{}", formatter.format(&lines)),
            OutputFormat::Text => {
                for line in &lines {
                    println!("line {} ({} -> {})", line.line + 1, line.start_state, line.end_state);
                    for token in &line.tokens {
                        print!("{}", render_token(token));
                    }
                }
            }
        }
        return Ok(());
    }

    let result = tokenize(&text, args.state);
    match args.output.output {
        OutputFormat::Json => print!("{}", formatter.format(&result)),
        OutputFormat::Text => {
            for token in &result.tokens {
                print!("{}", render_token(token));
            }
            println!("end state: {}", result.end_state);
        }
    }
    Ok(())
}
