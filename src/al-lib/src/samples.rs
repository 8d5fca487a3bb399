use crate::editor::Editor;
use crate::error::SampleError;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sample {
    pub name: &'static str,
    pub description: &'static str,
    pub source: &'static str,
}

const FIZZBUZZ: &str = r#"{} main func [
    ,100 = count let
    ,0 = i let

    {count > i} while [
        {i % 3 == 0 && i % 5 == 0} if [
            ,{$It’s a FizzBuzz moment, boys!$}print
        ] {i % 3 == 0} if else [
            ,{$Fizz is life, Buzz is overhyped$}print
        ] {i % 5 == 0} if else [
            ,{$Buzzfeed has nothing on this$}print
        ] else [
            ,{$This is awkward... Why not just $ + i + $?$}print
        ]

        ,1 += i
    ]

    ,0 return
]

,{}main"#;

const HELLO: &str = r#",{$Hello, AntiLang!\n$}print"#;

const FUNCTIONS: &str = r#"/** Adds its two arguments. */
{a; b} add func [
    ,a + b return
]

,{{2; 3}add}print"#;

const COUNTDOWN: &str = r#",10 = n let

// counts down before launch
{n > 0} while [
    ,{n}print
    ,1 -= n
]

,{$Liftoff!$}print"#;

const SAMPLES: &[Sample] = &[
    Sample {
        name: "fizzbuzz",
        description: "FizzBuzz up to 100",
        source: FIZZBUZZ,
    },
    Sample {
        name: "hello",
        description: "Print a greeting",
        source: HELLO,
    },
    Sample {
        name: "functions",
        description: "Define and call a function",
        source: FUNCTIONS,
    },
    Sample {
        name: "countdown",
        description: "A while loop counting down",
        source: COUNTDOWN,
    },
];

/// The program an empty playground opens with.
pub const DEFAULT_SAMPLE: &str = "fizzbuzz";

pub fn samples() -> &'static [Sample] {
    SAMPLES
}

pub fn names() -> Vec<&'static str> {
    SAMPLES.iter().map(|sample| sample.name).collect()
}

pub fn source_for(name: &str) -> Option<&'static str> {
    SAMPLES
        .iter()
        .find(|sample| sample.name == name)
        .map(|sample| sample.source)
}

/// Replaces the editor contents with the named sample.
pub fn load_sample<E: Editor + ?Sized>(editor: &mut E, name: &str) -> Result<(), SampleError> {
    let source = source_for(name).ok_or_else(|| SampleError::new(name.to_string()))?;
    editor.set_text(source);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::TextBuffer;
    use crate::syntax::{tokenize, LexerState};

    #[test]
    fn test_names_are_ordered_and_unique() {
        let names = names();
        assert_eq!(names[0], DEFAULT_SAMPLE);
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names, deduped);
    }

    #[test]
    fn test_load_sample_replaces_editor_text() {
        let mut editor = TextBuffer::new("old text");
        load_sample(&mut editor, "hello").unwrap();
        assert_eq!(editor.text(), HELLO);
    }

    #[test]
    fn test_unknown_sample_leaves_editor_alone() {
        let mut editor = TextBuffer::new("old text");
        let err = load_sample(&mut editor, "missing").unwrap_err();
        assert_eq!(err.to_string(), "Sample not found: missing");
        assert_eq!(editor.text(), "old text");
    }

    #[test]
    fn test_samples_lex_without_anomalies() {
        for sample in samples() {
            let result = tokenize(sample.source, LexerState::Root);
            assert_eq!(result.end_state, LexerState::Root, "{}", sample.name);
            assert!(
                result.tokens.iter().all(|t| !t.category.is_anomaly()),
                "{} has anomalous tokens",
                sample.name
            );
        }
    }
}
