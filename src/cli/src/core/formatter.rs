use clap::ValueEnum;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Strings with control characters are shown escaped so one value stays on
/// one line.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) if s.chars().any(char::is_control) => format!("{s:?}"),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn render_value(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Object(_) => format!("{pad}- {}\n", render_inline(item)),
                Value::Array(_) => format!("{pad}-\n{}", render_value(item, indent + 2)),
                _ => format!("{pad}- {}\n", render_scalar(item)),
            })
            .collect(),
        Value::Object(map) => {
            let mut out = String::new();
            for (key, value) in map {
                match value {
                    Value::Array(_) | Value::Object(_) => {
                        out.push_str(&format!("{pad}{key}:\n"));
                        out.push_str(&render_value(value, indent + 2));
                    }
                    _ => out.push_str(&format!("{pad}{key}: {}\n", render_scalar(value))),
                }
            }
            out
        }
        scalar => format!("{pad}{}\n", render_scalar(scalar)),
    }
}

/// One object on one line: `key: value  key: value`.
fn render_inline(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| match value {
                Value::Object(_) => format!("{key}: {{{}}}", render_inline(value)),
                _ => format!("{key}: {}", render_scalar(value)),
            })
            .collect::<Vec<_>>()
            .join("  "),
        other => render_scalar(other),
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => {
                render_value(&serde_json::to_value(model).unwrap_or(Value::Null), 0)
            }
            OutputFormat::Json => serde_json::to_string_pretty(model).unwrap_or_default() + "\n",
        }
    }

    pub fn format_list<T: Serialize>(&self, list: &[T], title: &str, empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text if list.is_empty() => format!("{empty_msg}\n"),
            OutputFormat::Text if title.is_empty() => self.format(&list),
            OutputFormat::Text => format!("{title}\n{}", self.format(&list)),
            OutputFormat::Json => self.format(&list),
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
