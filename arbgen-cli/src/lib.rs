use std::collections::BTreeMap;
use std::fmt::Display;

use arbgen_core::{collection, Context, Result};
use clap::ValueEnum;
use colored::*;

/// Kinds of value the sampler knows how to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleKind {
    Int,
    Even,
    Float,
    String,
    Pair,
    Vec,
    Map,
}

impl SampleKind {
    pub fn label(&self) -> &'static str {
        match self {
            SampleKind::Int => "Int",
            SampleKind::Even => "Even",
            SampleKind::Float => "Float",
            SampleKind::String => "String",
            SampleKind::Pair => "Pair",
            SampleKind::Vec => "Vec",
            SampleKind::Map => "Map",
        }
    }
}

/// Generate one sample of `kind` and render it as text.
///
/// `size` is the number of insertions for the container kinds.
pub fn render_sample(ctx: &mut Context, kind: SampleKind, size: usize) -> Result<String> {
    let rendered = match kind {
        SampleKind::Int => ctx.generate::<i32>().to_string(),
        SampleKind::Even => ctx.such_that(|x: &i32| x % 2 == 0)?.to_string(),
        SampleKind::Float => ctx.generate::<f32>().to_string(),
        SampleKind::String => format!("{:?}", ctx.generate::<String>()),
        SampleKind::Pair => format!("{:?}", ctx.generate::<(i32, String)>()),
        SampleKind::Vec => format!("{:?}", collection::vec_of::<i32>(ctx, size)),
        SampleKind::Map => {
            format_map(&collection::sized_container::<BTreeMap<i32, f32>>(ctx, size))
        }
    };
    Ok(rendered)
}

/// Format one labelled sample line
pub fn format_sample(label: &str, value: &str) -> String {
    if value.contains('\n') {
        format!("{}\n{}", format!("{label}:").bright_cyan().bold(), value)
    } else {
        format!("{} {}", format!("{label}:").bright_cyan().bold(), value)
    }
}

/// Format a map one `key: value` entry per line
pub fn format_map<K: Display, V: Display>(map: &BTreeMap<K, V>) -> String {
    map.iter()
        .map(|(key, value)| format!("{}: {}", key.to_string().bright_yellow(), value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format header output
pub fn format_header() -> String {
    format!(
        "{}\n{}\n",
        "arbgen samples".bright_green().bold(),
        "==============".bright_green()
    )
}

/// Format an error reported by the generator
pub fn format_error(error: &impl Display) -> String {
    format!("{} {}", "error:".bright_red().bold(), error)
}
