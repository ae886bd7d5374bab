use anyhow::Result;
use arbgen_cli::SampleKind;
use arbgen_core::{source, Config, Context};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Print arbitrary values produced by arbgen generators
#[derive(Parser)]
#[command(name = "arbgen")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Retries allowed for constrained samples
    #[arg(long, global = true, default_value_t = arbgen_core::DEFAULT_RETRY_BUDGET)]
    retries: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print samples of one kind of value
    #[command(alias = "s")]
    Sample {
        /// Kind of value to generate
        #[arg(value_enum)]
        kind: SampleKind,

        /// Number of samples to print
        #[arg(short, long, default_value_t = 1)]
        count: usize,

        /// Insertions per sample for the vec and map kinds
        #[arg(short, long, default_value_t = 5)]
        size: usize,
    },

    /// Print one sample of each demo kind
    Demo,
}

fn main() -> Result<()> {
    // Enable colors only when running in a terminal or explicitly requested
    let should_use_colors = atty::is(atty::Stream::Stdout)
        || std::env::var("FORCE_COLOR").is_ok()
        || (std::env::var("NO_COLOR").is_err()
            && std::env::var("TERM").unwrap_or_default() != "dumb");

    colored::control::set_override(should_use_colors);

    let cli = Cli::parse();
    init_logging(cli.verbose);

    source::init_with(Config::default().with_retry_budget(cli.retries))?;

    match cli.command {
        Commands::Sample { kind, count, size } => sample(kind, count, size),
        Commands::Demo => demo(),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn sample(kind: SampleKind, count: usize, size: usize) -> Result<()> {
    debug!(?kind, count, size, "sampling");
    for _ in 0..count {
        let rendered = draw(kind, size)?;
        println!("{}", arbgen_cli::format_sample(kind.label(), &rendered));
    }
    Ok(())
}

fn demo() -> Result<()> {
    println!("{}", arbgen_cli::format_header());
    for kind in [
        SampleKind::Int,
        SampleKind::Float,
        SampleKind::Map,
        SampleKind::String,
    ] {
        let rendered = draw(kind, 5)?;
        println!("{}", arbgen_cli::format_sample(kind.label(), &rendered));
    }
    Ok(())
}

fn draw(kind: SampleKind, size: usize) -> Result<String> {
    let rendered = source::with_context(|ctx: &mut Context| {
        arbgen_cli::render_sample(ctx, kind, size)
    })?;
    match rendered {
        Ok(text) => Ok(text),
        Err(err) => {
            eprintln!("{}", arbgen_cli::format_error(&err));
            std::process::exit(1);
        }
    }
}
