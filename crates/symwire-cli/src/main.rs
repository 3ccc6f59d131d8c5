use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use commands::{
    decode::{self, DecodeArgs},
    encode::{self, EncodeArgs},
    eval::{self, EvalArgs},
    hash::{self, HashArgs},
    store::{self, LoadArgs, StoreArgs},
    validate::{self, ValidateArgs},
};
use config::CliConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod input;

#[derive(Parser, Debug)]
#[command(name = "symwire", about = "Symbolic expression codec and evaluator")]
struct Cli {
    /// YAML configuration with defaults for strictness, limits and bindings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log filter directive such as `debug` or `symwire_codec=trace`.
    /// Overrides both `RUST_LOG` and the configuration file.
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode an expression into its wire form.
    Encode(EncodeArgs),
    /// Decode a wire payload into JSON.
    Decode(DecodeArgs),
    /// Check that an expression is well formed.
    Validate(ValidateArgs),
    /// Evaluate an expression against symbol bindings.
    Eval(EvalArgs),
    /// Print the canonical SHA-256 of an expression.
    Hash(HashArgs),
    /// Wrap an expression in a versioned, hashed envelope.
    Store(StoreArgs),
    /// Unwrap an envelope back into JSON.
    Load(LoadArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    init_tracing(cli.log_level.as_deref().or(config.log_level.as_deref()))?;
    tracing::debug!(command = ?cli.command, "starting");

    match &cli.command {
        Command::Encode(args) => encode::run(args, &config),
        Command::Decode(args) => decode::run(args, &config),
        Command::Validate(args) => validate::run(args, &config),
        Command::Eval(args) => eval::run(args, &config),
        Command::Hash(args) => hash::run(args, &config),
        Command::Store(args) => store::run_store(args, &config),
        Command::Load(args) => store::run_load(args, &config),
    }
}

fn init_tracing(level: Option<&str>) -> Result<(), Box<dyn Error>> {
    let filter = match level {
        Some(directive) => EnvFilter::try_new(directive)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}
