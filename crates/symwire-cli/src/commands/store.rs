use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::config::CliConfig;
use crate::input::{read_term, write_term, Format};

#[derive(Args, Debug)]
pub struct StoreArgs {
    /// Expression to wrap.
    #[arg(long)]
    pub input: PathBuf,
    /// Input format override.
    #[arg(long, value_enum)]
    pub from: Option<Format>,
    /// Destination for the envelope.
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Envelope produced by `symwire store`.
    #[arg(long)]
    pub input: PathBuf,
    /// JSON destination; prints to stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run_store(args: &StoreArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let term = read_term(&args.input, args.from, config)?;
    write_term(&term, Some(&args.out), Some(Format::Stored))
}

pub fn run_load(args: &LoadArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let term = read_term(&args.input, Some(Format::Stored), config)?;
    write_term(&term, args.out.as_deref(), Some(Format::Json))
}
