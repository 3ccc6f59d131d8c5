use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::config::CliConfig;
use crate::input::{read_term, write_term, Format};

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Wire payload to decode.
    #[arg(long)]
    pub input: PathBuf,
    /// JSON destination; prints to stdout when omitted.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &DecodeArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let term = read_term(&args.input, Some(Format::Wire), config)?;
    write_term(&term, args.out.as_deref(), Some(Format::Json))
}
