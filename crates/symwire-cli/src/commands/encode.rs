use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::config::CliConfig;
use crate::input::{read_term, write_term, Format};

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Expression to encode; format follows the extension unless `--from` is set.
    #[arg(long)]
    pub input: PathBuf,
    /// Input format override.
    #[arg(long, value_enum)]
    pub from: Option<Format>,
    /// Destination for the wire bytes.
    #[arg(long)]
    pub out: PathBuf,
}

pub fn run(args: &EncodeArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let term = read_term(&args.input, args.from, config)?;
    write_term(&term, Some(&args.out), Some(Format::Wire))
}
