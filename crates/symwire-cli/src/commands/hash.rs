use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use symwire_codec::canonical_hash;

use crate::config::CliConfig;
use crate::input::{read_term, Format};

#[derive(Args, Debug)]
pub struct HashArgs {
    /// Expression to hash.
    #[arg(long)]
    pub input: PathBuf,
    /// Input format override.
    #[arg(long, value_enum)]
    pub format: Option<Format>,
}

pub fn run(args: &HashArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let term = read_term(&args.input, args.format, config)?;
    println!("{}", canonical_hash(&term)?);
    Ok(())
}
