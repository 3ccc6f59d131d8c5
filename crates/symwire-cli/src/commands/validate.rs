use std::error::Error;
use std::path::PathBuf;

use clap::Args;

use crate::config::CliConfig;
use crate::input::{read_term, Format};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Expression to check.
    #[arg(long)]
    pub input: PathBuf,
    /// Input format override.
    #[arg(long, value_enum)]
    pub format: Option<Format>,
}

/// Every reader validates, so reaching the summary line means the tree is
/// well formed.
pub fn run(args: &ValidateArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let term = read_term(&args.input, args.format, config)?;
    println!("ok: {} nodes, depth {}", term.node_count(), term.depth());
    Ok(())
}
