use std::error::Error;
use std::fs;
use std::path::Path;

use clap::ValueEnum;
use symwire_codec::{
    decode_with, encode, from_json, from_stored_bytes_with, to_json, to_stored_bytes,
};
use symwire_core::Term;

use crate::config::CliConfig;

/// On-disk representations of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// serde JSON form.
    Json,
    /// Field-tagged wire bytes.
    Wire,
    /// bincode envelope with schema version and hash.
    Stored,
}

impl Format {
    /// Infers the format from a file extension; anything unrecognised is wire.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Format::Json,
            Some("sym") => Format::Stored,
            _ => Format::Wire,
        }
    }
}

pub fn read_term(
    path: &Path,
    format: Option<Format>,
    config: &CliConfig,
) -> Result<Term, Box<dyn Error>> {
    let format = format.unwrap_or_else(|| Format::detect(path));
    let bytes =
        fs::read(path).map_err(|err| format!("failed to read {}: {err}", path.display()))?;
    tracing::debug!(path = %path.display(), ?format, len = bytes.len(), "read input");
    let term = match format {
        Format::Json => from_json(std::str::from_utf8(&bytes)?)?,
        Format::Wire => decode_with(&bytes, config.decode_options())?,
        Format::Stored => from_stored_bytes_with(&bytes, config.decode_options())?,
    };
    Ok(term)
}

pub fn render(term: &Term, format: Format) -> Result<Vec<u8>, Box<dyn Error>> {
    let bytes = match format {
        Format::Json => to_json(term)?.into_bytes(),
        Format::Wire => encode(term)?,
        Format::Stored => to_stored_bytes(term)?,
    };
    Ok(bytes)
}

/// Writes `term` to `out`, or JSON to stdout when no path is given.
pub fn write_term(
    term: &Term,
    out: Option<&Path>,
    format: Option<Format>,
) -> Result<(), Box<dyn Error>> {
    match out {
        Some(path) => {
            let format = format.unwrap_or_else(|| Format::detect(path));
            fs::write(path, render(term, format)?)?;
            tracing::debug!(path = %path.display(), ?format, "wrote output");
        }
        None => println!("{}", to_json(term)?),
    }
    Ok(())
}
