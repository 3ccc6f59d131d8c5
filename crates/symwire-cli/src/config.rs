use std::error::Error;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use symwire_codec::{DecodeOptions, DEFAULT_MAX_DEPTH};
use symwire_eval::Bindings;

/// YAML-configurable defaults shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Fail on unbound symbols instead of returning a residual.
    #[serde(default)]
    pub strict: bool,
    /// Nesting limit applied when decoding wire payloads.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Log filter used when neither `--log-level` nor `RUST_LOG` is set.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Bindings applied before any `--bindings` file or `--set` flag.
    #[serde(default)]
    pub bindings: Bindings,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
            log_level: None,
            bindings: Bindings::new(),
        }
    }
}

impl CliConfig {
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("failed to read config {}: {err}", path.display()))?;
        Ok(serde_yaml::from_str(&text)?)
    }

    pub fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            max_depth: self.max_depth,
        }
    }
}
