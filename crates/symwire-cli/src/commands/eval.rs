use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use symwire_core::Operand;
use symwire_eval::{Bindings, Evaluator, Value};

use crate::config::CliConfig;
use crate::input::{read_term, Format};

#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Expression to evaluate.
    #[arg(long)]
    pub input: PathBuf,
    /// Input format override.
    #[arg(long, value_enum)]
    pub format: Option<Format>,
    /// YAML map of symbol names to numbers.
    #[arg(long)]
    pub bindings: Option<PathBuf>,
    /// Inline binding such as `x=2.5`; may be repeated and wins over files.
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_binding)]
    pub set: Vec<(String, f64)>,
    /// Fail on unbound symbols and non-real constants.
    #[arg(long)]
    pub strict: bool,
    /// Emit the result as JSON instead of infix text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum EvalReport {
    Number { value: f64 },
    Residual {
        expression: Operand,
        free_symbols: Vec<String>,
    },
}

pub fn run(args: &EvalArgs, config: &CliConfig) -> Result<(), Box<dyn Error>> {
    let term = read_term(&args.input, args.format, config)?;
    let bindings = collect_bindings(args, config)?;
    let evaluator = Evaluator::new().strict(args.strict || config.strict);
    let value = evaluator.evaluate_term(&term, &bindings)?;
    if args.json {
        let report = match value {
            Value::Number(value) => EvalReport::Number { value },
            residual @ Value::Symbolic(_) => EvalReport::Residual {
                free_symbols: residual.free_symbols().into_iter().collect(),
                expression: residual.into_operand(),
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{value}");
    }
    Ok(())
}

fn collect_bindings(args: &EvalArgs, config: &CliConfig) -> Result<Bindings, Box<dyn Error>> {
    let mut bindings = config.bindings.clone();
    if let Some(path) = &args.bindings {
        let text = fs::read_to_string(path)
            .map_err(|err| format!("failed to read bindings {}: {err}", path.display()))?;
        let from_file: Bindings = serde_yaml::from_str(&text)?;
        bindings.extend(&from_file);
    }
    for (name, value) in &args.set {
        bindings.insert(name.clone(), *value);
    }
    Ok(bindings)
}

fn parse_binding(raw: &str) -> Result<(String, f64), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err("binding name must be non-empty".into());
    }
    let value = value
        .trim()
        .parse::<f64>()
        .map_err(|err| format!("invalid value for `{name}`: {err}"))?;
    Ok((name.to_string(), value))
}
