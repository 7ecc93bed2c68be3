//! # Select Subcommand
//!
//! Resolves one path in a JSON document and prints the value converted to
//! the requested target type. Strings, dates and UUIDs print as bare text;
//! numbers, booleans, lists, objects and tokens print as JSON.
//!
//! ```bash
//! jsel select --file order.json --path '$.lines[0].qty' --as i32
//! echo '{"d":"12/25/2023"}' | jsel select --path '$.d' --as datetime --format MM/dd/yyyy
//! ```

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use jsel_core::{require, JsonSelectionError, KindSet};
use jsel_select::Document;
use serde_json::Value;

/// Arguments for the select subcommand.
#[derive(Args, Debug)]
pub struct SelectArgs {
    /// JSON file to read. Reads standard input when omitted.
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Path to select, e.g. `$.order.lines[0].sku`.
    #[arg(long, short)]
    pub path: String,

    /// Type to convert the selected value to.
    #[arg(long = "as", value_enum)]
    pub target: Target,

    /// Explicit date/time layout such as `MM/dd/yyyy` (only with `--as datetime`).
    #[arg(long)]
    pub format: Option<String>,

    /// Print `null` instead of failing when the path is absent or null.
    #[arg(long)]
    pub optional: bool,
}

/// Conversion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// Any non-null node, printed as JSON.
    Token,
    /// A JSON object, printed as JSON.
    Object,
    String,
    Bool,
    I64,
    I32,
    F64,
    F32,
    /// ISO-8601 text, or the layout given with `--format`.
    Datetime,
    Uuid,
    ListString,
    ListI64,
    ListF64,
    ListBool,
}

/// Execute the select subcommand.
pub fn run_select(args: &SelectArgs) -> Result<u8> {
    if args.format.is_some() && args.target != Target::Datetime {
        bail!("--format is only valid with --as datetime");
    }

    let source = args
        .file
        .as_deref()
        .map_or_else(|| "<stdin>".to_string(), |p| p.display().to_string());
    tracing::debug!(%source, path = %args.path, target = ?args.target, "selecting");

    let text = read_input(args.file.as_deref())?;
    let doc = Document::parse(&text).with_context(|| format!("failed to parse {source}"))?;
    let rendered = render_selection(&doc, args)
        .with_context(|| format!("failed to select {} from {source}", args.path))?;

    println!("{rendered}");
    Ok(0)
}

/// Read the whole input document, from `file` or standard input.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

/// Select `args.path` from `doc` and render it as the output line.
///
/// With `--optional`, an absent or null node renders as `null`; otherwise
/// it is a [`JsonSelectionError::Missing`] error.
pub fn render_selection(doc: &Document, args: &SelectArgs) -> Result<String, JsonSelectionError> {
    let path = args.path.as_str();
    let rendered = match args.target {
        Target::Token => doc.select_token(path, KindSet::any())?.map(Value::to_string),
        Target::Object => doc
            .select_object(path)?
            .map(|map| Value::Object(map.clone()).to_string()),
        Target::String => doc.select_str(path)?.map(str::to_owned),
        Target::Bool => doc.select_bool(path)?.map(|b| b.to_string()),
        Target::I64 => doc.select_i64(path)?.map(|n| n.to_string()),
        Target::I32 => doc.select_i32(path)?.map(|n| n.to_string()),
        Target::F64 => doc.select_f64(path)?.map(|n| format!("{n:?}")),
        Target::F32 => doc.select_f32(path)?.map(|n| format!("{n:?}")),
        Target::Datetime => {
            let value = match &args.format {
                Some(format) => doc.select_datetime_with_format(path, format)?,
                None => doc.select_datetime(path)?,
            };
            value.map(|dt| dt.to_round_trip())
        }
        Target::Uuid => doc.select_uuid(path)?.map(|id| id.to_string()),
        Target::ListString => doc.select_list::<String>(path)?.map(json_list),
        Target::ListI64 => doc.select_list::<i64>(path)?.map(json_list),
        Target::ListF64 => doc.select_list::<f64>(path)?.map(json_list),
        Target::ListBool => doc.select_list::<bool>(path)?.map(json_list),
    };

    if args.optional {
        Ok(rendered.unwrap_or_else(|| "null".to_string()))
    } else {
        require(rendered, path)
    }
}

fn json_list<T: Into<Value>>(items: Vec<T>) -> String {
    Value::from(items).to_string()
}
