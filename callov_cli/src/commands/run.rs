//! The `run` subcommand: dispatch one resource/operation over a batch of items.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use callov_lib::{Action, BatchPolicy, Client, Router};
use clap::Args;
use serde_json::Value;

use crate::output::{
    print_json, print_records_csv, print_records_markdown, print_records_table, OutputFormat,
};

#[derive(Args)]
pub struct RunArgs {
    /// Resource: appointment, client, service, teamMember
    #[arg(long)]
    pub resource: String,

    /// Operation: create, get, getAll, update, delete, getAvailability,
    /// getByClientPhone, getByPhone
    #[arg(long)]
    pub operation: String,

    /// Parameters of a single item as a JSON object
    #[arg(long, conflicts_with = "items")]
    pub params: Option<String>,

    /// JSON file holding an array of item parameter objects ("-" for stdin)
    #[arg(long)]
    pub items: Option<PathBuf>,

    /// Record failed items as {"error": ...} and keep going
    #[arg(long)]
    pub continue_on_fail: bool,
}

pub async fn run(args: &RunArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let action = Action::parse(&args.resource, &args.operation)?;
    let items = load_items(args)?;
    let policy = BatchPolicy::from_continue_on_fail(args.continue_on_fail);

    let router = Router::new(client);
    let records = router.run_batch(action, &items, policy).await?;

    eprintln!(
        "{}: {} item(s) -> {} record(s)",
        action,
        items.len(),
        records.len()
    );

    match format {
        OutputFormat::Table => print_records_table(&records),
        OutputFormat::Json => print_json(&records),
        OutputFormat::Csv => print_records_csv(&records)?,
        OutputFormat::Markdown => print_records_markdown(&records),
    }

    Ok(())
}

fn load_items(args: &RunArgs) -> Result<Vec<Value>> {
    if let Some(params) = &args.params {
        let value: Value = serde_json::from_str(params).context("--params is not valid JSON")?;
        return items_from_value(value);
    }

    match &args.items {
        Some(path) => {
            let text = if path.as_os_str() == "-" {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read items from stdin")?;
                buf
            } else {
                std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?
            };
            let value: Value = serde_json::from_str(&text)
                .with_context(|| format!("{} is not valid JSON", path.display()))?;
            items_from_value(value)
        }
        None => Ok(vec![Value::Object(Default::default())]),
    }
}

/// An array is a batch; a single object is a batch of one.
fn items_from_value(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => {
            if let Some(index) = items.iter().position(|item| !item.is_object()) {
                bail!("item {} is not a JSON object", index);
            }
            Ok(items)
        }
        Value::Object(_) => Ok(vec![value]),
        _ => bail!("expected a JSON object or an array of objects"),
    }
}
