use anyhow::Result;
use callov_lib::{Action, PickerOption};
use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
struct OptionRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    #[serde(rename = "ID")]
    value: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
}

#[derive(Tabled, Serialize)]
struct ActionRow {
    #[tabled(rename = "Resource")]
    #[serde(rename = "Resource")]
    resource: String,
    #[tabled(rename = "Operation")]
    #[serde(rename = "Operation")]
    operation: String,
    #[tabled(rename = "Tool")]
    #[serde(rename = "Tool")]
    tool: String,
}

// -- Row builders --

fn build_option_rows(options: &[PickerOption]) -> Vec<OptionRow> {
    options
        .iter()
        .map(|o| OptionRow {
            name: o.name.clone(),
            value: o.value.clone(),
            description: o.description.clone().unwrap_or_default(),
        })
        .collect()
}

fn build_action_rows(actions: &[Action]) -> Vec<ActionRow> {
    actions
        .iter()
        .map(|a| ActionRow {
            resource: a.resource().to_string(),
            operation: a.operation().to_string(),
            tool: a.tool().name,
        })
        .collect()
}

/// Columns are the top-level keys of all records, in first-seen order.
/// Non-object records land in a single `value` column.
fn build_record_grid(records: &[Value]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers: Vec<String> = Vec::new();
    for record in records {
        match record {
            Value::Object(map) => {
                for key in map.keys() {
                    if !headers.contains(key) {
                        headers.push(key.clone());
                    }
                }
            }
            _ => {
                if !headers.iter().any(|h| h == "value") {
                    headers.push("value".to_string());
                }
            }
        }
    }

    let rows = records
        .iter()
        .map(|record| {
            headers
                .iter()
                .map(|header| match record {
                    Value::Object(map) => map.get(header).map(format_cell).unwrap_or_default(),
                    other if header == "value" => format_cell(other),
                    _ => String::new(),
                })
                .collect()
        })
        .collect();

    (headers, rows)
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn records_table(records: &[Value]) -> Table {
    let (headers, rows) = build_record_grid(records);
    let mut builder = Builder::default();
    builder.push_record(headers);
    for row in rows {
        builder.push_record(row);
    }
    builder.build()
}

// -- Table output --

pub fn print_records_table(records: &[Value]) {
    println!("{}", records_table(records));
}

pub fn print_options_table(options: &[PickerOption]) {
    println!("{}", Table::new(build_option_rows(options)));
}

pub fn print_actions_table(actions: &[Action]) {
    println!("{}", Table::new(build_action_rows(actions)));
}

// -- Markdown output --

pub fn print_records_markdown(records: &[Value]) {
    let mut table = records_table(records);
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_options_markdown(options: &[PickerOption]) {
    let mut table = Table::new(build_option_rows(options));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_actions_markdown(actions: &[Action]) {
    let mut table = Table::new(build_action_rows(actions));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_records_csv(records: &[Value]) -> Result<()> {
    let (headers, rows) = build_record_grid(records);
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    wtr.write_record(&headers)?;
    for row in rows {
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_options_csv(options: &[PickerOption]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_option_rows(options) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn print_actions_csv(actions: &[Action]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_action_rows(actions) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}
