use anyhow::Result;
use callov_lib::Action;

use crate::output::{
    print_actions_csv, print_actions_markdown, print_actions_table, print_json, OutputFormat,
};

pub fn run(format: &OutputFormat) -> Result<()> {
    let actions = Action::all();
    match format {
        OutputFormat::Table => print_actions_table(&actions),
        OutputFormat::Json => {
            let tools: Vec<_> = actions.iter().map(|a| a.tool()).collect();
            print_json(&tools)
        }
        OutputFormat::Csv => print_actions_csv(&actions)?,
        OutputFormat::Markdown => print_actions_markdown(&actions),
    }
    Ok(())
}
