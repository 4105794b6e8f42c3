use anyhow::{bail, Result};
use callov_lib::options::{client_options, service_options, team_member_options};
use callov_lib::Client;
use clap::Args;

use crate::output::{
    print_json, print_options_csv, print_options_markdown, print_options_table, OutputFormat,
};

#[derive(Args)]
pub struct OptionsArgs {
    /// Which list to load: clients, team-members, services
    pub list: String,
}

pub async fn run(args: &OptionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let options = match args.list.as_str() {
        "clients" => client_options(client).await,
        "team-members" | "teamMembers" => team_member_options(client).await,
        "services" => service_options(client).await,
        other => bail!(
            "unknown option list '{}'. Valid values: clients, team-members, services",
            other
        ),
    };

    eprintln!("{} option(s)", options.len());

    match format {
        OutputFormat::Table => print_options_table(&options),
        OutputFormat::Json => print_json(&options),
        OutputFormat::Csv => print_options_csv(&options)?,
        OutputFormat::Markdown => print_options_markdown(&options),
    }

    Ok(())
}
