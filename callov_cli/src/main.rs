mod commands;
mod output;

use anyhow::Result;
use callov_lib::Config;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "callov")]
#[command(about = "Work with Callov appointments, clients, services and team members")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Override the API base URL (otherwise CALLOV_BASE_URL or the hosted API)
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an operation on a resource for one or more items
    Run(commands::run::RunArgs),
    /// List picker options for clients, team members or services
    Options(commands::options::OptionsArgs),
    /// List every resource/operation pair with its tool name
    Actions,
    /// Check that the configured API key is accepted
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("callov=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    if let Commands::Actions = cli.command {
        return commands::actions::run(&format);
    }

    let mut config = Config::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = config.client()?;

    match &cli.command {
        Commands::Run(args) => commands::run::run(args, &client, &format).await?,
        Commands::Options(args) => commands::options::run(args, &client, &format).await?,
        Commands::Verify => commands::verify::run(&client).await?,
        Commands::Actions => {}
    }

    Ok(())
}
