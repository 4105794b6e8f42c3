use anyhow::{Context, Result};
use callov_lib::Client;

pub async fn run(client: &Client) -> Result<()> {
    client
        .verify_credentials()
        .await
        .with_context(|| format!("credential check against {} failed", client.base_url()))?;
    eprintln!("API key accepted by {}", client.base_url());
    Ok(())
}
