use color_eyre::eyre::Result;
use dotenv::dotenv;
use parkview_client::config::ClientConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Run the dashboard until the push channel closes
    parkview_client::run_dashboard(config).await?;

    Ok(())
}
