mod commands;
mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting shop_hours");

    // Load configuration
    let config = startup::load_config()?;

    // Run the requested command
    let args: Vec<String> = std::env::args().skip(1).collect();
    startup::run(config, args).await
}
