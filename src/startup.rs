use crate::commands;
use barbershop_hours::config::Config;
use barbershop_hours::error::Error;
use barbershop_hours::service::HoursService;
use barbershop_hours::store::InMemoryStore;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| Error::Other(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the application config
pub fn load_config() -> miette::Result<Config> {
    match Config::load() {
        Ok(config) => Ok(config),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Open the data file, run one command, and save if the command changed anything
pub async fn run(config: Config, args: Vec<String>) -> miette::Result<()> {
    let store = Arc::new(InMemoryStore::load_from_file(&config.data_file).await?);
    let service = HoursService::with_default_hours(Arc::clone(&store), config.default_hours.clone());

    let outcome = commands::dispatch(&service, &config, &args).await?;
    for line in &outcome.lines {
        println!("{}", line);
    }

    if outcome.modified {
        store.save_to_file(&config.data_file).await?;
        info!("Saved changes to {}", config.data_file);
    }

    Ok(())
}
