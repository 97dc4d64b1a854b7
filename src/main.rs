use anyhow::Result;
use clap::Parser;
use friendlist::cli::Cli;
use friendlist::config::Config;
use friendlist::logger::{self, Logger};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.generate_config {
        let path = match path {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    let logger = Logger::from_config(config.logging.enabled)?;
    logger::init(&logger, config.logging.level_filter()?)?;
    log::info!("Friendlist starting");

    // Run the TUI application
    friendlist::ui::run_app(config, logger).await?;

    Ok(())
}
