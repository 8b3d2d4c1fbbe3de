use bikeshare_planner::utils::{logger, validation::Validate};
use bikeshare_planner::{
    CliConfig, Command, GbfsClient, OrsClient, Planner, PlannerError, Point, TomlConfig,
};
use clap::Parser;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting bikeshare-planner");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let settings = match &cli.config {
        Some(path) => TomlConfig::load(path)?,
        None => TomlConfig::default(),
    };
    if let Err(e) = settings.validate() {
        tracing::error!("Settings validation failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let api_key = cli
        .api_key
        .clone()
        .or_else(|| std::env::var("ORS_API_KEY").ok())
        .ok_or_else(|| PlannerError::Config {
            message: "no routing API key: pass --api-key or set ORS_API_KEY".to_string(),
        })?;

    let feed = GbfsClient::new(
        settings.feed.information_url.clone(),
        settings.feed.status_url.clone(),
    );
    let routing = OrsClient::new(
        settings.routing.base_url.clone(),
        api_key,
        Duration::from_secs(settings.routing.timeout_seconds),
    )?;
    let planner = Planner::new(feed, routing);

    let report_json = match cli.command {
        Command::Nearby { lat, lon, k, mode } => {
            let report = planner.nearby(Point::new(lat, lon), k, mode).await?;
            if report.neighbors.is_empty() {
                tracing::warn!("No stations matched the {:?} filter", mode);
            }
            serde_json::to_string_pretty(&report)?
        }
        Command::Trip {
            source_lat,
            source_lon,
            dest_lat,
            dest_lon,
        } => {
            let report = planner
                .trip(
                    Point::new(source_lat, source_lon),
                    Point::new(dest_lat, dest_lon),
                )
                .await?;
            if report.plan.is_none() {
                tracing::warn!("No usable station pair for this trip");
            }
            serde_json::to_string_pretty(&report)?
        }
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &report_json)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", report_json),
    }

    Ok(())
}
