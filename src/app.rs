use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::time::Duration;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::application::use_cases::catalog_loader::StarCatalogLoader;
use crate::application::use_cases::placement::hand_off;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::sources::SourceLocation;
use crate::interfaces::cli::Cli;
use crate::interfaces::output::{JsonLinesSink, LoadSummary};

pub fn run() -> std::result::Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let cli = Cli::parse();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(execute(cli)).map_err(|err| {
        error!(error = %err, "Catalog load failed");
        Box::new(err) as Box<dyn Error>
    })
}

async fn execute(cli: Cli) -> Result<()> {
    let mut service = ConfigService::new();
    if let Some(path) = &cli.config {
        service = service.with_file(path)?;
    }
    let mut config = service.with_env().load()?;

    if let Some(source) = cli.source {
        config.source = Some(source);
    }
    if let Some(max_records) = cli.max_records {
        config.max_records = max_records;
    }

    let location = config.source.clone().ok_or_else(|| {
        AppError::ConfigError(
            "No catalog source configured; pass --source or set `source`".to_string(),
        )
    })?;
    let source = SourceLocation::parse(&location)?
        .into_source(Duration::from_secs(config.request_timeout_secs));

    let loader = StarCatalogLoader::new(config)?;
    let load = loader.load(source.as_ref()).await?;

    if let Some(path) = &cli.output {
        let file = File::create(path)?;
        let mut sink = JsonLinesSink::new(BufWriter::new(file));
        hand_off(&load, &mut sink)?;
    }

    let summary = LoadSummary::new(source.describe(), &load);
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
