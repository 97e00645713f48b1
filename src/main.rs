mod analyzer;
mod config;
mod filter;
mod model;
mod parser;
mod report;
mod source;
mod utils;

use analyzer::{Analyzer, FlightAnalyzer};
use config::{load_config, AppConfig};
use model::{AppError, SourceError};
use parser::{JsonTicketParser, Parser};
use source::{FileSink, FileSource, ReportSink, TicketSource};
use tracing::{error, info};

const CONFIG_PATH: &str = "config.json";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("Panic occurred: {:?}", panic_info);
    }));

    let config = match load_config(CONFIG_PATH) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Analyzing {} -> {} from {} into {}",
        config.origin, config.destination, config.input_path, config.output_path
    );

    let source = FileSource::new(&config.input_path);
    let sink = FileSink::new(&config.output_path);

    match run(&config, &source, &sink).await {
        Ok(()) => info!("Analysis finished."),
        Err(AppError::Source(SourceError::NotFound(path))) => {
            error!("Resource {} not found.", path);
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Reads tickets from `source`, analyzes the configured route and writes the report to `sink`.
async fn run(
    config: &AppConfig,
    source: &dyn TicketSource,
    sink: &dyn ReportSink,
) -> Result<(), AppError> {
    let content = source.fetch().await?;
    let ticket_list = JsonTicketParser::new().parse(&content)?;
    info!("Loaded {} tickets", ticket_list.tickets.len());

    let analyzer = FlightAnalyzer::new(config.language);
    let report = analyzer.analyze(&ticket_list.tickets, &config.origin, &config.destination)?;

    sink.write(&report).await?;
    Ok(())
}
