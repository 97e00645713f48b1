// Core structs: Ticket, TicketList, CarrierFlightTime, PriceStats, FlightReport
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub carrier: String,
    pub departure_date: Option<String>,
    pub departure_time: Option<String>,
    pub arrival_date: Option<String>,
    pub arrival_time: Option<String>,
    pub price: Option<i64>,
}

impl Ticket {
    /// True when all four date/time fields are present and non-empty.
    pub fn has_schedule(&self) -> bool {
        [
            &self.departure_date,
            &self.departure_time,
            &self.arrival_date,
            &self.arrival_time,
        ]
        .iter()
        .all(|field| field.as_deref().is_some_and(|value| !value.is_empty()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TicketList {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierFlightTime {
    pub carrier: String,
    pub minutes: i64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub mean: f64,
    pub median: f64,
}

impl PriceStats {
    pub fn difference(&self) -> f64 {
        self.mean - self.median
    }
}

/// Structured analysis result rendered by `report::render`.
#[derive(Debug, Clone, PartialEq)]
pub enum FlightReport {
    NoMatches,
    Route {
        origin: String,
        destination: String,
        flight_times: Vec<CarrierFlightTime>,
        price_stats: Option<PriceStats>,
    },
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Unable to parse date and time: {input} (tried patterns: {})", .patterns.join(", "))]
    DateTimeParse {
        input: String,
        patterns: Vec<&'static str>,
    },

    #[error("Ticket is missing field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("input is empty")]
    EmptyInput,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Resource {0} not found.")]
    NotFound(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything that can stop the binary between reading input and writing the report.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Failed to parse tickets: {0}")]
    Parser(#[from] ParserError),

    #[error("Analysis failed: {0}")]
    Analyzer(#[from] AnalyzerError),
}
