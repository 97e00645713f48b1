// Analyzer module: route filtering, per-carrier flight times and price statistics.

pub mod flight_time;
pub mod price_analysis;

use crate::config::ReportLanguage;
use crate::filter::filter_tickets;
use crate::model::{AnalyzerError, FlightReport, Ticket};
use crate::report;
use flight_time::min_flight_time_by_carrier;
use price_analysis::price_stats;
use tracing::debug;

/// Interface of the flight analyzer.
pub trait Analyzer {
    /// Structured result for the route, without any text formatting.
    fn build_report(
        &self,
        tickets: &[Ticket],
        origin: &str,
        destination: &str,
    ) -> Result<FlightReport, AnalyzerError>;

    /// Human-readable report for the route.
    fn analyze(&self, tickets: &[Ticket], origin: &str, destination: &str) -> Result<String, AnalyzerError>;
}

pub struct FlightAnalyzer {
    language: ReportLanguage,
}

impl FlightAnalyzer {
    pub fn new(language: ReportLanguage) -> Self {
        Self { language }
    }
}

impl Analyzer for FlightAnalyzer {
    fn build_report(
        &self,
        tickets: &[Ticket],
        origin: &str,
        destination: &str,
    ) -> Result<FlightReport, AnalyzerError> {
        let relevant = filter_tickets(tickets, origin, destination);
        if relevant.is_empty() {
            return Ok(FlightReport::NoMatches);
        }

        let flight_times = min_flight_time_by_carrier(&relevant)?;
        debug!("Computed minimum flight time for {} carrier(s)", flight_times.len());
        let price_stats = price_stats(&relevant);

        Ok(FlightReport::Route {
            origin: origin.to_string(),
            destination: destination.to_string(),
            flight_times,
            price_stats,
        })
    }

    fn analyze(&self, tickets: &[Ticket], origin: &str, destination: &str) -> Result<String, AnalyzerError> {
        let report = self.build_report(tickets, origin, destination)?;
        Ok(report::render(&report, self.language))
    }
}
