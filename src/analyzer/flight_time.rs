use crate::model::{AnalyzerError, CarrierFlightTime, Ticket};
use crate::utils::parse_datetime;
use std::collections::HashMap;

/// Flight time of a single ticket in whole minutes, truncated toward zero.
pub fn flight_minutes(ticket: &Ticket) -> Result<i64, AnalyzerError> {
    let departure = parse_datetime(
        required(&ticket.departure_date, "departure_date")?,
        required(&ticket.departure_time, "departure_time")?,
    )?;
    let arrival = parse_datetime(
        required(&ticket.arrival_date, "arrival_date")?,
        required(&ticket.arrival_time, "arrival_time")?,
    )?;
    Ok((arrival - departure).num_minutes())
}

fn required<'a>(field: &'a Option<String>, name: &'static str) -> Result<&'a str, AnalyzerError> {
    field.as_deref().ok_or(AnalyzerError::MissingField(name))
}

/// Minimum flight time for each carrier, in order of the carrier's first appearance.
/// On equal durations the earlier ticket is kept.
pub fn min_flight_time_by_carrier(tickets: &[Ticket]) -> Result<Vec<CarrierFlightTime>, AnalyzerError> {
    let mut result: Vec<CarrierFlightTime> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for ticket in tickets {
        let minutes = flight_minutes(ticket)?;
        match index.get(ticket.carrier.as_str()) {
            Some(&i) => {
                if minutes < result[i].minutes {
                    result[i].minutes = minutes;
                }
            }
            None => {
                index.insert(ticket.carrier.as_str(), result.len());
                result.push(CarrierFlightTime {
                    carrier: ticket.carrier.clone(),
                    minutes,
                });
            }
        }
    }

    Ok(result)
}
