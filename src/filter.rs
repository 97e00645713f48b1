use crate::model::Ticket;
use tracing::debug;

/// Keeps tickets on the exact `origin` → `destination` route that carry a complete schedule.
pub fn filter_tickets(tickets: &[Ticket], origin: &str, destination: &str) -> Vec<Ticket> {
    let filtered: Vec<Ticket> = tickets
        .iter()
        .filter(|ticket| is_relevant(ticket, origin, destination))
        .cloned()
        .collect();

    debug!(
        "Filtered {} of {} tickets for {} -> {}",
        filtered.len(),
        tickets.len(),
        origin,
        destination
    );
    filtered
}

fn is_relevant(ticket: &Ticket, origin: &str, destination: &str) -> bool {
    ticket.origin == origin && ticket.destination == destination && ticket.has_schedule()
}
