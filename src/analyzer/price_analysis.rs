use crate::model::{PriceStats, Ticket};
use tracing::warn;

/// Prices of the given tickets; tickets without a price are skipped.
pub fn collect_prices(tickets: &[Ticket]) -> Vec<i64> {
    let prices: Vec<i64> = tickets.iter().filter_map(|t| t.price).collect();
    if prices.len() < tickets.len() {
        warn!(
            "Skipped {} ticket(s) without a price",
            tickets.len() - prices.len()
        );
    }
    prices
}

/// Summed in `i128` so that any combination of `i64` prices fits.
pub fn mean(prices: &[i64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }
    let sum: i128 = prices.iter().map(|&p| i128::from(p)).sum();
    Some(sum as f64 / prices.len() as f64)
}

/// Median of the prices. For an even count the two middle values are
/// averaged with integer division before widening to `f64`.
pub fn median(prices: &[i64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }
    let mut sorted = prices.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (i128::from(sorted[mid - 1]) + i128::from(sorted[mid])) / 2
    } else {
        i128::from(sorted[mid])
    };
    Some(median as f64)
}

/// Mean and median of ticket prices, `None` when no ticket has a price.
pub fn price_stats(tickets: &[Ticket]) -> Option<PriceStats> {
    let prices = collect_prices(tickets);
    Some(PriceStats {
        mean: mean(&prices)?,
        median: median(&prices)?,
    })
}
