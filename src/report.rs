// Report formatting for both supported languages
use crate::config::ReportLanguage;
use crate::model::{CarrierFlightTime, FlightReport, PriceStats};
use crate::utils::split_minutes;

struct Templates {
    no_matches: &'static str,
    no_prices: &'static str,
    flight_time_header: fn(&str, &str) -> String,
    price_header: fn(&str, &str) -> String,
    duration: fn(i64, i64) -> String,
}

static ENGLISH: Templates = Templates {
    no_matches: "No matching tickets found.",
    no_prices: "Unable to calculate the difference between average price and median.",
    flight_time_header: |o, d| format!("Minimum flight time between {} and {} for each carrier:\n", o, d),
    price_header: |o, d| format!("Difference between average price and median for flights between {} and {}:\n", o, d),
    duration: |h, m| format!("{} hours {} minutes", h, m),
};

static RUSSIAN: Templates = Templates {
    no_matches: "Не найдены подходящие билеты.",
    no_prices: "Не удалось рассчитать разницу между средней ценой и медианой.",
    flight_time_header: |o, d| format!("Минимальное время полета между {} и {} для каждого авиаперевозчика:\n", o, d),
    price_header: |o, d| format!("Разница между средней ценой и медианой для полета между {} и {}:\n", o, d),
    duration: |h, m| format!("{} часов {} минут", h, m),
};

fn templates(language: ReportLanguage) -> &'static Templates {
    match language {
        ReportLanguage::English => &ENGLISH,
        ReportLanguage::Russian => &RUSSIAN,
    }
}

/// "<hours> hours <minutes> minutes" in the chosen language.
pub fn format_duration(total_minutes: i64, language: ReportLanguage) -> String {
    let (hours, minutes) = split_minutes(total_minutes);
    (templates(language).duration)(hours, minutes)
}

/// Raw `f64` with a fractional part always shown, e.g. `0.0` or `-12.5`.
pub fn format_price_difference(stats: &PriceStats) -> String {
    format!("{:?}", stats.difference())
}

pub fn render(report: &FlightReport, language: ReportLanguage) -> String {
    let t = templates(language);
    match report {
        FlightReport::NoMatches => t.no_matches.to_string(),
        FlightReport::Route {
            origin,
            destination,
            flight_times,
            price_stats,
        } => {
            let mut out = (t.flight_time_header)(origin, destination);
            out.push_str(&render_flight_times(flight_times, language));

            out.push_str("\n\n");
            out.push_str(&(t.price_header)(origin, destination));
            match price_stats {
                Some(stats) => out.push_str(&format_price_difference(stats)),
                None => out.push_str(t.no_prices),
            }
            out
        }
    }
}

fn render_flight_times(flight_times: &[CarrierFlightTime], language: ReportLanguage) -> String {
    flight_times
        .iter()
        .map(|ft| format!("{}: {}\n", ft.carrier, format_duration(ft.minutes, language)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(price_stats: Option<PriceStats>) -> FlightReport {
        FlightReport::Route {
            origin: "VVO".into(),
            destination: "TLV".into(),
            flight_times: vec![
                CarrierFlightTime { carrier: "SU".into(), minutes: 540 },
                CarrierFlightTime { carrier: "S7".into(), minutes: 700 },
            ],
            price_stats,
        }
    }

    #[test]
    fn formats_duration() {
        assert_eq!(format_duration(125, ReportLanguage::English), "2 hours 5 minutes");
        assert_eq!(format_duration(125, ReportLanguage::Russian), "2 часов 5 минут");
        assert_eq!(format_duration(-90, ReportLanguage::English), "-1 hours -30 minutes");
    }

    #[test]
    fn price_difference_uses_default_float_formatting() {
        assert_eq!(format_price_difference(&PriceStats { mean: 150.0, median: 150.0 }), "0.0");
        assert_eq!(format_price_difference(&PriceStats { mean: 100.5, median: 100.0 }), "0.5");
        assert_eq!(format_price_difference(&PriceStats { mean: 100.0, median: 112.5 }), "-12.5");
    }

    #[test]
    fn large_and_tiny_differences_stay_positional() {
        assert_eq!(format_price_difference(&PriceStats { mean: 10_000_000.0, median: 0.0 }), "10000000.0");
        assert_eq!(format_price_difference(&PriceStats { mean: 0.0001, median: 0.0 }), "0.0001");
    }

    #[test]
    fn renders_full_english_report() {
        let text = render(&route(Some(PriceStats { mean: 250.0, median: 200.0 })), ReportLanguage::English);
        assert_eq!(
            text,
            "Minimum flight time between VVO and TLV for each carrier:\n\
             SU: 9 hours 0 minutes\n\
             S7: 11 hours 40 minutes\n\
             \n\n\
             Difference between average price and median for flights between VVO and TLV:\n\
             50.0"
        );
    }

    #[test]
    fn renders_price_fallback_with_duration_section_intact() {
        let text = render(&route(None), ReportLanguage::English);
        assert!(text.contains("SU: 9 hours 0 minutes\n"));
        assert!(text.ends_with("Unable to calculate the difference between average price and median."));
    }

    #[test]
    fn renders_russian_report() {
        let text = render(&route(Some(PriceStats { mean: 1.0, median: 1.0 })), ReportLanguage::Russian);
        assert!(text.starts_with("Минимальное время полета между VVO и TLV"));
        assert!(text.contains("S7: 11 часов 40 минут\n"));
        assert!(text.ends_with(":\n0.0"));
    }

    #[test]
    fn no_matches_is_a_single_message() {
        assert_eq!(render(&FlightReport::NoMatches, ReportLanguage::English), "No matching tickets found.");
        assert_eq!(render(&FlightReport::NoMatches, ReportLanguage::Russian), "Не найдены подходящие билеты.");
    }
}
