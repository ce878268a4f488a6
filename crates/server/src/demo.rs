//! Demo inputs for the dashboard: fixed quick-test token, random features for
//! the selector, and the synthetic 7-day profit illustration.
//!
//! None of this is market data.

use chrono::{Duration, NaiveDate};
use engine::TokenFeatures;
use rand::Rng;
use serde::Serialize;

pub const DEMO_TOKENS: [&str; 4] = ["PEPE", "SHIB", "DOGE", "FLOKI"];

/// Daily step size of the synthetic profit walk, in dollars
const WALK_STEP: f64 = 35.0;

/// Canonical demo symbol for user input, if it is one
pub fn demo_token(input: &str) -> Option<&'static str> {
    let wanted = input.trim();
    DEMO_TOKENS
        .iter()
        .copied()
        .find(|t| t.eq_ignore_ascii_case(wanted))
}

/// Fixed features used by the sidebar's quick test
pub fn quick_test_features() -> TokenFeatures {
    TokenFeatures {
        name: "PEPE".to_string(),
        price: 0.00001,
        liquidity: 125_000,
        volume: 250_000,
        holders: 1200,
    }
}

pub fn random_features<R: Rng + ?Sized>(name: &str, rng: &mut R) -> TokenFeatures {
    TokenFeatures {
        name: name.to_string(),
        price: rng.gen_range(0.00001..0.01),
        liquidity: rng.gen_range(50_000..500_000),
        volume: rng.gen_range(100_000..1_000_000),
        holders: rng.gen_range(500..5_000),
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PerformancePoint {
    pub date: NaiveDate,
    pub pnl: f64,
}

/// Cumulative random walk, one point per day for the `days` days before `today`
pub fn synthetic_performance<R: Rng + ?Sized>(
    days: u32,
    today: NaiveDate,
    rng: &mut R,
) -> Vec<PerformancePoint> {
    let mut pnl = 0.0;
    (0..days)
        .map(|i| {
            pnl += rng.gen_range(-1.0..1.0) * WALK_STEP;
            PerformancePoint {
                date: today - Duration::days(i64::from(days - i)),
                pnl: (pnl * 100.0_f64).round() / 100.0,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_demo_token_lookup() {
        assert_eq!(demo_token("pepe"), Some("PEPE"));
        assert_eq!(demo_token(" FLOKI "), Some("FLOKI"));
        assert_eq!(demo_token("BTC"), None);
    }

    #[test]
    fn test_random_features_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let f = random_features("DOGE", &mut rng);
            assert_eq!(f.name, "DOGE");
            assert!((0.00001..0.01).contains(&f.price));
            assert!((50_000..500_000).contains(&f.liquidity));
            assert!((100_000..1_000_000).contains(&f.volume));
            assert!((500..5_000).contains(&f.holders));
        }
    }

    #[test]
    fn test_synthetic_performance_dates() {
        let mut rng = StdRng::seed_from_u64(42);
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let points = synthetic_performance(7, today, &mut rng);

        assert_eq!(points.len(), 7);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2026, 10, 9).unwrap());
        assert_eq!(points[6].date, NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
        // Each step moves by at most one walk step (plus rounding)
        for pair in points.windows(2) {
            assert!((pair[1].pnl - pair[0].pnl).abs() <= WALK_STEP + 0.01);
        }
    }
}
