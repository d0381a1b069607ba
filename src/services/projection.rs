// src/services/projection.rs
use crate::models::{ChartPoint, Fundamentals, ScenarioAssumptions, ScenarioResult};

pub const MIN_HORIZON_YEARS: u32 = 3;
pub const MAX_HORIZON_YEARS: u32 = 10;
pub const DEFAULT_HORIZON_YEARS: u32 = 5;

const CURRENT_COLOR: &str = "#29b5e8";
const BEAR_COLOR: &str = "#ff4b4b";
const BASE_COLOR: &str = "#7d7d7d";
const BULL_COLOR: &str = "#09ab3b";

pub fn scenario_color(name: &str) -> &'static str {
    match name {
        "Bear" => BEAR_COLOR,
        "Bull" => BULL_COLOR,
        _ => BASE_COLOR,
    }
}

/// Seed Bear/Base/Bull from the current margins: Base carries them
/// forward, Bear haircuts both by five points, Bull adds five.
pub fn default_assumptions(fundamentals: &Fundamentals) -> Vec<ScenarioAssumptions> {
    let margin = fundamentals.profit_margin_pct;
    let fcf_margin = fundamentals.fcf_margin_pct;

    vec![
        ScenarioAssumptions {
            name: "Bear".to_string(),
            revenue_growth_pct: 5.0,
            target_profit_margin_pct: margin - 5.0,
            target_fcf_margin_pct: fcf_margin - 5.0,
            exit_pe: 15.0,
            exit_fcf_yield_pct: 6.0,
        },
        ScenarioAssumptions {
            name: "Base".to_string(),
            revenue_growth_pct: 10.0,
            target_profit_margin_pct: margin,
            target_fcf_margin_pct: fcf_margin,
            exit_pe: 20.0,
            exit_fcf_yield_pct: 4.0,
        },
        ScenarioAssumptions {
            name: "Bull".to_string(),
            revenue_growth_pct: 15.0,
            target_profit_margin_pct: margin + 5.0,
            target_fcf_margin_pct: fcf_margin + 5.0,
            exit_pe: 25.0,
            exit_fcf_yield_pct: 3.0,
        },
    ]
}

/// (end/start)^(1/n) - 1, guarded on the start price only. A negative
/// target over a positive price goes through powf unchanged and comes
/// back NaN; serde_json renders that as null and the frontend shows n/a.
fn calculate_cagr(current_price: f64, target_price: f64, years: u32) -> f64 {
    if current_price > 0.0 {
        (target_price / current_price).powf(1.0 / years as f64) - 1.0
    } else {
        0.0
    }
}

/// Run every scenario against the same fundamentals over one horizon.
/// Pure and order-preserving: results come back in the order the
/// scenarios were given (conventionally Bear, Base, Bull).
pub fn project(
    fundamentals: &Fundamentals,
    scenarios: &[ScenarioAssumptions],
    horizon_years: u32,
) -> Vec<ScenarioResult> {
    // Shares are implied by the valuation, not reported: mcap / price.
    // A zero quotient (zero market cap) falls back to the unit sentinel.
    let mut shares = fundamentals.market_cap / fundamentals.price;
    if shares == 0.0 {
        shares = 1.0;
    }

    scenarios
        .iter()
        .map(|assumptions| {
            let growth = 1.0 + assumptions.revenue_growth_pct / 100.0;
            let future_rev = fundamentals.revenue * growth.powi(horizon_years as i32);
            let future_earnings = future_rev * (assumptions.target_profit_margin_pct / 100.0);
            let future_fcf = future_rev * (assumptions.target_fcf_margin_pct / 100.0);

            let target_mcap_eps = future_earnings * assumptions.exit_pe;
            // A non-positive exit yield values the FCF leg at zero rather
            // than dividing by it.
            let target_mcap_fcf = if assumptions.exit_fcf_yield_pct > 0.0 {
                future_fcf / (assumptions.exit_fcf_yield_pct / 100.0)
            } else {
                0.0
            };

            let eps_target_price = target_mcap_eps / shares;
            let fcf_target_price = target_mcap_fcf / shares;
            let avg_target_price = (eps_target_price + fcf_target_price) / 2.0;

            ScenarioResult {
                scenario: assumptions.name.clone(),
                eps_target_price,
                eps_cagr: calculate_cagr(fundamentals.price, eps_target_price, horizon_years),
                fcf_target_price,
                fcf_cagr: calculate_cagr(fundamentals.price, fcf_target_price, horizon_years),
                avg_target_price,
                avg_cagr: calculate_cagr(fundamentals.price, avg_target_price, horizon_years),
            }
        })
        .collect()
}

/// Assemble the bar series for the rendering side: current price first,
/// then the average target per scenario, each with its fixed color.
pub fn chart_series(fundamentals: &Fundamentals, results: &[ScenarioResult]) -> Vec<ChartPoint> {
    let mut series = Vec::with_capacity(results.len() + 1);
    series.push(ChartPoint {
        label: "Current".to_string(),
        price: fundamentals.price,
        color: CURRENT_COLOR.to_string(),
    });
    for result in results {
        series.push(ChartPoint {
            label: result.scenario.clone(),
            price: result.avg_target_price,
            color: scenario_color(&result.scenario).to_string(),
        });
    }
    series
}
