// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provider snapshot for a single ticker. Any field may be missing from
/// the quote-summary payload; optionality stops at the extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFinancials {
    pub current_price: Option<f64>,
    pub trailing_pe: Option<f64>,
    /// Net profit margin as a ratio (0.24 = 24%).
    pub profit_margin: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_revenue: Option<f64>,
    pub free_cashflow: Option<f64>,
    pub operating_cashflow: Option<f64>,
    pub long_name: Option<String>,
}

/// Fully-derived current-state metrics. Every field is defined after
/// extraction; market_cap and revenue carry a sentinel of 1 when the
/// provider had nothing, since both are denominators downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fundamentals {
    pub company_name: String,
    pub price: f64,
    pub pe_ratio: f64,
    pub profit_margin_pct: f64,
    pub market_cap: f64,
    pub revenue: f64,
    pub free_cash_flow: f64,
    pub fcf_yield_pct: f64,
    pub fcf_margin_pct: f64,
}

/// One named scenario's inputs. Seeded from Fundamentals, then owned and
/// possibly edited by the caller; the engine never recomputes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAssumptions {
    pub name: String,
    pub revenue_growth_pct: f64,
    pub target_profit_margin_pct: f64,
    pub target_fcf_margin_pct: f64,
    pub exit_pe: f64,
    pub exit_fcf_yield_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario: String,
    pub eps_target_price: f64,
    pub eps_cagr: f64,
    pub fcf_target_price: f64,
    pub fcf_cagr: f64,
    pub avg_target_price: f64,
    pub avg_cagr: f64,
}

/// Chart-ready bar: "Current" first, then one per scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub label: String,
    pub price: f64,
    pub color: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub ticker: String,
    pub fundamentals: Fundamentals,
    pub assumptions: Vec<ScenarioAssumptions>,
    pub horizon_years: u32,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectionRequest {
    pub fundamentals: Fundamentals,
    pub scenarios: Vec<ScenarioAssumptions>,
    pub horizon_years: u32,
}

#[derive(Debug, Serialize)]
pub struct ProjectionResponse {
    pub results: Vec<ScenarioResult>,
    pub chart: Vec<ChartPoint>,
}
