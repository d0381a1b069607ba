use log::info;

use scenario_dashboard::models::Fundamentals;
use scenario_dashboard::services::projection::{
    chart_series, default_assumptions, project, DEFAULT_HORIZON_YEARS,
};

fn main() {
    env_logger::init();

    // Offline end-to-end run against a hand-built company.
    let fundamentals = Fundamentals {
        company_name: "Sample Corp".to_string(),
        price: 100.0,
        pe_ratio: 20.0,
        profit_margin_pct: 20.0,
        market_cap: 2000.0,
        revenue: 1000.0,
        free_cash_flow: 150.0,
        fcf_yield_pct: 7.5,
        fcf_margin_pct: 15.0,
    };

    let assumptions = default_assumptions(&fundamentals);
    let results = project(&fundamentals, &assumptions, DEFAULT_HORIZON_YEARS);

    for r in &results {
        info!(
            "{}: EPS target {:.2} ({:.2}%), FCF target {:.2} ({:.2}%), avg {:.2} ({:.2}%)",
            r.scenario,
            r.eps_target_price,
            r.eps_cagr * 100.0,
            r.fcf_target_price,
            r.fcf_cagr * 100.0,
            r.avg_target_price,
            r.avg_cagr * 100.0
        );
    }

    for point in chart_series(&fundamentals, &results) {
        info!("chart: {} -> {:.2} ({})", point.label, point.price, point.color);
    }
}
