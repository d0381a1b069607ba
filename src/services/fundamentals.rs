// src/services/fundamentals.rs
use crate::models::{Fundamentals, RawFinancials};

/// Resolve a provider snapshot into the fully-populated metric set.
///
/// Total over its input: every missing field lands on a fixed default, so
/// no optionality leaks downstream. The defaults are not interchangeable —
/// market cap and revenue fall back to 1 because both sit in denominators
/// later, while price and cash flow fall back to 0.
pub fn extract(ticker: &str, raw: &RawFinancials) -> Fundamentals {
    let price = raw.current_price.unwrap_or(0.0);

    // A negative trailing P/E stays as reported; only absence maps to 0.
    let pe_ratio = raw.trailing_pe.unwrap_or(0.0);

    let profit_margin_pct = raw.profit_margin.unwrap_or(0.0) * 100.0;

    let market_cap = raw.market_cap.unwrap_or(1.0);
    let revenue = raw.total_revenue.unwrap_or(1.0);

    // One-level fallback chain: FCF, else operating cash flow, else 0.
    let free_cash_flow = raw.free_cashflow.or(raw.operating_cashflow).unwrap_or(0.0);

    let fcf_yield_pct = if market_cap != 0.0 {
        free_cash_flow / market_cap * 100.0
    } else {
        0.0
    };
    let fcf_margin_pct = if revenue != 0.0 {
        free_cash_flow / revenue * 100.0
    } else {
        0.0
    };

    let company_name = raw
        .long_name
        .clone()
        .unwrap_or_else(|| ticker.to_string());

    Fundamentals {
        company_name,
        price,
        pe_ratio,
        profit_margin_pct,
        market_cap,
        revenue,
        free_cash_flow,
        fcf_yield_pct,
        fcf_margin_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn full_snapshot() -> RawFinancials {
        RawFinancials {
            current_price: Some(100.0),
            trailing_pe: Some(25.0),
            profit_margin: Some(0.24),
            market_cap: Some(2000.0),
            total_revenue: Some(1000.0),
            free_cashflow: Some(150.0),
            operating_cashflow: Some(180.0),
            long_name: Some("Sample Corp".to_string()),
        }
    }

    #[test]
    fn maps_complete_snapshot_without_fallbacks() {
        let f = extract("SMPL", &full_snapshot());

        assert_eq!(f.company_name, "Sample Corp");
        assert_relative_eq!(f.price, 100.0);
        assert_relative_eq!(f.pe_ratio, 25.0);
        assert_relative_eq!(f.profit_margin_pct, 24.0);
        assert_relative_eq!(f.market_cap, 2000.0);
        assert_relative_eq!(f.revenue, 1000.0);
        assert_relative_eq!(f.free_cash_flow, 150.0);
        assert_relative_eq!(f.fcf_yield_pct, 7.5);
        assert_relative_eq!(f.fcf_margin_pct, 15.0);
    }

    #[test]
    fn missing_fcf_falls_back_to_operating_cash_flow() {
        let mut raw = full_snapshot();
        raw.free_cashflow = None;

        let f = extract("SMPL", &raw);
        assert_relative_eq!(f.free_cash_flow, 180.0);
    }

    #[test]
    fn missing_both_cash_flows_resolves_to_zero() {
        let mut raw = full_snapshot();
        raw.free_cashflow = None;
        raw.operating_cashflow = None;

        let f = extract("SMPL", &raw);
        assert_relative_eq!(f.free_cash_flow, 0.0);
        assert_relative_eq!(f.fcf_yield_pct, 0.0);
        assert_relative_eq!(f.fcf_margin_pct, 0.0);
    }

    #[test]
    fn missing_market_cap_uses_unit_sentinel() {
        let mut raw = full_snapshot();
        raw.market_cap = None;

        let f = extract("SMPL", &raw);
        assert_relative_eq!(f.market_cap, 1.0);
        // The sentinel keeps the yield defined (if absurd), not NaN/inf.
        assert!(f.fcf_yield_pct.is_finite());
        assert_relative_eq!(f.fcf_yield_pct, 15000.0);
    }

    #[test]
    fn empty_snapshot_is_fully_defaulted() {
        let f = extract("SMPL", &RawFinancials::default());

        assert_eq!(f.company_name, "SMPL");
        assert_relative_eq!(f.price, 0.0);
        assert_relative_eq!(f.pe_ratio, 0.0);
        assert_relative_eq!(f.profit_margin_pct, 0.0);
        assert_relative_eq!(f.market_cap, 1.0);
        assert_relative_eq!(f.revenue, 1.0);
        assert_relative_eq!(f.free_cash_flow, 0.0);
        assert_relative_eq!(f.fcf_yield_pct, 0.0);
        assert_relative_eq!(f.fcf_margin_pct, 0.0);
    }

    #[test]
    fn negative_pe_is_preserved() {
        let mut raw = full_snapshot();
        raw.trailing_pe = Some(-12.5);

        let f = extract("SMPL", &raw);
        assert_relative_eq!(f.pe_ratio, -12.5);
    }

    #[test]
    fn explicit_zero_market_cap_guards_yield() {
        let mut raw = full_snapshot();
        raw.market_cap = Some(0.0);

        let f = extract("SMPL", &raw);
        assert_relative_eq!(f.market_cap, 0.0);
        assert_relative_eq!(f.fcf_yield_pct, 0.0);
    }
}
