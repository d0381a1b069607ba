// src/services/yahoo.rs
use log::{error, info};
use regex::Regex;
use reqwest::Client;
use serde::Deserialize;

use crate::models::RawFinancials;
use crate::BoxError;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const QUOTE_SUMMARY_MODULES: &str = "price,summaryDetail,financialData";

/// Shared client for all provider calls. The cookie store matters: the
/// quote-summary endpoint rejects crumbs presented without the session
/// cookies handed out by the quote page.
pub fn build_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(USER_AGENT)
        .cookie_store(true)
        .build()
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: QuoteSummaryBody,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryBody {
    result: Option<Vec<QuoteSummaryResult>>,
    error: Option<ProviderError>,
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    code: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuoteSummaryResult {
    price: Option<PriceModule>,
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetailModule>,
    #[serde(rename = "financialData")]
    financial_data: Option<FinancialDataModule>,
}

#[derive(Debug, Deserialize)]
struct PriceModule {
    #[serde(rename = "longName")]
    long_name: Option<String>,
    #[serde(rename = "marketCap")]
    market_cap: Option<WrappedValue>,
}

#[derive(Debug, Deserialize)]
struct SummaryDetailModule {
    #[serde(rename = "trailingPE")]
    trailing_pe: Option<WrappedValue>,
}

#[derive(Debug, Deserialize)]
struct FinancialDataModule {
    #[serde(rename = "currentPrice")]
    current_price: Option<WrappedValue>,
    #[serde(rename = "profitMargins")]
    profit_margins: Option<WrappedValue>,
    #[serde(rename = "totalRevenue")]
    total_revenue: Option<WrappedValue>,
    #[serde(rename = "freeCashflow")]
    free_cashflow: Option<WrappedValue>,
    #[serde(rename = "operatingCashflow")]
    operating_cashflow: Option<WrappedValue>,
}

/// Numerics arrive as {"raw": 1.23, "fmt": "1.23"}; only raw matters here.
/// Empty objects ({}) show up for suppressed fields, hence the inner Option.
#[derive(Debug, Deserialize)]
struct WrappedValue {
    raw: Option<f64>,
}

fn raw(value: &Option<WrappedValue>) -> Option<f64> {
    value.as_ref().and_then(|w| w.raw)
}

/// Fetch the provider snapshot for one ticker. Any failure along the way
/// (connectivity, missing crumb, provider error body, empty result) is
/// fatal to the request; callers surface it as-is and do not retry.
pub async fn fetch_raw_financials(client: &Client, ticker: &str) -> Result<RawFinancials, BoxError> {
    let crumb = fetch_crumb(client, ticker).await?;

    let url = format!(
        "https://query2.finance.yahoo.com/v10/finance/quoteSummary/{}?modules={}&crumb={}",
        ticker, QUOTE_SUMMARY_MODULES, crumb
    );
    info!("Fetching quote summary from URL: {}", url);

    let envelope: QuoteSummaryEnvelope = client.get(&url).send().await?.json().await?;
    let body = envelope.quote_summary;

    if let Some(provider_error) = body.error {
        let code = provider_error.code.unwrap_or_else(|| "unknown".to_string());
        let description = provider_error.description.unwrap_or_default();
        error!("Quote summary error for {}: {} ({})", ticker, description, code);
        return Err(format!("{} ({})", description, code).into());
    }

    let result = body
        .result
        .and_then(|mut results| {
            if results.is_empty() {
                None
            } else {
                Some(results.remove(0))
            }
        })
        .ok_or_else(|| format!("No quote summary result for {}", ticker))?;

    Ok(flatten(result))
}

/// The quote-summary API wants a crumb that is embedded in the quote page
/// HTML next to the session cookies.
async fn fetch_crumb(client: &Client, ticker: &str) -> Result<String, BoxError> {
    let url = format!("https://finance.yahoo.com/quote/{}", ticker);
    info!("Fetching crumb from quote page: {}", url);

    let page = client.get(&url).send().await?.text().await?;

    let re = Regex::new(r#""crumb"\s*:\s*"([^"]+)""#)?;
    let crumb = re
        .captures(&page)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace("\\u002F", "/"))
        .ok_or("Crumb not found in quote page")?;

    Ok(crumb)
}

fn flatten(result: QuoteSummaryResult) -> RawFinancials {
    let price = result.price;
    let summary = result.summary_detail;
    let financial = result.financial_data;

    RawFinancials {
        current_price: financial.as_ref().and_then(|m| raw(&m.current_price)),
        trailing_pe: summary.as_ref().and_then(|m| raw(&m.trailing_pe)),
        profit_margin: financial.as_ref().and_then(|m| raw(&m.profit_margins)),
        market_cap: price.as_ref().and_then(|m| raw(&m.market_cap)),
        total_revenue: financial.as_ref().and_then(|m| raw(&m.total_revenue)),
        free_cashflow: financial.as_ref().and_then(|m| raw(&m.free_cashflow)),
        operating_cashflow: financial.as_ref().and_then(|m| raw(&m.operating_cashflow)),
        long_name: price.and_then(|m| m.long_name),
    }
}
