use chrono::NaiveDate;
use common::{IncomeExpensesSeries, ProfitLossReport, TopCustomer};

use crate::api_client;

/// Profit/loss totals over all invoices.
pub async fn get_profit_loss() -> Result<ProfitLossReport, String> {
    log::trace!("Fetching profit/loss report");
    let result = api_client::get("/reports/profit-loss").await;
    if let Err(e) = &result {
        log::error!("Failed to fetch profit/loss report: {}", e);
    }
    result
}

/// Month-bucketed income/expenses series, optionally restricted to a
/// date range.
pub async fn get_income_expenses(
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<IncomeExpensesSeries, String> {
    let endpoint = match range {
        Some((start, end)) => format!(
            "/reports/income-expenses?start_date={}&end_date={}",
            start.format("%Y-%m-%d"),
            end.format("%Y-%m-%d")
        ),
        None => "/reports/income-expenses".to_string(),
    };
    log::trace!("Fetching income/expenses series: {}", endpoint);
    let result = api_client::get(&endpoint).await;
    if let Err(e) = &result {
        log::error!("Failed to fetch income/expenses series: {}", e);
    }
    result
}

/// Customers ranked by revenue, backend-ordered.
pub async fn get_top_customers() -> Result<Vec<TopCustomer>, String> {
    log::trace!("Fetching top customers");
    let result: Result<Vec<TopCustomer>, String> = api_client::get("/reports/top-customers").await;
    match &result {
        Ok(customers) => log::info!("Fetched {} top customers", customers.len()),
        Err(e) => log::error!("Failed to fetch top customers: {}", e),
    }
    result
}
