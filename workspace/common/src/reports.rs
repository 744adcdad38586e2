use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profit/loss totals, aggregated entirely server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfitLossReport {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_profit: Decimal,
}

/// One labeled line of the income/expenses chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDataset {
    pub label: String,
    pub data: Vec<Decimal>,
}

/// Time-bucketed income/expenses series in chart form: one label per
/// bucket, datasets aligned to the labels by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeExpensesSeries {
    pub labels: Vec<String>,
    pub datasets: Vec<SeriesDataset>,
}

/// Top-customer ranking entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCustomer {
    pub id: String,
    pub name: String,
    pub revenue: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profit_loss_parses_backend_payload() {
        // The backend attaches a `period` object the client ignores.
        let report: ProfitLossReport = serde_json::from_str(
            r#"{"total_income": 120.5, "total_expenses": 0,
                "net_profit": 120.5, "period": {"start_date": null, "end_date": null}}"#,
        )
        .unwrap();
        assert_eq!(report.total_expenses, Decimal::ZERO);
        assert_eq!(report.net_profit, report.total_income);
    }

    #[test]
    fn test_series_keeps_dataset_alignment() {
        let series: IncomeExpensesSeries = serde_json::from_str(
            r#"{"labels": ["2026-07", "2026-08"],
                "datasets": [
                    {"label": "Income", "data": [10.0, 20.0]},
                    {"label": "Expenses", "data": [0, 0]}
                ]}"#,
        )
        .unwrap();
        assert_eq!(series.labels.len(), 2);
        assert_eq!(series.datasets[0].label, "Income");
        assert_eq!(series.datasets[0].data[1], Decimal::from(20));
    }

    #[test]
    fn test_top_customers_parse_in_backend_order() {
        let customers: Vec<TopCustomer> = serde_json::from_str(
            r#"[{"id": "2", "name": "Ada Lovelace", "revenue": 90.0},
                {"id": "5", "name": "Charles Babbage", "revenue": 30.5}]"#,
        )
        .unwrap();
        assert_eq!(customers[0].name, "Ada Lovelace");
        assert_eq!(customers[1].revenue, Decimal::new(305, 1));
    }
}
