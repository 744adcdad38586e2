use common::{format_currency, IncomeExpensesSeries, ProfitLossReport};
use yew::prelude::*;

use super::charts::IncomeExpensesChart;
use crate::api_client::reports::{get_income_expenses, get_profit_loss};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;

#[derive(Clone, PartialEq)]
struct ReportsData {
    profit_loss: ProfitLossReport,
    series: IncomeExpensesSeries,
}

async fn load_reports() -> Result<ReportsData, String> {
    // Unbounded range: the backend buckets the full invoice history.
    let (profit_loss, series) = futures::join!(get_profit_loss(), get_income_expenses(None));

    match (profit_loss, series) {
        (Ok(profit_loss), Ok(series)) => Ok(ReportsData {
            profit_loss,
            series,
        }),
        _ => Err("Failed to load report data".to_string()),
    }
}

#[function_component(Reports)]
pub fn reports() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(load_reports);

    let render = Callback::from(|data: ReportsData| {
        html! {
            <>
                <div class="card bg-base-100 shadow mb-6">
                    <div class="card-body">
                        <h3 class="card-title text-lg">{"Profit & Loss"}</h3>
                        <table class="table table-sm max-w-md">
                            <tbody>
                                <tr>
                                    <td>{"Total income"}</td>
                                    <td class="text-right text-success">
                                        {format_currency(data.profit_loss.total_income)}
                                    </td>
                                </tr>
                                <tr>
                                    <td>{"Total expenses"}</td>
                                    <td class="text-right text-error">
                                        {format_currency(data.profit_loss.total_expenses)}
                                    </td>
                                </tr>
                                <tr class="font-medium">
                                    <td>{"Net profit"}</td>
                                    <td class="text-right">
                                        {format_currency(data.profit_loss.net_profit)}
                                    </td>
                                </tr>
                            </tbody>
                        </table>
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-lg">{"Income vs Expenses"}</h3>
                        <p class="text-sm text-gray-500 mb-4">{"Monthly, all time"}</p>
                        {if data.series.labels.is_empty() {
                            html! {
                                <div class="text-center py-8 text-gray-500">
                                    <i class="fas fa-chart-line text-4xl mb-4 opacity-50"></i>
                                    <p>{"No invoice data to chart yet."}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <IncomeExpensesChart
                                    series={data.series.clone()}
                                    chart_id="reports-income-expenses-chart"
                                />
                            }
                        }}
                    </div>
                </div>
            </>
        }
    });

    html! {
        <>
            <h2 class="text-2xl font-bold mb-4">{"Reports"}</h2>
            <FetchRender<ReportsData>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
            />
        </>
    }
}
