use chrono::{Duration, Local};
use common::{format_currency, IncomeExpensesSeries, ProfitLossReport, TopCustomer};
use yew::prelude::*;

use crate::api_client::reports::{get_income_expenses, get_profit_loss, get_top_customers};
use crate::common::fetch_hook::use_fetch_with_refetch;
use crate::common::fetch_render::FetchRender;
use crate::components::reports::charts::IncomeExpensesChart;

#[derive(Clone, PartialEq)]
struct DashboardData {
    profit_loss: ProfitLossReport,
    recent_series: IncomeExpensesSeries,
    top_customers: Vec<TopCustomer>,
}

/// The three dashboard aggregates are loaded together; if any of them
/// fails the whole page shows a single error instead of a partial view.
async fn load_dashboard() -> Result<DashboardData, String> {
    let end = Local::now().date_naive();
    let start = end - Duration::days(30);

    let (profit_loss, recent_series, top_customers) = futures::join!(
        get_profit_loss(),
        get_income_expenses(Some((start, end))),
        get_top_customers()
    );

    match (profit_loss, recent_series, top_customers) {
        (Ok(profit_loss), Ok(recent_series), Ok(top_customers)) => Ok(DashboardData {
            profit_loss,
            recent_series,
            top_customers,
        }),
        _ => Err("Failed to load dashboard data".to_string()),
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let (fetch_state, refetch) = use_fetch_with_refetch(load_dashboard);

    let render = Callback::from(|data: DashboardData| {
        html! {
            <>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                    <div class="stat bg-base-100 shadow rounded-box">
                        <div class="stat-figure text-success">
                            <i class="fas fa-arrow-trend-up text-2xl"></i>
                        </div>
                        <div class="stat-title">{"Total Income"}</div>
                        <div class="stat-value text-success">
                            {format_currency(data.profit_loss.total_income)}
                        </div>
                    </div>
                    <div class="stat bg-base-100 shadow rounded-box">
                        <div class="stat-figure text-error">
                            <i class="fas fa-arrow-trend-down text-2xl"></i>
                        </div>
                        <div class="stat-title">{"Total Expenses"}</div>
                        <div class="stat-value text-error">
                            {format_currency(data.profit_loss.total_expenses)}
                        </div>
                    </div>
                    <div class="stat bg-base-100 shadow rounded-box">
                        <div class="stat-figure text-primary">
                            <i class="fas fa-scale-balanced text-2xl"></i>
                        </div>
                        <div class="stat-title">{"Net Profit"}</div>
                        <div class="stat-value">
                            {format_currency(data.profit_loss.net_profit)}
                        </div>
                    </div>
                </div>

                <div class="card bg-base-100 shadow mb-6">
                    <div class="card-body">
                        <h3 class="card-title text-lg">{"Income vs Expenses"}</h3>
                        <p class="text-sm text-gray-500 mb-4">{"Last 30 days"}</p>
                        <IncomeExpensesChart
                            series={data.recent_series.clone()}
                            chart_id="dashboard-income-expenses-chart"
                        />
                    </div>
                </div>

                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h3 class="card-title text-lg">{"Top Customers"}</h3>
                        {if data.top_customers.is_empty() {
                            html! {
                                <div class="text-center py-8 text-gray-500">
                                    <i class="fas fa-users text-4xl mb-4 opacity-50"></i>
                                    <p>{"No paid invoices yet."}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <table class="table">
                                    <thead>
                                        <tr>
                                            <th>{"Customer"}</th>
                                            <th class="text-right">{"Revenue"}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {for data.top_customers.iter().map(|customer| html! {
                                            <tr key={customer.id.clone()}>
                                                <td class="font-medium">{&customer.name}</td>
                                                <td class="text-right">{format_currency(customer.revenue)}</td>
                                            </tr>
                                        })}
                                    </tbody>
                                </table>
                            }
                        }}
                    </div>
                </div>
            </>
        }
    });

    html! {
        <>
            <h2 class="text-2xl font-bold mb-4">{"Dashboard"}</h2>
            <FetchRender<DashboardData>
                state={(*fetch_state).clone()}
                render={render}
                on_retry={Some(refetch)}
            />
        </>
    }
}
