use common::IncomeExpensesSeries;
use plotly::common::Mode;
use plotly::{Layout, Scatter};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

const SERIES_COLORS: [&str; 2] = ["rgb(20, 184, 166)", "rgb(239, 68, 68)"];

#[derive(Properties, PartialEq)]
pub struct IncomeExpensesChartProps {
    pub series: IncomeExpensesSeries,
    /// Element id for the plot container; must be unique per page.
    pub chart_id: AttrValue,
}

/// Line chart of the month-bucketed income/expenses series. Datasets
/// come pre-aligned to the label axis and are drawn in backend order.
#[function_component(IncomeExpensesChart)]
pub fn income_expenses_chart(props: &IncomeExpensesChartProps) -> Html {
    let container_ref = use_node_ref();
    let series = props.series.clone();
    let chart_id = props.chart_id.to_string();

    use_effect_with(
        (container_ref.clone(), series, chart_id),
        move |(container_ref, series, chart_id)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(chart_id);

                let data_js = js_sys::Array::new();
                for (index, dataset) in series.datasets.iter().enumerate() {
                    let values: Vec<f64> = dataset
                        .data
                        .iter()
                        .map(|v| v.to_string().parse::<f64>().unwrap_or(0.0))
                        .collect();

                    let color = SERIES_COLORS[index % SERIES_COLORS.len()];
                    let trace = Scatter::new(series.labels.clone(), values)
                        .mode(Mode::LinesMarkers)
                        .name(&dataset.label)
                        .line(plotly::common::Line::new().color(color).width(2.0));

                    let trace_json = serde_json::to_string(&trace).unwrap();
                    let trace_js = js_sys::JSON::parse(&trace_json).unwrap();
                    data_js.push(&trace_js);
                }

                let layout = Layout::new()
                    .x_axis(
                        plotly::layout::Axis::new()
                            .title(plotly::common::Title::with_text("Month")),
                    )
                    .y_axis(
                        plotly::layout::Axis::new()
                            .title(plotly::common::Title::with_text("Amount")),
                    )
                    .height(400);

                let layout_json = serde_json::to_string(&layout).unwrap();
                let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

                newPlot(chart_id, data_js.into(), layout_js);
            }
            || ()
        },
    );

    html! {
        <div ref={container_ref} style="width:100%; height:400px;"></div>
    }
}
