use plotly::common::Title;
use plotly::layout::Axis;
use plotly::{Bar, Layout};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::forecast::DayForecast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue);
}

const DIV_ID: &str = "hourly-temperature-chart";

#[derive(Properties, PartialEq)]
pub struct HourlyChartProps {
    pub day: DayForecast,
}

/// Bar chart of the selected day's 3-hour temperatures, one bar per sample in
/// chronological order.
#[function_component(HourlyChart)]
pub fn hourly_chart(props: &HourlyChartProps) -> Html {
    let container_ref = use_node_ref();
    let day = props.day.clone();

    use_effect_with((container_ref.clone(), day), move |(container_ref, day)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(DIV_ID);

            let points = day.chart_points();
            log::debug!("Rendering hourly chart for {} ({} points)", day.date, points.len());

            let times: Vec<String> = points.iter().map(|(time, _)| time.clone()).collect();
            let temps: Vec<f64> = points.iter().map(|(_, temp)| *temp).collect();

            let trace = Bar::new(times, temps).name("Temperature");

            let layout = Layout::new()
                .x_axis(Axis::new().title(Title::with_text("Time")))
                .y_axis(Axis::new().title(Title::with_text("Temperature")))
                .show_legend(false)
                .height(300);

            // Serialize trace and layout to JSON and parse as JS objects
            let trace_json = serde_json::to_string(&trace).unwrap();
            let trace_js = js_sys::JSON::parse(&trace_json).unwrap();

            let data_js = js_sys::Array::new();
            data_js.push(&trace_js);

            let layout_json = serde_json::to_string(&layout).unwrap();
            let layout_js = js_sys::JSON::parse(&layout_json).unwrap();

            newPlot(DIV_ID, data_js.into(), layout_js);
        }
        || ()
    });

    html! {
        <div ref={container_ref} class="w-full" style="height:300px;"></div>
    }
}
