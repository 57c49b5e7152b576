//! Minimal SVG line chart.

use leptos::prelude::*;

use crate::util::chart::{points_attr, polyline};

#[component]
pub fn LineChart(
    values: Vec<f64>,
    #[prop(default = 600.0)] width: f64,
    #[prop(default = 200.0)] height: f64,
) -> impl IntoView {
    if values.is_empty() {
        return view! { <div class="chart-empty">"No data"</div> }.into_any();
    }
    let points = polyline(&values, width, height);
    let attr = points_attr(&points);

    view! {
        <svg class="line-chart" viewBox=format!("0 0 {width} {height}") preserveAspectRatio="none">
            <polyline fill="none" stroke="#ff7a45" stroke-width="3" points=attr/>
            {points
                .into_iter()
                .map(|p| view! { <circle cx=p.x.to_string() cy=p.y.to_string() r="3" fill="#ff7a45"/> })
                .collect_view()}
        </svg>
    }
    .into_any()
}
