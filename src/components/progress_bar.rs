//! Horizontal funding progress bar.

use leptos::prelude::*;

use crate::util::funding::bar_width;

/// Fill is clamped to `[0, 100]` percent whatever the server reports.
#[component]
pub fn ProgressBar(percent: f64) -> impl IntoView {
    let width = format!("{}%", bar_width(percent));

    view! {
        <div class="progress-bar">
            <div class="progress-fill" style:width=width></div>
        </div>
    }
}
