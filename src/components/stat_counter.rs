//! Animated count-up for landing page statistics.

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::util::counter::{COUNTER_DURATION_MS, COUNTER_FRAME_MS, eased_value};

/// Counts from zero to `target`, rendering each frame with `render`.
///
/// `None` means the number is unknown and shows a dash.
#[component]
pub fn StatCounter(target: Option<f64>, render: fn(f64) -> String, label: &'static str) -> impl IntoView {
    let shown = RwSignal::new(0.0_f64);

    #[cfg(feature = "csr")]
    if let Some(target) = target {
        leptos::task::spawn_local(async move {
            let started = js_sys::Date::now();
            loop {
                let elapsed = js_sys::Date::now() - started;
                let value = eased_value(target, elapsed, COUNTER_DURATION_MS);
                // Disposed signal: the page is gone.
                if shown.try_set(value).is_some() || elapsed >= COUNTER_DURATION_MS {
                    break;
                }
                gloo_timers::future::TimeoutFuture::new(COUNTER_FRAME_MS).await;
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    if let Some(target) = target {
        shown.set(target);
    }

    let text = move || if target.is_some() { render(shown.get()) } else { "—".to_owned() };

    view! {
        <div class="stat-item">
            <div class="stat-number">{text}</div>
            <div class="stat-label">{label}</div>
        </div>
    }
}
