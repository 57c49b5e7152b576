//! Public landing page with platform statistics.

use leptos::prelude::*;

use crate::components::stat_counter::StatCounter;
use crate::net::api::ApiClient;
use crate::net::types::StartupStats;
use crate::util::format::{grouped, millions};

/// Stats fetch outcome. `Failed` renders dashes instead of numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
enum StatsLoad {
    Pending,
    Loaded(StartupStats),
    Failed,
}

fn whole_number(value: f64) -> String {
    grouped(value.floor())
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let api = expect_context::<StoredValue<ApiClient>>();
    let stats = RwSignal::new(StatsLoad::Pending);

    let client = api.get_value();
    leptos::task::spawn_local(async move {
        let next = match client.startup_stats().await {
            Ok(loaded) => StatsLoad::Loaded(loaded),
            Err(e) => {
                log::warn!("landing stats unavailable: {e}");
                StatsLoad::Failed
            }
        };
        stats.set(next);
    });

    #[allow(clippy::cast_precision_loss)]
    let counters = move || match stats.get() {
        StatsLoad::Pending => view! { <p class="loading">"Loading stats..."</p> }.into_any(),
        StatsLoad::Loaded(loaded) => view! {
            <StatCounter target=Some(loaded.total_startups as f64) render=whole_number label="Startups Funded"/>
            <StatCounter target=Some(loaded.total_funded) render=millions label="Total Funds Raised"/>
        }
        .into_any(),
        StatsLoad::Failed => view! {
            <StatCounter target=None render=whole_number label="Startups Funded"/>
            <StatCounter target=None render=millions label="Total Funds Raised"/>
        }
        .into_any(),
    };

    view! {
        <div class="landing-page">
            <section class="hero">
                <div class="hero-content container">
                    <h1>"Welcome to StartEase"</h1>
                    <p>"Empowering Startups Through Community Funding"</p>
                    <p class="subtitle">"Support innovative ideas and get early access to amazing products"</p>
                    <div class="hero-buttons">
                        <a href="/dashboard" class="button-primary">"Explore Campaigns"</a>
                        <a href="/login" class="button-secondary">"Log in"</a>
                        <a href="/register" class="button-secondary">"Get Started"</a>
                    </div>
                </div>
            </section>

            <section class="stats-section">
                <div class="container">
                    <h2>"Our Impact"</h2>
                    <div class="stats-grid">{counters}</div>
                </div>
            </section>

            <section class="features-section">
                <div class="container">
                    <h2>"Why Choose StartEase?"</h2>
                    <div class="features-grid">
                        <Feature icon="🎯" title="Transparent" body="Track every donation and see real-time progress of campaigns"/>
                        <Feature icon="🛡️" title="Secure" body="Safe and verified transactions with verified startups"/>
                        <Feature icon="🎁" title="Early Access" body="Get early access to innovative products from startups"/>
                        <Feature icon="🚀" title="Support Innovation" body="Help bring amazing ideas to life and support entrepreneurs"/>
                    </div>
                </div>
            </section>

            <section class="cta-section">
                <div class="container text-center">
                    <h2>"Ready to Support Innovation?"</h2>
                    <p>"Join thousands of backers funding the future"</p>
                    <a href="/dashboard" class="button-primary">"Browse Campaigns"</a>
                </div>
            </section>

            <footer class="footer">
                <div class="container">
                    <p>"Empowering startups and innovators worldwide"</p>
                </div>
            </footer>
        </div>
    }
}

#[component]
fn Feature(icon: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{body}</p>
        </div>
    }
}
