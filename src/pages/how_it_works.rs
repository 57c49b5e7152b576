//! Static explainer for how funding on the platform works.

use leptos::prelude::*;

/// `(title, body)` cards.
type Point = (&'static str, &'static str);

const KEY_POINTS: [Point; 4] = [
    (
        "No Money Until Goal Met",
        "The startup owner receives no funds unless the required amount is obtained within the specified tenure.",
    ),
    (
        "Minimum Donation",
        "The minimum amount a person can donate is the cost of the product specified. They can also donate more to support the process.",
    ),
    ("Legal Protection", "If the startup owner runs away with the money, legal action will be taken against them."),
    ("No Refunds on Failure", "This is not a store. If the startup fails, the money will not be refunded."),
];

const REVENUE: [Point; 4] = [
    ("Advertisements", "Startups can advertise their products to appear on the featured tab."),
    ("Commission", "For each donation, 20% is taken as commission by the company."),
    (
        "Taxes Covered",
        "Payment taxes are covered by the company's commission, so startups receive 80% of the donation.",
    ),
    ("Grants", "We receive grants from successful startups that launched through our platform."),
];

fn cards(points: &'static [Point]) -> impl IntoView {
    points
        .iter()
        .map(|(title, body)| {
            view! {
                <div class="point-card">
                    <h3>{*title}</h3>
                    <p>{*body}</p>
                </div>
            }
        })
        .collect_view()
}

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    view! {
        <div class="how-it-works page-container container">
            <header class="page-header">
                <h1>"How It Works"</h1>
                <p>"Empowering startups and connecting innovators with supporters"</p>
            </header>

            <section class="section">
                <h2>"For Startups"</h2>
                <p>
                    "Our platform is designed to help newly starting companies showcase their product ideas and prototypes. "
                    "Normal people and donors can browse these ideas, and if they like a startup, they can donate to help bring it to life. "
                    "If the startup launches successfully, donors receive the product as a reward for their support."
                </p>
            </section>

            <section class="section key-points">
                <h2>"Key Points"</h2>
                <div class="points-grid">{cards(&KEY_POINTS)}</div>
            </section>

            <section class="section revenue">
                <h2>"How We Make Money"</h2>
                <div class="points-grid">{cards(&REVENUE)}</div>
            </section>
        </div>
    }
}
