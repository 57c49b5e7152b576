//! Campaign summary card used by the campaign browser and startup portal.

use leptos::prelude::*;

use crate::components::progress_bar::ProgressBar;
use crate::net::types::Campaign;
use crate::util::format::{capitalize, money, truncate_chars};

const DESCRIPTION_PREVIEW_CHARS: usize = 100;

/// A clickable card linking to the campaign's detail page.
#[component]
pub fn CampaignCard(campaign: Campaign) -> impl IntoView {
    let href = format!("/campaign/{}", campaign.id);
    let progress = campaign.progress();
    let company = campaign.company_name().map(str::to_owned);
    let kind = campaign.product_type;
    let backers = campaign.backer_count;

    let image = match campaign.image.clone() {
        Some(src) => view! { <img src=src alt=campaign.product_name.clone()/> }.into_any(),
        None => view! { <div class="campaign-image-placeholder">{kind.icon()}</div> }.into_any(),
    };

    view! {
        <a class="campaign-card" href=href>
            <div class="campaign-image">{image}</div>
            <div class="campaign-content">
                <span class="campaign-type">{capitalize(kind.as_str())}</span>
                <h3>{campaign.product_name.clone()}</h3>
                {company.map(|name| view! { <p class="campaign-company">"by " {name}</p> })}
                <p class="campaign-desc">{truncate_chars(&campaign.description, DESCRIPTION_PREVIEW_CHARS)}</p>
                <div class="campaign-amounts">
                    <span class="current">{money(campaign.current_amount)}</span>
                    <span class="goal">"of " {money(campaign.goal_amount)}</span>
                </div>
                <ProgressBar percent=progress/>
                <div class="campaign-stats">
                    <span>{format!("{progress:.0}% funded")}</span>
                    <span>{format!("{backers} backers")}</span>
                </div>
            </div>
        </a>
    }
}
