//! Campaign creation form for startup owners.
//!
//! Backers reach this route too (it only requires a session) and get a
//! prompt to register a startup instead of the form.

#[cfg(test)]
#[path = "create_campaign_test.rs"]
mod create_campaign_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::{MISSING_FIELDS, optional_text};
use crate::components::form_field::{FormField, TextAreaField};
use crate::net::api::{ApiClient, ImageFile};
use crate::net::types::{CampaignDraft, Identity, ProductType};

const CREATE_FAILED: &str = "Failed to create campaign";
const PORTAL_PATH: &str = "/startup-portal";

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignInput {
    pub product_name: String,
    pub product_type: ProductType,
    pub description: String,
    pub detailed_description: String,
    pub goal_amount: String,
    pub early_access_price: String,
    pub estimated_delivery: String,
    pub end_date: String,
}

/// Name, goal and early-access price are required; blank dates are omitted.
pub fn validate_campaign(input: &CampaignInput) -> Result<CampaignDraft, &'static str> {
    let required = [&input.product_name, &input.goal_amount, &input.early_access_price];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err(MISSING_FIELDS);
    }
    Ok(CampaignDraft {
        product_name: input.product_name.trim().to_owned(),
        product_type: input.product_type,
        description: input.description.trim().to_owned(),
        detailed_description: input.detailed_description.trim().to_owned(),
        goal_amount: input.goal_amount.trim().to_owned(),
        early_access_price: input.early_access_price.trim().to_owned(),
        estimated_delivery: optional_text(&input.estimated_delivery),
        end_date: optional_text(&input.end_date),
    })
}

#[component]
pub fn CreateCampaignPage(identity: Identity) -> impl IntoView {
    if !identity.is_startup() {
        return view! { <StartupRequired/> }.into_any();
    }

    let api = expect_context::<StoredValue<ApiClient>>();
    let navigate = use_navigate();

    let product_name = RwSignal::new(String::new());
    let product_type = RwSignal::new(ProductType::default());
    let description = RwSignal::new(String::new());
    let detailed_description = RwSignal::new(String::new());
    let goal_amount = RwSignal::new(String::new());
    let early_access_price = RwSignal::new(String::new());
    let estimated_delivery = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());
    let image_input = NodeRef::<leptos::html::Input>::new();
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = CampaignInput {
            product_name: product_name.get_untracked(),
            product_type: product_type.get_untracked(),
            description: description.get_untracked(),
            detailed_description: detailed_description.get_untracked(),
            goal_amount: goal_amount.get_untracked(),
            early_access_price: early_access_price.get_untracked(),
            estimated_delivery: estimated_delivery.get_untracked(),
            end_date: end_date.get_untracked(),
        };
        let draft = match validate_campaign(&input) {
            Ok(draft) => draft,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        let image = selected_image(image_input);
        error.set(String::new());
        busy.set(true);

        let client = api.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = client.create_campaign(&draft, image.as_ref()).await;
            busy.set(false);
            match result {
                Ok(created) => {
                    log::info!("created campaign {} ({})", created.id, created.product_name);
                    navigate(PORTAL_PATH, NavigateOptions::default());
                }
                Err(e) => error.set(e.user_message(CREATE_FAILED)),
            }
        });
    };

    let type_options = ProductType::ALL
        .into_iter()
        .map(|kind| {
            view! {
                <option value=kind.as_str() selected=move || product_type.get() == kind>
                    {kind.label()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="campaign-form-page page-container">
            <div class="container narrow">
                <h1>"Create New Campaign"</h1>
                <p class="form-subtitle">"Launch your startup campaign and raise funds"</p>
                <Show when=move || !error.get().is_empty()>
                    <div class="error-message">{move || error.get()}</div>
                </Show>
                <form class="campaign-form" on:submit=on_submit>
                    <FormField value=product_name label="Product Name *" kind="text" placeholder="Enter your product name"/>
                    <div class="form-group">
                        <label for="product_type">"Product Type *"</label>
                        <select
                            id="product_type"
                            on:change=move |ev| product_type.set(ProductType::from_value(&event_target_value(&ev)))
                        >
                            {type_options}
                        </select>
                    </div>
                    <TextAreaField value=description label="Description *" placeholder="Short description of your product"/>
                    <TextAreaField
                        value=detailed_description
                        label="Detailed Description"
                        placeholder="Tell backers everything about your product"
                        rows=6
                    />
                    <div class="form-row">
                        <FormField value=goal_amount label="Goal Amount ($) *" kind="number" placeholder="10000"/>
                        <FormField value=early_access_price label="Early Access Price ($) *" kind="number" placeholder="49.99"/>
                    </div>
                    <div class="form-row">
                        <FormField value=estimated_delivery label="Estimated Delivery" kind="date"/>
                        <FormField value=end_date label="Campaign End Date" kind="datetime-local"/>
                    </div>
                    <div class="form-group">
                        <label for="image">"Product Image"</label>
                        <input id="image" type="file" accept="image/*" node_ref=image_input/>
                    </div>
                    <button type="submit" class="button-primary" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create Campaign" }}
                    </button>
                </form>
            </div>
        </div>
    }
    .into_any()
}

/// First file chosen in the image input, if any.
#[cfg(feature = "csr")]
fn selected_image(input: NodeRef<leptos::html::Input>) -> Option<ImageFile> {
    let files = input.get_untracked()?.files()?;
    files.get(0).map(ImageFile::from_file)
}

#[cfg(not(feature = "csr"))]
fn selected_image(_input: NodeRef<leptos::html::Input>) -> Option<ImageFile> {
    None
}

#[component]
fn StartupRequired() -> impl IntoView {
    view! {
        <div class="campaign-form-page page-container">
            <div class="container narrow startup-required">
                <h1>"Startup Profile Required"</h1>
                <p>"Only registered startups can create campaigns. Register your startup to get started."</p>
                <a href="/become-startup" class="button-primary">"Become a Startup"</a>
            </div>
        </div>
    }
}
