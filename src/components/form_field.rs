//! Labelled form controls bound to string signals.

use leptos::prelude::*;

#[component]
pub fn FormField(
    value: RwSignal<String>,
    label: &'static str,
    kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    value: RwSignal<String>,
    label: &'static str,
    #[prop(optional)] placeholder: &'static str,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label>{label}</label>
            <textarea
                rows=rows.to_string()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
