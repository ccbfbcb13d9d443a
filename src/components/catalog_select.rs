//! Catalog Select Component
//!
//! Single-choice `<select>` over a fixed vocabulary with an "unset" placeholder.

use leptos::prelude::*;

use crate::catalog::parse_option_id;

/// Select bound to an optional catalog id
#[component]
pub fn CatalogSelect(
    options: Vec<(u32, &'static str)>,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<Option<u32>>,
    on_change: impl Fn(Option<u32>) + Copy + 'static,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    view! {
        <select
            class=class
            on:change=move |ev| on_change(parse_option_id(&event_target_value(&ev)))
        >
            <option value="" prop:selected=move || value.get().is_none()>
                {placeholder}
            </option>
            {options.into_iter().map(|(id, label)| view! {
                <option value=id.to_string() prop:selected=move || value.get() == Some(id)>
                    {label}
                </option>
            }).collect_view()}
        </select>
    }
}
