//! Item Form Component
//!
//! Quantity select plus description input; submitting appends an item.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use packing_domain::{FormDraft, Quantity};

use crate::context::use_app_context;
use crate::store::{store_add_item, use_app_store};

/// Form for adding a new item to the list
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let draft = RwSignal::new(FormDraft::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(item) = ctx.submit_draft(draft) else {
            log::warn!("[FORM] Id source disposed, item not added");
            return;
        };
        log::debug!("[FORM] Submitting {}", item.label());
        if let Err(e) = store_add_item(&store, item) {
            log::warn!("[FORM] Item rejected: {}", e);
        }
    };

    let on_quantity = move |ev: web_sys::Event| {
        let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        else {
            return;
        };
        let raw = select.value();
        draft.update(|d| {
            if let Err(e) = d.set_quantity_str(&raw) {
                log::warn!("[FORM] {}", e);
            }
        });
    };

    view! {
        <form class="add-form" on:submit=on_submit>
            <h3>"What do you need for your trip?"</h3>
            <select
                prop:value=move || draft.with(|d| d.quantity.to_string())
                on:change=on_quantity
            >
                {Quantity::range_to(ctx.max_quantity).map(|n| {
                    let value = n.to_string();
                    view! { <option value=value.clone()>{value.clone()}</option> }
                }).collect_view()}
            </select>
            <input
                type="text"
                placeholder="Item..."
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    draft.update(|d| d.description = text);
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
