//! Far Away Frontend App
//!
//! Single column: logo, add form, packing list, stats footer.

use leptos::prelude::*;
use reactive_stores::Store;

use packing_domain::AppConfig;

use crate::components::{ItemForm, ItemList, Logo, Stats};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // The controller lives in the store; views read it and call store helpers
    provide_context(Store::new(AppState::new()));
    provide_context(AppContext::new(config.max_quantity()));

    view! {
        <div class="app">
            <Logo title=config.title />
            <ItemForm />
            <ItemList />
            <Stats />
        </div>
    }
}
