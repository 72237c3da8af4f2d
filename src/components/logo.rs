use leptos::prelude::*;

/// Page header
#[component]
pub fn Logo(#[prop(into)] title: String) -> impl IntoView {
    view! { <h1>{title}</h1> }
}
