//! Remove Button Component
//!
//! Icon only; the remove flow is owned by the row.

use leptos::prelude::*;

#[component]
pub fn RemoveButton(#[prop(into)] on_click: Callback<()>) -> impl IntoView {
    view! {
        <span
            class="action-icon"
            title="Remove document from workspace"
            on:click=move |_| on_click.run(())
        >
            "↩"
        </span>
    }
}
