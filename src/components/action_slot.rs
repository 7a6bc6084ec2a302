//! Empty fixed-width slot keeping row icons aligned.

use leptos::prelude::*;

#[component]
pub fn ActionPlaceholder() -> impl IntoView {
    view! { <div class="action-placeholder"></div> }
}
