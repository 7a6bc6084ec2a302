//! Toast Host Component
//!
//! Renders the toast queue from context.

use leptos::prelude::*;

use crate::toast::ToastStore;

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = expect_context::<ToastStore>();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.css_class()>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button class="toast-dismiss" on:click=move |_| store.dismiss(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
