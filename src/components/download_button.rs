//! Download Button Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{download_item, BrowserTransfer};
use crate::context::use_row_services;
use crate::models::DocumentItem;

#[component]
pub fn DownloadButton(item: DocumentItem) -> impl IntoView {
    let services = use_row_services();

    let on_click = move |ev: web_sys::MouseEvent| {
        // Keep the row's own click handler out of it
        ev.stop_propagation();
        let item = item.clone();
        let services = services.clone();
        spawn_local(async move {
            download_item(
                &item,
                services.storage_urls.as_ref(),
                &BrowserTransfer,
                services.notifier.as_ref(),
            )
            .await;
        });
    };

    view! {
        <span class="action-icon" title="Download file" on:click=on_click>
            "⬇"
        </span>
    }
}
