//! Mode Toggle Component

use leptos::prelude::*;

use crate::store::{store_set_theme, use_app_store, AppStateStoreFields};

/// Cycles light, dark and system themes
#[component]
pub fn ModeToggle() -> impl IntoView {
    let store = use_app_store();
    let theme = move || store.theme().get();

    view! {
        <button
            class="mode-toggle"
            title=move || format!("Theme: {}", theme().as_str())
            on:click=move |_| store_set_theme(&store, theme().next())
        >
            {move || theme().icon()}
        </button>
    }
}
