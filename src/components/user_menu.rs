//! User Menu Component
//!
//! Avatar button opening an account dropdown.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::context::use_auth;
use crate::models::User;
use crate::paths::profile_path;

#[component]
pub fn UserMenu(user: User) -> impl IntoView {
    let auth = use_auth();
    let (open, set_open) = signal(false);
    let initial = user.initial();
    let profile_href = profile_path(&user.user_id);

    let avatar = match user.img_url.clone() {
        Some(src) => view! { <img class="avatar-image" src=src alt=user.username.clone() /> }.into_any(),
        None => view! { <span class="avatar-fallback">{initial}</span> }.into_any(),
    };

    view! {
        <div class="user-menu">
            <button
                class="avatar"
                title=user.username.clone()
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {avatar}
            </button>
            <Show when=move || open.get()>
                <div class="dropdown-menu" on:click=move |_| set_open.set(false)>
                    <div class="dropdown-label">"My Account"</div>
                    <div class="dropdown-separator"></div>
                    <div class="dropdown-item">
                        <A href=profile_href.clone()>"Profile"</A>
                    </div>
                    <div class="dropdown-separator"></div>
                    <button class="dropdown-item" on:click=move |_| auth.logout()>
                        "Logout"
                    </button>
                </div>
            </Show>
        </div>
    }
}
