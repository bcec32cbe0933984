//! Auth Pages
//!
//! Login and register forms.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::context::use_auth;
use crate::models::{ApiError, Credentials, Notice, NoticeStatus};
use crate::paths::LOGIN_PATH;
use crate::store::{store_show_toast, use_app_store};

/// Username and password inputs shared by both pages
#[component]
fn CredentialFields(
    username: RwSignal<String>,
    password: RwSignal<String>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for="username">"Username"</label>
            <input
                id="username"
                type="text"
                autocomplete="username"
                required
                prop:value=move || username.get()
                on:input=move |ev| username.set(event_target_value(&ev))
            />
        </div>
        <div class="form-field">
            <label for="password">"Password"</label>
            <input
                id="password"
                type="password"
                required
                prop:value=move || password.get()
                on:input=move |ev| password.set(event_target_value(&ev))
            />
        </div>
    }
}

fn credentials(username: RwSignal<String>, password: RwSignal<String>) -> Credentials {
    Credentials {
        username: username.get_untracked().trim().to_string(),
        password: password.get_untracked(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = StoredValue::new_local(use_navigate());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let creds = credentials(username, password);
        let navigate = navigate.get_value();
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match auth.login(creds).await {
                Ok(_) => navigate("/", Default::default()),
                Err(err) => {
                    log::warn!("[AUTH] Login failed: {}", err);
                    let message = match err {
                        ApiError::Unauthorized => "Wrong username or password.".to_string(),
                        other => other.user_message(),
                    };
                    set_error.set(Some(message));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Login"</h2>
            <CredentialFields username=username password=password />
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" disabled=move || pending.get()>"Login"</button>
            <p class="auth-switch">
                "No account? " <A href="/auth/register">"Register"</A>
            </p>
        </form>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let store = use_app_store();
    let navigate = StoredValue::new_local(use_navigate());
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let creds = credentials(username, password);
        let navigate = navigate.get_value();
        set_pending.set(true);
        set_error.set(None);
        spawn_local(async move {
            match auth.register(creds).await {
                Ok(()) => {
                    store_show_toast(
                        &store,
                        Notice::new("Account created", "You can log in now.", NoticeStatus::Success),
                    );
                    navigate(LOGIN_PATH, Default::default());
                }
                Err(err) => {
                    log::warn!("[AUTH] Register failed: {}", err);
                    set_error.set(Some(err.user_message()));
                }
            }
            set_pending.set(false);
        });
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <h2>"Register"</h2>
            <CredentialFields username=username password=password />
            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
            <button type="submit" disabled=move || pending.get()>"Register"</button>
            <p class="auth-switch">
                "Already registered? " <A href=LOGIN_PATH>"Login"</A>
            </p>
        </form>
    }
}
