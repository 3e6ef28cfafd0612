//! Login page with sign-in and register forms.
//!
//! A successful login persists the returned token under the `token` storage
//! key and hard-navigates home, so the next page load starts authenticated.

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::net::types::{LoginRequest, RegisterRequest};

#[component]
pub fn LoginPage() -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let reg_username = RwSignal::new(String::new());
    let reg_email = RwSignal::new(String::new());
    let reg_password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_login = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = LoginRequest {
            username: username.get().trim().to_owned(),
            password: password.get(),
        };
        if request.username.is_empty() || request.password.is_empty() {
            info.set("Enter both username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::user::login(&client.get_value(), &request).await {
                Ok(auth) => {
                    crate::util::auth::store_token(&auth.token);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(err) => {
                    info.set(format!("Sign in failed: {err}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, client);
        }
    };

    let on_register = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = RegisterRequest {
            username: reg_username.get().trim().to_owned(),
            email: reg_email.get().trim().to_owned(),
            password: reg_password.get(),
        };
        if request.username.is_empty() || request.email.is_empty() || request.password.is_empty() {
            info.set("Fill in all register fields.".to_owned());
            return;
        }
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::user::register(&client.get_value(), &request).await {
                Ok(auth) => {
                    crate::util::auth::store_token(&auth.token);
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/");
                    }
                }
                Err(err) => {
                    info.set(format!("Registration failed: {err}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, client);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Smart Placements Assistance"</h1>
                <p class="login-card__subtitle">"Sign In"</p>
                <form class="login-form" on:submit=on_login>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"Or Register"</p>
                <form class="login-form" on:submit=on_register>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || reg_username.get()
                        on:input=move |ev| reg_username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || reg_email.get()
                        on:input=move |ev| reg_email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || reg_password.get()
                        on:input=move |ev| reg_password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Create Account"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
