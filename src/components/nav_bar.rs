//! Top navigation bar with page links and logout.

use leptos::prelude::*;

/// Navigation bar shown on every authenticated page. Logout clears the
/// stored token and hard-navigates to the login route.
#[component]
pub fn NavBar() -> impl IntoView {
    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            crate::util::auth::clear_token();
            if let Some(window) = web_sys::window() {
                let _ = window
                    .location()
                    .set_href(crate::net::session::LOGIN_ROUTE);
            }
        }
    };

    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Smart Placements Assistance"</span>
            <a class="nav-bar__link" href="/">"Dashboard"</a>
            <a class="nav-bar__link" href="/chatbot">"Chatbot"</a>
            <a class="nav-bar__link" href="/insights">"Insights"</a>
            <span class="nav-bar__spacer"></span>
            <button class="btn nav-bar__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </nav>
    }
}
