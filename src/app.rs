//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::client::ApiClient;
use crate::net::endpoints;
use crate::net::session::BrowserSession;
use crate::pages::{
    chatbot::ChatbotPage, dashboard::DashboardPage, insights::InsightsPage, login::LoginPage,
};
use crate::state::{chat::ChatState, dashboard::DashboardState, insights::InsightsState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Constructs the HTTP client once, provides it and all shared state via
/// context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = ApiClient::new(endpoints::base_url(), Arc::new(BrowserSession));
    provide_context(client);

    let chat = RwSignal::new(ChatState::new(crate::util::time::now_ms()));
    let dashboard = RwSignal::new(DashboardState::default());
    let insights = RwSignal::new(InsightsState::default());

    provide_context(chat);
    provide_context(dashboard);
    provide_context(insights);

    view! {
        <Stylesheet id="leptos" href="/pkg/placements-client.css"/>
        <Title text="Smart Placements Assistance"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("chatbot") view=ChatbotPage/>
                <Route path=StaticSegment("insights") view=InsightsPage/>
            </Routes>
        </Router>
    }
}
