//! Company insights page with an optional company-name filter.

use leptos::prelude::*;

use crate::components::insight_card::InsightCard;
use crate::components::nav_bar::NavBar;
use crate::net::client::ApiClient;
use crate::state::insights::InsightsState;

#[component]
pub fn InsightsPage() -> impl IntoView {
    let insights = expect_context::<RwSignal<InsightsState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let load = move || {
        insights.update(|s| {
            s.loading = true;
            s.error = None;
        });

        #[cfg(feature = "hydrate")]
        {
            let filter = insights.get_untracked().filter.trim().to_owned();
            leptos::task::spawn_local(async move {
                let name = (!filter.is_empty()).then_some(filter.as_str());
                let result =
                    crate::net::insights::fetch_company_insights(&client.get_value(), name).await;
                insights.update(|s| {
                    s.loading = false;
                    match result {
                        Ok(items) => s.items = items,
                        Err(err) => {
                            log::error!("insights load failed: {err}");
                            s.error = Some(err.to_string());
                        }
                    }
                });
            });
        }
    };

    // Initial load, once.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load();
    });

    view! {
        <div class="insights-page">
            <NavBar/>
            <header class="insights-page__header">
                <h1>"Company Insights"</h1>
                <input
                    class="insights-page__filter"
                    type="text"
                    placeholder="Company name (optional)"
                    prop:value=move || insights.get().filter
                    on:input=move |ev| insights.update(|s| s.filter = event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            load();
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| load()>
                    "Search"
                </button>
            </header>

            <Show when=move || insights.get().error.is_some()>
                <p class="insights-page__error">
                    {move || insights.get().error.unwrap_or_default()}
                </p>
            </Show>

            <Show
                when=move || !insights.get().loading
                fallback=move || view! { <p>"Loading insights..."</p> }
            >
                <div class="insights-page__cards">
                    {move || {
                        let items = insights.get().items;
                        if items.is_empty() {
                            return view! {
                                <p class="insights-page__empty">"No insights available."</p>
                            }
                                .into_any();
                        }
                        items
                            .into_iter()
                            .map(|item| view! { <InsightCard insights=item/> })
                            .collect::<Vec<_>>()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
