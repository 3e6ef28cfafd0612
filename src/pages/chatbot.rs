//! Chatbot page: transcript, typing indicator, and message input.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the async side of the chat flow: `submit` on the state
//! machine hands back the query text, the network call runs, and every
//! outcome (answer or fallback) lands back in the transcript via
//! `receive`. Errors never escape the send handler.

use leptos::prelude::*;

use crate::components::message_view::MessageView;
use crate::components::nav_bar::NavBar;
use crate::net::client::ApiClient;
use crate::state::chat::ChatState;

#[component]
pub fn ChatbotPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let client = StoredValue::new(expect_context::<ApiClient>());

    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view after every transcript change.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        if chat.get_untracked().is_typing {
            return;
        }
        let Some(query) = chat
            .try_update(|c| c.submit(crate::util::time::now_ms()))
            .flatten()
        else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let reply = match crate::net::chatbot::fetch_chatbot_answer(
                    &client.get_value(),
                    &query,
                )
                .await
                {
                    Ok(answer) => answer,
                    Err(err) => {
                        log::error!("chatbot query failed: {err}");
                        crate::state::chat::fallback_for(&err).to_owned()
                    }
                };
                chat.update(|c| c.receive(reply, crate::util::time::now_ms()));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (query, client);
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let can_send = move || {
        let state = chat.get();
        !state.is_typing && !state.input.trim().is_empty()
    };

    view! {
        <div class="chatbot-page">
            <NavBar/>
            <header class="chatbot-page__header">
                <h1>"AI Placement Assistant"</h1>
                <p>"Get instant answers to your placement-related questions"</p>
            </header>

            <div class="chatbot-page__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|message| view! { <MessageView message=message/> })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || chat.get().is_typing>
                    <div class="chatbot-page__typing">"AI is thinking..."</div>
                </Show>
            </div>

            <div class="chatbot-page__input-row">
                <input
                    class="chatbot-page__input"
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || chat.get().input
                    disabled=move || chat.get().is_typing
                    on:input=move |ev| chat.update(|c| c.input = event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button
                    class="btn btn--primary chatbot-page__send"
                    on:click=on_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
