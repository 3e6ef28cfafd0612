//! A single chat transcript entry.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, Sender};
use crate::util::markdown;

/// One message bubble. Bot replies render as markdown; user messages are
/// shown as plain text.
#[component]
pub fn MessageView(message: ChatMessage) -> impl IntoView {
    let from_user = message.sender == Sender::User;
    let row_class = if from_user {
        "chat-message chat-message--user"
    } else {
        "chat-message chat-message--bot"
    };

    view! {
        <div class=row_class>
            <span class="chat-message__author">
                {if from_user { "You" } else { "Assistant" }}
            </span>
            {if from_user {
                view! { <div class="chat-message__text">{message.text}</div> }.into_any()
            } else {
                view! {
                    <div
                        class="chat-message__text chat-message__text--markdown"
                        inner_html=markdown::to_html(&message.text)
                    ></div>
                }
                    .into_any()
            }}
        </div>
    }
}
