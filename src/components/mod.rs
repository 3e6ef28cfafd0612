//! Reusable view components.

pub mod insight_card;
pub mod message_view;
pub mod nav_bar;
