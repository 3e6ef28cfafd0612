//! Cross-cutting helpers: token persistence, markdown, wall clock.

pub mod auth;
pub mod markdown;
pub mod time;
