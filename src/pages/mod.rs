//! Route components.

pub mod chatbot;
pub mod dashboard;
pub mod insights;
pub mod login;
