//! Network layer: endpoint registry, configured HTTP client, and one thin
//! service module per backend resource.
//!
//! SYSTEM CONTEXT
//! ==============
//! `endpoints` maps operations to paths, `client` issues requests with the
//! auth interceptors applied, and the service modules (`dashboard`,
//! `insights`, `chatbot`, `user`) expose one function per operation.

pub mod chatbot;
pub mod client;
pub mod dashboard;
pub mod endpoints;
pub mod insights;
pub mod session;
pub mod types;
pub mod user;
