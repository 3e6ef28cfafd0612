//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`chat`, `dashboard`, `insights`) so individual
//! pages can depend on small focused models.

pub mod chat;
pub mod dashboard;
pub mod insights;
