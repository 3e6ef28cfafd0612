//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads so serde handles the wire
//! format end to end and page code works with typed records only.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A single student placement record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementRecord {
    /// Backend-assigned identifier; absent on records not yet created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub student_name: String,
    pub department: String,
    pub company: String,
    pub role: String,
    /// Annual package in lakhs per annum.
    pub package_lpa: f64,
    pub year: i32,
}

/// A recruiting company record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub department: String,
    #[serde(default)]
    pub roles_offered: Vec<String>,
    pub offers: i32,
    pub avg_package_lpa: f64,
    pub year: i32,
}

/// Aggregated insight data for one company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompanyInsights {
    pub company_name: String,
    pub total_offers: i32,
    pub avg_package_lpa: f64,
    pub highest_package_lpa: f64,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Generic confirmation payload returned by mutation endpoints.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Credentials posted to the login endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload posted to the register endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Token issued by a successful login.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

/// Authenticated user profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
}

/// Chatbot response body: either a bare JSON string or an object carrying
/// an `answer` field. Both resolve to the answer text.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ChatbotAnswer {
    Structured { answer: String },
    Text(String),
}

impl ChatbotAnswer {
    /// Extract the answer text from either form.
    pub fn into_text(self) -> String {
        match self {
            Self::Structured { answer } => answer,
            Self::Text(text) => text,
        }
    }
}
