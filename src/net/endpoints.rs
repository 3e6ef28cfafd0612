//! Backend endpoint registry.
//!
//! DESIGN
//! ======
//! Paths are grouped by backend resource and exposed as constants, so a
//! reference to an operation that does not exist fails at compile time
//! instead of producing an undefined lookup at runtime. The base URL is
//! derived from the host the page is served from, on a fixed API port.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

/// Port the backend listens on, regardless of serving host.
pub const API_PORT: u16 = 8000;

/// Placement and company record endpoints.
pub mod dashboard {
    pub const GET_PLACEMENT_DATA: &str = "/dashboard/get-data";
    pub const GET_COMPANY_DATA: &str = "/dashboard/get-company-data";
    pub const ADD_PLACEMENT_DATA: &str = "/dashboard/add-data";
    pub const ADD_COMPANY_DATA: &str = "/dashboard/add-company-data";
    pub const DELETE_PLACEMENT_DATA: &str = "/dashboard/delete-record";
    pub const DELETE_COMPANY_DATA: &str = "/dashboard/delete-company-data";
}

/// Authentication and profile endpoints.
pub mod user {
    pub const LOGIN: &str = "/auth/login";
    pub const REGISTER: &str = "/auth/register";
    pub const PROFILE: &str = "/auth/profile";
}

/// Chatbot question-answering endpoint.
pub mod chatbot {
    pub const GET_ANSWER: &str = "/chatbot/get-chatbot-answer";
}

/// Company insights endpoints.
pub mod insights {
    pub const GET_COMPANY_INSIGHTS: &str = "/company-insights/get-company-insights-data";
}

/// Resolve the backend base URL from the currently-served host.
///
/// Outside the browser this falls back to localhost so SSR stays
/// deterministic.
pub fn base_url() -> String {
    #[cfg(feature = "hydrate")]
    {
        let hostname = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "localhost".to_owned());
        format!("http://{hostname}:{API_PORT}")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        format!("http://localhost:{API_PORT}")
    }
}

/// Join a base URL and an endpoint path.
pub fn api_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

/// Build a full request URL with an optional URL-encoded query string.
pub fn request_url(base: &str, path: &str, query: &[(&str, String)]) -> String {
    if query.is_empty() {
        api_url(base, path)
    } else {
        format!("{base}{path}?{}", query_string(query))
    }
}

/// URL-encode key/value pairs the way `URLSearchParams` does: unreserved
/// characters pass through, spaces become `+`, everything else is
/// percent-encoded per UTF-8 byte.
pub fn query_string(pairs: &[(&str, String)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                out.push(byte as char);
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
