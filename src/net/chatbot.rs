//! Chatbot question-answering service.

#[cfg(test)]
#[path = "chatbot_test.rs"]
mod chatbot_test;

use super::client::{ApiClient, ApiError};
use super::endpoints;
use super::types::ChatbotAnswer;

/// Submit a user query and resolve the answer text.
///
/// The backend may reply with a bare JSON string or an object carrying an
/// `answer` field; both forms resolve to the same text.
///
/// # Errors
///
/// Propagates [`ApiError`] from the client unchanged; the chat controller
/// converts failures into user-facing fallback messages.
pub async fn fetch_chatbot_answer(client: &ApiClient, query: &str) -> Result<String, ApiError> {
    let answer: ChatbotAnswer = client
        .get(
            endpoints::chatbot::GET_ANSWER,
            &[("query", query.to_owned())],
        )
        .await?;
    Ok(answer.into_text())
}
