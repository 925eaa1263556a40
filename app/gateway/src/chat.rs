//! Conversation assembly.

use llm::Message;

use crate::error::RequestError;

/// Build the upstream conversation: persona system message first, client
/// history verbatim, then the trimmed new user message.
///
/// A message that is blank after trimming is invalid input; history length n
/// always yields n + 2 messages.
pub fn conversation(
    persona: &str,
    history: &[Message],
    message: &str,
) -> Result<Vec<Message>, RequestError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(RequestError::InvalidInput);
    }
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::system(persona));
    messages.extend_from_slice(history);
    messages.push(Message::user(trimmed));
    Ok(messages)
}
