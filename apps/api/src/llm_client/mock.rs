use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatModel, LlmError};

/// Test stand-in for the chat model: replies from a FIFO queue and records prompts.
/// With an empty queue it echoes a fixed reply.
#[derive(Default)]
pub struct MockChatModel {
    replies: Mutex<Vec<Result<String, (u16, String)>>>,
    pub prompts: Mutex<Vec<String>>,
}

pub const DEFAULT_REPLY: &str = "mock suggestions";

impl MockChatModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_reply(&self, text: &str) {
        self.replies.lock().unwrap().push(Ok(text.to_string()));
    }

    /// Next call fails with `LlmError::Api { status, message }`.
    pub fn enqueue_failure(&self, status: u16, message: &str) {
        self.replies
            .lock()
            .unwrap()
            .push(Err((status, message.to_string())));
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn chat(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Ok(DEFAULT_REPLY.to_string());
        }
        replies
            .remove(0)
            .map_err(|(status, message)| LlmError::Api { status, message })
    }
}
