//! Scripted fake for the `LlmClient` port.

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::ports::llm::{CompletionFuture, CompletionRequest, CompletionResponse, LlmClient};

/// LLM client that serves canned replies in order and records every request.
pub struct ScriptedLlmClient {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedLlmClient {
    /// Creates a client that will answer with the given replies, in order.
    #[must_use]
    pub fn new<S: Into<String>>(replies: Vec<S>) -> Self {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Number of completion calls made so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.requests.lock().expect("requests lock poisoned").len()
    }

    /// Clones of every request received, in call order.
    #[must_use]
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

impl LlmClient for ScriptedLlmClient {
    fn complete(&self, request: &CompletionRequest) -> CompletionFuture<'_> {
        self.requests.lock().expect("requests lock poisoned").push(request.clone());

        let reply = self.replies.lock().expect("replies lock poisoned").pop_front();
        Box::pin(async move {
            match reply {
                Some(text) => Ok(CompletionResponse {
                    text,
                    prompt_tokens: 0,
                    completion_tokens: 0,
                }),
                None => Err("scripted LLM client ran out of replies".into()),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CompletionRequest {
        CompletionRequest {
            model: "test-model".into(),
            messages: vec![crate::ports::llm::Message::user("hi")],
            max_tokens: 16,
        }
    }

    #[tokio::test]
    async fn serves_replies_in_order() {
        let llm = ScriptedLlmClient::new(vec!["first", "second"]);
        assert_eq!(llm.complete(&request()).await.unwrap().text, "first");
        assert_eq!(llm.complete(&request()).await.unwrap().text, "second");
        assert_eq!(llm.calls(), 2);
    }

    #[tokio::test]
    async fn errors_when_script_is_exhausted() {
        let llm = ScriptedLlmClient::new(Vec::<String>::new());
        assert!(llm.complete(&request()).await.is_err());
    }
}
