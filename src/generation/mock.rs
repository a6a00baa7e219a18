use std::collections::VecDeque;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::TextGenerator;
use super::error::{GenerationError, GenerationResult};

/// Scripted failure for [`MockGenerator`].
#[derive(Debug, Clone)]
pub enum MockFailure {
    MissingApiKey,
    Provider(String),
    NoResponse,
}

impl From<MockFailure> for GenerationError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::MissingApiKey => GenerationError::MissingApiKey,
            MockFailure::Provider(message) => GenerationError::Provider { message },
            MockFailure::NoResponse => GenerationError::NoResponse,
        }
    }
}

type MockReply = Result<String, MockFailure>;

#[derive(Default)]
struct MockState {
    replies: VecDeque<MockReply>,
    prompts: Vec<String>,
}

/// In-memory [`TextGenerator`] replaying scripted replies.
///
/// Once the script is exhausted it echoes a fixed answer. Every prompt is recorded.
#[derive(Clone)]
pub struct MockGenerator {
    state: Arc<RwLock<MockState>>,
    configured: bool,
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGenerator {
    pub const DEFAULT_REPLY: &'static str = "Mock answer.";

    pub fn new() -> Self {
        Self {
            state: Arc::default(),
            configured: true,
        }
    }

    /// Replies with each of `replies` in order.
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mock = Self::new();
        for reply in replies {
            mock.push_reply(reply);
        }
        mock
    }

    /// Behaves like a client without credentials.
    pub fn unconfigured() -> Self {
        Self {
            state: Arc::default(),
            configured: false,
        }
    }

    pub fn push_reply(&self, reply: impl Into<String>) {
        if let Ok(mut state) = self.state.write() {
            state.replies.push_back(Ok(reply.into()));
        }
    }

    pub fn push_failure(&self, failure: MockFailure) {
        if let Ok(mut state) = self.state.write() {
            state.replies.push_back(Err(failure));
        }
    }

    pub fn call_count(&self) -> usize {
        self.state.read().map(|s| s.prompts.len()).unwrap_or_default()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.state
            .read()
            .map(|s| s.prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> GenerationResult<String> {
        if !self.configured {
            return Err(GenerationError::MissingApiKey);
        }

        let reply = match self.state.write() {
            Ok(mut state) => {
                state.prompts.push(prompt.to_string());
                state.replies.pop_front()
            }
            Err(_) => None,
        };

        match reply {
            Some(Ok(text)) => Ok(text),
            Some(Err(failure)) => Err(failure.into()),
            None => Ok(Self::DEFAULT_REPLY.to_string()),
        }
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
