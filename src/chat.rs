//! Grounded chat composition over an opaque completion service.
//!
//! The [`ChatEngine`] is the seam between the retrieval core and whatever
//! transport delivers user messages. It accepts a query string and returns
//! a reply string; webhooks, acknowledgment codes, and command parsing all
//! live outside this crate.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::RagConfig;
use crate::error::Result;
use crate::retriever::Retriever;

/// An opaque language-model completion service.
///
/// Implementations receive a system instruction and a user message (already
/// prefixed with grounding context when available) and return a free-text
/// reply.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    /// Generate a reply to `user` under the `system` instruction.
    ///
    /// # Errors
    ///
    /// Returns [`RagbotError::Completion`](crate::RagbotError::Completion)
    /// when the backing service fails.
    async fn complete(&self, system: &str, user: &str) -> Result<String>;
}

/// Composes retrieval context with a completion call to answer a user query.
///
/// Grounding is best-effort: when retrieval fails or finds nothing, the
/// engine answers ungrounded instead of surfacing an error to the end user.
/// An engine without a retriever runs permanently ungrounded, which is the
/// correct degraded mode when the index artifacts are missing at startup.
pub struct ChatEngine {
    model: Arc<dyn CompletionModel>,
    retriever: Option<Arc<Retriever>>,
    system_prompt: String,
    top_k: usize,
}

impl ChatEngine {
    /// Create an ungrounded engine with the given completion model and
    /// system instruction.
    pub fn new(model: Arc<dyn CompletionModel>, system_prompt: impl Into<String>) -> Self {
        Self {
            model,
            retriever: None,
            system_prompt: system_prompt.into(),
            top_k: RagConfig::default().top_k,
        }
    }

    /// Attach a retriever for grounded replies.
    pub fn with_retriever(mut self, retriever: Arc<Retriever>) -> Self {
        self.retriever = Some(retriever);
        self
    }

    /// Set how many chunks to retrieve per query.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Answer a user message, grounding it in retrieved context when possible.
    ///
    /// # Errors
    ///
    /// Only completion-service failures propagate; retrieval failures are
    /// logged and degrade to an ungrounded reply.
    pub async fn reply(&self, user_text: &str) -> Result<String> {
        let context = match &self.retriever {
            Some(retriever) => match retriever.retrieve(user_text, self.top_k).await {
                Ok(matches) if matches.is_empty() => {
                    debug!("no grounding context found");
                    None
                }
                Ok(matches) => Some(Retriever::format_context(&matches)),
                Err(e) => {
                    warn!(error = %e, "retrieval failed, answering ungrounded");
                    None
                }
            },
            None => None,
        };

        let user = match context {
            Some(context) => {
                format!("Context:\n{context}\n\nQuestion: {user_text}")
            }
            None => user_text.to_string(),
        };

        self.model.complete(&self.system_prompt, &user).await
    }
}
