//! Assistant replies.
//!
//! The chat view asks a [`ReplySource`] for the assistant's answer to the
//! conversation so far. The only source shipped is [`CannedReply`], which
//! waits a fixed delay and answers with the same text every time.

use crate::types::ChatMessage;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

pub const CANNED_REPLY: &str = "I understand your question. Let me analyze this for you while ensuring all processing stays within your secure environment. This may take a moment...";

#[async_trait]
pub trait ReplySource: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> String;
}

#[derive(Clone, Debug)]
pub struct CannedReply {
    delay: Duration,
}

impl CannedReply {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl ReplySource for CannedReply {
    async fn complete(&self, messages: &[ChatMessage]) -> String {
        tracing::trace!(
            history = messages.len(),
            delay = ?self.delay,
            "canned reply scheduled"
        );
        tokio::time::sleep(self.delay).await;
        CANNED_REPLY.to_string()
    }
}

/// Reply source for the running app, built from the installed config.
pub fn default_source() -> Arc<dyn ReplySource> {
    Arc::new(CannedReply::new(crate::config::current().reply_delay))
}
