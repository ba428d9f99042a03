use crate::types::{ChatMessage, MessageId, Role};
use std::sync::atomic::{AtomicU64, Ordering};
use time::{Duration, OffsetDateTime};

pub const GREETING: &str = "Hello! I'm your private AI assistant. I can help you analyze documents, answer questions, and provide insights while keeping all your data secure and GDPR compliant. How can I assist you today?";

/// How long before mount the greeting claims to have been sent.
const GREETING_AGE: Duration = Duration::minutes(5);

static SESSION_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identifies one mount of the chat view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

impl SessionId {
    fn next() -> Self {
        Self(SESSION_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handed out by [`ChatSession::submit`]; redeem it with
/// [`ChatSession::deliver`] once the reply text is ready.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use = "a submitted message expects an assistant reply"]
pub struct PendingReply {
    session: SessionId,
    prompt: MessageId,
}

impl PendingReply {
    pub fn prompt(&self) -> MessageId {
        self.prompt
    }
}

/// Message list and composer buffer owned by one mounted chat view.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    id: SessionId,
    messages: Vec<ChatMessage>,
    input: String,
    next_id: u64,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::starting_at(current_time())
    }

    /// A fresh session whose greeting is dated relative to `now`.
    pub fn starting_at(now: OffsetDateTime) -> Self {
        let mut session = Self {
            id: SessionId::next(),
            messages: Vec::new(),
            input: String::new(),
            next_id: 1,
        };
        session.push(Role::Assistant, GREETING.to_string(), now - GREETING_AGE);
        session
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Submit whatever is in the composer buffer.
    pub fn send_input(&mut self) -> Option<PendingReply> {
        let text = std::mem::take(&mut self.input);
        let pending = self.submit(&text);
        if pending.is_none() {
            self.input = text;
        }
        pending
    }

    /// Append `text` as a user message and clear the composer.
    ///
    /// Blank text is ignored. The returned ticket stands for the assistant
    /// reply the caller still owes this session.
    pub fn submit(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        let prompt = self.push(Role::User, text.to_string(), current_time());
        self.input.clear();
        tracing::debug!(session = self.id.0, message = %prompt, "user message submitted");
        Some(PendingReply {
            session: self.id,
            prompt,
        })
    }

    /// Append the assistant reply for `pending`.
    ///
    /// Returns `false`, leaving the session untouched, when the ticket was
    /// issued by a different session.
    pub fn deliver(&mut self, pending: PendingReply, text: impl Into<String>) -> bool {
        if pending.session != self.id {
            tracing::debug!(
                ticket_session = pending.session.0,
                session = self.id.0,
                "dropping reply for a torn down chat"
            );
            return false;
        }
        let id = self.push(Role::Assistant, text.into(), current_time());
        tracing::debug!(
            session = self.id.0,
            message = %id,
            prompt = %pending.prompt,
            "assistant reply delivered"
        );
        true
    }

    fn push(&mut self, role: Role, content: String, created_at: OffsetDateTime) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            content,
            created_at,
        });
        id
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reply::CANNED_REPLY;

    #[test]
    fn test_starts_with_greeting() {
        let now = OffsetDateTime::now_utc();
        let session = ChatSession::starting_at(now);
        let [greeting] = session.messages() else {
            panic!("expected exactly one seed message");
        };
        assert_eq!(greeting.role, Role::Assistant);
        assert_eq!(greeting.content, GREETING);
        assert_eq!(greeting.created_at, now - Duration::minutes(5));
        assert!(session.input().is_empty());
    }

    #[test]
    fn test_new_session_dates_greeting_from_system_clock() {
        let before = OffsetDateTime::now_utc();
        let session = ChatSession::new();
        let after = OffsetDateTime::now_utc();

        let greeting = &session.messages()[0];
        assert!(greeting.created_at >= before - GREETING_AGE);
        assert!(greeting.created_at <= after - GREETING_AGE);
    }

    #[test]
    fn test_blank_submission_is_ignored() {
        let mut session = ChatSession::new();
        let before = session.messages().to_vec();
        assert!(session.submit("").is_none());
        assert!(session.submit("   \n\t").is_none());
        assert_eq!(session.messages(), before.as_slice());
    }

    #[test]
    fn test_submit_appends_user_message_and_clears_input() {
        let mut session = ChatSession::new();
        session.set_input("Hello");
        let pending = session.send_input().expect("non-blank input is accepted");

        assert_eq!(session.messages().len(), 2);
        let last = &session.messages()[1];
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "Hello");
        assert_eq!(pending.prompt(), last.id);
        assert!(session.input().is_empty());
    }

    #[test]
    fn test_blank_input_stays_in_composer() {
        let mut session = ChatSession::new();
        session.set_input("   ");
        assert!(!session.can_send());
        assert!(session.send_input().is_none());
        assert_eq!(session.input(), "   ");
    }

    #[test]
    fn test_text_is_kept_as_typed() {
        let mut session = ChatSession::new();
        let _ = session.submit("  spaced out  ");
        assert_eq!(session.messages()[1].content, "  spaced out  ");
    }

    #[test]
    fn test_deliver_appends_reply_after_prompt() {
        let mut session = ChatSession::new();
        let pending = session.submit("Hello").unwrap();
        assert!(session.deliver(pending, CANNED_REPLY));

        let roles: Vec<_> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, [Role::Assistant, Role::User, Role::Assistant]);
        assert_eq!(session.messages()[2].content, CANNED_REPLY);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut session = ChatSession::new();
        let first = session.submit("one").unwrap();
        let second = session.submit("two").unwrap();
        session.deliver(first, "a");
        session.deliver(second, "b");

        let ids: Vec<_> = session.messages().iter().map(|m| m.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_stale_ticket_is_dropped() {
        let mut old = ChatSession::new();
        let pending = old.submit("Hello").unwrap();

        let mut remounted = ChatSession::new();
        assert_ne!(old.id(), remounted.id());
        assert!(!remounted.deliver(pending, CANNED_REPLY));
        assert_eq!(remounted.messages().len(), 1);
    }
}
