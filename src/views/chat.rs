use crate::reply::{self, ReplySource};
use crate::state::ChatSession;
use crate::types::{ChatMessage, Role};
use crate::views::shared::{
    DOCUMENT, PageHeader, PrivacyIndicator, SHIELD, format_message_timestamp,
};
use dioxus::events::Key;
use dioxus::prelude::*;
use std::sync::Arc;

fn role_class(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

#[component]
pub fn ChatView() -> Element {
    let session = use_signal(ChatSession::new);
    let source = use_signal(reply::default_source);

    let send_message = move || {
        let mut session = session;
        let Some(pending) = session.with_mut(|s| s.send_input()) else {
            return;
        };
        let history = session.with(|s| s.messages().to_vec());
        let source: Arc<dyn ReplySource> = source();
        // Scoped to this view: unmounting the chat cancels the wait.
        spawn(async move {
            let text = source.complete(&history).await;
            session.with_mut(|s| s.deliver(pending, text));
        });
    };

    let snapshot = session();

    rsx! {
        div { class: "page chat-page",
            PageHeader {
                title: "AI Chat",
                subtitle: "Private, secure conversations with your AI assistant",
                PrivacyIndicator { label: "Private Session" }
                button { class: "btn btn-ghost", r#type: "button", "\u{22EE}" }
            }

            div { class: "chat-scroll",
                div { id: "chat-list", class: "chat-list",
                    for msg in snapshot.messages().iter() {
                        MessageRow { key: "{msg.id}", message: msg.clone() }
                    }
                }
            }

            div { class: "composer",
                div { class: "composer-inner",
                    div { class: "hstack",
                        button { class: "btn btn-outline icon-btn", r#type: "button", title: "Attach", "\u{1F4CE}" }
                        input {
                            class: "composer-input",
                            r#type: "text",
                            placeholder: "Ask me anything about your documents or data...",
                            value: "{snapshot.input()}",
                            oninput: move |ev| {
                                let mut session = session;
                                session.with_mut(|s| s.set_input(ev.value()));
                            },
                            onkeydown: move |ev| {
                                if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                    ev.prevent_default();
                                    send_message();
                                }
                            },
                            autofocus: true,
                        }
                        button {
                            class: "btn btn-primary icon-btn",
                            r#type: "button",
                            disabled: !snapshot.can_send(),
                            onclick: move |_| send_message(),
                            "Send"
                        }
                    }
                    div { class: "composer-footer",
                        div { class: "hstack",
                            span { class: "hint", span { class: "icon", "{SHIELD}" } "All conversations are private and encrypted" }
                            span { class: "hint", span { class: "icon", "{DOCUMENT}" } "Supports document analysis" }
                        }
                        span { class: "hint small", "Press Enter to send, Shift+Enter for new line" }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let role = role_class(message.role);
    let timestamp = format_message_timestamp(message.created_at);
    rsx! {
        div { class: "message-row {role}",
            if matches!(message.role, Role::Assistant) {
                div { class: "avatar assistant", "AI" }
            }
            div { class: "bubble {role}",
                p { class: "bubble-text", "{message.content}" }
                if let Some(ts) = timestamp {
                    p { class: "message-timestamp", "{ts}" }
                }
            }
            if matches!(message.role, Role::User) {
                div { class: "avatar user", "You" }
            }
        }
    }
}
