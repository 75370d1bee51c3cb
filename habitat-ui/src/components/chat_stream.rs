//! Read-only chat transcript for one session. The page keys this component
//! by session id, so switching sessions remounts it and refetches.

use dioxus::prelude::*;
use habitat_types::{ChatMessage, Sender};

use crate::api::fetch_messages;

#[component]
pub fn ChatStream(session_id: String) -> Element {
    let mut messages = use_signal(Vec::<ChatMessage>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let session_id_signal = use_signal(|| session_id.clone());

    // Load messages on mount
    use_effect(move || {
        let session_id = session_id_signal.to_string();
        spawn(async move {
            loading.set(true);
            match fetch_messages(&session_id).await {
                Ok(msgs) => {
                    messages.set(msgs);
                    error.set(None);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to fetch messages: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 0.5rem; padding: 1rem; overflow-y: auto; height: 100%; background: var(--chat-bg, #0f172a);",

            if loading() {
                div {
                    style: "color: var(--text-secondary, #94a3b8); font-size: 0.875rem;",
                    "Loading conversation..."
                }
            } else if let Some(e) = error.read().as_deref() {
                div {
                    style: "color: var(--danger-text, #ef4444); font-size: 0.875rem;",
                    "Could not load conversation: {e}"
                }
            } else if messages.read().is_empty() {
                div {
                    style: "color: var(--text-muted, #64748b); font-size: 0.875rem; margin: auto;",
                    "No messages yet. Ask anything to get started."
                }
            } else {
                for message in messages.read().iter() {
                    MessageBubble { key: "{message.id}", message: message.clone() }
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let (align, bubble) = match message.sender {
        Sender::User => (
            "margin-left: auto;",
            "background: var(--user-bubble-bg, #3b82f6); color: white;",
        ),
        Sender::Assistant => (
            "margin-right: auto;",
            "background: var(--assistant-bubble-bg, #1e293b); color: var(--text-primary, #f8fafc);",
        ),
        Sender::System => (
            "margin: 0 auto;",
            "background: transparent; color: var(--text-muted, #64748b); font-style: italic;",
        ),
    };
    let opacity = if message.pending { "opacity: 0.6;" } else { "" };

    rsx! {
        div {
            style: "max-width: 75%; padding: 0.5rem 0.75rem; border-radius: var(--radius-lg, 12px); font-size: 0.875rem; white-space: pre-wrap; {align} {bubble} {opacity}",
            "{message.text}"
        }
    }
}
