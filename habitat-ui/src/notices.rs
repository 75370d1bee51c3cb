//! Transient user-facing notices.
//!
//! A bounded queue of toast entries rendered above the page. Entries expire
//! on a timer or on click; pushing past the cap drops the oldest entry.

use std::collections::VecDeque;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// How long a notice stays visible, in milliseconds.
const NOTICE_TTL_MS: u32 = 4_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
    pub detail: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeQueue {
    next_id: u64,
    notices: VecDeque<Notice>,
}

impl NoticeQueue {
    pub const MAX_VISIBLE: usize = 4;

    pub fn push(&mut self, text: impl Into<String>, detail: Option<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.notices.push_back(Notice {
            id,
            text: text.into(),
            detail,
        });
        while self.notices.len() > Self::MAX_VISIBLE {
            self.notices.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

/// Push a notice and schedule its expiry.
pub fn push_notice(mut notices: Signal<NoticeQueue>, text: impl Into<String>, detail: Option<String>) {
    let id = notices.write().push(text, detail);
    spawn(async move {
        TimeoutFuture::new(NOTICE_TTL_MS).await;
        notices.write().dismiss(id);
    });
}

/// Fixed-position toast stack. Mounted once at the page root.
#[component]
pub fn NoticeStack() -> Element {
    let mut notices = use_context::<Signal<NoticeQueue>>();
    let queue = notices.read().clone();

    if queue.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            style: "position: fixed; bottom: 1rem; right: 1rem; z-index: 100; display: flex; flex-direction: column; gap: 0.5rem; max-width: 320px;",

            for notice in queue.iter() {
                div {
                    key: "{notice.id}",
                    style: "background: var(--window-bg, #1f2937); color: var(--text-primary, #f8fafc); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); padding: 0.75rem 1rem; box-shadow: var(--shadow-md, 0 4px 6px rgba(0,0,0,0.4)); cursor: pointer; font-size: 0.875rem;",
                    onclick: {
                        let id = notice.id;
                        move |_| notices.write().dismiss(id)
                    },

                    div { "{notice.text}" }
                    if let Some(detail) = notice.detail.as_deref() {
                        div {
                            style: "color: var(--text-secondary, #94a3b8); font-size: 0.75rem; margin-top: 0.25rem;",
                            "{detail}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_increasing_ids() {
        let mut queue = NoticeQueue::default();
        let a = queue.push("first", None);
        let b = queue.push("second", None);
        assert!(b > a);
        assert_eq!(queue.iter().count(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = NoticeQueue::default();
        let a = queue.push("first", None);
        let b = queue.push("second", None);
        queue.dismiss(a);
        let remaining: Vec<_> = queue.iter().map(|n| n.id).collect();
        assert_eq!(remaining, vec![b]);
    }

    #[test]
    fn queue_drops_oldest_past_cap() {
        let mut queue = NoticeQueue::default();
        for i in 0..(NoticeQueue::MAX_VISIBLE + 2) {
            queue.push(format!("notice {i}"), None);
        }
        assert_eq!(queue.iter().count(), NoticeQueue::MAX_VISIBLE);
        // The two oldest entries are gone.
        assert_eq!(queue.iter().next().map(|n| n.id), Some(2));
    }

    #[test]
    fn detail_is_preserved() {
        let mut queue = NoticeQueue::default();
        queue.push("failed", Some("Please try again".to_string()));
        let notice = queue.iter().next().unwrap();
        assert_eq!(notice.detail.as_deref(), Some("Please try again"));
    }
}
