//! Recent-session browser, opened from the top bar. Selecting an entry
//! forwards the session id upward unchanged; adoption happens in the page.

use dioxus::prelude::*;
use habitat_types::SessionSummary;

use chrono::{DateTime, Utc};

use crate::api::fetch_recent_sessions;
use crate::components::drawer::{DrawerSide, OverlayDrawer};

fn format_updated_at(updated_at: &DateTime<Utc>) -> String {
    updated_at.format("%Y-%m-%d %H:%M").to_string()
}

#[component]
pub fn HistoryDrawer(on_session_select: Callback<String>) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        button {
            style: "display: flex; align-items: center; justify-content: center; width: 32px; height: 32px; background: transparent; color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); cursor: pointer;",
            title: "Chat history",
            onclick: move |_| open.set(true),
            "🕘"
        }

        OverlayDrawer {
            side: DrawerSide::Left,
            open,
            HistoryList {
                on_select: move |id: String| {
                    open.set(false);
                    on_session_select.call(id);
                },
            }
        }
    }
}

/// Mounts when the drawer opens, so the list is fetched fresh each time.
#[component]
fn HistoryList(on_select: Callback<String>) -> Element {
    let mut sessions = use_signal(Vec::<SessionSummary>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        spawn(async move {
            loading.set(true);
            match fetch_recent_sessions().await {
                Ok(list) => {
                    sessions.set(list);
                    error.set(None);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to fetch recent sessions: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%;",

            div {
                style: "padding: 0.75rem 1rem; border-bottom: 1px solid var(--border-color, #374151); font-weight: 600; font-size: 0.875rem;",
                "History"
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 0.5rem;",

                if loading() {
                    div {
                        style: "color: var(--text-secondary, #94a3b8); font-size: 0.8rem; padding: 0.5rem;",
                        "Loading history..."
                    }
                } else if let Some(e) = error.read().as_deref() {
                    div {
                        style: "color: var(--danger-text, #ef4444); font-size: 0.8rem; padding: 0.5rem;",
                        "Could not load history: {e}"
                    }
                } else if sessions.read().is_empty() {
                    div {
                        style: "color: var(--text-muted, #64748b); font-size: 0.8rem; padding: 0.5rem;",
                        "No previous sessions."
                    }
                } else {
                    for session in sessions.read().iter() {
                        button {
                            key: "{session.id.as_str()}",
                            style: "display: block; width: 100%; text-align: left; padding: 0.5rem; background: transparent; color: var(--text-primary, #f8fafc); border: none; border-radius: var(--radius-sm, 4px); cursor: pointer; font-size: 0.8rem;",
                            onclick: {
                                let id = session.id.as_str().to_string();
                                move |_| on_select.call(id.clone())
                            },
                            div { "{session.title}" }
                            div {
                                style: "color: var(--text-muted, #64748b); font-size: 0.7rem;",
                                {format_updated_at(&session.updated_at)}
                            }
                        }
                    }
                }
            }
        }
    }
}
