//! The main page. Composes the two bootstrap controllers (session id from
//! the URL, notebook id from the identity lookup) behind a single render
//! gate: nothing below the loading placeholder mounts until auth has
//! settled and both ids are non-empty. Child panels are not expected to
//! survive empty identifiers, so the gate is a correctness requirement,
//! not cosmetics.

use dioxus::prelude::*;

use crate::api::clear_chat_history;
use crate::auth::{probe_auth, AuthContext};
use crate::components::chat_stream::ChatStream;
use crate::components::drawer::{DrawerSide, OverlayDrawer};
use crate::components::permit_drawer::PermitDrawer;
use crate::components::sources_sidebar::SourcesSidebar;
use crate::components::top_bar::TopBar;
use crate::interop;
use crate::notebook::use_notebook_resolution;
use crate::notices::{push_notice, NoticeQueue, NoticeStack};
use crate::session::{adopt_session, start_new_session, use_session_bootstrap};

/// Widths at or below this render the side panels as overlay drawers.
const MOBILE_BREAKPOINT: u32 = 1024;

/// Breakpoint decision for the current viewport width. Re-evaluated on
/// every resize, not just at mount.
pub fn is_mobile_viewport(width: u32) -> bool {
    width <= MOBILE_BREAKPOINT
}

/// The AND-gate in front of the three-pane layout.
pub fn ready_to_render(auth_loading: bool, session_id: &str, notebook_id: Option<&str>) -> bool {
    !auth_loading && !session_id.is_empty() && notebook_id.is_some_and(|id| !id.is_empty())
}

#[component]
pub fn HomePage() -> Element {
    // Contexts for the whole subtree
    let auth = use_context_provider(|| Signal::new(AuthContext::default()));
    let notices = use_context_provider(|| Signal::new(NoticeQueue::default()));

    let session = use_session_bootstrap();
    let notebook = use_notebook_resolution(auth);

    let viewport = use_signal(interop::get_viewport_size);
    let sources_open = use_signal(|| false);
    let actions_open = use_signal(|| false);
    let mut sources_open_toggle = sources_open;
    let mut actions_open_toggle = actions_open;

    // Follow the viewport across resizes so the panel/drawer swap stays
    // live. Registered once per mount.
    use_effect(move || {
        interop::track_viewport(viewport);
    });

    // Settle the auth cell once on load.
    use_effect(move || {
        spawn(async move {
            probe_auth(auth).await;
        });
    });

    let on_session_select = use_callback(move |id: String| {
        adopt_session(session, id);
    });

    let on_new_session = use_callback(move |_| {
        let Some(notebook_id) = notebook.read().notebook_id().map(str::to_string) else {
            return;
        };
        spawn(async move {
            match start_new_session(notebook_id, session).await {
                Ok(()) => {
                    push_notice(notices, "New chat session created", None);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to create new session: {}", e);
                    push_notice(
                        notices,
                        "Failed to create new session",
                        Some("Please try again".to_string()),
                    );
                }
            }
        });
    });

    let on_clear_chats = use_callback(move |_| {
        spawn(async move {
            match clear_chat_history().await {
                Ok(()) => {
                    push_notice(notices, "Chat history cleared", None);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to clear chat history: {}", e);
                    push_notice(notices, "Failed to clear chat history", None);
                }
            }
        });
    });

    let auth_loading = auth.read().loading;
    let session_id = session.read().clone();
    let notebook_id = notebook.read().notebook_id().map(str::to_string);

    if !ready_to_render(auth_loading, &session_id, notebook_id.as_deref()) {
        return rsx! {
            style { {PAGE_TOKENS} }
            div {
                style: "height: 100vh; display: flex; align-items: center; justify-content: center; background: var(--bg-primary, #0f172a); color: var(--text-secondary, #94a3b8);",
                "Loading..."
            }
            NoticeStack {}
        };
    }

    let notebook_id = notebook_id.unwrap_or_default();
    let is_mobile = is_mobile_viewport(viewport.read().0);

    rsx! {
        style { {PAGE_TOKENS} }

        div {
            style: "height: 100vh; display: flex; flex-direction: column; background: var(--bg-primary, #0f172a); color: var(--text-primary, #f8fafc); overflow: hidden;",

            TopBar {
                on_session_select,
                on_new_session,
                on_clear_chats,
            }

            if is_mobile {
                div {
                    style: "flex: 1; overflow: hidden; position: relative;",

                    ChatStream { key: "{session_id}", session_id: session_id.clone() }

                    button {
                        style: "position: fixed; top: 64px; left: 0.5rem; z-index: 40; {TOGGLE_BUTTON_STYLE}",
                        title: "Sources",
                        onclick: move |_| sources_open_toggle.set(true),
                        "📄"
                    }
                    button {
                        style: "position: fixed; top: 64px; right: 0.5rem; z-index: 40; {TOGGLE_BUTTON_STYLE}",
                        title: "Actions",
                        onclick: move |_| actions_open_toggle.set(true),
                        "⚙️"
                    }

                    OverlayDrawer {
                        side: DrawerSide::Left,
                        open: sources_open,
                        SourcesSidebar { key: "{notebook_id}", notebook_id: notebook_id.clone() }
                    }
                    OverlayDrawer {
                        side: DrawerSide::Right,
                        open: actions_open,
                        PermitDrawer { key: "{session_id}", session_id: session_id.clone() }
                    }
                }
            } else {
                div {
                    style: "flex: 1; display: grid; grid-template-columns: 260px 1fr 340px; overflow: hidden;",

                    SourcesSidebar { key: "{notebook_id}", notebook_id: notebook_id.clone() }
                    ChatStream { key: "{session_id}", session_id: session_id.clone() }
                    PermitDrawer { key: "{session_id}", session_id: session_id.clone() }
                }
            }
        }

        NoticeStack {}
    }
}

const TOGGLE_BUTTON_STYLE: &str = "width: 36px; height: 36px; display: flex; align-items: center; justify-content: center; background: var(--window-bg, #1f2937); color: var(--text-secondary, #94a3b8); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); cursor: pointer;";

const PAGE_TOKENS: &str = r#"
:root {
    --bg-primary: #0f172a;
    --bg-secondary: #1e293b;
    --text-primary: #f8fafc;
    --text-secondary: #94a3b8;
    --text-muted: #64748b;
    --accent-bg: #3b82f6;
    --accent-text: #ffffff;
    --border-color: #334155;
    --window-bg: #1f2937;
    --danger-text: #ef4444;
    --chat-bg: var(--bg-primary);
    --user-bubble-bg: var(--accent-bg);
    --assistant-bubble-bg: var(--bg-secondary);
    --radius-sm: 4px;
    --radius-md: 8px;
    --radius-lg: 12px;
    --shadow-md: 0 4px 6px rgba(0, 0, 0, 0.4);
    --shadow-lg: 0 10px 40px rgba(0, 0, 0, 0.5);
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    padding: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: var(--bg-primary);
    color: var(--text-primary);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_blocks_while_auth_loading() {
        assert!(!ready_to_render(true, "s-1", Some("nb-1")));
    }

    #[test]
    fn gate_blocks_on_empty_identifiers() {
        assert!(!ready_to_render(false, "", Some("nb-1")));
        assert!(!ready_to_render(false, "s-1", None));
        assert!(!ready_to_render(false, "s-1", Some("")));
    }

    #[test]
    fn gate_opens_only_when_everything_is_ready() {
        assert!(ready_to_render(false, "s-1", Some("nb-1")));
    }

    #[test]
    fn breakpoint_flips_exactly_past_the_cut() {
        assert!(is_mobile_viewport(0));
        assert!(is_mobile_viewport(MOBILE_BREAKPOINT));
        assert!(!is_mobile_viewport(MOBILE_BREAKPOINT + 1));
        assert!(!is_mobile_viewport(1920));
    }
}
