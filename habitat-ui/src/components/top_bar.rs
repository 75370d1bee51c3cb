//! Top navigation bar. Stateless apart from the avatar decoration and the
//! open/closed flags of its own drawer and menu; all real intents (select
//! session, new session, clear chats) are forwarded upward as callbacks.

use dioxus::prelude::*;

use crate::components::history_drawer::HistoryDrawer;
use crate::notices::{push_notice, NoticeQueue};

/// Fixed avatar palettes. Picked from independently and uniformly; not
/// seedable, not part of any identity.
pub const AVATAR_COLORS: [&str; 12] = [
    "#ef4444", "#3b82f6", "#22c55e", "#eab308", "#a855f7", "#ec4899", "#6366f1", "#14b8a6",
    "#f97316", "#06b6d4", "#84cc16", "#10b981",
];

pub const AVATAR_EMOJI: [&str; 12] = [
    "🌟", "🚀", "🎯", "🌈", "⭐", "🔥", "💎", "🎨", "🌸", "🦋", "🌺", "🎭",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AvatarStyle {
    pub color: &'static str,
    pub emoji: &'static str,
}

impl AvatarStyle {
    /// Map two uniform rolls in [0, 1) onto the palettes.
    pub fn from_rolls(color_roll: f64, emoji_roll: f64) -> Self {
        Self {
            color: AVATAR_COLORS[palette_index(color_roll, AVATAR_COLORS.len())],
            emoji: AVATAR_EMOJI[palette_index(emoji_roll, AVATAR_EMOJI.len())],
        }
    }

    pub fn random() -> Self {
        Self::from_rolls(js_sys::Math::random(), js_sys::Math::random())
    }
}

fn palette_index(roll: f64, len: usize) -> usize {
    ((roll * len as f64) as usize).min(len - 1)
}

#[component]
pub fn TopBar(
    on_session_select: Callback<String>,
    on_new_session: Callback<()>,
    on_clear_chats: Callback<()>,
) -> Element {
    let notices = use_context::<Signal<NoticeQueue>>();
    // Chosen once per mount; re-renders reuse the same decoration.
    let avatar = use_hook(AvatarStyle::random);
    let mut menu_open = use_signal(|| false);

    rsx! {
        div {
            style: "height: 56px; display: flex; align-items: center; justify-content: space-between; padding: 0 1rem; background: var(--bg-primary, #0f172a); border-bottom: 1px solid var(--border-color, #374151); position: sticky; top: 0; z-index: 40;",

            // Left - history and new chat
            div {
                style: "display: flex; align-items: center; gap: 0.75rem;",

                HistoryDrawer { on_session_select }

                button {
                    style: "padding: 0.35rem 0.75rem; background: var(--accent-bg, #3b82f6); color: white; border: none; border-radius: var(--radius-md, 8px); cursor: pointer; font-size: 0.8rem; font-weight: 600;",
                    onclick: move |_| on_new_session.call(()),
                    "New Chat"
                }
            }

            // Center - title
            div {
                style: "display: flex; align-items: center; gap: 0.5rem; font-weight: 600;",
                span { "🏠" }
                h1 {
                    style: "font-size: 1rem; margin: 0;",
                    "Habitat Assistant"
                }
            }

            // Right - avatar menu
            div {
                style: "position: relative;",

                button {
                    style: "width: 32px; height: 32px; display: flex; align-items: center; justify-content: center; background: {avatar.color}; color: white; border: none; border-radius: 50%; cursor: pointer; font-size: 0.9rem;",
                    onclick: move |_| menu_open.set(!menu_open()),
                    "{avatar.emoji}"
                }

                if menu_open() {
                    div {
                        style: "position: absolute; right: 0; top: 40px; z-index: 50; width: 200px; background: var(--window-bg, #1f2937); border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); box-shadow: var(--shadow-lg, 0 10px 40px rgba(0,0,0,0.5)); overflow: hidden;",

                        button {
                            style: "display: block; width: 100%; text-align: left; padding: 0.6rem 0.75rem; background: transparent; color: var(--text-primary, #f8fafc); border: none; cursor: pointer; font-size: 0.8rem;",
                            onclick: move |_| {
                                menu_open.set(false);
                                push_notice(notices, "Profile settings coming soon", None);
                            },
                            "Profile"
                        }

                        button {
                            style: "display: block; width: 100%; text-align: left; padding: 0.6rem 0.75rem; background: transparent; color: var(--danger-text, #ef4444); border: none; border-top: 1px solid var(--border-color, #374151); cursor: pointer; font-size: 0.8rem;",
                            onclick: move |_| {
                                menu_open.set(false);
                                on_clear_chats.call(());
                            },
                            "Clear Chats"
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
    fn palette_index_spans_the_whole_palette() {
        assert_eq!(palette_index(0.0, 12), 0);
        assert_eq!(palette_index(0.999, 12), 11);
        // A roll of exactly 1.0 never happens, but must still be in bounds.
        assert_eq!(palette_index(1.0, 12), 11);
    }

    #[test]
    fn rolls_map_to_documented_palettes() {
        let style = AvatarStyle::from_rolls(0.0, 0.999);
        assert_eq!(style.color, AVATAR_COLORS[0]);
        assert_eq!(style.emoji, AVATAR_EMOJI[11]);

        let style = AvatarStyle::from_rolls(0.5, 0.5);
        assert!(AVATAR_COLORS.contains(&style.color));
        assert!(AVATAR_EMOJI.contains(&style.emoji));
    }

    #[test]
    fn palettes_hold_at_least_ten_entries() {
        assert!(AVATAR_COLORS.len() >= 10);
        assert!(AVATAR_EMOJI.len() >= 10);
    }
}
