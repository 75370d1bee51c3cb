//! Overlay drawer used in place of the fixed side panels on narrow
//! viewports. Visibility is a plain boolean flip; the panel content mounts
//! once per open and unmounts once per close.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawerSide {
    Left,
    Right,
}

#[component]
pub fn OverlayDrawer(side: DrawerSide, open: Signal<bool>, children: Element) -> Element {
    let mut open = open;

    if !open() {
        return rsx! {};
    }

    let panel_style = match side {
        DrawerSide::Left => {
            "position: fixed; top: 0; bottom: 0; left: 0; z-index: 60; width: 300px; background: var(--bg-secondary, #1e293b); border-right: 1px solid var(--border-color, #374151); overflow-y: auto;"
        }
        DrawerSide::Right => {
            "position: fixed; top: 0; bottom: 0; right: 0; z-index: 60; width: 300px; background: var(--bg-secondary, #1e293b); border-left: 1px solid var(--border-color, #374151); overflow-y: auto;"
        }
    };

    rsx! {
        div {
            style: "position: fixed; inset: 0; z-index: 50; background: rgba(0,0,0,0.5);",
            onclick: move |_| open.set(false),
        }
        div {
            style: "{panel_style}",
            {children}
        }
    }
}
