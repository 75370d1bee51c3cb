//! Source-document list for the active notebook. Keyed by notebook id at
//! the mount site.

use dioxus::prelude::*;
use habitat_types::{SourceDocument, SourceKind};

use crate::api::fetch_sources;

#[component]
pub fn SourcesSidebar(notebook_id: String) -> Element {
    let mut sources = use_signal(Vec::<SourceDocument>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let notebook_id_signal = use_signal(|| notebook_id.clone());

    use_effect(move || {
        let notebook_id = notebook_id_signal.to_string();
        spawn(async move {
            loading.set(true);
            match fetch_sources(&notebook_id).await {
                Ok(docs) => {
                    sources.set(docs);
                    error.set(None);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to fetch sources: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%; background: var(--bg-secondary, #1e293b); border-right: 1px solid var(--border-color, #374151);",

            div {
                style: "padding: 0.75rem 1rem; border-bottom: 1px solid var(--border-color, #374151); font-weight: 600; font-size: 0.875rem;",
                "Sources"
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 0.5rem;",

                if loading() {
                    div {
                        style: "color: var(--text-secondary, #94a3b8); font-size: 0.8rem; padding: 0.5rem;",
                        "Loading sources..."
                    }
                } else if let Some(e) = error.read().as_deref() {
                    div {
                        style: "color: var(--danger-text, #ef4444); font-size: 0.8rem; padding: 0.5rem;",
                        "Could not load sources: {e}"
                    }
                } else if sources.read().is_empty() {
                    div {
                        style: "color: var(--text-muted, #64748b); font-size: 0.8rem; padding: 0.5rem;",
                        "This notebook has no sources yet."
                    }
                } else {
                    for doc in sources.read().iter() {
                        div {
                            key: "{doc.id}",
                            style: "display: flex; align-items: center; gap: 0.5rem; padding: 0.5rem; border-radius: var(--radius-sm, 4px); font-size: 0.8rem;",
                            span { {source_icon(&doc.kind)} }
                            span {
                                style: "overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                "{doc.title}"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn source_icon(kind: &SourceKind) -> &'static str {
    match kind {
        SourceKind::Document => "📄",
        SourceKind::Link => "🔗",
        SourceKind::Note => "📝",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_icons_cover_all_kinds() {
        assert_eq!(source_icon(&SourceKind::Document), "📄");
        assert_eq!(source_icon(&SourceKind::Link), "🔗");
        assert_eq!(source_icon(&SourceKind::Note), "📝");
    }
}
