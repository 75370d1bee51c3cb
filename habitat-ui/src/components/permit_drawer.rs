//! Pending-action panel for the active session. Keyed by session id at the
//! mount site.

use dioxus::prelude::*;
use habitat_types::{Permit, PermitStatus};

use crate::api::fetch_permits;

#[component]
pub fn PermitDrawer(session_id: String) -> Element {
    let mut permits = use_signal(Vec::<Permit>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let session_id_signal = use_signal(|| session_id.clone());

    use_effect(move || {
        let session_id = session_id_signal.to_string();
        spawn(async move {
            loading.set(true);
            match fetch_permits(&session_id).await {
                Ok(list) => {
                    permits.set(list);
                    error.set(None);
                }
                Err(e) => {
                    dioxus_logger::tracing::error!("Failed to fetch permits: {}", e);
                    error.set(Some(e));
                }
            }
            loading.set(false);
        });
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%; background: var(--bg-secondary, #1e293b); border-left: 1px solid var(--border-color, #374151);",

            div {
                style: "padding: 0.75rem 1rem; border-bottom: 1px solid var(--border-color, #374151); font-weight: 600; font-size: 0.875rem;",
                "Actions"
            }

            div {
                style: "flex: 1; overflow-y: auto; padding: 0.5rem;",

                if loading() {
                    div {
                        style: "color: var(--text-secondary, #94a3b8); font-size: 0.8rem; padding: 0.5rem;",
                        "Loading actions..."
                    }
                } else if let Some(e) = error.read().as_deref() {
                    div {
                        style: "color: var(--danger-text, #ef4444); font-size: 0.8rem; padding: 0.5rem;",
                        "Could not load actions: {e}"
                    }
                } else if permits.read().is_empty() {
                    div {
                        style: "color: var(--text-muted, #64748b); font-size: 0.8rem; padding: 0.5rem;",
                        "No pending actions for this session."
                    }
                } else {
                    for permit in permits.read().iter() {
                        div {
                            key: "{permit.id}",
                            style: "padding: 0.5rem; border: 1px solid var(--border-color, #374151); border-radius: var(--radius-md, 8px); margin-bottom: 0.5rem; font-size: 0.8rem;",
                            div { "{permit.description}" }
                            div {
                                style: "color: var(--text-secondary, #94a3b8); font-size: 0.7rem; margin-top: 0.25rem;",
                                {status_label(&permit.status)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn status_label(status: &PermitStatus) -> &'static str {
    match status {
        PermitStatus::Pending => "Awaiting approval",
        PermitStatus::Approved => "Approved",
        PermitStatus::Denied => "Denied",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_match_contract() {
        assert_eq!(status_label(&PermitStatus::Pending), "Awaiting approval");
        assert_eq!(status_label(&PermitStatus::Approved), "Approved");
        assert_eq!(status_label(&PermitStatus::Denied), "Denied");
    }
}
