//! Session bootstrap.
//!
//! The active session id lives in the URL (`?sessionId=`), nowhere else.
//! On mount the page adopts the id from the URL if one is present, otherwise
//! mints a fresh UUID and writes it back by replacing the current history
//! entry. Shared links and reloads therefore resume the same session, and
//! two tabs on the same URL are the same conversation.

use dioxus::prelude::*;
use habitat_types::SessionId;

use crate::api::create_session;
use crate::interop;

/// The one query parameter this shell owns.
pub const SESSION_PARAM: &str = "sessionId";

/// Mint a fresh, globally-unique session id. Client-side only; no
/// coordination with the server.
pub fn new_session_id() -> SessionId {
    SessionId::new()
}

/// How the active session id was determined on mount.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionBootstrap {
    /// The URL already named a session. Adopt it verbatim, no write-back,
    /// so shared links stay byte-identical.
    Adopted(String),
    /// No usable id in the URL. The fresh id must be written back into the
    /// location before dependents render.
    Generated(String),
}

impl SessionBootstrap {
    pub fn id(&self) -> &str {
        match self {
            SessionBootstrap::Adopted(id) | SessionBootstrap::Generated(id) => id,
        }
    }
}

/// Decide the active session id given what the URL holds. Blank or
/// whitespace-only values count as absent.
pub fn resolve_session_id(from_url: Option<&str>, fresh: SessionId) -> SessionBootstrap {
    match from_url {
        Some(id) if !id.trim().is_empty() => SessionBootstrap::Adopted(id.to_string()),
        _ => SessionBootstrap::Generated(fresh.0),
    }
}

/// Result of a "start new session" attempt against the current active id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSessionOutcome {
    pub active: String,
    pub error: Option<String>,
}

/// A failed create never dislodges the current id: the switch is all or
/// nothing from the consumer's point of view.
pub fn apply_new_session(current: &str, created: Result<SessionId, String>) -> NewSessionOutcome {
    match created {
        Ok(id) => NewSessionOutcome {
            active: id.0,
            error: None,
        },
        Err(e) => NewSessionOutcome {
            active: current.to_string(),
            error: Some(e),
        },
    }
}

/// Resolve the active session id against the URL, once on mount and again on
/// every back/forward navigation. The returned signal is empty only before
/// the first effect run.
pub fn use_session_bootstrap() -> Signal<String> {
    let session_id = use_signal(String::new);

    use_effect(move || {
        let mut session_id = session_id;
        adopt_from_location(&mut session_id);
    });

    // Back/forward navigation re-reads the parameter. Registered once per
    // mount; the page itself never unmounts.
    use_hook(move || {
        let mut session_id = session_id;
        interop::on_location_change(move || {
            adopt_from_location(&mut session_id);
        });
    });

    session_id
}

fn adopt_from_location(session_id: &mut Signal<String>) {
    match resolve_session_id(
        interop::read_query_param(SESSION_PARAM).as_deref(),
        new_session_id(),
    ) {
        SessionBootstrap::Adopted(id) => {
            if *session_id.peek() != id {
                session_id.set(id);
            }
        }
        SessionBootstrap::Generated(id) => {
            interop::replace_query_param(SESSION_PARAM, &id);
            session_id.set(id);
        }
    }
}

/// Switch to a session picked from the history list. Pushes a history entry
/// so the back button returns to the previous session.
pub fn adopt_session(mut session_id: Signal<String>, id: String) {
    if id.trim().is_empty() || *session_id.peek() == id {
        return;
    }
    interop::push_query_param(SESSION_PARAM, &id);
    session_id.set(id);
}

/// Create a session on the backend and adopt it only on success. The URL and
/// the signal move together in one step; on failure both are left untouched.
pub async fn start_new_session(
    notebook_id: String,
    mut session_id: Signal<String>,
) -> Result<(), String> {
    let created = create_session(&notebook_id).await;
    let current = session_id.peek().clone();

    let outcome = apply_new_session(&current, created);
    match outcome.error {
        None => {
            interop::push_query_param(SESSION_PARAM, &outcome.active);
            session_id.set(outcome.active);
            Ok(())
        }
        Some(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_id_is_adopted_verbatim() {
        let resolved = resolve_session_id(Some("abc-123"), SessionId::new());
        assert_eq!(resolved, SessionBootstrap::Adopted("abc-123".to_string()));
    }

    #[test]
    fn missing_param_generates_fresh_id() {
        let fresh = SessionId::new();
        let resolved = resolve_session_id(None, fresh.clone());
        assert_eq!(resolved, SessionBootstrap::Generated(fresh.0));
    }

    #[test]
    fn blank_param_counts_as_absent() {
        let fresh = SessionId::new();
        let resolved = resolve_session_id(Some("   "), fresh.clone());
        assert_eq!(resolved, SessionBootstrap::Generated(fresh.0));

        let fresh = SessionId::new();
        let resolved = resolve_session_id(Some(""), fresh.clone());
        assert_eq!(resolved, SessionBootstrap::Generated(fresh.0));
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(new_session_id().0));
        }
    }

    #[test]
    fn successful_create_adopts_new_id() {
        let outcome = apply_new_session("old-id", Ok(SessionId("new-id".to_string())));
        assert_eq!(outcome.active, "new-id");
        assert_eq!(outcome.error, None);
    }

    #[test]
    fn failed_create_keeps_current_id() {
        let outcome = apply_new_session("old-id", Err("backend unavailable".to_string()));
        assert_eq!(outcome.active, "old-id");
        assert_eq!(outcome.error, Some("backend unavailable".to_string()));
    }
}
