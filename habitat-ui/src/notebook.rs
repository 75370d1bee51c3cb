//! Default-notebook resolution.
//!
//! The notebook id comes from an async lookup keyed off the signed-in user.
//! The state machine below makes the ordering rules explicit: no lookup
//! before auth settles with an identity, one lookup per distinct identity,
//! and a lookup that finishes after the identity changed is discarded
//! (last-identity-wins, no cancellation plumbing).

use dioxus::prelude::*;

use crate::api::get_default_notebook;
use crate::auth::AuthContext;

/// Lifecycle of the notebook lookup. Every non-idle state remembers which
/// identity it was entered for, so a settled lookup can be checked for
/// staleness when it arrives.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum NotebookResolution {
    #[default]
    Idle,
    Resolving {
        user_id: String,
    },
    Resolved {
        user_id: String,
        notebook_id: String,
    },
    /// Terminal until the identity changes. No automatic retry.
    Failed {
        user_id: String,
    },
}

impl NotebookResolution {
    pub fn notebook_id(&self) -> Option<&str> {
        match self {
            NotebookResolution::Resolved { notebook_id, .. } => Some(notebook_id),
            _ => None,
        }
    }

    fn identity(&self) -> Option<&str> {
        match self {
            NotebookResolution::Idle => None,
            NotebookResolution::Resolving { user_id }
            | NotebookResolution::Resolved { user_id, .. }
            | NotebookResolution::Failed { user_id } => Some(user_id),
        }
    }
}

/// Return the identity a new lookup should be issued for, or None if no
/// lookup is due: auth still loading, no user, or this identity has already
/// been tried (in flight, resolved, or failed).
pub fn begin_resolution(auth: &AuthContext, state: &NotebookResolution) -> Option<String> {
    let identity = auth.ready_identity()?;
    if state.identity() == Some(identity) {
        return None;
    }
    Some(identity.to_string())
}

/// Fold a settled lookup into the state machine. Returns None when the
/// result is stale: the machine has since moved on to a different identity,
/// and the late arrival must not overwrite it.
pub fn apply_lookup(
    state: &NotebookResolution,
    issued_for: &str,
    result: Result<String, String>,
) -> Option<NotebookResolution> {
    match state {
        NotebookResolution::Resolving { user_id } if user_id == issued_for => Some(match result {
            Ok(notebook_id) => NotebookResolution::Resolved {
                user_id: issued_for.to_string(),
                notebook_id,
            },
            Err(_) => NotebookResolution::Failed {
                user_id: issued_for.to_string(),
            },
        }),
        _ => None,
    }
}

/// Drive the state machine off the auth context. Re-runs whenever the auth
/// cell changes; the guards above keep unrelated re-renders from issuing
/// duplicate lookups.
pub fn use_notebook_resolution(auth: Signal<AuthContext>) -> Signal<NotebookResolution> {
    let mut state = use_signal(NotebookResolution::default);

    use_effect(move || {
        let auth_now = auth.read().clone();
        let Some(user_id) = begin_resolution(&auth_now, &state.peek()) else {
            return;
        };

        state.set(NotebookResolution::Resolving {
            user_id: user_id.clone(),
        });

        spawn(async move {
            let result = get_default_notebook().await.map(|n| n.0);
            if let Err(e) = &result {
                dioxus_logger::tracing::error!("Failed to get default notebook: {}", e);
            }
            let current = state.peek().clone();
            if let Some(next) = apply_lookup(&current, &user_id, result) {
                state.set(next);
            }
        });
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthUser;

    fn ready_auth(user_id: &str) -> AuthContext {
        AuthContext {
            user: Some(AuthUser {
                user_id: user_id.to_string(),
                username: "ada".to_string(),
            }),
            loading: false,
        }
    }

    #[test]
    fn no_lookup_while_auth_loading() {
        let mut auth = ready_auth("u-1");
        auth.loading = true;
        assert_eq!(begin_resolution(&auth, &NotebookResolution::Idle), None);
    }

    #[test]
    fn no_lookup_without_identity() {
        let auth = AuthContext {
            user: None,
            loading: false,
        };
        assert_eq!(begin_resolution(&auth, &NotebookResolution::Idle), None);
    }

    #[test]
    fn one_lookup_per_identity() {
        let auth = ready_auth("u-1");
        assert_eq!(
            begin_resolution(&auth, &NotebookResolution::Idle),
            Some("u-1".to_string())
        );

        // Same identity, lookup in flight: nothing new to issue.
        let resolving = NotebookResolution::Resolving {
            user_id: "u-1".to_string(),
        };
        assert_eq!(begin_resolution(&auth, &resolving), None);

        // Same identity, already resolved: still nothing.
        let resolved = NotebookResolution::Resolved {
            user_id: "u-1".to_string(),
            notebook_id: "nb-1".to_string(),
        };
        assert_eq!(begin_resolution(&auth, &resolved), None);
    }

    #[test]
    fn failed_state_is_terminal_until_identity_changes() {
        let failed = NotebookResolution::Failed {
            user_id: "u-1".to_string(),
        };
        assert_eq!(begin_resolution(&ready_auth("u-1"), &failed), None);
        assert_eq!(
            begin_resolution(&ready_auth("u-2"), &failed),
            Some("u-2".to_string())
        );
    }

    #[test]
    fn successful_lookup_resolves() {
        let resolving = NotebookResolution::Resolving {
            user_id: "u-1".to_string(),
        };
        let next = apply_lookup(&resolving, "u-1", Ok("nb-1".to_string()));
        assert_eq!(
            next,
            Some(NotebookResolution::Resolved {
                user_id: "u-1".to_string(),
                notebook_id: "nb-1".to_string(),
            })
        );
        assert_eq!(next.unwrap().notebook_id(), Some("nb-1"));
    }

    #[test]
    fn failed_lookup_holds_no_notebook() {
        let resolving = NotebookResolution::Resolving {
            user_id: "u-1".to_string(),
        };
        let next = apply_lookup(&resolving, "u-1", Err("boom".to_string()));
        assert_eq!(
            next,
            Some(NotebookResolution::Failed {
                user_id: "u-1".to_string(),
            })
        );
        assert_eq!(next.unwrap().notebook_id(), None);
    }

    #[test]
    fn stale_lookup_for_superseded_identity_is_discarded() {
        // u-1's lookup was in flight when the identity changed to u-2.
        let resolving_u2 = NotebookResolution::Resolving {
            user_id: "u-2".to_string(),
        };
        assert_eq!(
            apply_lookup(&resolving_u2, "u-1", Ok("nb-stale".to_string())),
            None
        );

        // u-2's own lookup still lands.
        assert_eq!(
            apply_lookup(&resolving_u2, "u-2", Ok("nb-2".to_string())),
            Some(NotebookResolution::Resolved {
                user_id: "u-2".to_string(),
                notebook_id: "nb-2".to_string(),
            })
        );
    }

    #[test]
    fn late_lookup_after_resolution_is_discarded() {
        let resolved = NotebookResolution::Resolved {
            user_id: "u-2".to_string(),
            notebook_id: "nb-2".to_string(),
        };
        assert_eq!(
            apply_lookup(&resolved, "u-1", Ok("nb-stale".to_string())),
            None
        );
    }
}
