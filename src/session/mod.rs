//! Session: bearer token and cached user snapshot, mirrored to a
//! persistent key/value store.
//!
//! ## Namespaces
//!
//! | Role     | Token key     | User key     |
//! |----------|---------------|--------------|
//! | `Admin`  | `admin_token` | `admin_user` |
//! | `Member` | `user_token`  | `user_info`  |
//!
//! The manager tracks one *active* namespace. It starts as the configured
//! role; establishing a session (admin login, member login/registration)
//! makes that session's namespace active.
//!
//! ## Freshness
//!
//! The token is re-read from the store on every [`SessionManager::token`] and
//! [`SessionManager::is_authenticated`] call, so a logout performed elsewhere
//! is observed immediately. The user snapshot is served from memory.

pub mod store;
#[cfg(feature = "wasm")]
pub mod web;

pub use store::{FileStore, KeyValueStore, MemoryStore};
#[cfg(feature = "wasm")]
pub use web::WebStorage;

use std::sync::Arc;

use async_lock::RwLock;
use serde::de::DeserializeOwned;

use crate::error::StorageError;
use crate::shared::Role;

/// Persisted key names for one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionKeys {
    pub token: &'static str,
    pub user: &'static str,
}

impl SessionKeys {
    pub const ADMIN: SessionKeys = SessionKeys {
        token: "admin_token",
        user: "admin_user",
    };

    pub const MEMBER: SessionKeys = SessionKeys {
        token: "user_token",
        user: "user_info",
    };

    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::ADMIN,
            Role::Member => Self::MEMBER,
        }
    }
}

/// In-memory copy of the session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    /// Bearer token; empty when signed out.
    pub token: String,
    /// Opaque user snapshot as returned at login.
    pub user: Option<serde_json::Value>,
}

#[derive(Debug)]
struct SessionState {
    role: Role,
    session: Session,
}

/// Owns the session for one client.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    state: Arc<RwLock<SessionState>>,
    clear_all_on_logout: bool,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("clear_all_on_logout", &self.clear_all_on_logout)
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Restore whatever session `role`'s namespace holds.
    pub fn restore(role: Role, store: Arc<dyn KeyValueStore>, clear_all_on_logout: bool) -> Self {
        let session = read_session(store.as_ref(), role);
        tracing::debug!(
            role = role.as_str(),
            has_token = !session.token.is_empty(),
            "restored session"
        );
        Self {
            store,
            state: Arc::new(RwLock::new(SessionState { role, session })),
            clear_all_on_logout,
        }
    }

    /// The namespace currently in use.
    pub async fn role(&self) -> Role {
        self.state.read().await.role
    }

    /// Current bearer token, re-read from the store. Empty when signed out.
    ///
    /// The cached copy is only written when the store disagrees with it.
    pub async fn token(&self) -> String {
        let role = self.state.read().await.role;
        let persisted = match self.store.get(SessionKeys::for_role(role).token) {
            Ok(persisted) => persisted.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not read persisted token, using cached copy");
                return self.state.read().await.session.token.clone();
            }
        };

        {
            let state = self.state.read().await;
            if state.role != role {
                return state.session.token.clone();
            }
            if state.session.token == persisted {
                return persisted;
            }
        }

        let mut state = self.state.write().await;
        if state.role != role {
            return state.session.token.clone();
        }
        state.session.token.clone_from(&persisted);
        persisted
    }

    /// Whether a token is present in the store right now.
    pub async fn is_authenticated(&self) -> bool {
        !self.token().await.is_empty()
    }

    /// Last known user snapshot. Not re-validated against the server.
    pub async fn current_user(&self) -> Option<serde_json::Value> {
        self.state.read().await.session.user.clone()
    }

    /// [`current_user`](Self::current_user) decoded into `T`.
    pub async fn current_user_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.current_user()
            .await
            .and_then(|user| serde_json::from_value(user).ok())
    }

    /// Snapshot of the in-memory session.
    pub async fn snapshot(&self) -> Session {
        self.state.read().await.session.clone()
    }

    /// Persist a new session under `role` and make it the active namespace.
    pub async fn establish(
        &self,
        role: Role,
        token: &str,
        user: Option<serde_json::Value>,
    ) -> Result<(), StorageError> {
        let keys = SessionKeys::for_role(role);
        let user_json = serde_json::to_string(&user)?;
        self.store.set(keys.token, token)?;
        self.store.set(keys.user, &user_json)?;

        let mut state = self.state.write().await;
        state.role = role;
        state.session = Session {
            token: token.to_string(),
            user,
        };
        tracing::debug!(role = role.as_str(), "session established");
        Ok(())
    }

    /// Drop the session from memory and from the store.
    ///
    /// Removes the active namespace's keys, plus the other namespace's when
    /// the manager was built with `clear_all_on_logout`. Storage failures
    /// are logged; the in-memory session is cleared regardless.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.session = Session::default();

        let mut roles = vec![state.role];
        if self.clear_all_on_logout {
            roles.push(state.role.alternate());
        }
        for role in roles {
            let keys = SessionKeys::for_role(role);
            for key in [keys.token, keys.user] {
                if let Err(e) = self.store.remove(key) {
                    tracing::warn!(key, error = %e, "failed to remove persisted session key");
                }
            }
        }
        tracing::debug!(role = state.role.as_str(), "session cleared");
    }
}

fn read_session(store: &dyn KeyValueStore, role: Role) -> Session {
    let keys = SessionKeys::for_role(role);
    let token = store.get(keys.token).ok().flatten().unwrap_or_default();
    let user = store
        .get(keys.user)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str::<serde_json::Value>(&raw).ok())
        .filter(|user| !user.is_null());
    Session { token, user }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn manager(role: Role, clear_all: bool) -> (SessionManager, MemoryStore) {
        let store = MemoryStore::new();
        let mgr = SessionManager::restore(role, Arc::new(store.clone()), clear_all);
        (mgr, store)
    }

    #[tokio::test]
    async fn restore_reads_role_namespace() {
        let store = MemoryStore::new();
        store.set("admin_token", "adm").unwrap();
        store.set("admin_user", r#"{"id":1,"role":"super_admin"}"#).unwrap();
        store.set("user_token", "usr").unwrap();

        let mgr = SessionManager::restore(Role::Admin, Arc::new(store), false);
        assert_eq!(mgr.token().await, "adm");
        assert_eq!(mgr.current_user().await.unwrap()["role"], "super_admin");
    }

    #[tokio::test]
    async fn token_follows_external_store_changes() {
        let (mgr, store) = manager(Role::Member, false);
        assert_eq!(mgr.token().await, "");

        store.set("user_token", "fresh").unwrap();
        assert_eq!(mgr.token().await, "fresh");
        assert_eq!(mgr.snapshot().await.token, "fresh");

        store.remove("user_token").unwrap();
        assert_eq!(mgr.token().await, "");
        assert_eq!(mgr.snapshot().await.token, "");
    }

    #[tokio::test]
    async fn concurrent_token_reads_agree() {
        let (mgr, store) = manager(Role::Member, false);
        store.set("user_token", "shared").unwrap();

        let (a, b, c) = tokio::join!(mgr.token(), mgr.token(), mgr.token());
        assert_eq!((a.as_str(), b.as_str(), c.as_str()), ("shared", "shared", "shared"));
    }

    #[tokio::test]
    async fn corrupt_user_snapshot_restores_as_none() {
        let store = MemoryStore::new();
        store.set("user_token", "t").unwrap();
        store.set("user_info", "{broken").unwrap();
        let mgr = SessionManager::restore(Role::Member, Arc::new(store), false);
        assert!(mgr.current_user().await.is_none());
        assert!(mgr.is_authenticated().await);
    }

    #[tokio::test]
    async fn establish_persists_and_switches_namespace() {
        let (mgr, store) = manager(Role::Admin, false);
        mgr.establish(Role::Member, "tok", Some(json!({"id": 7})))
            .await
            .unwrap();

        assert_eq!(mgr.role().await, Role::Member);
        assert_eq!(store.get("user_token").unwrap().as_deref(), Some("tok"));
        assert_eq!(store.get("user_info").unwrap().as_deref(), Some(r#"{"id":7}"#));
        assert!(store.get("admin_token").unwrap().is_none());
    }

    #[tokio::test]
    async fn external_removal_is_seen_on_next_call() {
        let (mgr, store) = manager(Role::Member, false);
        mgr.establish(Role::Member, "tok", None).await.unwrap();
        assert!(mgr.is_authenticated().await);

        store.remove("user_token").unwrap();
        assert!(!mgr.is_authenticated().await);
        assert_eq!(mgr.snapshot().await.token, "");
    }

    #[tokio::test]
    async fn clear_removes_only_active_namespace_by_default() {
        let (mgr, store) = manager(Role::Member, false);
        store.set("admin_token", "adm").unwrap();
        mgr.establish(Role::Member, "tok", None).await.unwrap();

        mgr.clear().await;
        assert!(store.get("user_token").unwrap().is_none());
        assert!(store.get("user_info").unwrap().is_none());
        assert_eq!(store.get("admin_token").unwrap().as_deref(), Some("adm"));
        assert!(mgr.current_user().await.is_none());
    }

    #[tokio::test]
    async fn clear_all_removes_both_namespaces() {
        let (mgr, store) = manager(Role::Admin, true);
        store.set("user_token", "usr").unwrap();
        store.set("user_info", "null").unwrap();
        mgr.establish(Role::Admin, "adm", None).await.unwrap();

        mgr.clear().await;
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn current_user_as_decodes() {
        #[derive(serde::Deserialize)]
        struct Admin {
            username: String,
        }
        let (mgr, _) = manager(Role::Admin, false);
        mgr.establish(Role::Admin, "t", Some(json!({"username": "admin"})))
            .await
            .unwrap();
        let admin: Admin = mgr.current_user_as().await.unwrap();
        assert_eq!(admin.username, "admin");
    }
}
