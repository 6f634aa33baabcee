use admin_domain::session::{Session, SessionStore};
use admin_domain::SessionError;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

/// Session persisted under a single `localStorage` key
#[derive(Debug, Clone, PartialEq)]
pub struct LocalStorageSessionStore {
    key: String,
}

impl LocalStorageSessionStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionStore for LocalStorageSessionStore {
    fn load(&self) -> Option<Session> {
        match LocalStorage::get(&self.key) {
            Ok(session) => Some(session),
            // Unparseable entries count as signed out and are dropped
            Err(StorageError::SerdeError(_)) => {
                LocalStorage::delete(&self.key);
                None
            }
            Err(_) => None,
        }
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        LocalStorage::set(&self.key, session).map_err(|e| SessionError::Storage(e.to_string()))
    }

    fn clear(&self) {
        LocalStorage::delete(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use admin_domain::session::{check_access, RouteAccess};
    use chrono::{Duration, Utc};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_save_load_clear() {
        let store = LocalStorageSessionStore::new("mecarvi_admin_session_test_roundtrip");
        store.save(&Session::new("token-1")).unwrap();
        assert_eq!(store.load(), Some(Session::new("token-1")));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[wasm_bindgen_test]
    fn test_garbage_entry_redirects_to_login() {
        let key = "mecarvi_admin_session_test_garbage";
        LocalStorage::set(key, "not a session").unwrap();
        let store = LocalStorageSessionStore::new(key);

        assert_eq!(check_access(&store, Utc::now()), RouteAccess::RedirectToLogin);
        assert!(LocalStorage::raw().get_item(key).unwrap().is_none());
    }

    #[wasm_bindgen_test]
    fn test_expired_session_is_removed() {
        let store = LocalStorageSessionStore::new("mecarvi_admin_session_test_expired");
        let now = Utc::now();
        store.save(&Session::new("old").expiring_at(now - Duration::minutes(5))).unwrap();

        assert!(!check_access(&store, now).is_granted());
        assert_eq!(store.load(), None);
    }
}
