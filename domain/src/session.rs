//! Session presence and the protected-route decision.
//!
//! Screens never read storage themselves. The composition root hands a
//! `SessionStore` to the app, and route protection is a pure function of
//! the loaded session and the current time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

use crate::error::SessionError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
        }
    }

    pub fn expiring_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// A session is valid with a non-blank token that has not expired yet
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        !self.token.trim().is_empty() && self.expires_at.map_or(true, |expiry| now < expiry)
    }

    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

pub trait SessionStore {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session) -> Result<(), SessionError>;
    fn clear(&self);
}

/// In-memory store for tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RefCell<Option<Session>>,
}

impl MemorySessionStore {
    pub fn with_session(session: Session) -> Self {
        Self {
            session: RefCell::new(Some(session)),
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    fn save(&self, session: &Session) -> Result<(), SessionError> {
        *self.session.borrow_mut() = Some(session.clone());
        Ok(())
    }

    fn clear(&self) {
        self.session.borrow_mut().take();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RouteAccess {
    Granted(Session),
    RedirectToLogin,
}

impl RouteAccess {
    pub fn is_granted(&self) -> bool {
        matches!(self, RouteAccess::Granted(_))
    }
}

pub fn guard_route(session: Option<&Session>, now: DateTime<Utc>) -> RouteAccess {
    match session {
        Some(session) if session.is_valid_at(now) => RouteAccess::Granted(session.clone()),
        _ => RouteAccess::RedirectToLogin,
    }
}

/// Load the stored session and decide access, dropping it if it has expired
pub fn check_access<S: SessionStore + ?Sized>(store: &S, now: DateTime<Utc>) -> RouteAccess {
    let session = store.load();
    let access = guard_route(session.as_ref(), now);
    if session.is_some() && !access.is_granted() {
        store.clear();
    }
    access
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_guard_route() {
        let now = Utc::now();

        assert_eq!(guard_route(None, now), RouteAccess::RedirectToLogin);
        assert!(guard_route(Some(&Session::new("abc")), now).is_granted());
        assert!(!guard_route(Some(&Session::new("   ")), now).is_granted());

        let expired = Session::new("abc").expiring_at(now - Duration::minutes(1));
        assert_eq!(guard_route(Some(&expired), now), RouteAccess::RedirectToLogin);

        let fresh = Session::new("abc").expiring_at(now + Duration::hours(8));
        assert_eq!(guard_route(Some(&fresh), now), RouteAccess::Granted(fresh.clone()));
    }

    #[test]
    fn test_check_access_clears_expired_session() {
        let now = Utc::now();
        let store = MemorySessionStore::with_session(Session::new("abc").expiring_at(now - Duration::seconds(1)));

        assert_eq!(check_access(&store, now), RouteAccess::RedirectToLogin);
        assert!(store.load().is_none());
    }

    #[test]
    fn test_store_roundtrip() {
        let store = MemorySessionStore::default();
        store.save(&Session::new("tok")).unwrap();

        assert_eq!(store.load().unwrap().authorization_header(), "Bearer tok");
        store.clear();
        assert!(store.load().is_none());
    }
}
