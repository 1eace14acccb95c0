//! Session Guard
//!
//! A single authenticated/anonymous flag gating edit mode. The check is a
//! client-side password comparison for a single-tenant menu board; the flag
//! is persisted so a reload does not force a re-login.

use leptos::prelude::*;

use crate::storage;

/// The owner password. Checked entirely on the client; this gates the edit
/// UI, it is not a security boundary.
const OWNER_PASSWORD: &str = "admin123";

fn password_matches(password: &str) -> bool {
    password == OWNER_PASSWORD
}

/// Authenticated/anonymous session state, provided via context
#[derive(Clone, Copy)]
pub struct Session {
    authenticated: RwSignal<bool>,
}

impl Session {
    /// Restore the session from the persisted flag; absent or invalid
    /// storage starts anonymous.
    pub fn restore() -> Self {
        Self {
            authenticated: RwSignal::new(storage::load_auth_flag()),
        }
    }

    /// Reactive read of the current state
    pub fn is_authenticated(&self) -> bool {
        self.authenticated.get()
    }

    /// Attempt a login. Returns whether the password was accepted; a
    /// success is persisted immediately.
    pub fn login(&self, password: &str) -> bool {
        if password_matches(password) {
            self.authenticated.set(true);
            storage::store_auth_flag();
            true
        } else {
            false
        }
    }

    pub fn logout(&self) {
        self.authenticated.set(false);
        storage::clear_auth_flag();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_start_is_anonymous() {
        let session = Session::restore();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn login_with_the_owner_password_authenticates() {
        let session = Session::restore();
        assert!(session.login("admin123"));
        assert!(session.is_authenticated());
    }

    #[test]
    fn login_with_a_wrong_password_stays_anonymous() {
        let session = Session::restore();
        assert!(!session.login("wrong"));
        assert!(!session.is_authenticated());
        // Close misses count as wrong too
        assert!(!session.login("admin123 "));
        assert!(!session.login("Admin123"));
    }

    #[test]
    fn logout_returns_to_anonymous() {
        let session = Session::restore();
        session.login("admin123");
        session.logout();
        assert!(!session.is_authenticated());
    }
}
