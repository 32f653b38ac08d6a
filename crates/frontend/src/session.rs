//! Session store backed by browser local storage.
//!
//! Holds the authenticated user and bearer token for the lifetime of the
//! browser session. All session reads and writes go through here; pages
//! never touch storage keys directly.

use estate_types::User;
use gloo_storage::{LocalStorage, Storage};

const USER_KEY: &str = "user";
const TOKEN_KEY: &str = "token";

pub struct Session;

impl Session {
    /// The logged-in user, if any.
    pub fn user() -> Option<User> {
        LocalStorage::get(USER_KEY).ok()
    }

    /// The bearer token, if any.
    pub fn token() -> Option<String> {
        LocalStorage::get(TOKEN_KEY).ok()
    }

    pub fn is_logged_in() -> bool {
        Self::token().is_some()
    }

    /// Persist a fresh session after login.
    pub fn store(user: &User, token: &str) {
        // Storage writes only fail when the quota is exhausted; a session
        // this small cannot hit it, and login proceeds either way.
        let _ = LocalStorage::set(USER_KEY, user);
        let _ = LocalStorage::set(TOKEN_KEY, token);
    }

    /// Destroy the session at logout.
    pub fn clear() {
        LocalStorage::delete(USER_KEY);
        LocalStorage::delete(TOKEN_KEY);
    }
}
