//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::User;
use crate::theme;

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Authenticated user, once `/auth/me` has answered
    pub user: Option<User>,
    /// Neon theme active (false = dark)
    pub neon: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            user: None,
            neon: theme::read_preference(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

pub fn store_set_user(store: &AppStore, user: Option<User>) {
    *store.user().write() = user;
}

pub fn store_set_neon(store: &AppStore, neon: bool) {
    *store.neon().write() = neon;
    theme::set(neon);
}
