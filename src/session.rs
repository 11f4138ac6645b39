use crate::config::{DEFAULT_LANDING_PATH, REDIRECT_AFTER_LOGIN_KEY};
use crate::route::{current_path, navigate, Route};
use crate::storage::{KeyValueStore, SessionStorage};

pub fn remember_redirect<S: KeyValueStore>(store: &S, path: &str) {
    if let Err(e) = store.set(REDIRECT_AFTER_LOGIN_KEY, path) {
        log::warn!("could not remember post-login redirect: {}", e);
    }
}

pub fn forget_redirect<S: KeyValueStore>(store: &S) {
    if let Err(e) = store.remove(REDIRECT_AFTER_LOGIN_KEY) {
        log::debug!("could not clear post-login redirect: {}", e);
    }
}

/// Consumes the stored post-login destination, falling back to the budgets list.
pub fn take_redirect<S: KeyValueStore>(store: &S) -> String {
    let path = store
        .get(REDIRECT_AFTER_LOGIN_KEY)
        .filter(|p| p.starts_with('/') && !p.starts_with("//") && p != "/login" && p != "/register");
    forget_redirect(store);
    path.unwrap_or_else(|| DEFAULT_LANDING_PATH.to_string())
}

/// Sends the browser to the login page, coming back here afterwards.
pub fn redirect_to_login() {
    log::info!("session missing or expired, redirecting to login");
    remember_redirect(&SessionStorage, &current_path());
    navigate(&Route::Login.path());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn redirect_is_consumed_once() {
        let store = MemoryStore::new();
        remember_redirect(&store, "/budget/12");

        assert_eq!(take_redirect(&store), "/budget/12");
        assert_eq!(take_redirect(&store), "/budgets");
    }

    #[test]
    fn auth_pages_and_foreign_urls_are_not_redirect_targets() {
        let store = MemoryStore::new();
        remember_redirect(&store, "/login");
        assert_eq!(take_redirect(&store), "/budgets");

        remember_redirect(&store, "//example.com/");
        assert_eq!(take_redirect(&store), "/budgets");
    }

    #[test]
    fn forgetting_clears_a_pending_redirect() {
        let store = MemoryStore::new();
        remember_redirect(&store, "/budget/4/edit");
        forget_redirect(&store);
        assert_eq!(store.get(REDIRECT_AFTER_LOGIN_KEY), None);

        forget_redirect(&MemoryStore::unavailable());
    }

    #[test]
    fn unavailable_store_falls_back_to_landing_page() {
        let store = MemoryStore::unavailable();
        remember_redirect(&store, "/budget/3");
        assert_eq!(take_redirect(&store), "/budgets");
    }
}
