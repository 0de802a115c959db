use crate::page::Page;
use crate::store::{SessionStore, StorageBackend};
use crate::urls::HostedUi;

/// Login prompt for gated cart navigation.
pub(crate) const CART_PROMPT: &str = "Please login to access your cart.";
/// Login prompt for gated add-to-cart affordances.
pub(crate) const ADD_TO_CART_PROMPT: &str = "Please login before adding items.";

/// Per-action authentication gate.
///
/// Borrowed views over the session store and URL builder; obtain one
/// via [`SessionManager::gate`](crate::session::SessionManager::gate).
pub struct Gate<'a, B> {
    pub(crate) store: &'a SessionStore<B>,
    pub(crate) urls: &'a HostedUi,
}

impl<B: StorageBackend> Gate<'_, B> {
    /// Whether a session record exists.
    ///
    /// Presence of the stored identity token, not its expiry timestamp,
    /// is the test.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.identity_token().is_some()
    }

    /// Run `action` if a session exists; otherwise prompt and redirect
    /// to the login screen.
    ///
    /// Returns whether `action` ran. `false` tells the caller to cancel
    /// whatever default behavior the affordance carries. Each gated
    /// action prompts and redirects independently; there is no global
    /// funnel.
    pub fn guard(&self, page: &impl Page, prompt: &str, action: impl FnOnce()) -> bool {
        if self.is_authenticated() {
            action();
            return true;
        }
        tracing::debug!(prompt, "gated action while signed out");
        page.notify(prompt);
        page.navigate(&self.urls.login_url());
        false
    }
}
