use serde::Serialize;

use crate::claims::{decode_claims, Claims};
use crate::config::ProviderConfig;
use crate::fragment::extract_tokens;
use crate::gate::{Gate, ADD_TO_CART_PROMPT, CART_PROMPT};
use crate::page::Page;
use crate::store::{SessionStore, StorageBackend};
use crate::types::ItemId;
use crate::urls::HostedUi;

const UNVERIFIED_EMAIL_NOTICE: &str = "Please verify your email. Check your inbox.";
const FALLBACK_DISPLAY_LABEL: &str = "Logged In";

/// Result of processing the current page load's URL fragment.
#[derive(Debug, Clone, PartialEq)]
pub enum RedirectOutcome {
    /// The fragment carried no token response; nothing was touched.
    NoRedirectPending,
    /// Tokens saved and the login finalized. `claims` is `None` when
    /// the identity token's payload could not be decoded.
    SignedIn { claims: Option<Claims> },
    /// Tokens were issued but the email is not verified: the session
    /// was cleared and the page sent to the registration screen.
    RejectedUnverified,
}

/// Signed-in view-model for the user-display surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDisplay {
    /// The email claim when decodable, otherwise a generic label.
    pub label: String,
    /// Mirrors the `email_verified` claim.
    pub verified: bool,
}

/// Session-token lifecycle manager.
///
/// Bundles the hosted-UI URL builder with session persistence, and
/// orchestrates the redirect completion that turns a provider redirect
/// into a stored session. One instance per page, constructed at load.
pub struct SessionManager<B> {
    urls: HostedUi,
    store: SessionStore<B>,
}

impl<B: StorageBackend> SessionManager<B> {
    #[must_use]
    pub fn new(config: ProviderConfig, backend: B) -> Self {
        Self {
            urls: HostedUi::new(config),
            store: SessionStore::new(backend),
        }
    }

    #[must_use]
    pub fn urls(&self) -> &HostedUi {
        &self.urls
    }

    #[must_use]
    pub fn store(&self) -> &SessionStore<B> {
        &self.store
    }

    /// The per-action authentication gate.
    #[must_use]
    pub fn gate(&self) -> Gate<'_, B> {
        Gate {
            store: &self.store,
            urls: &self.urls,
        }
    }

    /// Whether a session record exists.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.gate().is_authenticated()
    }

    /// Finalize a login that just returned from the provider.
    ///
    /// Call once per page load. When the fragment carries no token
    /// response this is a no-op; otherwise the tokens are persisted,
    /// the fragment is stripped from the visible URL, and the identity
    /// token's claims decide whether the login stands or is rejected
    /// for an unverified email.
    pub fn complete_login(&self, page: &impl Page) -> RedirectOutcome {
        let Some(tokens) = extract_tokens(page.fragment().as_deref()) else {
            return RedirectOutcome::NoRedirectPending;
        };

        self.store.save(&tokens);
        // Tokens must not survive in the visible URL: a refresh would
        // re-process them and a shared link would leak them.
        page.strip_fragment();

        let claims = tokens.id_token.as_deref().and_then(decode_claims);

        if let Some(claims) = &claims {
            if !claims.email_verified() {
                tracing::warn!("login rejected: email not verified");
                page.notify(UNVERIFIED_EMAIL_NOTICE);
                self.store.clear();
                page.navigate(&self.urls.signup_url());
                return RedirectOutcome::RejectedUnverified;
            }
        }

        // A decode failure skips the verification check entirely:
        // unknown claims permit the login rather than deny it.
        tracing::info!("hosted UI login finalized");
        RedirectOutcome::SignedIn { claims }
    }

    /// Send the page to the provider's login screen.
    pub fn login(&self, page: &impl Page) {
        page.navigate(&self.urls.login_url());
    }

    /// Send the page to the provider's registration screen.
    pub fn signup(&self, page: &impl Page) {
        page.navigate(&self.urls.signup_url());
    }

    /// Clear the session and send the page to the end-session endpoint.
    ///
    /// Storage is cleared before the navigation is issued, so an
    /// interrupted navigation still leaves this origin signed out.
    pub fn logout(&self, page: &impl Page) {
        self.store.clear();
        tracing::info!("session cleared, navigating to end-session endpoint");
        page.navigate(&self.urls.logout_url());
    }

    /// View-model for the user-display surface, or `None` when signed
    /// out.
    ///
    /// Claims are decoded for display only; when unavailable the label
    /// falls back to a generic signed-in marker.
    #[must_use]
    pub fn user_display(&self) -> Option<UserDisplay> {
        let id_token = self.store.identity_token()?;
        Some(match decode_claims(&id_token) {
            Some(claims) => UserDisplay {
                label: claims.email().unwrap_or(FALLBACK_DISPLAY_LABEL).to_string(),
                verified: claims.email_verified(),
            },
            None => UserDisplay {
                label: FALLBACK_DISPLAY_LABEL.to_string(),
                verified: false,
            },
        })
    }

    /// Gate cart navigation on an existing session.
    ///
    /// Runs `open` (the collaborator's navigation) when authenticated;
    /// otherwise prompts and redirects to the login screen.
    pub fn open_cart(&self, page: &impl Page, open: impl FnOnce()) -> bool {
        self.gate().guard(page, CART_PROMPT, open)
    }

    /// Gate an add-to-cart affordance on an existing session.
    ///
    /// `add` receives the item id only when authenticated.
    pub fn add_to_cart(&self, page: &impl Page, item: &ItemId, add: impl FnOnce(&ItemId)) -> bool {
        self.gate().guard(page, ADD_TO_CART_PROMPT, || add(item))
    }
}
