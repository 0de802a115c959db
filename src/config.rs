use url::Url;

use crate::error::Error;

/// Hosted-UI identity provider configuration.
///
/// Required fields are constructor parameters — no runtime "missing field"
/// errors. Built once at process start and never mutated afterwards;
/// malformed values are a construction-time concern, not a runtime one.
///
/// ```rust,ignore
/// use storefront_session::ProviderConfig;
///
/// let config = ProviderConfig::new(
///     "my-client-id",
///     "https://auth.example.com".parse()?,
///     "https://shop.example.com/index.html".parse()?,
/// );
/// // Optional overrides via chaining:
/// let config = config.with_scopes(vec!["openid".into(), "email".into()]);
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct ProviderConfig {
    pub(crate) domain: Url,
    pub(crate) client_id: String,
    pub(crate) redirect_uri: Url,
    pub(crate) logout_redirect_uri: Url,
    pub(crate) scopes: Vec<String>,
}

impl ProviderConfig {
    /// Create a new provider configuration.
    ///
    /// The post-logout redirect defaults to `redirect_uri`; scopes default
    /// to `openid email profile`.
    #[must_use]
    pub fn new(client_id: impl Into<String>, domain: Url, redirect_uri: Url) -> Self {
        Self {
            domain,
            client_id: client_id.into(),
            logout_redirect_uri: redirect_uri.clone(),
            redirect_uri,
            scopes: vec!["openid".into(), "email".into(), "profile".into()],
        }
    }

    /// Create a configuration from environment variables.
    ///
    /// # Required env vars
    /// - `AUTH_DOMAIN`: hosted-UI base URL
    /// - `AUTH_CLIENT_ID`: OAuth2 client ID
    /// - `AUTH_REDIRECT_URI`: post-login redirect URI (must be a valid URL)
    ///
    /// # Optional env vars
    /// - `AUTH_LOGOUT_REDIRECT_URI`: post-logout redirect URI
    /// - `AUTH_SCOPES`: comma-separated OAuth2 scopes
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if required env vars are missing or URLs
    /// are invalid.
    pub fn from_env() -> Result<Self, Error> {
        let domain = require_url_var("AUTH_DOMAIN")?;
        let client_id = std::env::var("AUTH_CLIENT_ID")
            .map_err(|_| Error::Config("AUTH_CLIENT_ID is required".into()))?;
        let redirect_uri = require_url_var("AUTH_REDIRECT_URI")?;

        let mut config = Self::new(client_id, domain, redirect_uri);

        if let Ok(uri_str) = std::env::var("AUTH_LOGOUT_REDIRECT_URI") {
            let uri: Url = uri_str
                .parse()
                .map_err(|e| Error::Config(format!("AUTH_LOGOUT_REDIRECT_URI: {e}")))?;
            config = config.with_logout_redirect_uri(uri);
        }
        if let Ok(scopes) = std::env::var("AUTH_SCOPES") {
            config = config.with_scopes(scopes.split(',').map(|s| s.trim().to_string()).collect());
        }

        Ok(config)
    }

    /// Override the post-logout redirect URI.
    #[must_use]
    pub fn with_logout_redirect_uri(mut self, uri: Url) -> Self {
        self.logout_redirect_uri = uri;
        self
    }

    /// Override the OAuth2 scopes (default: `["openid", "email", "profile"]`).
    #[must_use]
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        self.scopes = scopes;
        self
    }

    /// Hosted-UI base URL.
    #[must_use]
    pub fn domain(&self) -> &Url {
        &self.domain
    }

    /// `OAuth2` client ID.
    #[must_use]
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Post-login redirect URI.
    #[must_use]
    pub fn redirect_uri(&self) -> &Url {
        &self.redirect_uri
    }

    /// Post-logout redirect URI.
    #[must_use]
    pub fn logout_redirect_uri(&self) -> &Url {
        &self.logout_redirect_uri
    }

    /// Requested `OAuth2` scopes.
    #[must_use]
    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}

fn require_url_var(name: &'static str) -> Result<Url, Error> {
    let value =
        std::env::var(name).map_err(|_| Error::Config(format!("{name} is required")))?;
    value
        .parse()
        .map_err(|e| Error::Config(format!("{name}: {e}")))
}
