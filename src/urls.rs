use url::Url;

use crate::config::ProviderConfig;

/// `screen_hint` value that routes first-time users to the provider's
/// registration screen.
pub const SIGNUP_SCREEN_HINT: &str = "signup";

/// Hosted-UI endpoint URL builder.
///
/// Pure functions of [`ProviderConfig`]: no side effects, no failure
/// modes. The provider serves its login and end-session screens under
/// fixed paths on the configured domain.
#[derive(Debug, Clone)]
pub struct HostedUi {
    config: ProviderConfig,
}

impl HostedUi {
    #[must_use]
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Build the authorization URL for an implicit-flow login.
    ///
    /// `{domain}/login?client_id=...&response_type=token&scope=...&redirect_uri=...`,
    /// with `screen_hint` appended when supplied.
    #[must_use]
    pub fn authorization_url(&self, screen_hint: Option<&str>) -> Url {
        let scope = self.config.scopes.join(" ");

        let mut url = endpoint(&self.config.domain, "login");
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("response_type", "token")
            .append_pair("scope", &scope)
            .append_pair("redirect_uri", self.config.redirect_uri.as_str());
        if let Some(hint) = screen_hint {
            url.query_pairs_mut().append_pair("screen_hint", hint);
        }
        url
    }

    /// Authorization URL for the plain login screen.
    #[must_use]
    pub fn login_url(&self) -> Url {
        self.authorization_url(None)
    }

    /// Authorization URL for the registration screen.
    #[must_use]
    pub fn signup_url(&self) -> Url {
        self.authorization_url(Some(SIGNUP_SCREEN_HINT))
    }

    /// Build the end-session URL.
    ///
    /// `{domain}/logout?client_id=...&logout_uri=...`.
    #[must_use]
    pub fn logout_url(&self) -> Url {
        let mut url = endpoint(&self.config.domain, "logout");
        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("logout_uri", self.config.logout_redirect_uri.as_str());
        url
    }
}

fn endpoint(domain: &Url, path: &str) -> Url {
    let mut url = domain.clone();
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosted_ui() -> HostedUi {
        HostedUi::new(ProviderConfig::new(
            "test-client",
            "https://auth.example.com".parse().unwrap(),
            "https://shop.example.com/index.html".parse().unwrap(),
        ))
    }

    #[test]
    fn login_url_shape() {
        let url = hosted_ui().login_url();

        assert_eq!(url.domain(), Some("auth.example.com"));
        assert_eq!(url.path(), "/login");
        let query = url.query().unwrap();
        assert!(query.contains("client_id=test-client"));
        assert!(query.contains("response_type=token"));
        assert!(query.contains("scope=openid+email+profile"));
        assert!(query.contains("redirect_uri=https%3A%2F%2Fshop.example.com%2Findex.html"));
        assert!(!query.contains("screen_hint"));
    }

    #[test]
    fn signup_url_appends_screen_hint() {
        let url = hosted_ui().signup_url();

        assert!(url.query().unwrap().ends_with("screen_hint=signup"));
    }

    #[test]
    fn logout_url_shape() {
        let url = hosted_ui().logout_url();

        assert_eq!(url.path(), "/logout");
        let query = url.query().unwrap();
        assert!(query.contains("client_id=test-client"));
        assert!(query.contains("logout_uri=https%3A%2F%2Fshop.example.com%2Findex.html"));
        assert!(!query.contains("response_type"));
    }

    #[test]
    fn logout_url_uses_logout_redirect_override() {
        let ui = HostedUi::new(
            hosted_ui()
                .config()
                .clone()
                .with_logout_redirect_uri("https://shop.example.com/bye.html".parse().unwrap()),
        );

        assert!(ui.logout_url().query().unwrap().contains("bye.html"));
    }
}
