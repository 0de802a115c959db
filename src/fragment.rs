use serde::{Deserialize, Serialize};

/// Raw token material returned by the provider in the redirect fragment.
///
/// A transient value, not an entity: any field may be absent, and
/// `expires_in` stays as the provider sent it. Numeric interpretation
/// happens at save time, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub id_token: Option<String>,
    pub access_token: Option<String>,
    pub expires_in: Option<String>,
}

/// Parse a redirect-back URL fragment into a [`TokenSet`].
///
/// Strips one leading `#`. Returns `None` when the fragment is absent,
/// empty, or contains no `=` — the signal that this page load is not a
/// post-login redirect. Anything else parses best-effort and never
/// fails: unknown keys are ignored, and a junk fragment that happens to
/// contain `=` yields a set with every field absent.
#[must_use]
pub fn extract_tokens(fragment: Option<&str>) -> Option<TokenSet> {
    let raw = fragment?;
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    if !raw.contains('=') {
        return None;
    }

    let mut tokens = TokenSet::default();
    for (key, value) in url::form_urlencoded::parse(raw.as_bytes()) {
        match key.as_ref() {
            "id_token" => tokens.id_token = Some(value.into_owned()),
            "access_token" => tokens.access_token = Some(value.into_owned()),
            "expires_in" => tokens.expires_in = Some(value.into_owned()),
            _ => {}
        }
    }
    Some(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_redirect_fragments_yield_none() {
        assert_eq!(extract_tokens(None), None);
        assert_eq!(extract_tokens(Some("")), None);
        assert_eq!(extract_tokens(Some("#")), None);
        assert_eq!(extract_tokens(Some("section-2")), None);
        assert_eq!(extract_tokens(Some("#about")), None);
    }

    #[test]
    fn full_token_response() {
        let tokens = extract_tokens(Some("id_token=A&access_token=B&expires_in=60")).unwrap();

        assert_eq!(tokens.id_token.as_deref(), Some("A"));
        assert_eq!(tokens.access_token.as_deref(), Some("B"));
        assert_eq!(tokens.expires_in.as_deref(), Some("60"));
    }

    #[test]
    fn leading_hash_is_stripped_and_fields_default_absent() {
        let tokens = extract_tokens(Some("#id_token=A")).unwrap();

        assert_eq!(tokens.id_token.as_deref(), Some("A"));
        assert_eq!(tokens.access_token, None);
        assert_eq!(tokens.expires_in, None);
    }

    #[test]
    fn junk_with_delimiter_parses_to_empty_set() {
        let tokens = extract_tokens(Some("foo=bar&baz")).unwrap();

        assert_eq!(tokens, TokenSet::default());
    }

    #[test]
    fn values_are_percent_decoded() {
        let tokens = extract_tokens(Some("access_token=a%2Bb")).unwrap();

        assert_eq!(tokens.access_token.as_deref(), Some("a+b"));
    }
}
