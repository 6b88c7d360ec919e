//! API token handling for Quandl endpoints.

use url::Url;

const TOKEN_PARAM: &str = "auth_token";

impl super::QdClient {
    /// Appends `auth_token` to the URL's query when the client has a token.
    pub(crate) fn append_auth_token(&self, url: &mut Url) {
        if let Some(token) = &self.auth_token {
            url.query_pairs_mut().append_pair(TOKEN_PARAM, token);
        }
    }

    pub fn has_auth_token(&self) -> bool {
        self.auth_token.is_some()
    }
}

/// Renders a URL for logs and error messages with the token value masked.
pub(crate) fn redact_url(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == TOKEN_PARAM) {
        return url.to_string();
    }
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == TOKEN_PARAM {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();
    let mut out = url.clone();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}
