use serde::{Deserialize, Serialize};
use url::form_urlencoded::byte_serialize;
use url::Url;

pub const AUTHORIZATION_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/auth";

const RESPONSE_TYPE: &str = "code";
const ACCESS_TYPE: &str = "offline";
const PROMPT: &str = "consent";

/// OAuth client settings injected into the view at construction.
///
/// Neither field is validated: an empty value produces an empty query
/// parameter and Google reports the problem on its consent page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoogleConfig {
    pub client_id: String,
    pub redirect_uri: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    AnalyticsReadonly,
    SearchConsoleReadonly,
    AdsReadonly,
}

impl Scope {
    pub const REQUESTED: [Scope; 3] = [
        Scope::AnalyticsReadonly,
        Scope::SearchConsoleReadonly,
        Scope::AdsReadonly,
    ];

    pub fn identifier(&self) -> &'static str {
        match self {
            Scope::AnalyticsReadonly => "https://www.googleapis.com/auth/analytics.readonly",
            Scope::SearchConsoleReadonly => "https://www.googleapis.com/auth/webmasters.readonly",
            Scope::AdsReadonly => "https://www.googleapis.com/auth/adwords",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scope::AnalyticsReadonly => "Google Analytics (read-only access)",
            Scope::SearchConsoleReadonly => "Google Search Console (read-only access)",
            Scope::AdsReadonly => "Google Ads (read-only access)",
        }
    }
}

pub fn scope_param() -> String {
    Scope::REQUESTED
        .iter()
        .map(Scope::identifier)
        .collect::<Vec<_>>()
        .join(" ")
}

// Percent-encodes like encodeURIComponent: spaces become %20, not '+'.
fn encode_component(value: &str) -> String {
    byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

pub fn authorization_url(config: &GoogleConfig) -> Result<Url, url::ParseError> {
    let scope = scope_param();
    let params = [
        ("client_id", config.client_id.as_str()),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("scope", scope.as_str()),
        ("response_type", RESPONSE_TYPE),
        ("access_type", ACCESS_TYPE),
        ("prompt", PROMPT),
    ];

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_component(value)))
        .collect::<Vec<_>>()
        .join("&");

    let mut url = Url::parse(AUTHORIZATION_ENDPOINT)?;
    url.set_query(Some(&query));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample_config() -> GoogleConfig {
        GoogleConfig {
            client_id: "1234-abc.apps.googleusercontent.com".to_string(),
            redirect_uri: "http://localhost:8080/oauth/callback?from=app".to_string(),
        }
    }

    fn params(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn carries_every_required_parameter() {
        let url = authorization_url(&sample_config()).expect("authorization url");
        let params = params(&url);

        assert_eq!(params.len(), 6);
        assert_eq!(params["client_id"], "1234-abc.apps.googleusercontent.com");
        assert_eq!(
            params["redirect_uri"],
            "http://localhost:8080/oauth/callback?from=app"
        );
        assert_eq!(params["response_type"], "code");
        assert_eq!(params["access_type"], "offline");
        assert_eq!(params["prompt"], "consent");

        let scope = &params["scope"];
        assert!(scope.contains("analytics.readonly"));
        assert!(scope.contains("webmasters.readonly"));
        assert!(scope.contains("adwords"));
        assert_eq!(scope.split(' ').count(), 3);
    }

    #[test]
    fn targets_google_endpoint() {
        let url = authorization_url(&sample_config()).expect("authorization url");
        assert!(url.as_str().starts_with("https://accounts.google.com/o/oauth2/auth?client_id="));
    }

    #[test]
    fn encodes_special_characters() {
        let url = authorization_url(&sample_config()).expect("authorization url");
        let query = url.query().expect("query");

        assert!(!query.contains(' '));
        assert!(query.contains("scope=https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fanalytics.readonly%20https"));
        assert!(query.contains("redirect_uri=http%3A%2F%2Flocalhost%3A8080%2Foauth%2Fcallback%3Ffrom%3Dapp"));
    }

    #[test]
    fn literal_plus_survives_encoding() {
        let config = GoogleConfig {
            client_id: "a+b c".to_string(),
            redirect_uri: String::new(),
        };
        let url = authorization_url(&config).expect("authorization url");

        assert!(url.query().expect("query").starts_with("client_id=a%2Bb%20c&"));
        assert_eq!(params(&url)["client_id"], "a+b c");
    }

    #[test]
    fn empty_config_still_builds_a_url() {
        let url = authorization_url(&GoogleConfig::default()).expect("authorization url");
        let query = url.query().expect("query");

        assert!(query.starts_with("client_id=&redirect_uri=&scope="));
        assert_eq!(params(&url)["client_id"], "");
    }
}
