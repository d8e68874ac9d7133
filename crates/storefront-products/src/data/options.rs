use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use url::Url;

use crate::error::{Error, Result};

/// The product list endpoint used when none is configured.
pub static DEFAULT_ENDPOINT: Lazy<Url> =
    Lazy::new(|| Url::parse("https://api.zerosheets.com/v1/kdm").unwrap());

/// A bearer credential.
///
/// Formatting never reveals the secret; use [`BearerToken::expose`] to build
/// the request header.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl From<String> for BearerToken {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BearerToken {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}

impl fmt::Display for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

/// Configuration for the product request.
///
/// # Examples
///
/// ```
/// use storefront_products::FetchOptions;
///
/// let options = FetchOptions::default()
///     .token("secret")
///     .header("Accept", "application/json");
/// ```
#[derive(Clone)]
pub struct FetchOptions {
    /// Endpoint queried with a single GET.
    ///
    /// Default: [`DEFAULT_ENDPOINT`]
    pub endpoint: Url,

    /// Credential sent as `Authorization: Bearer <token>`.
    ///
    /// A request is refused when this is unset.
    pub token: Option<BearerToken>,

    /// Extra headers sent alongside the authorization header.
    pub headers: Arc<[(String, String)]>,
}

impl fmt::Debug for FetchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchOptions")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &self.token)
            .field("headers", &self.headers)
            .finish()
    }
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.clone(),
            token: None,
            headers: Arc::new([]),
        }
    }
}

impl FetchOptions {
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn token(mut self, token: impl Into<BearerToken>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut headers = self.headers.to_vec();
        headers.push((key.into(), value.into()));
        self.headers = headers.into();
        self
    }

    /// Parse an endpoint, accepting only `http` and `https` URLs.
    pub fn parse_endpoint(s: &str) -> Result<Url> {
        let url = Url::parse(s).map_err(|e| Error::InvalidEndpoint(format!("{s}: {e}")))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::InvalidEndpoint(format!(
                "{s}: unsupported scheme '{other}'"
            ))),
        }
    }

    /// Headers for the request, authorization first.
    pub fn request_headers(&self) -> Result<Vec<(String, String)>> {
        let Some(token) = self.token.as_ref() else {
            return Err(Error::MissingCredential {
                endpoint: self.endpoint.to_string(),
            });
        };

        let mut headers = Vec::with_capacity(self.headers.len() + 1);
        headers.push(("Authorization".to_string(), token.header_value()));
        headers.extend(self.headers.iter().cloned());
        Ok(headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let options = FetchOptions::default();
        assert_eq!(
            options.endpoint.as_str(),
            "https://api.zerosheets.com/v1/kdm"
        );
        assert!(options.token.is_none());
    }

    #[test]
    fn test_token_is_redacted() {
        let options = FetchOptions::default().token("s3cr3t");
        let debug = format!("{:?}", options);
        assert!(!debug.contains("s3cr3t"));
        assert_eq!(options.token.unwrap().to_string(), "***");
    }

    #[test]
    fn test_request_headers_put_authorization_first() {
        let headers = FetchOptions::default()
            .token("abc")
            .header("Accept", "application/json")
            .request_headers()
            .unwrap();
        assert_eq!(
            headers,
            vec![
                ("Authorization".to_string(), "Bearer abc".to_string()),
                ("Accept".to_string(), "application/json".to_string()),
            ]
        );
    }

    #[test]
    fn test_request_headers_require_token() {
        let err = FetchOptions::default().request_headers().unwrap_err();
        assert!(matches!(err, Error::MissingCredential { .. }));
    }

    #[test]
    fn test_parse_endpoint_rejects_other_schemes() {
        assert!(FetchOptions::parse_endpoint("https://example.com/v1/x").is_ok());
        assert!(matches!(
            FetchOptions::parse_endpoint("ftp://example.com"),
            Err(Error::InvalidEndpoint(_))
        ));
        assert!(matches!(
            FetchOptions::parse_endpoint("not a url"),
            Err(Error::InvalidEndpoint(_))
        ));
    }
}
