use std::future::Future;
use std::pin::Pin;

use bytes::Bytes;
use futures_util::Stream;

/// A boxed stream type for HTTP response bodies.
pub type BoxStream<'a, T> = Pin<Box<dyn Stream<Item = T> + Send + 'a>>;

/// Status line and streaming body of a response.
pub struct HttpResponse<E> {
    pub status: u16,
    pub body: BoxStream<'static, std::result::Result<Bytes, E>>,
}

impl<E> HttpResponse<E> {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Asynchronous HTTP client abstraction.
///
/// The product request needs a single GET with custom headers. Implementations
/// handle their own redirect following and error mapping; they must not retry.
pub trait HttpClient: Send + Sync {
    /// Error type for HTTP operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Issue a GET and return the response once headers have arrived.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent (DNS failure, connection
    /// error, TLS failure). An error status is not an error at this level.
    fn get(
        &self,
        url: &str,
        headers: &[(String, String)],
    ) -> impl Future<Output = std::result::Result<HttpResponse<Self::Error>, Self::Error>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use super::*;

    /// Production HTTP client implementation using reqwest.
    pub struct ReqwestClient {
        client: reqwest::Client,
    }

    impl ReqwestClient {
        pub fn new() -> std::result::Result<Self, reqwest::Error> {
            let client = reqwest::Client::builder().build()?;
            Ok(Self { client })
        }
    }

    impl HttpClient for ReqwestClient {
        type Error = reqwest::Error;

        async fn get(
            &self,
            url: &str,
            headers: &[(String, String)],
        ) -> std::result::Result<HttpResponse<Self::Error>, Self::Error> {
            let mut request = self.client.get(url);

            for (key, value) in headers {
                request = request.header(key, value);
            }

            let response = request.send().await?;
            let status = response.status().as_u16();

            Ok(HttpResponse {
                status,
                body: Box::pin(response.bytes_stream()),
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
