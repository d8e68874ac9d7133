//! I/O for the product request.
//!
//! Everything that touches the network sits behind [`HttpClient`] so the
//! pipeline can run against [`StaticClient`] in tests.

mod fetcher;
mod http;
mod mock;

pub use fetcher::ProductFetcher;
pub use http::{BoxStream, HttpClient, HttpResponse};
pub use mock::{RecordedRequest, StaticClient, StaticClientError};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
