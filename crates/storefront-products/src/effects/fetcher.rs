use futures_util::StreamExt;
use serde_json::Value;
use tracing::{debug, warn};

use crate::core::render_products;
use crate::data::{Container, FetchOptions, ProductCollection};
use crate::effects::http::HttpClient;
use crate::error::{Error, Result};

/// Retrieves the product list and renders it.
pub struct ProductFetcher<C: HttpClient> {
    client: C,
    options: FetchOptions,
}

impl<C: HttpClient> ProductFetcher<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            options: FetchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Issue the single GET and parse the body.
    ///
    /// `Ok(None)` means the body parsed but was not a list. An error status is
    /// logged and the body is still parsed. There is no retry and no timeout.
    pub async fn fetch_products(&self) -> Result<Option<ProductCollection>> {
        let headers = self.options.request_headers()?;
        let url = self.options.endpoint.as_str();

        debug!(%url, "requesting product list");
        let response = self.client.get(url, &headers).await.map_err(map_error)?;

        if !response.is_success() {
            warn!(%url, status = response.status, "product endpoint returned an error status");
        }

        let mut body = Vec::new();
        let mut stream = response.body;
        while let Some(chunk) = stream.next().await {
            body.extend_from_slice(&chunk.map_err(map_error)?);
        }
        debug!(bytes = body.len(), "received product list");

        let value: Value = serde_json::from_slice(&body)?;
        Ok(ProductCollection::from_value(&value))
    }

    /// Fetch, then render into `container`.
    ///
    /// The container is left untouched when fetching fails.
    pub async fn display_products(&self, container: &mut Container) -> Result<usize> {
        let collection = self.fetch_products().await?;
        Ok(render_products(container, collection.as_ref()))
    }
}

fn map_error<E: std::error::Error>(e: E) -> Error {
    Error::Network(e.to_string())
}
