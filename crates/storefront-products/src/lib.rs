//! Fetches a product list from a remote API and renders it into an output container.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Records, the output container and fetch configuration
//! - [`core`] - Pure formatting and rendering
//! - [`effects`] - HTTP I/O behind the [`HttpClient`] trait
//!
//! The entry point drives a two-step pipeline: [`ProductFetcher::fetch_products`]
//! retrieves the collection once, then [`render_products`] writes it into a
//! [`Container`]. [`ProductFetcher::display_products`] runs both in sequence.

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use self::core::{EMPTY_MESSAGE, display_field, render_products, summarize};
pub use self::data::{
    BearerToken, Container, DEFAULT_CONTAINER_ID, DEFAULT_ENDPOINT, FetchOptions, Node, Product,
    ProductCollection,
};
pub use self::effects::{
    BoxStream, HttpClient, HttpResponse, ProductFetcher, RecordedRequest, StaticClient,
    StaticClientError,
};

#[cfg(feature = "reqwest")]
pub use self::effects::ReqwestClient;

pub use self::error::{Error, Result};
