//! Immutable records, the output container and fetch configuration.

mod container;
mod options;
mod product;

pub use container::{Container, DEFAULT_CONTAINER_ID, Node};
pub use options::{BearerToken, DEFAULT_ENDPOINT, FetchOptions};
pub use product::{Product, ProductCollection};
