use tracing::info;

use crate::core::format::display_field;
use crate::data::{Container, Node, Product, ProductCollection};

/// Text shown when there is nothing to render.
pub const EMPTY_MESSAGE: &str = "No products available.";

/// One-line summary of a record.
///
/// The leading space is part of the output format.
pub fn summarize(product: &Product) -> String {
    format!(
        " Name: {}, Quantity: {}, Price: {}",
        display_field(product.name.as_ref()),
        display_field(product.quantity.as_ref()),
        display_field(product.price.as_ref()),
    )
}

/// Write `collection` into `container`, replacing whatever it held.
///
/// Appends one `div` per record in order. An absent or empty collection
/// leaves [`EMPTY_MESSAGE`] as the only content. Returns the number of
/// records rendered.
pub fn render_products(container: &mut Container, collection: Option<&ProductCollection>) -> usize {
    container.clear();

    match collection {
        Some(products) if !products.is_empty() => {
            for product in products {
                container.append_child(Node::div(summarize(product)));
            }
            info!(
                container = container.id(),
                count = products.len(),
                "rendered products"
            );
            products.len()
        }
        _ => {
            container.set_text_content(EMPTY_MESSAGE);
            info!(container = container.id(), "no products to render");
            0
        }
    }
}
