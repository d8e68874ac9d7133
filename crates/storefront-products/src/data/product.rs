use serde_json::Value;

/// One product record as returned by the remote service.
///
/// Fields are kept as raw JSON so that a missing field (`None`) can be told
/// apart from an explicit `null`. No validation happens here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    pub name: Option<Value>,
    pub quantity: Option<Value>,
    pub price: Option<Value>,
}

impl Product {
    pub const NAME_KEY: &'static str = "Product Name";
    pub const QUANTITY_KEY: &'static str = "Quantity in Stock";
    pub const PRICE_KEY: &'static str = "Price per Unit";

    /// Read a record out of an arbitrary JSON value.
    ///
    /// Anything other than an object yields a record with every field missing.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.as_object().and_then(|o| o.get(key)).cloned();

        Self {
            name: field(Self::NAME_KEY),
            quantity: field(Self::QUANTITY_KEY),
            price: field(Self::PRICE_KEY),
        }
    }
}

/// The ordered product list, exactly as the service returned it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductCollection(Vec<Product>);

impl ProductCollection {
    /// Interpret a parsed response body.
    ///
    /// Returns `None` when the body is not an array (including `null`), which
    /// renders the same way as an empty list.
    pub fn from_value(value: &Value) -> Option<Self> {
        value
            .as_array()
            .map(|items| Self(items.iter().map(Product::from_value).collect()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.0.iter()
    }
}

impl From<Vec<Product>> for ProductCollection {
    fn from(products: Vec<Product>) -> Self {
        Self(products)
    }
}

impl<'a> IntoIterator for &'a ProductCollection {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
