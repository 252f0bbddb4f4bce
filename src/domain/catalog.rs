use super::money::Money;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use std::fmt;

pub type ProductId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ID: {}, Name: {}, Price: {}", self.id, self.name, self.price)
    }
}

/// The set of products that can be ordered.
///
/// Backed by a `BTreeMap` so iteration is always in ascending ID order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: BTreeMap<ProductId, Product>,
}

impl Catalog {
    /// The fixed five-product catalog offered at the counter.
    pub fn standard() -> Self {
        Self::from_products([
            Product::new(1, "Widget A", Money::new(dec!(25.00))),
            Product::new(2, "Widget B", Money::new(dec!(35.00))),
            Product::new(3, "Widget C", Money::new(dec!(45.00))),
            Product::new(4, "Gadget A", Money::new(dec!(55.00))),
            Product::new(5, "Gadget B", Money::new(dec!(65.00))),
        ])
    }

    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Looks up a raw user-entered identifier, rejecting negatives and unknown IDs alike.
    pub fn lookup(&self, raw_id: i64) -> Option<&Product> {
        ProductId::try_from(raw_id).ok().and_then(|id| self.get(id))
    }

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
