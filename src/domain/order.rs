use super::catalog::{Catalog, ProductId};
use super::money::{Money, Quantity};
use crate::error::OrderError;
use std::fmt;

/// Quantities accumulated per product while the order is being entered.
///
/// Each product appears at most once. Adding a product that is already
/// present increases its quantity. Lines keep the order in which each
/// product was first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderItems {
    lines: Vec<(ProductId, Quantity)>,
}

impl OrderItems {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `product_id`, returning the new running quantity.
    pub fn add(&mut self, product_id: ProductId, quantity: Quantity) -> Result<Quantity, OrderError> {
        match self.lines.iter_mut().find(|(id, _)| *id == product_id) {
            Some((_, existing)) => {
                let updated = existing.checked_add(quantity).ok_or_else(|| {
                    OrderError::ValidationError("Quantity is too large.".to_string())
                })?;
                *existing = updated;
                Ok(updated)
            }
            None => {
                self.lines.push((product_id, quantity));
                Ok(quantity)
            }
        }
    }

    pub fn quantity_of(&self, product_id: ProductId) -> Option<Quantity> {
        self.lines
            .iter()
            .find(|(id, _)| *id == product_id)
            .map(|(_, qty)| *qty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductId, Quantity)> + '_ {
        self.lines.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of unit price times quantity over every line.
    pub fn subtotal(&self, catalog: &Catalog) -> Result<Money, OrderError> {
        self.lines
            .iter()
            .map(|(id, qty)| {
                catalog
                    .get(*id)
                    .map(|product| product.price * *qty)
                    .ok_or(OrderError::UnknownProduct(i64::from(*id)))
            })
            .sum()
    }
}

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fulfillment {
    Delivery,
    Pickup,
}

impl Fulfillment {
    /// Parses the answer to "delivery (yes) or pickup (no)", ignoring case and surrounding whitespace.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "yes" => Some(Self::Delivery),
            "no" => Some(Self::Pickup),
            _ => None,
        }
    }

    pub fn is_delivery(&self) -> bool {
        matches!(self, Self::Delivery)
    }
}

impl fmt::Display for Fulfillment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delivery => f.write_str("yes"),
            Self::Pickup => f.write_str("no"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn qty(n: u32) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn test_repeated_product_accumulates() {
        let mut items = OrderItems::new();
        items.add(2, qty(2)).unwrap();
        let running = items.add(2, qty(3)).unwrap();

        assert_eq!(running, qty(5));
        assert_eq!(items.quantity_of(2), Some(qty(5)));
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_lines_keep_first_insertion_order() {
        let mut items = OrderItems::new();
        items.add(4, qty(1)).unwrap();
        items.add(1, qty(1)).unwrap();
        items.add(4, qty(2)).unwrap();

        let order: Vec<ProductId> = items.iter().map(|(id, _)| id).collect();
        assert_eq!(order, vec![4, 1]);
    }

    #[test]
    fn test_overflowing_accumulation_is_rejected() {
        let mut items = OrderItems::new();
        items.add(1, qty(u32::MAX)).unwrap();
        assert!(matches!(
            items.add(1, qty(1)),
            Err(OrderError::ValidationError(_))
        ));
        assert_eq!(items.quantity_of(1), Some(qty(u32::MAX)));
    }

    #[test]
    fn test_subtotal() {
        let catalog = Catalog::standard();
        let mut items = OrderItems::new();
        items.add(1, qty(2)).unwrap(); // 2 x 25.00
        items.add(5, qty(1)).unwrap(); // 1 x 65.00
        assert_eq!(items.subtotal(&catalog).unwrap(), Money::new(dec!(115.00)));
    }

    #[test]
    fn test_empty_subtotal_is_zero() {
        let catalog = Catalog::standard();
        assert_eq!(OrderItems::new().subtotal(&catalog).unwrap(), Money::ZERO);
    }

    #[test]
    fn test_subtotal_with_unknown_product() {
        let catalog = Catalog::standard();
        let mut items = OrderItems::new();
        items.add(42, qty(1)).unwrap();
        assert!(matches!(
            items.subtotal(&catalog),
            Err(OrderError::UnknownProduct(42))
        ));
    }

    #[test]
    fn test_fulfillment_answers() {
        assert_eq!(Fulfillment::from_answer("yes"), Some(Fulfillment::Delivery));
        assert_eq!(Fulfillment::from_answer("  YES "), Some(Fulfillment::Delivery));
        assert_eq!(Fulfillment::from_answer("No"), Some(Fulfillment::Pickup));
        assert_eq!(Fulfillment::from_answer("y"), None);
        assert_eq!(Fulfillment::from_answer(""), None);
        assert_eq!(Fulfillment::Delivery.to_string(), "yes");
        assert_eq!(Fulfillment::Pickup.to_string(), "no");
    }
}
