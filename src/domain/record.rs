use super::catalog::Catalog;
use super::customer::CustomerInfo;
use super::money::{Money, Quantity};
use super::order::{Fulfillment, OrderItems};
use crate::error::OrderError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLine {
    pub product_name: String,
    pub quantity: Quantity,
}

/// The finished order as it is written to the orders log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub customer: CustomerInfo,
    pub lines: Vec<RecordLine>,
    pub total: Money,
    pub fulfillment: Fulfillment,
}

impl OrderRecord {
    /// Resolves product names from the catalog.
    pub fn new(
        customer: CustomerInfo,
        items: &OrderItems,
        catalog: &Catalog,
        total: Money,
        fulfillment: Fulfillment,
    ) -> Result<Self, OrderError> {
        let lines = items
            .iter()
            .map(|(id, quantity)| {
                catalog
                    .get(id)
                    .map(|product| RecordLine {
                        product_name: product.name.clone(),
                        quantity,
                    })
                    .ok_or(OrderError::UnknownProduct(i64::from(id)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            customer,
            lines,
            total,
            fulfillment,
        })
    }
}

/// Renders the text block appended to the orders log, including its trailing blank line.
impl fmt::Display for OrderRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Customer: {}", self.customer.name)?;
        writeln!(f, "Phone: {}", self.customer.phone)?;
        writeln!(f, "Email: {}", self.customer.email)?;
        writeln!(f, "Ordered Items:")?;
        for line in &self.lines {
            writeln!(f, "- {}: {}", line.product_name, line.quantity)?;
        }
        writeln!(f, "Total Cost: {}", self.total)?;
        writeln!(f, "Delivery Option: {}", self.fulfillment)?;
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{EmailAddress, PhoneNumber};
    use rust_decimal_macros::dec;

    fn customer() -> CustomerInfo {
        CustomerInfo::new(
            "Jane Doe",
            PhoneNumber::parse("5551234567").unwrap(),
            EmailAddress::parse("jane@example.com").unwrap(),
        )
    }

    #[test]
    fn test_record_block_layout() {
        let catalog = Catalog::standard();
        let mut items = OrderItems::new();
        items.add(3, Quantity::new(2).unwrap()).unwrap();
        items.add(1, Quantity::new(1).unwrap()).unwrap();

        let record = OrderRecord::new(
            customer(),
            &items,
            &catalog,
            Money::new(dec!(127.6275)),
            Fulfillment::Delivery,
        )
        .unwrap();

        assert_eq!(
            record.to_string(),
            "Customer: Jane Doe\n\
             Phone: 5551234567\n\
             Email: jane@example.com\n\
             Ordered Items:\n\
             - Widget C: 2\n\
             - Widget A: 1\n\
             Total Cost: $127.63\n\
             Delivery Option: yes\n\
             \n"
        );
    }

    #[test]
    fn test_empty_order_record() {
        let record = OrderRecord::new(
            customer(),
            &OrderItems::new(),
            &Catalog::standard(),
            Money::ZERO,
            Fulfillment::Pickup,
        )
        .unwrap();

        let text = record.to_string();
        assert!(text.contains("Ordered Items:\nTotal Cost: $0.00\n"));
        assert!(text.ends_with("Delivery Option: no\n\n"));
    }
}
