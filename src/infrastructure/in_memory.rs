use crate::domain::ports::OrderSink;
use crate::domain::record::OrderRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory order sink.
///
/// Clones share the same underlying list, so a test can keep one handle and
/// hand another to the session.
#[derive(Default, Clone)]
pub struct InMemoryOrderSink {
    records: Arc<RwLock<Vec<OrderRecord>>>,
}

impl InMemoryOrderSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every record appended so far, oldest first.
    pub async fn records(&self) -> Vec<OrderRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl OrderSink for InMemoryOrderSink {
    async fn append(&self, record: &OrderRecord) -> Result<()> {
        let mut records = self.records.write().await;
        records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;
    use crate::domain::customer::{CustomerInfo, EmailAddress, PhoneNumber};
    use crate::domain::money::Money;
    use crate::domain::order::{Fulfillment, OrderItems};

    #[tokio::test]
    async fn test_in_memory_sink_keeps_order() {
        let sink = InMemoryOrderSink::new();
        let handle = sink.clone();

        for name in ["first", "second"] {
            let customer = CustomerInfo::new(
                name,
                PhoneNumber::parse("5551234567").unwrap(),
                EmailAddress::parse("a@b.cd").unwrap(),
            );
            let record = OrderRecord::new(
                customer,
                &OrderItems::new(),
                &Catalog::standard(),
                Money::ZERO,
                Fulfillment::Pickup,
            )
            .unwrap();
            sink.append(&record).await.unwrap();
        }

        let records = handle.records().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].customer.name, "first");
        assert_eq!(records[1].customer.name, "second");
    }
}
