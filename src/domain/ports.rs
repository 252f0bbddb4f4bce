use super::record::OrderRecord;
use crate::error::Result;
use async_trait::async_trait;

/// Destination that finished orders are appended to.
#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn append(&self, record: &OrderRecord) -> Result<()>;
}

pub type OrderSinkBox = Box<dyn OrderSink>;
