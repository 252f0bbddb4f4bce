use crate::domain::ports::OrderSink;
use crate::domain::record::OrderRecord;
use crate::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;

/// Appends order records as plain-text blocks to a log file.
///
/// The file is created on first use and opened in append mode for every
/// write, then closed again. There is no locking between processes.
#[derive(Debug, Clone)]
pub struct TextFileOrderSink {
    path: PathBuf,
}

impl TextFileOrderSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl OrderSink for TextFileOrderSink {
    async fn append(&self, record: &OrderRecord) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(record.to_string().as_bytes()).await?;
        file.flush().await?;

        tracing::info!(
            path = %self.path.display(),
            items = record.lines.len(),
            total = %record.total,
            "Order appended"
        );
        Ok(())
    }
}
