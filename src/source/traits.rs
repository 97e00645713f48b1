use crate::model::SourceError;

#[async_trait::async_trait]
pub trait TicketSource: Send + Sync {
    async fn fetch(&self) -> Result<String, SourceError>;
}

#[async_trait::async_trait]
pub trait ReportSink: Send + Sync {
    async fn write(&self, report: &str) -> Result<(), SourceError>;
}
