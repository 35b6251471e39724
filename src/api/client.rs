use super::error::ClientError;
use super::models::Record;
use async_trait::async_trait;

/// The operations a zone-management backend offers for ACME-style TXT
/// challenges.
#[async_trait]
pub trait DnsZoneApi: Send + Sync {
    async fn list_records(&self) -> Result<Vec<Record>, ClientError>;
    async fn create_txt_record(&self, name: &str, value: &str) -> Result<(), ClientError>;
    async fn delete_txt_record(&self, name: &str, value: &str) -> Result<(), ClientError>;
}
