use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{Campaign, Passbook, Report, RetailerProfile};

/// Read-only access to the portal's API payloads, already decoded into
/// records.
#[async_trait]
pub trait PortalRepository: Send + Sync {
    fn profile_from_string(&self, profile_json: &str) -> Result<RetailerProfile, ServerError>;

    async fn profile_from_file<P>(&self, profile_json: P) -> Result<RetailerProfile, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn campaigns_from_string(&self, campaigns_json: &str) -> Result<Vec<Campaign>, ServerError>;

    async fn campaigns_from_file<P>(&self, campaigns_json: P) -> Result<Vec<Campaign>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn passbook_from_string(&self, passbook_json: &str) -> Result<Passbook, ServerError>;

    async fn passbook_from_file<P>(&self, passbook_json: P) -> Result<Passbook, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn reports_from_string(&self, reports_json: &str) -> Result<Vec<Report>, ServerError>;

    async fn reports_from_file<P>(&self, reports_json: P) -> Result<Vec<Report>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}
