use async_trait::async_trait;
use fractic_server_error::ServerError;
use ron::from_str;

use crate::{entities::PortalConfig, errors::{InvalidConfig, InvalidRon}};

use super::utils::read_payload;

#[async_trait]
pub(crate) trait ConfigRonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<PortalConfig, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<PortalConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ConfigRonDatasourceImpl;

impl ConfigRonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ConfigRonDatasource for ConfigRonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<PortalConfig, ServerError> {
        let config: PortalConfig =
            from_str(s).map_err(|e| InvalidRon::with_debug("PortalConfig", &e))?;
        config.default_currency()?;
        if config.default_page_size == 0 {
            return Err(InvalidConfig::new("default_page_size must be at least 1"));
        }
        Ok(config)
    }

    async fn from_file<P>(&self, path: P) -> Result<PortalConfig, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&read_payload(path).await?)
    }
}
