use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::models::{envelope_model::parse_envelope, timestamp_model::TimestampModel},
    entities::{Campaign, CategoryId},
    errors::{InvalidJson, MissingRecordId},
};

use super::utils::{non_empty, read_payload};

#[async_trait]
pub(crate) trait CampaignsJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Vec<Campaign>, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Vec<Campaign>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCampaign {
    #[serde(alias = "_id", alias = "campaignId")]
    id: Option<String>,
    #[serde(alias = "campaignName", alias = "title")]
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    start_date: TimestampModel,
    #[serde(default)]
    end_date: TimestampModel,
    #[serde(alias = "banner", alias = "image")]
    banner_url: Option<String>,
}

pub(crate) struct CampaignsJsonDatasourceImpl;

impl CampaignsJsonDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CampaignsJsonDatasource for CampaignsJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Campaign>, ServerError> {
        let raw: Vec<RawCampaign> =
            parse_envelope(s).map_err(|e| InvalidJson::with_debug("campaign list", &e))?;
        let campaigns = raw
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                let id = non_empty(c.id).ok_or_else(|| MissingRecordId::new("Campaign", i))?;
                Ok(Campaign {
                    name: non_empty(c.name).unwrap_or_else(|| id.clone()),
                    id: CategoryId::new(id),
                    description: non_empty(c.description),
                    start_date: c.start_date.0.map(|t| t.date()),
                    end_date: c.end_date.0.map(|t| t.date()),
                    banner_url: non_empty(c.banner_url),
                })
            })
            .collect::<Result<Vec<_>, ServerError>>()?;
        debug!(count = campaigns.len(), "decoded campaign list");
        Ok(campaigns)
    }

    async fn from_file<P>(&self, path: P) -> Result<Vec<Campaign>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&read_payload(path).await?)
    }
}
