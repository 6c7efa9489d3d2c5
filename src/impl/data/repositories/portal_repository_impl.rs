use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::{
        campaigns_json_datasource::{CampaignsJsonDatasource, CampaignsJsonDatasourceImpl},
        passbook_json_datasource::{PassbookJsonDatasource, PassbookJsonDatasourceImpl},
        profile_json_datasource::{ProfileJsonDatasource, ProfileJsonDatasourceImpl},
        reports_json_datasource::{ReportsJsonDatasource, ReportsJsonDatasourceImpl},
    },
    domain::repositories::portal_repository::PortalRepository,
    entities::{Campaign, Passbook, PortalConfig, Report, RetailerProfile},
};

pub(crate) type JsonPortalRepository = PortalRepositoryImpl<
    ProfileJsonDatasourceImpl,
    CampaignsJsonDatasourceImpl,
    PassbookJsonDatasourceImpl,
    ReportsJsonDatasourceImpl,
>;

pub(crate) struct PortalRepositoryImpl<DS1, DS2, DS3, DS4>
where
    DS1: ProfileJsonDatasource,
    DS2: CampaignsJsonDatasource,
    DS3: PassbookJsonDatasource,
    DS4: ReportsJsonDatasource,
{
    profile_datasource: DS1,
    campaigns_datasource: DS2,
    passbook_datasource: DS3,
    reports_datasource: DS4,
}

#[async_trait]
impl<DS1, DS2, DS3, DS4> PortalRepository for PortalRepositoryImpl<DS1, DS2, DS3, DS4>
where
    DS1: ProfileJsonDatasource,
    DS2: CampaignsJsonDatasource,
    DS3: PassbookJsonDatasource,
    DS4: ReportsJsonDatasource,
{
    fn profile_from_string(&self, profile_json: &str) -> Result<RetailerProfile, ServerError> {
        self.profile_datasource.from_string(profile_json)
    }

    async fn profile_from_file<P>(&self, profile_json: P) -> Result<RetailerProfile, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.profile_datasource.from_file(profile_json).await
    }

    fn campaigns_from_string(&self, campaigns_json: &str) -> Result<Vec<Campaign>, ServerError> {
        self.campaigns_datasource.from_string(campaigns_json)
    }

    async fn campaigns_from_file<P>(&self, campaigns_json: P) -> Result<Vec<Campaign>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.campaigns_datasource.from_file(campaigns_json).await
    }

    fn passbook_from_string(&self, passbook_json: &str) -> Result<Passbook, ServerError> {
        self.passbook_datasource.from_string(passbook_json)
    }

    async fn passbook_from_file<P>(&self, passbook_json: P) -> Result<Passbook, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.passbook_datasource.from_file(passbook_json).await
    }

    fn reports_from_string(&self, reports_json: &str) -> Result<Vec<Report>, ServerError> {
        self.reports_datasource.from_string(reports_json)
    }

    async fn reports_from_file<P>(&self, reports_json: P) -> Result<Vec<Report>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.reports_datasource.from_file(reports_json).await
    }
}

impl JsonPortalRepository {
    pub(crate) fn new(config: &PortalConfig) -> Result<Self, ServerError> {
        Ok(PortalRepositoryImpl {
            profile_datasource: ProfileJsonDatasourceImpl::new(
                config.decode_double_encoded_images,
            ),
            campaigns_datasource: CampaignsJsonDatasourceImpl::new(),
            passbook_datasource: PassbookJsonDatasourceImpl::new(config.default_currency()?),
            reports_datasource: ReportsJsonDatasourceImpl::new(),
        })
    }
}
