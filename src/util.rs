use fractic_server_error::ServerError;
use tracing::info;

use crate::{
    data::datasources::config_ron_datasource::{ConfigRonDatasource as _, ConfigRonDatasourceImpl},
    domain::usecases::{
        passbook_usecase::{PassbookUsecase as _, PassbookUsecaseImpl},
        profile_usecase::{ProfileUsecase as _, ProfileUsecaseImpl},
        reports_usecase::{ReportsUsecase as _, ReportsUsecaseImpl},
    },
    entities::{
        Campaign, Page, PageRequest, PassbookQuery, PassbookSummary, PassbookView, PortalConfig,
        Report, ReportsQuery, ReportsView, RetailerProfile,
    },
    presentation::{amount_fmt::summary_lines, page_fmt::page_caption},
};

/// Entry point for decoding retailer portal API payloads and projecting
/// filtered, paginated views over them.
pub struct RetailerPortalUtil {
    config: PortalConfig,
    passbook_usecase: PassbookUsecaseImpl,
    reports_usecase: ReportsUsecaseImpl,
    profile_usecase: ProfileUsecaseImpl,
}

impl RetailerPortalUtil {
    pub fn new() -> Result<Self, ServerError> {
        Self::with_config(PortalConfig::default())
    }

    pub fn with_config(config: PortalConfig) -> Result<Self, ServerError> {
        info!(
            default_page_size = config.default_page_size,
            default_currency = %config.default_currency,
            decode_double_encoded_images = config.decode_double_encoded_images,
            "initializing retailer portal util"
        );
        Ok(Self {
            passbook_usecase: PassbookUsecaseImpl::new(&config)?,
            reports_usecase: ReportsUsecaseImpl::new(&config)?,
            profile_usecase: ProfileUsecaseImpl::new(&config)?,
            config,
        })
    }

    pub fn from_ron_config(config_ron: &str) -> Result<Self, ServerError> {
        Self::with_config(ConfigRonDatasourceImpl::new().from_string(config_ron)?)
    }

    pub async fn from_ron_config_file<T>(config_ron: T) -> Result<Self, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        Self::with_config(ConfigRonDatasourceImpl::new().from_file(config_ron).await?)
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    /// Page request using the configured default page size.
    pub fn page_request(&self, page: usize) -> Result<PageRequest, ServerError> {
        PageRequest::new(self.config.default_page_size, page)
    }

    // Retailer profile.
    // ---

    pub fn profile_from_string(&self, profile_json: &str) -> Result<RetailerProfile, ServerError> {
        self.profile_usecase.from_string(profile_json)
    }

    pub async fn profile_from_file<T>(
        &self,
        profile_json: T,
    ) -> Result<RetailerProfile, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.profile_usecase.from_file(profile_json).await
    }

    // Campaigns and passbook.
    // ---

    pub fn campaigns_from_string(
        &self,
        campaigns_json: &str,
    ) -> Result<Vec<Campaign>, ServerError> {
        self.passbook_usecase.campaigns_from_string(campaigns_json)
    }

    pub async fn campaigns_from_file<T>(
        &self,
        campaigns_json: T,
    ) -> Result<Vec<Campaign>, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.passbook_usecase.campaigns_from_file(campaigns_json).await
    }

    pub fn passbook_from_string(
        &self,
        passbook_json: &str,
        campaigns_json: Option<&str>,
        query: &PassbookQuery,
    ) -> Result<PassbookView, ServerError> {
        self.passbook_usecase
            .view_from_string(passbook_json, campaigns_json, query)
    }

    pub async fn passbook_from_file<T>(
        &self,
        passbook_json: T,
        campaigns_json: Option<T>,
        query: &PassbookQuery,
    ) -> Result<PassbookView, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.passbook_usecase
            .view_from_file(passbook_json, campaigns_json, query)
            .await
    }

    // Reports.
    // ---

    pub fn reports_from_string(
        &self,
        reports_json: &str,
        query: &ReportsQuery,
    ) -> Result<ReportsView, ServerError> {
        self.reports_usecase.list_from_string(reports_json, query)
    }

    pub async fn reports_from_file<T>(
        &self,
        reports_json: T,
        query: &ReportsQuery,
    ) -> Result<ReportsView, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.reports_usecase.list_from_file(reports_json, query).await
    }

    pub fn report_from_string(&self, reports_json: &str, id: &str) -> Result<Report, ServerError> {
        self.reports_usecase.detail_from_string(reports_json, id)
    }

    pub async fn report_from_file<T>(
        &self,
        reports_json: T,
        id: &str,
    ) -> Result<Report, ServerError>
    where
        T: AsRef<std::path::Path> + Send,
    {
        self.reports_usecase.detail_from_file(reports_json, id).await
    }

    // Presentation.
    // ---

    /// One-line caption such as "Page 2 of 3 (25 records)".
    pub fn describe_page<U>(&self, page: &Page<U>) -> String {
        page_caption(page)
    }

    /// Human-readable totals, one line per currency and record kind.
    pub fn describe_summary(&self, summary: &PassbookSummary) -> Vec<String> {
        summary_lines(summary)
    }
}
