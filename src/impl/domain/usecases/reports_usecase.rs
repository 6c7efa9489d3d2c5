use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::repositories::portal_repository_impl::JsonPortalRepository,
    domain::{logic::record_view, repositories::portal_repository::PortalRepository},
    entities::{PortalConfig, Report, ReportsQuery, ReportsView},
    errors::ReportNotFound,
};

#[async_trait]
pub trait ReportsUsecase: Send + Sync {
    fn list_from_string(
        &self,
        reports_json: &str,
        query: &ReportsQuery,
    ) -> Result<ReportsView, ServerError>;

    async fn list_from_file<P>(
        &self,
        reports_json: P,
        query: &ReportsQuery,
    ) -> Result<ReportsView, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn detail_from_string(&self, reports_json: &str, id: &str) -> Result<Report, ServerError>;

    async fn detail_from_file<P>(&self, reports_json: P, id: &str) -> Result<Report, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct ReportsUsecaseImpl<
    R1 = JsonPortalRepository, // Default.
> where
    R1: PortalRepository,
{
    portal_repository: R1,
}

fn list(reports: Vec<Report>, query: &ReportsQuery) -> ReportsView {
    let category_options = record_view::category_options(&reports, &[], |_| None);
    let reports = record_view::project(reports, &query.criteria, query.page);
    debug!(
        matching = reports.total_count,
        page = reports.current_page,
        "projected report list"
    );
    ReportsView {
        reports,
        category_options,
    }
}

fn find(reports: Vec<Report>, id: &str) -> Result<Report, ServerError> {
    reports
        .into_iter()
        .find(|r| r.id == id)
        .ok_or_else(|| ReportNotFound::new(id))
}

#[async_trait]
impl<R1: PortalRepository> ReportsUsecase for ReportsUsecaseImpl<R1> {
    fn list_from_string(
        &self,
        reports_json: &str,
        query: &ReportsQuery,
    ) -> Result<ReportsView, ServerError> {
        Ok(list(
            self.portal_repository.reports_from_string(reports_json)?,
            query,
        ))
    }

    async fn list_from_file<P>(
        &self,
        reports_json: P,
        query: &ReportsQuery,
    ) -> Result<ReportsView, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        Ok(list(
            self.portal_repository.reports_from_file(reports_json).await?,
            query,
        ))
    }

    fn detail_from_string(&self, reports_json: &str, id: &str) -> Result<Report, ServerError> {
        find(self.portal_repository.reports_from_string(reports_json)?, id)
    }

    async fn detail_from_file<P>(&self, reports_json: P, id: &str) -> Result<Report, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        find(self.portal_repository.reports_from_file(reports_json).await?, id)
    }
}

impl ReportsUsecaseImpl {
    pub(crate) fn new(config: &PortalConfig) -> Result<Self, ServerError> {
        Ok(ReportsUsecaseImpl {
            portal_repository: JsonPortalRepository::new(config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{CategoryId, DateRange, FilterCriteria, PageRequest};

    fn reports_json(n: usize) -> String {
        let items: Vec<String> = (1..=n)
            .map(|i| {
                format!(
                    r#"{{"id": "r{i}", "type": "{}", "submittedAt": "2024-03-{:02}T10:00:00"}}"#,
                    if i % 3 == 0 { "audit" } else { "visit" },
                    i
                )
            })
            .collect();
        format!(r#"{{"data": [{}]}}"#, items.join(","))
    }

    fn query(criteria: FilterCriteria, limit: usize, page: usize) -> ReportsQuery {
        ReportsQuery {
            criteria,
            page: PageRequest::new(limit, page).unwrap(),
        }
    }

    #[test]
    fn lists_pages_of_25_reports() {
        let usecase = ReportsUsecaseImpl::new(&PortalConfig::default()).unwrap();
        let json = reports_json(25);

        let first = usecase
            .list_from_string(&json, &query(FilterCriteria::new(), 10, 1))
            .unwrap();
        assert_eq!(first.reports.items.len(), 10);
        assert_eq!(first.reports.total_pages, 3);
        assert_eq!(first.category_options.len(), 2);

        let beyond = usecase
            .list_from_string(&json, &query(FilterCriteria::new(), 10, 4))
            .unwrap();
        assert!(beyond.reports.items.is_empty());
    }

    #[test]
    fn filters_by_type_and_day() {
        let usecase = ReportsUsecaseImpl::new(&PortalConfig::default()).unwrap();
        let criteria = FilterCriteria::new()
            .with_category(CategoryId::new("audit"))
            .with_date_range(DateRange::days(
                NaiveDate::from_ymd_opt(2024, 3, 6),
                NaiveDate::from_ymd_opt(2024, 3, 12),
            ));
        let view = usecase
            .list_from_string(&reports_json(25), &query(criteria, 10, 1))
            .unwrap();
        let ids: Vec<&str> = view.reports.items.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r6", "r9", "r12"]);
    }

    #[test]
    fn detail_lookup() {
        let usecase = ReportsUsecaseImpl::new(&PortalConfig::default()).unwrap();
        let json = reports_json(3);
        assert_eq!(usecase.detail_from_string(&json, "r2").unwrap().id, "r2");
        assert!(usecase.detail_from_string(&json, "r99").is_err());
    }
}
