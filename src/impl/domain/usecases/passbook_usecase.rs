use async_trait::async_trait;
use fractic_server_error::ServerError;
use tracing::debug;

use crate::{
    data::repositories::portal_repository_impl::JsonPortalRepository,
    domain::{
        logic::{passbook_summary::PassbookSummarizer, pagination_slicer::paginate, record_view},
        repositories::portal_repository::PortalRepository,
    },
    entities::{Campaign, Passbook, PassbookQuery, PassbookView, PortalConfig},
};

#[async_trait]
pub trait PassbookUsecase: Send + Sync {
    /// Projects the passbook through `query`. The campaign list, when given,
    /// supplies labels for the category selector.
    fn view_from_string(
        &self,
        passbook_json: &str,
        campaigns_json: Option<&str>,
        query: &PassbookQuery,
    ) -> Result<PassbookView, ServerError>;

    async fn view_from_file<P>(
        &self,
        passbook_json: P,
        campaigns_json: Option<P>,
        query: &PassbookQuery,
    ) -> Result<PassbookView, ServerError>
    where
        P: AsRef<std::path::Path> + Send;

    fn campaigns_from_string(&self, campaigns_json: &str) -> Result<Vec<Campaign>, ServerError>;

    async fn campaigns_from_file<P>(&self, campaigns_json: P) -> Result<Vec<Campaign>, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

pub(crate) struct PassbookUsecaseImpl<
    R1 = JsonPortalRepository, // Default.
> where
    R1: PortalRepository,
{
    portal_repository: R1,
}

impl<R1: PortalRepository> PassbookUsecaseImpl<R1> {
    fn project(
        &self,
        passbook: Passbook,
        campaigns: &[Campaign],
        query: &PassbookQuery,
    ) -> PassbookView {
        let category_options =
            record_view::category_options(&passbook.campaigns, campaigns, |entry| {
                entry.campaign_name.clone()
            });
        let campaign_entries = query.criteria.filter_owned(passbook.campaigns);
        let installments = query.criteria.filter_owned(passbook.installments);
        let summary = PassbookSummarizer::new(&campaign_entries, &installments).summarize();
        debug!(
            campaigns = campaign_entries.len(),
            installments = installments.len(),
            "projected passbook"
        );
        PassbookView {
            campaigns: paginate(campaign_entries, query.campaigns_page),
            installments: paginate(installments, query.installments_page),
            summary,
            category_options,
        }
    }
}

#[async_trait]
impl<R1: PortalRepository> PassbookUsecase for PassbookUsecaseImpl<R1> {
    fn view_from_string(
        &self,
        passbook_json: &str,
        campaigns_json: Option<&str>,
        query: &PassbookQuery,
    ) -> Result<PassbookView, ServerError> {
        let campaigns = campaigns_json
            .map(|json| self.portal_repository.campaigns_from_string(json))
            .transpose()?
            .unwrap_or_default();
        let passbook = self.portal_repository.passbook_from_string(passbook_json)?;
        Ok(self.project(passbook, &campaigns, query))
    }

    async fn view_from_file<P>(
        &self,
        passbook_json: P,
        campaigns_json: Option<P>,
        query: &PassbookQuery,
    ) -> Result<PassbookView, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        let campaigns = match campaigns_json {
            Some(path) => self.portal_repository.campaigns_from_file(path).await?,
            None => Vec::new(),
        };
        let passbook = self.portal_repository.passbook_from_file(passbook_json).await?;
        Ok(self.project(passbook, &campaigns, query))
    }

    fn campaigns_from_string(&self, campaigns_json: &str) -> Result<Vec<Campaign>, ServerError> {
        self.portal_repository.campaigns_from_string(campaigns_json)
    }

    async fn campaigns_from_file<P>(&self, campaigns_json: P) -> Result<Vec<Campaign>, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.portal_repository.campaigns_from_file(campaigns_json).await
    }
}

impl PassbookUsecaseImpl {
    pub(crate) fn new(config: &PortalConfig) -> Result<Self, ServerError> {
        Ok(PassbookUsecaseImpl {
            portal_repository: JsonPortalRepository::new(config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{CategoryId, DateRange, FilterCriteria, PageRequest};

    const CAMPAIGNS: &str = r#"[
        {"id": "c1", "name": "Summer sale"},
        {"id": "c2", "name": "Festive push"}
    ]"#;

    const PASSBOOK: &str = r#"{
        "campaigns": [
            {"id": "b1", "campaignId": "c1", "allottedBudget": 1000, "usedBudget": 400, "date": "2024-04-01"},
            {"id": "b2", "campaignId": "c2", "allottedBudget": 2000, "usedBudget": 0, "date": "2024-05-01"},
            {"id": "b3", "campaignId": "c1", "allottedBudget": 500, "usedBudget": 500, "date": "2024-06-01"}
        ],
        "installments": [
            {"id": "i1", "campaignId": "c1", "amount": 200, "date": "2024-04-10", "status": "paid"},
            {"id": "i2", "campaignId": "c1", "amount": 200, "date": "2024-05-10", "status": "pending"},
            {"id": "i3", "campaignId": "c2", "amount": 900, "date": "2024-05-12", "status": "paid"}
        ]
    }"#;

    fn query(criteria: FilterCriteria) -> PassbookQuery {
        PassbookQuery {
            criteria,
            campaigns_page: PageRequest::first(10).unwrap(),
            installments_page: PageRequest::first(1).unwrap(),
        }
    }

    #[test]
    fn unfiltered_view_covers_everything() {
        let usecase = PassbookUsecaseImpl::new(&PortalConfig::default()).unwrap();
        let view = usecase
            .view_from_string(PASSBOOK, Some(CAMPAIGNS), &query(FilterCriteria::new()))
            .unwrap();
        assert_eq!(view.campaigns.total_count, 3);
        assert_eq!(view.installments.total_pages, 3);
        assert_eq!(view.installments.items.len(), 1);
        let labels: Vec<&str> = view
            .category_options
            .iter()
            .map(|o| o.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Summer sale", "Festive push"]);
        assert_eq!(view.summary.budgets[0].allotted, 3500.0);
    }

    #[test]
    fn filtered_view_restricts_records_and_summary() {
        let usecase = PassbookUsecaseImpl::new(&PortalConfig::default()).unwrap();
        let criteria = FilterCriteria::new()
            .with_category(CategoryId::new("c1"))
            .with_date_range(DateRange::days(
                NaiveDate::from_ymd_opt(2024, 4, 1),
                NaiveDate::from_ymd_opt(2024, 5, 31),
            ));
        let view = usecase
            .view_from_string(PASSBOOK, None, &query(criteria))
            .unwrap();
        let ids: Vec<&str> = view.campaigns.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b1"]);
        assert_eq!(view.installments.total_count, 2);
        assert_eq!(view.summary.installments[0].paid, 200.0);
        assert_eq!(view.summary.installments[0].pending, 200.0);
        // Options always list every category in the passbook.
        assert_eq!(view.category_options.len(), 2);
        assert_eq!(view.category_options[0].label, "c1");
    }

    #[tokio::test]
    async fn view_from_files() {
        let dir = std::env::temp_dir();
        let passbook_path = dir.join("fractic_retailer_portal_passbook_uc.json");
        let campaigns_path = dir.join("fractic_retailer_portal_campaigns_uc.json");
        tokio::fs::write(&passbook_path, PASSBOOK).await.unwrap();
        tokio::fs::write(&campaigns_path, CAMPAIGNS).await.unwrap();
        let usecase = PassbookUsecaseImpl::new(&PortalConfig::default()).unwrap();
        let view = usecase
            .view_from_file(
                &passbook_path,
                Some(&campaigns_path),
                &query(FilterCriteria::new()),
            )
            .await
            .unwrap();
        assert_eq!(view.campaigns.total_count, 3);
        assert_eq!(view.category_options[1].label, "Festive push");
    }
}
