use async_trait::async_trait;
use fractic_server_error::ServerError;
use iso_currency::Currency;
use tracing::{debug, warn};

use crate::{
    data::models::{
        amount_model::AmountModel, envelope_model::parse_envelope, timestamp_model::TimestampModel,
    },
    entities::{CampaignBudgetEntry, CategoryId, Installment, InstallmentStatus, Passbook},
    errors::{InvalidIsoCurrencyCode, InvalidJson, MissingRecordId},
};

use super::utils::{non_empty, read_payload};

#[async_trait]
pub(crate) trait PassbookJsonDatasource: Send + Sync {
    fn from_string(&self, s: &str) -> Result<Passbook, ServerError>;

    async fn from_file<P>(&self, path: P) -> Result<Passbook, ServerError>
    where
        P: AsRef<std::path::Path> + Send;
}

#[derive(Debug, Default, serde_derive::Deserialize)]
#[serde(default)]
struct RawPassbook {
    #[serde(alias = "budgets")]
    campaigns: Vec<RawBudgetEntry>,
    installments: Vec<RawInstallment>,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawBudgetEntry {
    #[serde(alias = "_id")]
    id: Option<String>,
    campaign_id: Option<String>,
    campaign_name: Option<String>,
    #[serde(default, alias = "budget", alias = "totalBudget")]
    allotted_budget: AmountModel,
    #[serde(default, alias = "claimedBudget", alias = "used")]
    used_budget: AmountModel,
    #[serde(default, alias = "balance")]
    remaining_budget: Option<AmountModel>,
    currency: Option<String>,
    #[serde(default, alias = "date", alias = "createdAt")]
    allocated_at: TimestampModel,
}

#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInstallment {
    #[serde(alias = "_id")]
    id: Option<String>,
    campaign_id: Option<String>,
    #[serde(alias = "installmentNo")]
    installment_number: Option<u32>,
    #[serde(default)]
    amount: AmountModel,
    currency: Option<String>,
    #[serde(default, alias = "date", alias = "paidOn")]
    installment_date: TimestampModel,
    status: Option<String>,
}

pub(crate) struct PassbookJsonDatasourceImpl {
    default_currency: Currency,
}

impl PassbookJsonDatasourceImpl {
    pub(crate) fn new(default_currency: Currency) -> Self {
        Self { default_currency }
    }

    fn currency(&self, code: Option<String>) -> Result<Currency, ServerError> {
        match non_empty(code) {
            Some(code) => Currency::from_code(code.trim().to_uppercase().as_str())
                .ok_or_else(|| InvalidIsoCurrencyCode::new(&code)),
            None => Ok(self.default_currency),
        }
    }

    fn budget_entry(
        &self,
        i: usize,
        raw: RawBudgetEntry,
    ) -> Result<CampaignBudgetEntry, ServerError> {
        let id = non_empty(raw.id).ok_or_else(|| MissingRecordId::new("Passbook campaign", i))?;
        let allotted: f64 = raw.allotted_budget.into();
        let used: f64 = raw.used_budget.into();
        Ok(CampaignBudgetEntry {
            campaign_id: CategoryId::new(non_empty(raw.campaign_id).unwrap_or_else(|| id.clone())),
            id,
            campaign_name: non_empty(raw.campaign_name),
            allotted,
            used,
            // Older responses omit the balance; it is derived then.
            remaining: raw.remaining_budget.map_or(allotted - used, Into::into),
            currency: self.currency(raw.currency)?,
            allocated_at: raw.allocated_at.into(),
        })
    }

    fn installment(&self, i: usize, raw: RawInstallment) -> Result<Installment, ServerError> {
        let id = non_empty(raw.id).ok_or_else(|| MissingRecordId::new("Passbook installment", i))?;
        let campaign_id = non_empty(raw.campaign_id).unwrap_or_default();
        Ok(Installment {
            id,
            campaign_id: CategoryId::new(campaign_id),
            number: raw.installment_number,
            amount: raw.amount.into(),
            currency: self.currency(raw.currency)?,
            installment_date: raw.installment_date.into(),
            status: installment_status(raw.status),
        })
    }
}

fn installment_status(raw: Option<String>) -> InstallmentStatus {
    match raw.as_deref().map(str::trim) {
        Some(s) if s.eq_ignore_ascii_case("paid") || s.eq_ignore_ascii_case("credited") => {
            InstallmentStatus::Paid
        }
        Some(s) if s.is_empty() || s.eq_ignore_ascii_case("pending") => InstallmentStatus::Pending,
        None => InstallmentStatus::Pending,
        Some(s) => InstallmentStatus::Other(s.to_string()),
    }
}

#[async_trait]
impl PassbookJsonDatasource for PassbookJsonDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Passbook, ServerError> {
        let raw: RawPassbook =
            parse_envelope(s).map_err(|e| InvalidJson::with_debug("passbook", &e))?;
        let campaigns = raw
            .campaigns
            .into_iter()
            .enumerate()
            .map(|(i, r)| self.budget_entry(i, r))
            .collect::<Result<Vec<_>, ServerError>>()?;
        let installments = raw
            .installments
            .into_iter()
            .enumerate()
            .map(|(i, r)| self.installment(i, r))
            .collect::<Result<Vec<_>, ServerError>>()?;

        let undated = campaigns.iter().filter(|c| c.allocated_at.is_none()).count()
            + installments
                .iter()
                .filter(|i| i.installment_date.is_none())
                .count();
        if undated > 0 {
            warn!(undated, "passbook records without a readable date");
        }
        debug!(
            campaigns = campaigns.len(),
            installments = installments.len(),
            "decoded passbook"
        );
        Ok(Passbook {
            campaigns,
            installments,
        })
    }

    async fn from_file<P>(&self, path: P) -> Result<Passbook, ServerError>
    where
        P: AsRef<std::path::Path> + Send,
    {
        self.from_string(&read_payload(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSBOOK: &str = r#"{
        "data": {
            "campaigns": [
                {"_id": "b1", "campaignId": "c1", "campaignName": "Summer", "budget": "10,000", "usedBudget": 2500, "date": "2024-04-01"},
                {"id": "b2", "campaignId": "c2", "allottedBudget": 500, "remainingBudget": 100, "currency": "usd"}
            ],
            "installments": [
                {"id": "i1", "campaignId": "c1", "installmentNo": 1, "amount": 1250, "date": "2024-04-15", "status": "Paid"},
                {"id": "i2", "campaignId": "c1", "amount": "1,250", "status": "on hold"}
            ]
        }
    }"#;

    #[test]
    fn decodes_both_record_kinds() {
        let passbook = PassbookJsonDatasourceImpl::new(Currency::INR)
            .from_string(PASSBOOK)
            .unwrap();
        let [b1, b2] = passbook.campaigns.as_slice() else {
            panic!("expected two campaign entries");
        };
        assert_eq!(b1.allotted, 10_000.0);
        assert_eq!(b1.remaining, 7_500.0);
        assert_eq!(b1.currency, Currency::INR);
        assert!(b1.allocated_at.is_some());
        assert_eq!(b2.remaining, 100.0);
        assert_eq!(b2.currency, Currency::USD);
        assert_eq!(b2.allocated_at, None);

        assert_eq!(passbook.installments[0].status, InstallmentStatus::Paid);
        assert_eq!(passbook.installments[0].number, Some(1));
        assert_eq!(
            passbook.installments[1].status,
            InstallmentStatus::Other("on hold".to_string())
        );
        assert_eq!(passbook.installments[1].amount, 1250.0);
    }

    #[test]
    fn missing_sections_are_empty() {
        let passbook = PassbookJsonDatasourceImpl::new(Currency::INR)
            .from_string(r#"{"installments": []}"#)
            .unwrap();
        assert!(passbook.campaigns.is_empty());
    }

    #[test]
    fn unknown_currency_is_rejected() {
        let json = r#"{"campaigns": [{"id": "b1", "currency": "XYZ1"}]}"#;
        assert!(PassbookJsonDatasourceImpl::new(Currency::INR)
            .from_string(json)
            .is_err());
    }

    #[test]
    fn malformed_wrapped_passbook_is_rejected() {
        let ds = PassbookJsonDatasourceImpl::new(Currency::INR);
        let bad_installment_no = r#"{"success": true, "data": {
            "installments": [{"id": "i1", "installmentNo": "1"}]
        }}"#;
        assert!(ds.from_string(bad_installment_no).is_err());
        let bad_amount = r#"{"success": true, "data": {
            "campaigns": [{"id": "b1", "budget": "twelve"}]
        }}"#;
        assert!(ds.from_string(bad_amount).is_err());
    }
}
