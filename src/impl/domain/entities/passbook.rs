use chrono::NaiveDateTime;
use iso_currency::Currency;

use super::record::{CategoryId, Record};

/// Budget allotted to the retailer for one campaign.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignBudgetEntry {
    pub id: String,
    pub campaign_id: CategoryId,
    pub campaign_name: Option<String>,
    pub allotted: f64,
    pub used: f64,
    pub remaining: f64,
    pub currency: Currency,
    pub allocated_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallmentStatus {
    Paid,
    Pending,
    /// Status text the portal does not interpret, kept verbatim.
    Other(String),
}

/// A single payout released against a campaign budget.
#[derive(Debug, Clone, PartialEq)]
pub struct Installment {
    pub id: String,
    pub campaign_id: CategoryId,
    pub number: Option<u32>,
    pub amount: f64,
    pub currency: Currency,
    pub installment_date: Option<NaiveDateTime>,
    pub status: InstallmentStatus,
}

/// Passbook as returned by the budget endpoint: both record kinds are fetched
/// together.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Passbook {
    pub campaigns: Vec<CampaignBudgetEntry>,
    pub installments: Vec<Installment>,
}

impl Record for CampaignBudgetEntry {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        self.allocated_at
    }

    fn category(&self) -> &CategoryId {
        &self.campaign_id
    }
}

impl Record for Installment {
    fn id(&self) -> &str {
        &self.id
    }

    fn timestamp(&self) -> Option<NaiveDateTime> {
        self.installment_date
    }

    fn category(&self) -> &CategoryId {
        &self.campaign_id
    }
}
