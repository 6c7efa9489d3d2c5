use iso_currency::Currency;

use super::{
    filter_criteria::FilterCriteria,
    page::{Page, PageRequest},
    passbook::{CampaignBudgetEntry, Installment},
    record::CategoryOption,
    report::Report,
};

// Queries.
// ---

#[derive(Debug, Clone)]
pub struct PassbookQuery {
    pub criteria: FilterCriteria,
    pub campaigns_page: PageRequest,
    pub installments_page: PageRequest,
}

#[derive(Debug, Clone)]
pub struct ReportsQuery {
    pub criteria: FilterCriteria,
    pub page: PageRequest,
}

// Results.
// ---

/// Budget totals for one currency, over the filtered campaign entries.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetTotals {
    pub currency: Currency,
    pub allotted: f64,
    pub used: f64,
    pub remaining: f64,
}

/// Installment totals for one currency, over the filtered installments.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallmentTotals {
    pub currency: Currency,
    pub paid: f64,
    pub pending: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PassbookSummary {
    pub budgets: Vec<BudgetTotals>,
    pub installments: Vec<InstallmentTotals>,
}

#[derive(Debug, Clone)]
pub struct PassbookView {
    pub campaigns: Page<CampaignBudgetEntry>,
    pub installments: Page<Installment>,
    pub summary: PassbookSummary,
    pub category_options: Vec<CategoryOption>,
}

#[derive(Debug, Clone)]
pub struct ReportsView {
    pub reports: Page<Report>,
    pub category_options: Vec<CategoryOption>,
}
