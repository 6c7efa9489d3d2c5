use iso_currency::Currency;

use crate::entities::{
    BudgetTotals, CampaignBudgetEntry, Installment, InstallmentStatus, InstallmentTotals,
    PassbookSummary,
};

pub(crate) struct PassbookSummarizer<'a> {
    campaigns: &'a [CampaignBudgetEntry],
    installments: &'a [Installment],
}

impl<'a> PassbookSummarizer<'a> {
    pub(crate) fn new(
        campaigns: &'a [CampaignBudgetEntry],
        installments: &'a [Installment],
    ) -> Self {
        Self {
            campaigns,
            installments,
        }
    }

    /// Totals are kept per currency, in first-seen order.
    pub(crate) fn summarize(&self) -> PassbookSummary {
        let mut budgets: Vec<BudgetTotals> = Vec::new();
        for entry in self.campaigns {
            let totals = slot(&mut budgets, entry.currency, |t| t.currency, |currency| {
                BudgetTotals {
                    currency,
                    allotted: 0.0,
                    used: 0.0,
                    remaining: 0.0,
                }
            });
            totals.allotted += entry.allotted;
            totals.used += entry.used;
            totals.remaining += entry.remaining;
        }

        let mut installments: Vec<InstallmentTotals> = Vec::new();
        for installment in self.installments {
            let totals = slot(&mut installments, installment.currency, |t| t.currency, |currency| {
                InstallmentTotals {
                    currency,
                    paid: 0.0,
                    pending: 0.0,
                }
            });
            match installment.status {
                InstallmentStatus::Paid => totals.paid += installment.amount,
                InstallmentStatus::Pending => totals.pending += installment.amount,
                // Unrecognized statuses are neither settled nor outstanding.
                InstallmentStatus::Other(_) => {}
            }
        }

        PassbookSummary {
            budgets,
            installments,
        }
    }
}

fn slot<T>(
    totals: &mut Vec<T>,
    currency: Currency,
    key: impl Fn(&T) -> Currency,
    init: impl FnOnce(Currency) -> T,
) -> &mut T {
    let index = match totals.iter().position(|t| key(t) == currency) {
        Some(index) => index,
        None => {
            totals.push(init(currency));
            totals.len() - 1
        }
    };
    &mut totals[index]
}
