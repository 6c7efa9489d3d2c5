use iso_currency::Currency;
use num_format::{CustomFormat, Grouping, Locale, ToFormattedString as _};

use crate::entities::{BudgetTotals, InstallmentTotals, PassbookSummary};

/// Format an amount with the currency's minor-unit precision and Indian digit
/// grouping (1,00,000.00).
pub(crate) fn format_amount(amount: f64, currency: Currency) -> String {
    let decimal_places = currency.exponent().unwrap_or(0) as usize;
    let scale = 10f64.powi(decimal_places as i32);
    let minor_units = (amount.abs() * scale).round() as i64;
    let sign = if minor_units != 0 && amount < 0.0 { "-" } else { "" };
    let major = match CustomFormat::builder()
        .grouping(Grouping::Indian)
        .separator(",")
        .build()
    {
        Ok(format) => (minor_units / scale as i64).to_formatted_string(&format),
        Err(_) => (minor_units / scale as i64).to_formatted_string(&Locale::en),
    };
    if decimal_places == 0 {
        format!("{sign}{}{major}", currency.symbol())
    } else {
        let minor = minor_units % scale as i64;
        format!("{sign}{}{major}.{minor:0decimal_places$}", currency.symbol())
    }
}

fn budget_line(totals: &BudgetTotals) -> String {
    format!(
        "Budget ({}): allotted {}, used {}, remaining {}",
        totals.currency.code(),
        format_amount(totals.allotted, totals.currency),
        format_amount(totals.used, totals.currency),
        format_amount(totals.remaining, totals.currency),
    )
}

fn installment_line(totals: &InstallmentTotals) -> String {
    format!(
        "Installments ({}): paid {}, pending {}",
        totals.currency.code(),
        format_amount(totals.paid, totals.currency),
        format_amount(totals.pending, totals.currency),
    )
}

pub(crate) fn summary_lines(summary: &PassbookSummary) -> Vec<String> {
    summary
        .budgets
        .iter()
        .map(budget_line)
        .chain(summary.installments.iter().map(installment_line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_indian_grouping() {
        let rupee = Currency::INR.symbol().to_string();
        assert_eq!(
            format_amount(1_250_000.5, Currency::INR),
            format!("{rupee}12,50,000.50")
        );
        assert_eq!(format_amount(-42.0, Currency::INR), format!("-{rupee}42.00"));
        assert_eq!(format_amount(-0.001, Currency::INR), format!("{rupee}0.00"));
        assert_eq!(
            format_amount(1500.0, Currency::JPY),
            format!("{}1,500", Currency::JPY.symbol())
        );
    }

    #[test]
    fn one_line_per_currency_total() {
        let summary = PassbookSummary {
            budgets: vec![BudgetTotals {
                currency: Currency::INR,
                allotted: 1000.0,
                used: 250.0,
                remaining: 750.0,
            }],
            installments: vec![InstallmentTotals {
                currency: Currency::INR,
                paid: 250.0,
                pending: 0.0,
            }],
        };
        let r = Currency::INR.symbol().to_string();
        assert_eq!(
            summary_lines(&summary),
            vec![
                format!("Budget (INR): allotted {r}1,000.00, used {r}250.00, remaining {r}750.00"),
                format!("Installments (INR): paid {r}250.00, pending {r}0.00"),
            ]
        );
    }
}
