use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use sea_orm::ActiveEnum;

use crate::config::MarketAssumptions;
use crate::errors::InternalError;
use crate::stores::{FarmPlotStore, FinancialRecordStore};
use crate::types::db::financial_record;
use crate::types::dto::finance::FinancialSummaryResponse;
use crate::types::dto::parse_decimal;

/// Expense sums for one partnership: the grand total plus per-type subtotals.
/// Only expense types with at least one record appear in the breakdown.
pub struct ExpenseTotals {
    pub total: Decimal,
    pub breakdown: BTreeMap<String, Decimal>,
}

/// FinancialReportService derives expense and revenue figures for a
/// partnership. Read-only and idempotent: repeated calls over unchanged
/// data return identical output.
pub struct FinancialReportService {
    financial_records: Arc<FinancialRecordStore>,
    farm_plots: Arc<FarmPlotStore>,
    market: MarketAssumptions,
}

impl FinancialReportService {
    pub fn new(
        financial_records: Arc<FinancialRecordStore>,
        farm_plots: Arc<FarmPlotStore>,
        market: MarketAssumptions,
    ) -> Self {
        Self {
            financial_records,
            farm_plots,
            market,
        }
    }

    /// Total and per-type expense sums for a partnership.
    pub async fn expense_totals(
        &self,
        partnership_id: i32,
    ) -> Result<ExpenseTotals, InternalError> {
        let records = self
            .financial_records
            .list_for_partnership(partnership_id)
            .await?;

        reduce_expenses(&records)
    }

    /// Full financial summary: expense totals plus the planning-level
    /// revenue projection from total plot area and the configured market
    /// assumptions. A partnership without plots projects zero revenue.
    pub async fn summary(
        &self,
        partnership_id: i32,
    ) -> Result<FinancialSummaryResponse, InternalError> {
        let (records, plots) = tokio::try_join!(
            self.financial_records.list_for_partnership(partnership_id),
            self.farm_plots.list_for_partnership(partnership_id),
        )?;

        let totals = reduce_expenses(&records)?;

        let mut total_area = Decimal::ZERO;
        for plot in &plots {
            total_area += parse_decimal("area_hectares", &plot.area_hectares)?;
        }

        let projected_revenue = total_area * self.market.estimated_yield * self.market.market_price;

        Ok(FinancialSummaryResponse {
            total_expenses: totals.total,
            expense_breakdown: totals.breakdown,
            estimated_yield: self.market.estimated_yield,
            current_market_price: self.market.market_price,
            projected_revenue,
        })
    }
}

fn reduce_expenses(records: &[financial_record::Model]) -> Result<ExpenseTotals, InternalError> {
    let mut total = Decimal::ZERO;
    let mut breakdown: BTreeMap<String, Decimal> = BTreeMap::new();

    for record in records {
        let amount = parse_decimal("amount", &record.amount)?;
        total += amount;
        *breakdown
            .entry(record.expense_type.to_value())
            .or_insert(Decimal::ZERO) += amount;
    }

    Ok(ExpenseTotals { total, breakdown })
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::types::db::financial_record::ExpenseType;

    fn record(expense_type: ExpenseType, amount: &str) -> financial_record::Model {
        let now = Utc::now();
        financial_record::Model {
            id: 0,
            partnership_id: 1,
            expense_type,
            amount: amount.to_string(),
            description: "test".to_string(),
            transaction_date: now,
            receipt_url: None,
            created_at: now,
        }
    }

    #[test]
    fn sums_amounts_per_expense_type() {
        let records = vec![
            record(ExpenseType::Seeds, "5000"),
            record(ExpenseType::Fertilizer, "3000"),
            record(ExpenseType::Seeds, "2000"),
        ];

        let totals = reduce_expenses(&records).unwrap();

        assert_eq!(totals.total, Decimal::from(10_000));
        assert_eq!(totals.breakdown.len(), 2);
        assert_eq!(totals.breakdown["seeds"], Decimal::from(7_000));
        assert_eq!(totals.breakdown["fertilizer"], Decimal::from(3_000));
    }

    #[test]
    fn empty_ledger_reduces_to_zero() {
        let totals = reduce_expenses(&[]).unwrap();

        assert_eq!(totals.total, Decimal::ZERO);
        assert!(totals.breakdown.is_empty());
    }

    #[test]
    fn fractional_amounts_stay_exact() {
        let records = vec![
            record(ExpenseType::Labor, "0.10"),
            record(ExpenseType::Labor, "0.20"),
        ];

        let totals = reduce_expenses(&records).unwrap();

        assert_eq!(totals.breakdown["labor"], "0.30".parse::<Decimal>().unwrap());
    }

    #[test]
    fn corrupt_amount_is_a_parse_error() {
        let records = vec![record(ExpenseType::Other, "not-a-number")];

        assert!(matches!(
            reduce_expenses(&records),
            Err(InternalError::Parse { .. })
        ));
    }
}
