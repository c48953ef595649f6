mod common;

use agripartner_backend::types::db::financial_record::ExpenseType;
use rust_decimal::Decimal;

#[tokio::test]
async fn breakdown_sums_amounts_per_expense_type() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;

    common::record_expense(&app, partnership.id, ExpenseType::Seeds, "5000").await;
    common::record_expense(&app, partnership.id, ExpenseType::Fertilizer, "3000").await;
    common::record_expense(&app, partnership.id, ExpenseType::Seeds, "2000").await;

    let summary = app.financial_reports.summary(partnership.id).await.unwrap();

    assert_eq!(summary.total_expenses, Decimal::from(10_000));
    assert_eq!(summary.expense_breakdown.len(), 2);
    assert_eq!(summary.expense_breakdown["seeds"], Decimal::from(7_000));
    assert_eq!(summary.expense_breakdown["fertilizer"], Decimal::from(3_000));
}

#[tokio::test]
async fn projected_revenue_is_area_times_yield_times_price() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;

    common::create_plot(&app, partnership.id, "2.5").await;
    common::create_plot(&app, partnership.id, "1.5").await;

    let summary = app.financial_reports.summary(partnership.id).await.unwrap();

    // 4 ha x 5 t/ha x 12 000 per ton
    assert_eq!(summary.estimated_yield, Decimal::from(5));
    assert_eq!(summary.current_market_price, Decimal::from(12_000));
    assert_eq!(summary.projected_revenue, Decimal::from(240_000));
}

#[tokio::test]
async fn summary_is_idempotent() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;

    common::create_plot(&app, partnership.id, "3.75").await;
    common::record_expense(&app, partnership.id, ExpenseType::Labor, "1234.56").await;

    let first = app.financial_reports.summary(partnership.id).await.unwrap();
    let second = app.financial_reports.summary(partnership.id).await.unwrap();

    assert_eq!(first.total_expenses, second.total_expenses);
    assert_eq!(first.expense_breakdown, second.expense_breakdown);
    assert_eq!(first.projected_revenue, second.projected_revenue);
}

#[tokio::test]
async fn partnership_without_records_or_plots_summarizes_to_zero() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;

    let summary = app.financial_reports.summary(partnership.id).await.unwrap();

    assert_eq!(summary.total_expenses, Decimal::ZERO);
    assert!(summary.expense_breakdown.is_empty());
    assert_eq!(summary.projected_revenue, Decimal::ZERO);
}

#[tokio::test]
async fn decimal_amounts_sum_without_drift() {
    let app = common::setup_app().await;
    let partner = common::create_partner(&app, "partner@example.com").await;
    let partnership = common::create_partnership(&app, partner.id).await;

    common::record_expense(&app, partnership.id, ExpenseType::Other, "0.10").await;
    common::record_expense(&app, partnership.id, ExpenseType::Other, "0.20").await;

    let summary = app.financial_reports.summary(partnership.id).await.unwrap();

    assert_eq!(
        summary.total_expenses,
        "0.30".parse::<Decimal>().unwrap()
    );
}
