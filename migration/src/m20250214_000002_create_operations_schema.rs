use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FarmActivities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FarmActivities::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FarmActivities::FarmPlotId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmActivities::ActivityType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmActivities::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmActivities::ActivityDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FarmActivities::Photos).json().null())
                    .col(ColumnDef::new(FarmActivities::Videos).json().null())
                    .col(
                        ColumnDef::new(FarmActivities::CreatedBy)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmActivities::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farm_activities_farm_plot_id")
                            .from(FarmActivities::Table, FarmActivities::FarmPlotId)
                            .to(FarmPlots::Table, FarmPlots::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farm_activities_created_by")
                            .from(FarmActivities::Table, FarmActivities::CreatedBy)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_farm_activities_farm_plot_id")
                    .table(FarmActivities::Table)
                    .col(FarmActivities::FarmPlotId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FinancialRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FinancialRecords::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FinancialRecords::PartnershipId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialRecords::ExpenseType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialRecords::Amount)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialRecords::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FinancialRecords::TransactionDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(FinancialRecords::ReceiptUrl).string().null())
                    .col(
                        ColumnDef::new(FinancialRecords::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_financial_records_partnership_id")
                            .from(FinancialRecords::Table, FinancialRecords::PartnershipId)
                            .to(Partnerships::Table, Partnerships::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_financial_records_partnership_id")
                    .table(FinancialRecords::Table)
                    .col(FinancialRecords::PartnershipId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InsurancePolicies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InsurancePolicies::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(InsurancePolicies::PartnershipId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InsurancePolicies::PolicyNumber)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(InsurancePolicies::CoverageAmount)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InsurancePolicies::PremiumAmount)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InsurancePolicies::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InsurancePolicies::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InsurancePolicies::CoverageDetails)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(InsurancePolicies::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(InsurancePolicies::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_insurance_policies_partnership_id")
                            .from(InsurancePolicies::Table, InsurancePolicies::PartnershipId)
                            .to(Partnerships::Table, Partnerships::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RiskAlerts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RiskAlerts::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(RiskAlerts::FarmPlotId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RiskAlerts::RiskType)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RiskAlerts::SeverityLevel)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(RiskAlerts::Title).string().not_null())
                    .col(
                        ColumnDef::new(RiskAlerts::Description)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RiskAlerts::AlertDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RiskAlerts::IsResolved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(RiskAlerts::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_risk_alerts_farm_plot_id")
                            .from(RiskAlerts::Table, RiskAlerts::FarmPlotId)
                            .to(FarmPlots::Table, FarmPlots::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_risk_alerts_farm_plot_id")
                    .table(RiskAlerts::Table)
                    .col(RiskAlerts::FarmPlotId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RiskAlerts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InsurancePolicies::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FinancialRecords::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FarmActivities::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FarmActivities {
    Table,
    Id,
    FarmPlotId,
    ActivityType,
    Description,
    ActivityDate,
    Photos,
    Videos,
    CreatedBy,
    CreatedAt,
}

#[derive(DeriveIden)]
enum FinancialRecords {
    Table,
    Id,
    PartnershipId,
    ExpenseType,
    Amount,
    Description,
    TransactionDate,
    ReceiptUrl,
    CreatedAt,
}

#[derive(DeriveIden)]
enum InsurancePolicies {
    Table,
    Id,
    PartnershipId,
    PolicyNumber,
    CoverageAmount,
    PremiumAmount,
    StartDate,
    EndDate,
    CoverageDetails,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum RiskAlerts {
    Table,
    Id,
    FarmPlotId,
    RiskType,
    SeverityLevel,
    Title,
    Description,
    AlertDate,
    IsResolved,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Partnerships {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum FarmPlots {
    Table,
    Id,
}
