use sea_orm_migration::prelude::*;

// Money, area and percentage columns are stored as fixed-point decimal
// strings (TEXT); sqlite has no native decimal type and REAL would drift.

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Email)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Phone)
                            .string()
                            .null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::PasswordHash)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::FullName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::Role)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::IsVerified)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Users::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Users::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Users::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_users_email")
                    .table(Users::Table)
                    .col(Users::Email)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Partnerships::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Partnerships::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Partnerships::PartnerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Partnerships::InvestmentAmount)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Partnerships::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Partnerships::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Partnerships::EstimatedReturn)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Partnerships::CurrentProgress)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Partnerships::CurrentPhase)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Partnerships::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Partnerships::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Partnerships::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_partnerships_partner_id")
                            .from(Partnerships::Table, Partnerships::PartnerId)
                            .to(Users::Table, Users::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_partnerships_partner_id")
                    .table(Partnerships::Table)
                    .col(Partnerships::PartnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FarmPlots::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FarmPlots::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FarmPlots::PartnershipId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmPlots::PlotName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmPlots::LocationCoordinates)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmPlots::AreaHectares)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmPlots::SoilType)
                            .string()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(FarmPlots::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FarmPlots::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_farm_plots_partnership_id")
                            .from(FarmPlots::Table, FarmPlots::PartnershipId)
                            .to(Partnerships::Table, Partnerships::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_farm_plots_partnership_id")
                    .table(FarmPlots::Table)
                    .col(FarmPlots::PartnershipId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FarmPlots::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Partnerships::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Email,
    Phone,
    PasswordHash,
    FullName,
    Role,
    IsVerified,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Partnerships {
    Table,
    Id,
    PartnerId,
    InvestmentAmount,
    StartDate,
    EndDate,
    EstimatedReturn,
    CurrentProgress,
    CurrentPhase,
    Status,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum FarmPlots {
    Table,
    Id,
    PartnershipId,
    PlotName,
    LocationCoordinates,
    AreaHectares,
    SoilType,
    CreatedAt,
    UpdatedAt,
}
