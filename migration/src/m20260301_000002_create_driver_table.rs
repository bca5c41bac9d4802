use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Driver::Table)
                    .if_not_exists()
                    .col(pk_auto(Driver::Id))
                    .col(integer_uniq(Driver::UserId))
                    .col(string(Driver::LicenseNumber))
                    .col(string(Driver::City))
                    .col(double(Driver::Rating).default(0.0))
                    .col(string(Driver::ApprovalStatus).default("pending"))
                    .col(text_null(Driver::RejectionReason))
                    .col(
                        timestamp_with_time_zone(Driver::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_driver_user_id")
                            .from(Driver::Table, Driver::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_driver_city_status")
                    .table(Driver::Table)
                    .col(Driver::City)
                    .col(Driver::ApprovalStatus)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Driver::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Driver {
    Table,
    Id,
    UserId,
    LicenseNumber,
    City,
    Rating,
    ApprovalStatus,
    RejectionReason,
    CreatedAt,
}
