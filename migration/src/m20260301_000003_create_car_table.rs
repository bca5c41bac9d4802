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
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(integer(Car::OwnerId))
                    .col(string(Car::Name))
                    .col(string(Car::Brand))
                    .col(string(Car::Model))
                    .col(integer(Car::Year))
                    .col(string(Car::City))
                    .col(integer(Car::Seats))
                    .col(string(Car::FuelType))
                    .col(string(Car::Transmission))
                    .col(big_integer(Car::PricePerDay))
                    .col(big_integer(Car::PricePerKm))
                    .col(string_null(Car::ImageUrl))
                    .col(string(Car::ApprovalStatus).default("pending"))
                    .col(text_null(Car::RejectionReason))
                    .col(
                        timestamp_with_time_zone(Car::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Car::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(Car::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_car_owner_id")
                            .from(Car::Table, Car::OwnerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    OwnerId,
    Name,
    Brand,
    Model,
    Year,
    City,
    Seats,
    FuelType,
    Transmission,
    PricePerDay,
    PricePerKm,
    ImageUrl,
    ApprovalStatus,
    RejectionReason,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
