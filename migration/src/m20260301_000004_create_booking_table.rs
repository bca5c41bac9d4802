use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_driver_table::Driver,
    m20260301_000003_create_car_table::Car,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(pk_auto(Booking::Id))
                    .col(integer(Booking::CustomerId))
                    .col(integer(Booking::CarId))
                    .col(integer_null(Booking::DriverId))
                    .col(timestamp_with_time_zone(Booking::StartDate))
                    .col(timestamp_with_time_zone(Booking::EndDate))
                    .col(string(Booking::PricingMode))
                    .col(boolean(Booking::Ac).default(false))
                    .col(double(Booking::PickupLat))
                    .col(double(Booking::PickupLng))
                    .col(string_null(Booking::PickupAddress))
                    .col(double(Booking::DropLat))
                    .col(double(Booking::DropLng))
                    .col(string_null(Booking::DropAddress))
                    .col(double(Booking::EstimatedDistanceKm).default(0.0))
                    .col(big_integer(Booking::BasePrice))
                    .col(big_integer(Booking::AcCharge).default(0))
                    .col(big_integer(Booking::TotalPrice))
                    .col(string(Booking::Status))
                    .col(string(Booking::UniqueCode))
                    .col(big_integer(Booking::CancellationFine).default(0))
                    .col(big_integer(Booking::LateFine).default(0))
                    .col(double_null(Booking::ActualDistanceKm))
                    .col(timestamp_with_time_zone_null(Booking::ActualReturnDate))
                    .col(timestamp_with_time_zone_null(Booking::RideStartedAt))
                    .col(timestamp_with_time_zone_null(Booking::CompletedAt))
                    .col(timestamp_with_time_zone_null(Booking::CancelledAt))
                    .col(
                        timestamp_with_time_zone(Booking::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_customer_id")
                            .from(Booking::Table, Booking::CustomerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_car_id")
                            .from(Booking::Table, Booking::CarId)
                            .to(Car::Table, Car::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_driver_id")
                            .from(Booking::Table, Booking::DriverId)
                            .to(Driver::Table, Driver::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_booking_car_dates")
                    .table(Booking::Table)
                    .col(Booking::CarId)
                    .col(Booking::StartDate)
                    .col(Booking::EndDate)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Booking::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Booking {
    Table,
    Id,
    CustomerId,
    CarId,
    DriverId,
    StartDate,
    EndDate,
    PricingMode,
    Ac,
    PickupLat,
    PickupLng,
    PickupAddress,
    DropLat,
    DropLng,
    DropAddress,
    EstimatedDistanceKm,
    BasePrice,
    AcCharge,
    TotalPrice,
    Status,
    UniqueCode,
    CancellationFine,
    LateFine,
    ActualDistanceKm,
    ActualReturnDate,
    RideStartedAt,
    CompletedAt,
    CancelledAt,
    CreatedAt,
}
