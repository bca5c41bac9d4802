use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Otp::Table)
                    .if_not_exists()
                    .col(pk_auto(Otp::Id))
                    .col(string(Otp::Email))
                    .col(string(Otp::Purpose))
                    .col(string(Otp::Code))
                    .col(integer(Otp::Attempts).default(0))
                    .col(integer_null(Otp::BookingId))
                    .col(timestamp_with_time_zone(Otp::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(Otp::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_otp_email_purpose")
                    .table(Otp::Table)
                    .col(Otp::Email)
                    .col(Otp::Purpose)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Otp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Otp {
    Table,
    Id,
    Email,
    Purpose,
    Code,
    Attempts,
    BookingId,
    ExpiresAt,
    CreatedAt,
}
