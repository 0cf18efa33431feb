use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Unit::Table)
                    .if_not_exists()
                    .col(pk_auto(Unit::Id))
                    .col(string(Unit::Name))
                    .col(string_uniq(Unit::Code))
                    .col(string(Unit::UnitType))
                    .col(string(Unit::Base))
                    .col(double(Unit::Latitude))
                    .col(double(Unit::Longitude))
                    .col(string_null(Unit::Commander))
                    .col(
                        timestamp_with_time_zone(Unit::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Unit::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_unit_name")
                    .table(Unit::Table)
                    .col(Unit::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Unit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Unit {
    Table,
    Id,
    Name,
    Code,
    UnitType,
    Base,
    Latitude,
    Longitude,
    Commander,
    CreatedAt,
    UpdatedAt,
}
