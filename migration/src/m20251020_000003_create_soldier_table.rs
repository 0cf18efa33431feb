use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Soldier::Table)
                    .if_not_exists()
                    .col(pk_auto(Soldier::Id))
                    .col(string_uniq(Soldier::Nrp))
                    .col(string(Soldier::Name))
                    .col(string(Soldier::Rank))
                    .col(string(Soldier::Corps))
                    .col(string(Soldier::Unit))
                    .col(string(Soldier::Education))
                    .col(string_null(Soldier::Specialization))
                    .col(integer(Soldier::ServiceDuration).default(0))
                    .col(string(Soldier::HealthStatus).default("Sehat"))
                    .col(date_null(Soldier::LastCheckup))
                    .col(string_null(Soldier::BloodType))
                    .col(
                        timestamp_with_time_zone(Soldier::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Soldier::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Personnel counts group by this column on every unit read
        manager
            .create_index(
                Index::create()
                    .name("idx_soldier_unit")
                    .table(Soldier::Table)
                    .col(Soldier::Unit)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Soldier::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Soldier {
    Table,
    Id,
    Nrp,
    Name,
    Rank,
    Corps,
    Unit,
    Education,
    Specialization,
    ServiceDuration,
    HealthStatus,
    LastCheckup,
    BloodType,
    CreatedAt,
    UpdatedAt,
}
