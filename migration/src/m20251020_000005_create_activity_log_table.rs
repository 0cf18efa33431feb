use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivityLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ActivityLog::Id))
                    .col(integer(ActivityLog::UserId))
                    .col(string(ActivityLog::UserName))
                    .col(string(ActivityLog::Action))
                    .col(string(ActivityLog::Entity))
                    .col(string_null(ActivityLog::EntityId))
                    .col(text_null(ActivityLog::Details))
                    .col(string_null(ActivityLog::IpAddress))
                    .col(
                        timestamp_with_time_zone(ActivityLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_activity_log_user_created")
                    .table(ActivityLog::Table)
                    .col(ActivityLog::UserId)
                    .col(ActivityLog::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ActivityLog {
    Table,
    Id,
    UserId,
    UserName,
    Action,
    Entity,
    EntityId,
    Details,
    IpAddress,
    CreatedAt,
}
