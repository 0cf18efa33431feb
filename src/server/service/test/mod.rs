use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::auth::Actor;

mod unit;

/// Actor attributed to mutations in service tests.
fn actor(user: &entity::user::Model) -> Actor {
    Actor {
        id: user.id,
        name: user.name.clone(),
        origin: Some("192.168.1.10".to_string()),
    }
}

/// All activity log entries, oldest first.
async fn audit_trail(db: &DatabaseConnection) -> Result<Vec<entity::activity_log::Model>, DbErr> {
    entity::prelude::ActivityLog::find().all(db).await
}
