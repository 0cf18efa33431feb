//! Activity log domain models and parameters.
//!
//! Activity log entries form an append-only audit trail. Entries are never updated or
//! deleted; the actor's name is copied at write time and not re-resolved later.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ActivityAction;
use sea_orm::ActiveEnum;

use crate::{
    model::activity_log::{ActivityLogDto, ActivityLogQueryDto, CreateActivityLogDto},
    server::{
        error::AppError,
        model::auth::Actor,
        util::parse::{
            optional_text, parse_enum, parse_optional_enum, parse_range_bound, require_text,
            RangeBound,
        },
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityLog {
    pub id: i32,
    pub user_id: i32,
    pub user_name: String,
    pub action: ActivityAction,
    /// Target entity kind, e.g. `"soldier"` or `"auth"`.
    pub entity: String,
    pub entity_id: Option<String>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ActivityLog {
    pub fn from_entity(entity: entity::activity_log::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            user_name: entity.user_name,
            action: entity.action,
            entity: entity.entity,
            entity_id: entity.entity_id,
            details: entity.details,
            ip_address: entity.ip_address,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ActivityLogDto {
        ActivityLogDto {
            id: self.id,
            user_id: self.user_id,
            user_name: self.user_name,
            action: self.action.to_value(),
            entity: self.entity,
            entity_id: self.entity_id,
            details: self.details,
            ip_address: self.ip_address,
            created_at: self.created_at,
        }
    }
}

/// Parameters for appending one audit entry.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateActivityLogParams {
    pub user_id: i32,
    pub user_name: String,
    pub action: ActivityAction,
    pub entity: String,
    pub entity_id: Option<String>,
    pub details: Option<String>,
    pub ip_address: Option<String>,
}

impl CreateActivityLogParams {
    /// Builds an entry attributed to `actor`.
    pub fn new(
        actor: &Actor,
        action: ActivityAction,
        entity: &str,
        entity_id: Option<String>,
        details: Option<String>,
    ) -> Self {
        Self {
            user_id: actor.id,
            user_name: actor.name.clone(),
            action,
            entity: entity.to_string(),
            entity_id,
            details,
            ip_address: actor.origin.clone(),
        }
    }

    /// Validates an explicit append request made by `actor`.
    pub fn from_dto(actor: &Actor, dto: CreateActivityLogDto) -> Result<Self, AppError> {
        let action = parse_enum("action", &dto.action)?;
        let entity = require_text("entity", dto.entity)?;

        Ok(Self::new(
            actor,
            action,
            &entity,
            optional_text(dto.entity_id),
            optional_text(dto.details),
        ))
    }
}

/// Filters for listing activity log entries. Empty filters match every entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityLogFilter {
    pub user_id: Option<i32>,
    pub action: Option<ActivityAction>,
    /// Inclusive lower bound on `created_at`.
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created_at`.
    pub end: Option<DateTime<Utc>>,
}

impl ActivityLogFilter {
    pub fn from_dto(dto: &ActivityLogQueryDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id: dto.user_id,
            action: parse_optional_enum("action", dto.action.as_deref())?,
            start: dto
                .start_date
                .as_deref()
                .map(|v| parse_range_bound("startDate", v, RangeBound::Start))
                .transpose()?,
            end: dto
                .end_date
                .as_deref()
                .map(|v| parse_range_bound("endDate", v, RangeBound::End))
                .transpose()?,
        })
    }
}
