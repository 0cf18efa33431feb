use crate::server::{
    data::soldier::SoldierRepository,
    model::{
        pagination::PageRequest,
        soldier::{CreateSoldierParams, SoldierFilter, UpdateSoldierParams},
    },
};
use entity::sea_orm_active_enums::{Corps, Education, HealthStatus, Rank};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_by_corps;
mod get_paginated;
mod update;

fn create_params(nrp: &str) -> CreateSoldierParams {
    CreateSoldierParams {
        nrp: nrp.to_string(),
        name: "Budi Santoso".to_string(),
        rank: Rank::Kapten,
        corps: Corps::Penerbang,
        unit: "Skadron Udara 3".to_string(),
        education: Education::S1,
        specialization: None,
        service_duration: 8,
        health_status: HealthStatus::Sehat,
        last_checkup: None,
        blood_type: None,
    }
}
