use crate::server::{
    data::{soldier::SoldierRepository, unit::UnitRepository},
    model::unit::{CreateUnitParams, Location, UnitFilter, UpdateUnitParams},
};
use entity::sea_orm_active_enums::UnitType;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod update;

fn create_params(name: &str, code: &str) -> CreateUnitParams {
    CreateUnitParams {
        name: name.to_string(),
        code: code.to_string(),
        unit_type: UnitType::SkadronUdara,
        base: "Iswahjudi".to_string(),
        location: Location {
            latitude: -7.6156,
            longitude: 111.4337,
        },
        commander: None,
    }
}
