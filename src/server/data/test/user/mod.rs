use crate::server::{
    data::user::UserRepository,
    model::{
        pagination::PageRequest,
        user::{CreateUserParams, UpdateUserParams, UserFilter},
    },
};
use entity::sea_orm_active_enums::Role;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_email;
mod get_paginated;
mod super_admin_exists;
mod update;

fn create_params(email: &str) -> CreateUserParams {
    CreateUserParams {
        name: "Siti Rahma".to_string(),
        email: email.to_string(),
        password_hash: factory::helpers::hash_password("rahasia"),
        role: Role::Admin,
        active: true,
    }
}
