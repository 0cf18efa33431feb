//! Demo data for a fresh installation.
//!
//! `seed_demo_data` empties the user, unit, soldier and notification tables and fills them
//! with two accounts, the main air bases and the central air force hospital, ten soldiers
//! across ranks and corps, and three welcome notifications. The activity log is kept.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::{
    BloodType, Corps, Education, HealthStatus, NotificationType, Rank, Role, UnitType,
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};

use crate::server::{
    data::{
        notification::NotificationRepository, soldier::SoldierRepository, unit::UnitRepository,
        user::UserRepository,
    },
    error::AppError,
    model::{
        notification::CreateNotificationParams,
        soldier::CreateSoldierParams,
        unit::{CreateUnitParams, Location},
        user::CreateUserParams,
    },
    util::password::hash_password,
};

/// Login of the seeded super admin.
pub const DEMO_ADMIN_EMAIL: &str = "admin@tni-au.mil.id";
pub const DEMO_ADMIN_PASSWORD: &str = "admin123";

/// Number of records written per table by `seed_demo_data`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub units: usize,
    pub soldiers: usize,
    pub notifications: usize,
}

/// Replaces users, units, soldiers and notifications with the demo data set.
///
/// Not transactional: a failure part way leaves the tables partially seeded, and running
/// the seeder again starts over.
///
/// # Returns
/// - `Ok(SeedSummary)` - Counts of inserted records
/// - `Err(AppError::DbErr)` - Clearing or inserting failed
/// - `Err(AppError::PasswordHashErr)` - Hashing a demo password failed
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<SeedSummary, AppError> {
    reset(db).await?;

    let accounts = [
        ("Administrator", DEMO_ADMIN_EMAIL, DEMO_ADMIN_PASSWORD, Role::SuperAdmin),
        ("User Regular", "user@tni-au.mil.id", "user123", Role::User),
    ];
    let user_count = accounts.len();
    let repo = UserRepository::new(db);
    for (name, email, password, role) in accounts {
        repo.create(CreateUserParams {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: hash_password(password)?,
            role,
            active: true,
        })
        .await?;
    }

    let unit_params = units();
    let unit_count = unit_params.len();
    let repo = UnitRepository::new(db);
    for params in unit_params {
        repo.create(params).await?;
    }

    let soldier_params = soldiers();
    let soldier_count = soldier_params.len();
    let repo = SoldierRepository::new(db);
    for params in soldier_params {
        repo.create(params).await?;
    }

    let notification_params = notifications();
    let notification_count = notification_params.len();
    let repo = NotificationRepository::new(db);
    for params in notification_params {
        repo.create(params).await?;
    }

    Ok(SeedSummary {
        users: user_count,
        units: unit_count,
        soldiers: soldier_count,
        notifications: notification_count,
    })
}

async fn reset(db: &DatabaseConnection) -> Result<(), DbErr> {
    entity::prelude::Notification::delete_many().exec(db).await?;
    entity::prelude::Soldier::delete_many().exec(db).await?;
    entity::prelude::Unit::delete_many().exec(db).await?;
    entity::prelude::User::delete_many().exec(db).await?;

    Ok(())
}

fn units() -> Vec<CreateUnitParams> {
    [
        (
            "Lanud Halim Perdanakusuma",
            "HALIM",
            UnitType::Lanud,
            "Jakarta",
            -6.2665,
            106.8907,
            "Kolonel Pnb Ahmad Susanto",
        ),
        (
            "Lanud Supadio",
            "SUPADIO",
            UnitType::Lanud,
            "Pontianak",
            -0.1506,
            109.4039,
            "Kolonel Pnb Bambang Wibowo",
        ),
        (
            "Lanud Abdulrachman Saleh",
            "SALEH",
            UnitType::Lanud,
            "Malang",
            -7.9267,
            112.7147,
            "Kolonel Pnb Sutrisno",
        ),
        (
            "Lanud Sultan Hasanuddin",
            "HASANUDDIN",
            UnitType::Lanud,
            "Makassar",
            -5.0616,
            119.5543,
            "Kolonel Pnb Agus Purnomo",
        ),
        (
            "Lanud Ngurah Rai",
            "NGURAHRAI",
            UnitType::Lanud,
            "Bali",
            -8.7467,
            115.1668,
            "Kolonel Pnb I Made Sudana",
        ),
        (
            "RSAU dr. Esnawan Antariksa",
            "RSAU-EA",
            UnitType::Rumkit,
            "Jakarta",
            -6.2665,
            106.8907,
            "Kolonel Kes dr. Budi Santoso",
        ),
    ]
    .into_iter()
    .map(
        |(name, code, unit_type, base, latitude, longitude, commander)| CreateUnitParams {
            name: name.to_string(),
            code: code.to_string(),
            unit_type,
            base: base.to_string(),
            location: Location {
                latitude,
                longitude,
            },
            commander: Some(commander.to_string()),
        },
    )
    .collect()
}

fn soldiers() -> Vec<CreateSoldierParams> {
    const RSAU: &str = "RSAU dr. Esnawan Antariksa";
    const HALIM: &str = "Lanud Halim Perdanakusuma";
    const SUPADIO: &str = "Lanud Supadio";

    [
        (
            "10101001",
            "Mayor dr. Surya Pratama",
            Rank::Mayor,
            Corps::Kesehatan,
            RSAU,
            Education::S2,
            Some("Dokter Umum"),
            12,
            HealthStatus::Sehat,
            BloodType::APositive,
            (2024, 1, 15),
        ),
        (
            "10101002",
            "Kapten Budi Santoso",
            Rank::Kapten,
            Corps::Penerbang,
            HALIM,
            Education::S1,
            Some("Pilot Tempur"),
            8,
            HealthStatus::Sehat,
            BloodType::OPositive,
            (2024, 2, 10),
        ),
        (
            "10101003",
            "Letnan Satu Ahmad Rizki",
            Rank::LetnanSatu,
            Corps::Teknik,
            SUPADIO,
            Education::S1,
            Some("Teknisi Avionik"),
            6,
            HealthStatus::Sehat,
            BloodType::BPositive,
            (2024, 1, 20),
        ),
        (
            "10101004",
            "Sersan Mayor Dwi Hartono",
            Rank::SersanMayor,
            Corps::Administrasi,
            HALIM,
            Education::D3,
            None,
            15,
            HealthStatus::SakitRingan,
            BloodType::AbPositive,
            (2024, 2, 5),
        ),
        (
            "10101005",
            "Kolonel Pnb Agus Wijaya",
            Rank::Kolonel,
            Corps::Penerbang,
            "Lanud Abdulrachman Saleh",
            Education::S2,
            Some("Pilot Instruktur"),
            20,
            HealthStatus::Sehat,
            BloodType::APositive,
            (2024, 1, 30),
        ),
        (
            "10101006",
            "Letnan Dua Siti Nurhaliza",
            Rank::LetnanDua,
            Corps::Kesehatan,
            RSAU,
            Education::S1,
            Some("Perawat"),
            3,
            HealthStatus::Sehat,
            BloodType::ONegative,
            (2024, 2, 1),
        ),
        (
            "10101007",
            "Kapten Ir. Joko Prasetyo",
            Rank::Kapten,
            Corps::Teknik,
            "Lanud Sultan Hasanuddin",
            Education::S1,
            Some("Teknisi Mesin"),
            9,
            HealthStatus::Sehat,
            BloodType::BNegative,
            (2024, 1, 25),
        ),
        (
            "10101008",
            "Mayor Candra Kusuma",
            Rank::Mayor,
            Corps::Navigasi,
            "Lanud Ngurah Rai",
            Education::S1,
            Some("Navigator"),
            11,
            HealthStatus::Sehat,
            BloodType::ANegative,
            (2024, 2, 8),
        ),
        (
            "10101009",
            "Sersan Kepala Wawan Setiawan",
            Rank::SersanKepala,
            Corps::Administrasi,
            SUPADIO,
            Education::Sma,
            None,
            18,
            HealthStatus::Pemulihan,
            BloodType::OPositive,
            (2024, 2, 12),
        ),
        (
            "10101010",
            "Letnan Kolonel dr. Rina Marlina",
            Rank::LetnanKolonel,
            Corps::Kesehatan,
            RSAU,
            Education::S2,
            Some("Dokter Spesialis Penyakit Dalam"),
            16,
            HealthStatus::Sehat,
            BloodType::AbNegative,
            (2024, 1, 18),
        ),
    ]
    .into_iter()
    .map(
        |(nrp, name, rank, corps, unit, education, specialization, years, health, blood, (y, m, d))| {
            CreateSoldierParams {
                nrp: nrp.to_string(),
                name: name.to_string(),
                rank,
                corps,
                unit: unit.to_string(),
                education,
                specialization: specialization.map(str::to_string),
                service_duration: years,
                health_status: health,
                last_checkup: NaiveDate::from_ymd_opt(y, m, d),
                blood_type: Some(blood),
            }
        },
    )
    .collect()
}

fn notifications() -> Vec<CreateNotificationParams> {
    [
        (
            "Selamat Datang di Sistem Data Kesehatan TNI AU",
            "Sistem telah berhasil diinisialisasi dengan data awal. Silakan mulai menggunakan aplikasi.",
            NotificationType::Success,
        ),
        (
            "Pemeriksaan Kesehatan Rutin",
            "Reminder: Jadwal pemeriksaan kesehatan rutin untuk seluruh personel akan dilaksanakan minggu depan.",
            NotificationType::Info,
        ),
        (
            "Update Sistem",
            "Sistem akan menjalani maintenance pada hari Minggu pukul 00:00 - 04:00 WIB.",
            NotificationType::Warning,
        ),
    ]
    .into_iter()
    .map(|(title, message, notification_type)| CreateNotificationParams {
        title: title.to_string(),
        message: message.to_string(),
        notification_type,
        user_id: None,
    })
    .collect()
}
