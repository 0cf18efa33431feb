//! String-backed enumerations stored by their display value.

use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Rank {
    #[sea_orm(string_value = "Marsekal TNI")]
    MarsekalTni,
    #[sea_orm(string_value = "Marsekal Madya TNI")]
    MarsekalMadyaTni,
    #[sea_orm(string_value = "Marsekal Muda TNI")]
    MarsekalMudaTni,
    #[sea_orm(string_value = "Marsekal Pertama TNI")]
    MarsekalPertamaTni,
    #[sea_orm(string_value = "Kolonel")]
    Kolonel,
    #[sea_orm(string_value = "Letnan Kolonel")]
    LetnanKolonel,
    #[sea_orm(string_value = "Mayor")]
    Mayor,
    #[sea_orm(string_value = "Kapten")]
    Kapten,
    #[sea_orm(string_value = "Letnan Satu")]
    LetnanSatu,
    #[sea_orm(string_value = "Letnan Dua")]
    LetnanDua,
    #[sea_orm(string_value = "Pembantu Letnan Satu")]
    PembantuLetnanSatu,
    #[sea_orm(string_value = "Sersan Mayor")]
    SersanMayor,
    #[sea_orm(string_value = "Sersan Kepala")]
    SersanKepala,
    #[sea_orm(string_value = "Sersan Satu")]
    SersanSatu,
    #[sea_orm(string_value = "Sersan Dua")]
    SersanDua,
    #[sea_orm(string_value = "Kopral Kepala")]
    KopralKepala,
    #[sea_orm(string_value = "Kopral Satu")]
    KopralSatu,
    #[sea_orm(string_value = "Kopral Dua")]
    KopralDua,
    #[sea_orm(string_value = "Prajurit Kepala")]
    PrajuritKepala,
    #[sea_orm(string_value = "Prajurit Satu")]
    PrajuritSatu,
    #[sea_orm(string_value = "Prajurit Dua")]
    PrajuritDua,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Corps {
    #[sea_orm(string_value = "Penerbang")]
    Penerbang,
    #[sea_orm(string_value = "Teknik")]
    Teknik,
    #[sea_orm(string_value = "Navigasi")]
    Navigasi,
    #[sea_orm(string_value = "Kesehatan")]
    Kesehatan,
    #[sea_orm(string_value = "Administrasi")]
    Administrasi,
    #[sea_orm(string_value = "Lainnya")]
    Lainnya,
}

/// Highest completed education, lowest tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Education {
    #[sea_orm(string_value = "SMA")]
    Sma,
    #[sea_orm(string_value = "D3")]
    D3,
    #[sea_orm(string_value = "S1")]
    S1,
    #[sea_orm(string_value = "S2")]
    S2,
    #[sea_orm(string_value = "S3")]
    S3,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum HealthStatus {
    #[sea_orm(string_value = "Sehat")]
    Sehat,
    #[sea_orm(string_value = "Sakit Ringan")]
    SakitRingan,
    #[sea_orm(string_value = "Sakit Sedang")]
    SakitSedang,
    #[sea_orm(string_value = "Sakit Berat")]
    SakitBerat,
    #[sea_orm(string_value = "Pemulihan")]
    Pemulihan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum BloodType {
    #[sea_orm(string_value = "A")]
    A,
    #[sea_orm(string_value = "B")]
    B,
    #[sea_orm(string_value = "AB")]
    Ab,
    #[sea_orm(string_value = "O")]
    O,
    #[sea_orm(string_value = "A+")]
    APositive,
    #[sea_orm(string_value = "A-")]
    ANegative,
    #[sea_orm(string_value = "B+")]
    BPositive,
    #[sea_orm(string_value = "B-")]
    BNegative,
    #[sea_orm(string_value = "AB+")]
    AbPositive,
    #[sea_orm(string_value = "AB-")]
    AbNegative,
    #[sea_orm(string_value = "O+")]
    OPositive,
    #[sea_orm(string_value = "O-")]
    ONegative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum UnitType {
    #[sea_orm(string_value = "Skadron Udara")]
    SkadronUdara,
    #[sea_orm(string_value = "Lanud")]
    Lanud,
    #[sea_orm(string_value = "Kosek")]
    Kosek,
    #[sea_orm(string_value = "Rumkit")]
    Rumkit,
    #[sea_orm(string_value = "Pendidikan")]
    Pendidikan,
    #[sea_orm(string_value = "Lainnya")]
    Lainnya,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum Role {
    #[sea_orm(string_value = "super_admin")]
    SuperAdmin,
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "user")]
    User,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum NotificationType {
    #[sea_orm(string_value = "info")]
    Info,
    #[sea_orm(string_value = "warning")]
    Warning,
    #[sea_orm(string_value = "success")]
    Success,
    #[sea_orm(string_value = "error")]
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum ActivityAction {
    #[sea_orm(string_value = "create")]
    Create,
    #[sea_orm(string_value = "read")]
    Read,
    #[sea_orm(string_value = "update")]
    Update,
    #[sea_orm(string_value = "delete")]
    Delete,
    #[sea_orm(string_value = "login")]
    Login,
    #[sea_orm(string_value = "logout")]
    Logout,
    #[sea_orm(string_value = "export")]
    Export,
}
