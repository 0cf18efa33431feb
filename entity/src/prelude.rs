pub use super::activity_log::Entity as ActivityLog;
pub use super::notification::Entity as Notification;
pub use super::soldier::Entity as Soldier;
pub use super::unit::Entity as Unit;
pub use super::user::Entity as User;
