mod activity_log;
mod notification;
mod soldier;
mod unit;
mod user;
