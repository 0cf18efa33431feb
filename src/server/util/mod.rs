//! Small parsing, hashing and search helpers shared by the model, service and controller layers.

pub mod origin;
pub mod parse;
pub mod password;
pub mod search;
