pub mod commander;
pub mod models;

pub use commander::{Commander, ConcreteCommander};
pub use models::Command;
