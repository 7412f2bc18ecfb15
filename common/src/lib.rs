#[macro_use]
mod macros;

pub mod config;
pub mod error;
pub mod logger;
pub mod saveload;
