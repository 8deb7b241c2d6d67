pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "server")]
pub mod web;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

#[cfg(feature = "server")]
pub use crate::config::ServerConfig;

pub use crate::core::client::NeisClient;
pub use crate::domain::model::{School, SchoolKind, TimetableEntry, TimetableQuery};
pub use crate::domain::ports::SchoolDirectory;
pub use crate::utils::error::{NeisError, Result};
