pub mod client;
pub mod envelope;
pub mod normalize;

pub use crate::domain::model::{School, SchoolKind, TimetableEntry, TimetableQuery};
pub use crate::domain::ports::SchoolDirectory;
pub use crate::utils::error::Result;
