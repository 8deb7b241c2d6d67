use crate::domain::model::{School, TimetableEntry, TimetableQuery};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Port over the school-information source. The NEIS client is the production
/// adapter; front-end tests substitute an in-memory fake.
#[async_trait]
pub trait SchoolDirectory: Send + Sync {
    /// Schools whose name matches the given filter. Empty when nothing matched.
    async fn search_school(&self, name: &str) -> Result<Vec<School>>;

    /// Timetable rows for one class on one day, sorted ascending by period.
    async fn timetable(&self, query: &TimetableQuery) -> Result<Vec<TimetableEntry>>;
}
