use thiserror::Error;
use time::Date;

/// Failures surfaced by the persistence layer.
///
/// `NotFound` is the only variant the services branch on: `find_by_date`
/// turns it into a placeholder entity and `upsert` routes it to the create
/// path. Every other variant bubbles up to the caller untouched.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no record for {0}")]
    NotFound(Date),

    #[error("no data to aggregate between {start} and {end}")]
    NoAggregateData { start: Date, end: Date },

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
