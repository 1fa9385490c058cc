use chrono::NaiveDate;
use thiserror::Error;

/// Failures raised while mapping or validating domain values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unrecognised category type `{0}`")]
    UnknownSemanticType(String),
    #[error("unrecognised transaction type `{0}`")]
    UnknownTransactionKind(String),
    #[error("invalid color `{0}`, expected #RRGGBB")]
    InvalidColor(String),
    #[error("invalid date `{0}`")]
    InvalidDate(String),
    #[error("invalid month {0}, expected 1-12")]
    InvalidMonth(u32),
    #[error("invalid year {0}")]
    InvalidYear(i32),
    #[error("date window end {end} is before start {start}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
    #[error("{record} {id} is missing `{field}`")]
    MissingField {
        record: &'static str,
        id: i64,
        field: &'static str,
    },
    #[error("{record} {id}: {source}")]
    Record {
        record: &'static str,
        id: i64,
        source: Box<DomainError>,
    },
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Wraps an error with the kind and id of the record that produced it.
    pub fn in_record(self, record: &'static str, id: i64) -> Self {
        DomainError::Record {
            record,
            id,
            source: Box::new(self),
        }
    }
}
