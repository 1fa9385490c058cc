use std::result::Result as StdResult;

use pulse_config::ConfigError as SettingsError;
use pulse_core::CoreError;
use pulse_domain::DomainError;
use thiserror::Error;

/// Unified error type for the engine, snapshot loading and configuration.
#[derive(Error, Debug)]
pub enum BudgetError {
    #[error("Snapshot error: {0}")]
    SnapshotError(String),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Invalid budget rule: {0}")]
    InvalidRule(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

pub type Result<T> = StdResult<T, BudgetError>;

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        BudgetError::SnapshotError(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        BudgetError::SnapshotError(err.to_string())
    }
}

impl From<DomainError> for BudgetError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidMonth(_)
            | DomainError::InvalidYear(_)
            | DomainError::InvalidWindow { .. }
            | DomainError::Validation(_) => BudgetError::InvalidInput(err.to_string()),
            other => BudgetError::InvalidRecord(other.to_string()),
        }
    }
}

impl From<CoreError> for BudgetError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidRule { .. } => BudgetError::InvalidRule(err.to_string()),
            CoreError::Overflow { .. } | CoreError::FigureOverflow { .. } => {
                BudgetError::Overflow(err.to_string())
            }
            CoreError::Domain(inner) => inner.into(),
        }
    }
}

impl From<SettingsError> for BudgetError {
    fn from(err: SettingsError) -> Self {
        BudgetError::ConfigError(err.to_string())
    }
}
