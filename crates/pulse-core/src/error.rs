use pulse_domain::{DomainError, RuleId, TransactionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Budget rule {rule_id} is invalid: {reason}")]
    InvalidRule { rule_id: RuleId, reason: String },
    #[error("Amount overflow while applying transaction {transaction_id}")]
    Overflow { transaction_id: TransactionId },
    #[error("Amount overflow while computing {figure}")]
    FigureOverflow { figure: &'static str },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

pub type CoreResult<T> = Result<T, CoreError>;
