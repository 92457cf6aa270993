//! Recoverable failure for lines that match the statement shape but carry
//! an unusable numeric token.

use thiserror::Error;

use crate::amount::AmountField;

/// A line matched structurally, but one of its numeric tokens could not be
/// converted. Callers decide whether to skip the line or abort.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} token '{token}': {reason}")]
pub struct ParseFailure {
    pub field: AmountField,
    pub token: String,
    pub reason: String,
}

impl ParseFailure {
    pub fn new(field: AmountField, token: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field,
            token: token.into(),
            reason: reason.into(),
        }
    }
}
