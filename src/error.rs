use thiserror::Error;

use crate::domain::UserId;

pub type Result<T> = std::result::Result<T, SplitError>;

#[derive(Debug, Error, PartialEq)]
pub enum SplitError {
    /// A referenced user id is missing from the event roster. The input is
    /// malformed; this is always surfaced to the caller.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// Resolve was handed a same-sign or zero pair. The settlement loop
    /// filters those out before calling, so this firing means a bug.
    #[error("invalid resolve: totals {first} and {second} are not of opposite sign")]
    InvalidResolve { first: i64, second: i64 },
}
