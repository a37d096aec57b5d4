//! Typed errors returned by the progression core.
//!
//! Every error here is recoverable: the operation that produced it has left the
//! profile, character and friend registry untouched.

use thiserror::Error;

/// Malformed pickup or profile input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("restaurant name must not be empty")]
    EmptyRestaurantName,
    #[error("distance must be a positive number of kilometres (got {0})")]
    InvalidDistance(f64),
    #[error("distance must be at most {max} km (got {got})")]
    DistanceTooLarge { max: f64, got: f64 },
    #[error("order value must be a positive amount (got {0})")]
    InvalidOrderValue(f64),
    #[error("nickname must not be empty")]
    EmptyNickname,
    #[error("nickname must be at most {max} characters")]
    NicknameTooLong { max: usize },
}

/// A stat allocation asked for more points than the character has unspent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("not enough stat points: requested {requested}, available {available}")]
pub struct InsufficientPointsError {
    pub requested: u64,
    pub available: u32,
}

/// Friend registry failures, reported in the order the rules are checked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FriendError {
    #[error("no user goes by `{0}`")]
    NotFound(String),
    #[error("you cannot add yourself as a friend")]
    SelfReference,
    #[error("`{0}` is already on your friend list")]
    Duplicate(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InsufficientPoints(#[from] InsufficientPointsError),
    #[error(transparent)]
    Friend(#[from] FriendError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_error_keeps_inner_message() {
        let err: CoreError = InsufficientPointsError {
            requested: 4,
            available: 3,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "not enough stat points: requested 4, available 3"
        );
        let err: CoreError = FriendError::SelfReference.into();
        assert!(matches!(err, CoreError::Friend(FriendError::SelfReference)));
    }
}
