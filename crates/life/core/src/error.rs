//! Failure taxonomy of the action processors.
//!
//! Action failures are expected outcomes of player input, not faults. Each
//! variant carries a short player-facing message as its `Display` and is
//! classified by [`ErrorKind`] for logging and metrics.

use crate::state::ItemId;

/// Classification of an action failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// Input outside the accepted range; retrying unchanged will fail again.
    Validation,
    /// Referenced character, item or disease does not exist.
    NotFound,
    /// Inventory too small or nothing to treat.
    InsufficientResource,
}

impl ErrorKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::NotFound => "not_found",
            Self::InsufficientResource => "insufficient_resource",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("You can only sleep between {min} and {max} hours.")]
    InvalidDuration { hours: u32, min: u32, max: u32 },

    #[error("'{0}' is not a hygiene action you can take.")]
    UnknownHygieneAction(String),

    #[error("That item does not exist.")]
    ItemNotFound(ItemId),

    #[error("That is not something you can eat.")]
    NotEdible(ItemId),

    #[error("That is not something you can drink.")]
    NotDrinkable(ItemId),

    #[error("That item won't help you get clean.")]
    NotHygieneItem(ItemId),

    #[error("That is not a medicine.")]
    NotMedicine(ItemId),

    #[error("You don't have any of that left.")]
    InsufficientQuantity(ItemId),

    #[error("You have no condition that this medicine treats.")]
    NoMatchingCondition(ItemId),
}

impl ActionError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDuration { .. }
            | Self::UnknownHygieneAction(_)
            | Self::NotEdible(_)
            | Self::NotDrinkable(_)
            | Self::NotHygieneItem(_) => ErrorKind::Validation,
            Self::ItemNotFound(_) | Self::NotMedicine(_) => ErrorKind::NotFound,
            Self::InsufficientQuantity(_) | Self::NoMatchingCondition(_) => {
                ErrorKind::InsufficientResource
            }
        }
    }
}
