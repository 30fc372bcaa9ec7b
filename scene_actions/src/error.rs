/// Result type alias using [`ActionError`].
pub type Result<T> = std::result::Result<T, ActionError>;

/// Errors returned while building or reversing actions.
///
/// Running an action never fails. Everything that can go wrong is caught
/// when the action is constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ActionError {
    /// A `Place` was given a coordinate that is NaN or infinite.
    #[error("invalid position: ({x}, {y})")]
    InvalidPosition { x: f64, y: f64 },

    /// A delay was given a negative or non-finite duration.
    #[error("invalid duration: {0}")]
    InvalidDuration(f64),

    #[error("a sequence needs at least one action")]
    EmptySequence,

    #[error("a repeat needs to run at least once")]
    ZeroRepeat,

    /// The action has no inverse.
    #[error("{action} cannot be reversed")]
    NotReversible { action: &'static str },
}
