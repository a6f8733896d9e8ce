//! Error type for scene and render operations.

use crate::scene::BallId;

/// Errors surfaced by the engine.
///
/// All of these are caller contract violations; none is retried internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    /// The depth comparator was handed a pair of primitives it has no rule for.
    #[error("cannot compare {first} with {second} for draw order")]
    InvalidComparison {
        first: &'static str,
        second: &'static str,
    },
    /// A projection was read before `project` ran.
    #[error("ball {0} has not been projected")]
    NotProjected(BallId),
    /// Distance-setting needs a direction, which two coincident centers do not have.
    #[error("cannot set distance between coincident centers")]
    CoincidentCenters,
}

pub type Result<T> = std::result::Result<T, RenderError>;
