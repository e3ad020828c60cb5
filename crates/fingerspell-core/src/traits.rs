//! Core traits for finger-spelling components.

use crate::error::CoreResult;
use crate::types::{Hand, Letter};

/// Trait for reading a letter off a single hand pose.
///
/// Implementations must be pure: the same hand always yields the same
/// answer and `classify` never mutates observable state.
pub trait LetterClassifier: Send + Sync {
    /// Classify one hand, returning `None` when no pose matches.
    fn classify(&self, hand: &Hand) -> Option<Letter>;
}

/// Trait for stateful consumers of a frame stream.
///
/// A frame is everything detected at one instant: zero or more hands.
/// Implementations fold frames into whatever running state they keep and
/// report it through their reading type.
pub trait FrameSink: Send + Sync {
    /// Snapshot returned after each observed frame.
    type Reading;

    /// Consume one frame and report the updated state.
    fn observe_frame(&mut self, hands: &[Hand]) -> Self::Reading;
}

/// Trait for components that can be reset to their initial state.
pub trait Resettable {
    /// Reset to initial state.
    fn reset(&mut self);
}

/// Trait for types that can validate their own invariants.
pub trait Validate {
    /// Validate the data, returning an error describing the first problem.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    fn validate(&self) -> CoreResult<()>;
}
