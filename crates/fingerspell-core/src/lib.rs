//! # fingerspell-core
//!
//! Core types, errors, and traits for hand-landmark finger-spelling:
//!
//! - **Landmarks**: [`Landmark`], [`HandJoint`], and the validated [`Hand`]
//! - **Letters**: the static alphabet [`Letter`] and parsed [`Passphrase`]
//! - **Policies**: [`HandSelection`] for multi-hand frames
//! - **Traits**: [`LetterClassifier`], [`FrameSink`], [`Resettable`], [`Validate`]
//! - **Errors**: [`CoreError`] and the [`CoreResult`] alias
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for all core types
//!
//! ## Example
//!
//! ```rust
//! use fingerspell_core::{Hand, Landmark, Letter, HAND_LANDMARK_COUNT};
//!
//! let landmarks = [Landmark::new(0.5, 0.5); HAND_LANDMARK_COUNT];
//! let hand = Hand::new(landmarks);
//! assert_eq!(hand.landmarks().len(), HAND_LANDMARK_COUNT);
//!
//! assert_eq!(Letter::from_char('a'), Some(Letter::A));
//! assert_eq!(Letter::from_char('j'), None);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;
pub mod utils;

// Error handling
pub use error::{CoreError, CoreResult};

// Core traits
pub use traits::{FrameSink, LetterClassifier, Resettable, Validate};

// Domain types
pub use types::{
    Finger, Hand, HandJoint, HandSelection, Landmark, Letter, Passphrase, SessionId,
};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of landmarks MediaPipe Hands reports per hand.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Number of letters with a static pose. J is excluded because its sign
/// is a motion.
pub const STATIC_LETTER_COUNT: usize = 25;

/// Default distance below which two fingertips count as touching, in
/// normalized image units.
pub const DEFAULT_TOUCH_DISTANCE: f32 = 0.1;

/// Default distance above which two fingertips count as spread apart, in
/// normalized image units.
pub const DEFAULT_SPREAD_DISTANCE: f32 = 0.2;

/// Commonly used types and traits.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::traits::{FrameSink, LetterClassifier, Resettable, Validate};
    pub use crate::types::{
        Finger, Hand, HandJoint, HandSelection, Landmark, Letter, Passphrase, SessionId,
    };
    pub use crate::{
        DEFAULT_SPREAD_DISTANCE, DEFAULT_TOUCH_DISTANCE, HAND_LANDMARK_COUNT,
        STATIC_LETTER_COUNT,
    };
}
