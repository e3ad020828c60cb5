//! # fingerspell-recognition
//!
//! Reads finger-spelled letters from hand-landmark frames and feeds two
//! consumer policies:
//!
//! - [`RuleClassifier`]: stateless pose cascade mapping one hand to one
//!   letter
//! - [`ContinuousDetector`]: per-frame display state with no smoothing
//! - [`SequenceAuthenticator`]: edge-triggered sequence matching against a
//!   passphrase
//!
//! ## Feature Flags
//!
//! - `serde`: serialization support for readings and configuration
//!
//! ## Example
//!
//! ```rust
//! use fingerspell_core::{Hand, HandJoint, Landmark, HAND_LANDMARK_COUNT};
//! use fingerspell_recognition::RuleClassifier;
//!
//! // A thumb tip raised above every other fingertip reads as A.
//! let mut landmarks = [Landmark::new(0.5, 0.8); HAND_LANDMARK_COUNT];
//! landmarks[HandJoint::ThumbTip as usize] = Landmark::new(0.5, 0.2);
//! let hand = Hand::new(landmarks);
//!
//! let classifier = RuleClassifier::default();
//! assert_eq!(classifier.classify(&hand).map(|l| l.as_char()), Some('A'));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod authenticator;
pub mod classifier;
pub mod detector;
pub mod rules;

pub use authenticator::{AuthReading, AuthenticatorConfig, SequenceAuthenticator, SessionState};
pub use classifier::{ClassifierThresholds, RuleClassifier};
pub use detector::{ContinuousDetector, DetectorConfig, DetectorReading, DetectorStats};
pub use rules::{rules, LetterRule};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
