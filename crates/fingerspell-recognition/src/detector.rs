//! Continuous per-frame letter detection.
//!
//! The continuous policy reports exactly what is visible right now: one
//! reading per frame, no smoothing, no memory of earlier letters. A frame
//! with no hand clears both the presence flag and the letter.

use chrono::{DateTime, Utc};
use fingerspell_core::{
    CoreResult, FrameSink, Hand, HandSelection, Letter, LetterClassifier, Resettable,
};

use crate::classifier::{ClassifierThresholds, RuleClassifier};

/// Configuration for a [`ContinuousDetector`] using the default classifier.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectorConfig {
    /// Thresholds for the pose predicates.
    pub thresholds: ClassifierThresholds,
    /// Hand picked when a frame contains several.
    pub selection: HandSelection,
}

/// Result of observing one frame.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectorReading {
    /// Whether any hand was visible in the frame.
    pub hand_present: bool,
    /// Letter read from the selected hand, if its pose matched a rule.
    pub letter: Option<Letter>,
    /// When the frame was observed.
    pub timestamp: DateTime<Utc>,
}

/// Running counters over a detector's lifetime.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectorStats {
    /// Total frames observed.
    pub frames_observed: u64,
    /// Frames in which at least one hand was visible.
    pub frames_with_hand: u64,
    /// Frames in which the selected hand produced a letter.
    pub frames_classified: u64,
    /// Share of observed frames that produced a letter, in `[0.0, 1.0]`.
    pub classification_rate: f64,
}

/// Stateful per-frame letter detector.
///
/// Generic over the classifier so tests and callers can substitute their
/// own [`LetterClassifier`].
#[derive(Debug, Clone)]
pub struct ContinuousDetector<C = RuleClassifier> {
    classifier: C,
    selection: HandSelection,
    hand_present: bool,
    letter: Option<Letter>,
    frames_observed: u64,
    frames_with_hand: u64,
    frames_classified: u64,
}

impl ContinuousDetector<RuleClassifier> {
    /// Create a detector from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the thresholds are invalid.
    pub fn new(config: DetectorConfig) -> CoreResult<Self> {
        Ok(Self::with_classifier(
            RuleClassifier::new(config.thresholds)?,
            config.selection,
        ))
    }

    /// Create a detector with default configuration.
    #[must_use]
    pub fn default_config() -> Self {
        Self::with_classifier(RuleClassifier::default(), HandSelection::default())
    }
}

impl Default for ContinuousDetector<RuleClassifier> {
    fn default() -> Self {
        Self::default_config()
    }
}

impl<C: LetterClassifier> ContinuousDetector<C> {
    /// Create a detector around a custom classifier.
    pub fn with_classifier(classifier: C, selection: HandSelection) -> Self {
        Self {
            classifier,
            selection,
            hand_present: false,
            letter: None,
            frames_observed: 0,
            frames_with_hand: 0,
            frames_classified: 0,
        }
    }

    /// Observe one frame and report what is visible.
    pub fn observe_frame(&mut self, hands: &[Hand]) -> DetectorReading {
        self.frames_observed += 1;

        let selected = self.selection.select(hands);
        self.hand_present = selected.is_some();
        self.letter = selected.and_then(|hand| self.classifier.classify(hand));

        if self.hand_present {
            self.frames_with_hand += 1;
        }
        if self.letter.is_some() {
            self.frames_classified += 1;
        }

        DetectorReading {
            hand_present: self.hand_present,
            letter: self.letter,
            timestamp: Utc::now(),
        }
    }

    /// Whether the most recent frame contained a hand.
    #[must_use]
    pub const fn hand_present(&self) -> bool {
        self.hand_present
    }

    /// Letter read from the most recent frame.
    #[must_use]
    pub const fn current_letter(&self) -> Option<Letter> {
        self.letter
    }

    /// The hand selection policy in use.
    #[must_use]
    pub const fn selection(&self) -> HandSelection {
        self.selection
    }

    /// Counters accumulated since construction or the last reset.
    #[must_use]
    pub fn stats(&self) -> DetectorStats {
        let classification_rate = if self.frames_observed > 0 {
            self.frames_classified as f64 / self.frames_observed as f64
        } else {
            0.0
        };
        DetectorStats {
            frames_observed: self.frames_observed,
            frames_with_hand: self.frames_with_hand,
            frames_classified: self.frames_classified,
            classification_rate,
        }
    }
}

impl<C: LetterClassifier> FrameSink for ContinuousDetector<C> {
    type Reading = DetectorReading;

    fn observe_frame(&mut self, hands: &[Hand]) -> DetectorReading {
        Self::observe_frame(self, hands)
    }
}

impl<C: LetterClassifier> Resettable for ContinuousDetector<C> {
    fn reset(&mut self) {
        self.hand_present = false;
        self.letter = None;
        self.frames_observed = 0;
        self.frames_with_hand = 0;
        self.frames_classified = 0;
    }
}
