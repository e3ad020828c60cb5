//! Rule-cascade letter classification.

use fingerspell_core::{
    CoreError, CoreResult, Hand, Landmark, Letter, LetterClassifier, Validate,
    DEFAULT_SPREAD_DISTANCE, DEFAULT_TOUCH_DISTANCE,
};
use tracing::debug;

use crate::rules::{rules, TipSet};

/// Distance thresholds used by the proximity predicates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifierThresholds {
    /// Two fingertips closer than this count as touching.
    pub touch: f32,
    /// Two fingertips farther apart than this count as spread.
    pub spread: f32,
}

impl ClassifierThresholds {
    /// Create validated thresholds.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when either threshold is non-finite or
    /// non-positive, or when `touch` is not strictly below `spread`.
    pub fn new(touch: f32, spread: f32) -> CoreResult<Self> {
        let thresholds = Self { touch, spread };
        thresholds.validate()?;
        Ok(thresholds)
    }
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            touch: DEFAULT_TOUCH_DISTANCE,
            spread: DEFAULT_SPREAD_DISTANCE,
        }
    }
}

impl Validate for ClassifierThresholds {
    fn validate(&self) -> CoreResult<()> {
        if !self.touch.is_finite() || !self.spread.is_finite() {
            return Err(CoreError::configuration("thresholds must be finite"));
        }
        if self.touch <= 0.0 || self.spread <= 0.0 {
            return Err(CoreError::configuration("thresholds must be positive"));
        }
        if self.touch >= self.spread {
            return Err(CoreError::configuration(format!(
                "touch threshold {} must be below spread threshold {}",
                self.touch, self.spread
            )));
        }
        Ok(())
    }
}

/// Stateless classifier that walks the pose cascade.
///
/// Classification is pure: the same hand always produces the same letter
/// and no internal state is kept between calls.
#[derive(Debug, Clone, Default)]
pub struct RuleClassifier {
    thresholds: ClassifierThresholds,
}

impl RuleClassifier {
    /// Create a classifier with custom thresholds.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the thresholds are invalid.
    pub fn new(thresholds: ClassifierThresholds) -> CoreResult<Self> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// The thresholds in use.
    #[must_use]
    pub const fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    /// Classify a complete hand, returning the first matching letter.
    #[must_use]
    pub fn classify(&self, hand: &Hand) -> Option<Letter> {
        let tips = TipSet::from_hand(hand);
        rules()
            .iter()
            .find(|rule| rule.matches(&tips, &self.thresholds))
            .map(|rule| rule.letter())
    }

    /// Classify a raw landmark slice, tolerating malformed input.
    ///
    /// An incomplete hand is worth skipping, not crashing over: anything
    /// other than exactly 21 landmarks reads as no letter.
    #[must_use]
    pub fn classify_landmarks(&self, landmarks: &[Landmark]) -> Option<Letter> {
        match Hand::from_landmarks(landmarks) {
            Ok(hand) => self.classify(&hand),
            Err(err) => {
                debug!(count = landmarks.len(), %err, "skipping malformed hand");
                None
            }
        }
    }
}

impl LetterClassifier for RuleClassifier {
    fn classify(&self, hand: &Hand) -> Option<Letter> {
        Self::classify(self, hand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingerspell_core::{HandJoint, HAND_LANDMARK_COUNT};

    fn hand_with_thumb_raised() -> Hand {
        let mut landmarks = [Landmark::new(0.5, 0.5); HAND_LANDMARK_COUNT];
        landmarks[HandJoint::ThumbTip as usize] = Landmark::new(0.5, 0.1);
        Hand::new(landmarks)
    }

    #[test]
    fn test_default_thresholds_match_constants() {
        let thresholds = ClassifierThresholds::default();
        assert!((thresholds.touch - DEFAULT_TOUCH_DISTANCE).abs() < f32::EPSILON);
        assert!((thresholds.spread - DEFAULT_SPREAD_DISTANCE).abs() < f32::EPSILON);
        assert!(thresholds.validate().is_ok());
    }

    #[test]
    fn test_threshold_validation() {
        assert!(ClassifierThresholds::new(0.05, 0.15).is_ok());
        assert!(ClassifierThresholds::new(0.2, 0.1).is_err());
        assert!(ClassifierThresholds::new(0.1, 0.1).is_err());
        assert!(ClassifierThresholds::new(0.0, 0.2).is_err());
        assert!(ClassifierThresholds::new(-0.1, 0.2).is_err());
        assert!(ClassifierThresholds::new(f32::NAN, 0.2).is_err());
        assert!(ClassifierThresholds::new(0.1, f32::INFINITY).is_err());
    }

    #[test]
    fn test_classifier_rejects_bad_thresholds() {
        let bad = ClassifierThresholds {
            touch: 0.3,
            spread: 0.2,
        };
        assert!(RuleClassifier::new(bad).is_err());
    }

    #[test]
    fn test_classify_thumb_raised_is_a() {
        let classifier = RuleClassifier::default();
        assert_eq!(classifier.classify(&hand_with_thumb_raised()), Some(Letter::A));
    }

    #[test]
    fn test_classify_is_pure() {
        let classifier = RuleClassifier::default();
        let hand = hand_with_thumb_raised();
        let first = classifier.classify(&hand);
        let second = classifier.classify(&hand);
        let third = classifier.classify(&hand);
        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn test_classify_landmarks_tolerates_short_input() {
        let classifier = RuleClassifier::default();
        assert_eq!(classifier.classify_landmarks(&[]), None);

        let short = vec![Landmark::new(0.5, 0.5); 20];
        assert_eq!(classifier.classify_landmarks(&short), None);

        let long = vec![Landmark::new(0.5, 0.5); 22];
        assert_eq!(classifier.classify_landmarks(&long), None);
    }

    #[test]
    fn test_classify_landmarks_accepts_complete_hand() {
        let classifier = RuleClassifier::default();
        let landmarks = hand_with_thumb_raised().landmarks().to_vec();
        assert_eq!(classifier.classify_landmarks(&landmarks), Some(Letter::A));
    }

    #[test]
    fn test_trait_object_classification() {
        let classifier: Box<dyn LetterClassifier> = Box::new(RuleClassifier::default());
        assert_eq!(classifier.classify(&hand_with_thumb_raised()), Some(Letter::A));
    }
}
