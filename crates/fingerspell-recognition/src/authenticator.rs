//! Passphrase entry by finger-spelling.
//!
//! The authenticator folds a frame stream into an append-only letter
//! sequence. A letter is accepted only on its rising edge: it must differ
//! from the last accepted letter, so a pose held across many frames counts
//! once. Empty frames clear what is displayed but never the edge state,
//! which means a letter cannot be re-entered by briefly hiding the hand.
//!
//! The session completes when the sequence ends with the target
//! passphrase. Completion is terminal: later frames are ignored and the
//! session stays matched until [`SequenceAuthenticator::reset`].

use chrono::{DateTime, Utc};
use fingerspell_core::utils::capped_percentage;
use fingerspell_core::{
    FrameSink, Hand, HandSelection, Letter, LetterClassifier, Passphrase, Resettable, SessionId,
};
use tracing::{debug, info};

use crate::classifier::RuleClassifier;

/// Authentication session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    /// Collecting letters; the passphrase has not been spelled yet.
    AwaitingInput,
    /// The passphrase was spelled. Terminal.
    Matched,
}

impl SessionState {
    /// State name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AwaitingInput => "awaiting_input",
            Self::Matched => "matched",
        }
    }

    /// Whether the state accepts no further input.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Matched)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for a [`SequenceAuthenticator`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthenticatorConfig {
    /// Passphrase the spelled sequence must end with.
    pub passphrase: Passphrase,
    /// Hand picked when a frame contains several.
    pub selection: HandSelection,
}

impl AuthenticatorConfig {
    /// Configuration with the default hand selection.
    #[must_use]
    pub fn new(passphrase: Passphrase) -> Self {
        Self {
            passphrase,
            selection: HandSelection::default(),
        }
    }
}

/// Result of observing one frame.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AuthReading {
    /// Whether any hand was visible in the frame.
    pub hand_present: bool,
    /// Letter read from this frame, whether or not it was newly accepted.
    pub letter: Option<Letter>,
    /// The accepted sequence so far, as text.
    pub sequence: String,
    /// Share of the passphrase length covered by the sequence, capped
    /// at 100.
    pub progress: f64,
    /// Session state after this frame.
    pub state: SessionState,
    /// True only on the reading that completed the match.
    pub just_matched: bool,
    /// When the frame was observed.
    pub timestamp: DateTime<Utc>,
}

/// Stateful passphrase authenticator.
///
/// Generic over the classifier so tests and callers can substitute their
/// own [`LetterClassifier`].
#[derive(Debug, Clone)]
pub struct SequenceAuthenticator<C = RuleClassifier> {
    classifier: C,
    passphrase: Passphrase,
    selection: HandSelection,
    session_id: SessionId,
    state: SessionState,
    sequence: Vec<Letter>,
    last_accepted: Option<Letter>,
    matched_at: Option<DateTime<Utc>>,
}

impl SequenceAuthenticator<RuleClassifier> {
    /// Create an authenticator with the default rule classifier.
    #[must_use]
    pub fn new(config: AuthenticatorConfig) -> Self {
        Self::with_classifier(config, RuleClassifier::default())
    }
}

impl<C: LetterClassifier> SequenceAuthenticator<C> {
    /// Create an authenticator around a custom classifier.
    pub fn with_classifier(config: AuthenticatorConfig, classifier: C) -> Self {
        Self {
            classifier,
            passphrase: config.passphrase,
            selection: config.selection,
            session_id: SessionId::new(),
            state: SessionState::AwaitingInput,
            sequence: Vec::new(),
            last_accepted: None,
            matched_at: None,
        }
    }

    /// Observe one frame and report the session after it.
    ///
    /// Once matched, frames are no longer inspected; readings echo the
    /// terminal state with no hand reported.
    pub fn observe_frame(&mut self, hands: &[Hand]) -> AuthReading {
        let timestamp = Utc::now();

        if self.state.is_terminal() {
            return self.reading(false, None, false, timestamp);
        }

        let Some(hand) = self.selection.select(hands) else {
            // Display state clears; the accepted-letter edge does not.
            return self.reading(false, None, false, timestamp);
        };

        let letter = self.classifier.classify(hand);
        let mut just_matched = false;

        if let Some(letter) = letter {
            if self.last_accepted != Some(letter) {
                self.sequence.push(letter);
                self.last_accepted = Some(letter);
                debug!(
                    session = %self.session_id,
                    letter = %letter,
                    sequence = %self.sequence_string(),
                    "letter accepted"
                );

                if self.sequence.ends_with(self.passphrase.letters()) {
                    self.state = SessionState::Matched;
                    self.matched_at = Some(timestamp);
                    just_matched = true;
                    info!(
                        session = %self.session_id,
                        letters = self.sequence.len(),
                        "passphrase matched"
                    );
                }
            }
        }

        self.reading(true, letter, just_matched, timestamp)
    }

    fn reading(
        &self,
        hand_present: bool,
        letter: Option<Letter>,
        just_matched: bool,
        timestamp: DateTime<Utc>,
    ) -> AuthReading {
        AuthReading {
            hand_present,
            letter,
            sequence: self.sequence_string(),
            progress: self.progress(),
            state: self.state,
            just_matched,
            timestamp,
        }
    }

    /// Current session state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the passphrase has been spelled.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Matched
    }

    /// The accepted letters in order.
    #[must_use]
    pub fn sequence(&self) -> &[Letter] {
        &self.sequence
    }

    /// The accepted sequence as text.
    #[must_use]
    pub fn sequence_string(&self) -> String {
        self.sequence.iter().map(|l| l.as_char()).collect()
    }

    /// Share of the passphrase length covered so far, capped at 100.
    #[must_use]
    pub fn progress(&self) -> f64 {
        capped_percentage(self.sequence.len(), self.passphrase.len())
    }

    /// The target passphrase.
    #[must_use]
    pub const fn passphrase(&self) -> &Passphrase {
        &self.passphrase
    }

    /// The hand selection policy in use.
    #[must_use]
    pub const fn selection(&self) -> HandSelection {
        self.selection
    }

    /// Identifier of the current session.
    #[must_use]
    pub const fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// When the passphrase was matched, if it has been.
    #[must_use]
    pub const fn matched_at(&self) -> Option<DateTime<Utc>> {
        self.matched_at
    }
}

impl<C: LetterClassifier> FrameSink for SequenceAuthenticator<C> {
    type Reading = AuthReading;

    fn observe_frame(&mut self, hands: &[Hand]) -> AuthReading {
        Self::observe_frame(self, hands)
    }
}

impl<C: LetterClassifier> Resettable for SequenceAuthenticator<C> {
    /// Start a fresh session with a new identifier. The passphrase,
    /// selection policy, and classifier are kept.
    fn reset(&mut self) {
        let previous = self.session_id;
        self.session_id = SessionId::new();
        self.state = SessionState::AwaitingInput;
        self.sequence.clear();
        self.last_accepted = None;
        self.matched_at = None;
        debug!(previous = %previous, session = %self.session_id, "session reset");
    }
}
