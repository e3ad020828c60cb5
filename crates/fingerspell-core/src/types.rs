//! Core data types for finger-spelling recognition.
//!
//! Hands arrive as 21 landmarks in the MediaPipe Hands convention:
//! normalized image coordinates where `x` grows rightward, `y` grows
//! downward, and a smaller `y` means a fingertip is raised higher.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::traits::Validate;
use crate::utils;
use crate::{HAND_LANDMARK_COUNT, STATIC_LETTER_COUNT};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier for an authentication session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a new random session ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Landmarks
// ============================================================================

/// A single hand landmark in normalized image coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Landmark {
    /// Horizontal coordinate, nominally in `[0.0, 1.0]`.
    pub x: f32,
    /// Vertical coordinate, nominally in `[0.0, 1.0]`; smaller is higher.
    pub y: f32,
    /// Optional depth coordinate relative to the wrist.
    pub z: Option<f32>,
}

impl Landmark {
    /// Create a new 2D landmark.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: None }
    }

    /// Create a new 3D landmark.
    #[must_use]
    pub const fn new_3d(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Get the 2D position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Planar distance to another landmark.
    ///
    /// Pose geometry is evaluated in the image plane; depth is ignored even
    /// when both landmarks carry a `z` value.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        utils::planar_distance(self.position(), other.position())
    }
}

impl Validate for Landmark {
    fn validate(&self) -> CoreResult<()> {
        if !self.x.is_finite() {
            return Err(CoreError::NonFiniteCoordinate {
                axis: 'x',
                value: self.x,
            });
        }
        if !self.y.is_finite() {
            return Err(CoreError::NonFiniteCoordinate {
                axis: 'y',
                value: self.y,
            });
        }
        if let Some(z) = self.z {
            if !z.is_finite() {
                return Err(CoreError::NonFiniteCoordinate { axis: 'z', value: z });
            }
        }
        Ok(())
    }
}

/// The 21 hand joints in MediaPipe Hands index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum HandJoint {
    /// Wrist center.
    Wrist = 0,
    /// Thumb carpometacarpal joint.
    ThumbCmc = 1,
    /// Thumb metacarpophalangeal joint.
    ThumbMcp = 2,
    /// Thumb interphalangeal joint.
    ThumbIp = 3,
    /// Thumb tip.
    ThumbTip = 4,
    /// Index finger base knuckle.
    IndexMcp = 5,
    /// Index finger middle joint.
    IndexPip = 6,
    /// Index finger joint nearest the tip.
    IndexDip = 7,
    /// Index finger tip.
    IndexTip = 8,
    /// Middle finger base knuckle.
    MiddleMcp = 9,
    /// Middle finger middle joint.
    MiddlePip = 10,
    /// Middle finger joint nearest the tip.
    MiddleDip = 11,
    /// Middle finger tip.
    MiddleTip = 12,
    /// Ring finger base knuckle.
    RingMcp = 13,
    /// Ring finger middle joint.
    RingPip = 14,
    /// Ring finger joint nearest the tip.
    RingDip = 15,
    /// Ring finger tip.
    RingTip = 16,
    /// Pinky base knuckle.
    PinkyMcp = 17,
    /// Pinky middle joint.
    PinkyPip = 18,
    /// Pinky joint nearest the tip.
    PinkyDip = 19,
    /// Pinky tip.
    PinkyTip = 20,
}

impl HandJoint {
    /// Get all joints in index order.
    #[must_use]
    pub const fn all() -> &'static [Self; HAND_LANDMARK_COUNT] {
        &[
            Self::Wrist,
            Self::ThumbCmc,
            Self::ThumbMcp,
            Self::ThumbIp,
            Self::ThumbTip,
            Self::IndexMcp,
            Self::IndexPip,
            Self::IndexDip,
            Self::IndexTip,
            Self::MiddleMcp,
            Self::MiddlePip,
            Self::MiddleDip,
            Self::MiddleTip,
            Self::RingMcp,
            Self::RingPip,
            Self::RingDip,
            Self::RingTip,
            Self::PinkyMcp,
            Self::PinkyPip,
            Self::PinkyDip,
            Self::PinkyTip,
        ]
    }

    /// Get the joint name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Wrist => "wrist",
            Self::ThumbCmc => "thumb_cmc",
            Self::ThumbMcp => "thumb_mcp",
            Self::ThumbIp => "thumb_ip",
            Self::ThumbTip => "thumb_tip",
            Self::IndexMcp => "index_mcp",
            Self::IndexPip => "index_pip",
            Self::IndexDip => "index_dip",
            Self::IndexTip => "index_tip",
            Self::MiddleMcp => "middle_mcp",
            Self::MiddlePip => "middle_pip",
            Self::MiddleDip => "middle_dip",
            Self::MiddleTip => "middle_tip",
            Self::RingMcp => "ring_mcp",
            Self::RingPip => "ring_pip",
            Self::RingDip => "ring_dip",
            Self::RingTip => "ring_tip",
            Self::PinkyMcp => "pinky_mcp",
            Self::PinkyPip => "pinky_pip",
            Self::PinkyDip => "pinky_dip",
            Self::PinkyTip => "pinky_tip",
        }
    }

    /// Check if this joint is a fingertip.
    #[must_use]
    pub const fn is_fingertip(&self) -> bool {
        matches!(
            self,
            Self::ThumbTip | Self::IndexTip | Self::MiddleTip | Self::RingTip | Self::PinkyTip
        )
    }
}

impl TryFrom<u8> for HandJoint {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Wrist),
            1 => Ok(Self::ThumbCmc),
            2 => Ok(Self::ThumbMcp),
            3 => Ok(Self::ThumbIp),
            4 => Ok(Self::ThumbTip),
            5 => Ok(Self::IndexMcp),
            6 => Ok(Self::IndexPip),
            7 => Ok(Self::IndexDip),
            8 => Ok(Self::IndexTip),
            9 => Ok(Self::MiddleMcp),
            10 => Ok(Self::MiddlePip),
            11 => Ok(Self::MiddleDip),
            12 => Ok(Self::MiddleTip),
            13 => Ok(Self::RingMcp),
            14 => Ok(Self::RingPip),
            15 => Ok(Self::RingDip),
            16 => Ok(Self::RingTip),
            17 => Ok(Self::PinkyMcp),
            18 => Ok(Self::PinkyPip),
            19 => Ok(Self::PinkyDip),
            20 => Ok(Self::PinkyTip),
            _ => Err(CoreError::validation(format!(
                "invalid hand joint index: {value}"
            ))),
        }
    }
}

/// One of the five fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Finger {
    /// The thumb.
    Thumb,
    /// The index finger.
    Index,
    /// The middle finger.
    Middle,
    /// The ring finger.
    Ring,
    /// The pinky.
    Pinky,
}

impl Finger {
    /// Get all fingers, thumb first.
    #[must_use]
    pub const fn all() -> &'static [Self; 5] {
        &[Self::Thumb, Self::Index, Self::Middle, Self::Ring, Self::Pinky]
    }

    /// The tip joint of this finger.
    #[must_use]
    pub const fn tip(self) -> HandJoint {
        match self {
            Self::Thumb => HandJoint::ThumbTip,
            Self::Index => HandJoint::IndexTip,
            Self::Middle => HandJoint::MiddleTip,
            Self::Ring => HandJoint::RingTip,
            Self::Pinky => HandJoint::PinkyTip,
        }
    }

    /// Get the finger name as a string.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thumb => "thumb",
            Self::Index => "index",
            Self::Middle => "middle",
            Self::Ring => "ring",
            Self::Pinky => "pinky",
        }
    }
}

// ============================================================================
// Hands
// ============================================================================

/// A detected hand: exactly 21 landmarks in MediaPipe index order.
///
/// The landmark count is enforced at construction, so every `Hand` a
/// classifier receives is structurally complete.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    landmarks: [Landmark; HAND_LANDMARK_COUNT],
}

impl Hand {
    /// Create a hand from a complete landmark array.
    #[must_use]
    pub const fn new(landmarks: [Landmark; HAND_LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Create a hand from a landmark slice.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidLandmarkCount`] when the slice does not
    /// hold exactly [`HAND_LANDMARK_COUNT`] landmarks.
    pub fn from_landmarks(landmarks: &[Landmark]) -> CoreResult<Self> {
        let landmarks: [Landmark; HAND_LANDMARK_COUNT] =
            landmarks
                .try_into()
                .map_err(|_| CoreError::InvalidLandmarkCount {
                    expected: HAND_LANDMARK_COUNT,
                    actual: landmarks.len(),
                })?;
        Ok(Self { landmarks })
    }

    /// All landmarks in index order.
    #[must_use]
    pub const fn landmarks(&self) -> &[Landmark; HAND_LANDMARK_COUNT] {
        &self.landmarks
    }

    /// The landmark at a specific joint.
    #[must_use]
    pub fn landmark(&self, joint: HandJoint) -> &Landmark {
        &self.landmarks[joint as usize]
    }

    /// The tip landmark of a finger.
    #[must_use]
    pub fn tip(&self, finger: Finger) -> &Landmark {
        self.landmark(finger.tip())
    }

    /// The wrist landmark.
    #[must_use]
    pub fn wrist(&self) -> &Landmark {
        self.landmark(HandJoint::Wrist)
    }
}

impl Validate for Hand {
    fn validate(&self) -> CoreResult<()> {
        for landmark in &self.landmarks {
            landmark.validate()?;
        }
        Ok(())
    }
}

// ============================================================================
// Letters
// ============================================================================

/// A letter with a static finger-spelled pose.
///
/// Covers the alphabet minus J, whose sign is a motion and cannot be read
/// from a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Letter {
    /// Get all letters in alphabetical order.
    #[must_use]
    pub const fn all() -> &'static [Self; STATIC_LETTER_COUNT] {
        &[
            Self::A,
            Self::B,
            Self::C,
            Self::D,
            Self::E,
            Self::F,
            Self::G,
            Self::H,
            Self::I,
            Self::K,
            Self::L,
            Self::M,
            Self::N,
            Self::O,
            Self::P,
            Self::Q,
            Self::R,
            Self::S,
            Self::T,
            Self::U,
            Self::V,
            Self::W,
            Self::X,
            Self::Y,
            Self::Z,
        ]
    }

    /// The uppercase character for this letter.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
            Self::E => 'E',
            Self::F => 'F',
            Self::G => 'G',
            Self::H => 'H',
            Self::I => 'I',
            Self::K => 'K',
            Self::L => 'L',
            Self::M => 'M',
            Self::N => 'N',
            Self::O => 'O',
            Self::P => 'P',
            Self::Q => 'Q',
            Self::R => 'R',
            Self::S => 'S',
            Self::T => 'T',
            Self::U => 'U',
            Self::V => 'V',
            Self::W => 'W',
            Self::X => 'X',
            Self::Y => 'Y',
            Self::Z => 'Z',
        }
    }

    /// The letter as a string slice.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::I => "I",
            Self::K => "K",
            Self::L => "L",
            Self::M => "M",
            Self::N => "N",
            Self::O => "O",
            Self::P => "P",
            Self::Q => "Q",
            Self::R => "R",
            Self::S => "S",
            Self::T => "T",
            Self::U => "U",
            Self::V => "V",
            Self::W => "W",
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }

    /// Map a character to its letter, folding lowercase.
    ///
    /// Returns `None` for J, digits, punctuation, and anything else without
    /// a static pose.
    #[must_use]
    pub fn from_char(symbol: char) -> Option<Self> {
        match symbol.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            'E' => Some(Self::E),
            'F' => Some(Self::F),
            'G' => Some(Self::G),
            'H' => Some(Self::H),
            'I' => Some(Self::I),
            'K' => Some(Self::K),
            'L' => Some(Self::L),
            'M' => Some(Self::M),
            'N' => Some(Self::N),
            'O' => Some(Self::O),
            'P' => Some(Self::P),
            'Q' => Some(Self::Q),
            'R' => Some(Self::R),
            'S' => Some(Self::S),
            'T' => Some(Self::T),
            'U' => Some(Self::U),
            'V' => Some(Self::V),
            'W' => Some(Self::W),
            'X' => Some(Self::X),
            'Y' => Some(Self::Y),
            'Z' => Some(Self::Z),
            _ => None,
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = CoreError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        Self::from_char(symbol).ok_or(CoreError::UnknownLetter { symbol })
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated sequence of letters used as an authentication target.
///
/// Parsing folds lowercase input and rejects anything that cannot be
/// finger-spelled statically, so a stored passphrase is always spellable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passphrase(Vec<Letter>);

impl Passphrase {
    /// Parse a passphrase from text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPassphrase`] when the text is empty,
    /// contains J, or contains any character without a static pose.
    pub fn parse(text: &str) -> CoreResult<Self> {
        if text.is_empty() {
            return Err(CoreError::invalid_passphrase("passphrase is empty"));
        }
        let mut letters = Vec::with_capacity(text.len());
        for symbol in text.chars() {
            if symbol.to_ascii_uppercase() == 'J' {
                return Err(CoreError::invalid_passphrase(
                    "J cannot be finger-spelled without motion",
                ));
            }
            let letter = Letter::from_char(symbol).ok_or_else(|| {
                CoreError::invalid_passphrase(format!("'{symbol}' is not a static letter"))
            })?;
            letters.push(letter);
        }
        Ok(Self(letters))
    }

    /// The letters of the passphrase in order.
    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    /// Number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the passphrase has no letters.
    ///
    /// Always false for a parsed passphrase; present for completeness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Passphrase {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.0 {
            f.write_str(letter.as_str())?;
        }
        Ok(())
    }
}

// ============================================================================
// Policies
// ============================================================================

/// Which hand to read when a frame contains more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandSelection {
    /// Use the first detected hand. The default.
    #[default]
    First,
    /// Use the last detected hand.
    ///
    /// Matches the behavior of systems that classify every hand in order
    /// and keep the final result.
    Last,
}

impl HandSelection {
    /// Pick one hand from a frame, or `None` when the frame is empty.
    #[must_use]
    pub fn select(self, hands: &[Hand]) -> Option<&Hand> {
        match self {
            Self::First => hands.first(),
            Self::Last => hands.last(),
        }
    }
}
