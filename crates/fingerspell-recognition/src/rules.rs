//! Static pose rules for the finger-spelled alphabet.
//!
//! The table is an ordered cascade: rules are tried top to bottom and the
//! first satisfied predicate names the letter, so ordering is part of the
//! observed behavior. Some entries repeat an earlier predicate (V repeats K,
//! S repeats E) or are contained in one (Z is contained in D, U in R); those
//! poses resolve to the earlier slot, and reordering the table would change
//! what a stream spells.
//!
//! J has no entry: its sign is a motion, not a pose.
//!
//! Every predicate reads only the five fingertips. Heights compare `y`
//! (smaller is higher) and proximity uses planar distance against the
//! configured touch and spread thresholds.

use fingerspell_core::utils::horizontal_gap;
use fingerspell_core::{Finger, Hand, Landmark, Letter, STATIC_LETTER_COUNT};

use crate::classifier::ClassifierThresholds;

/// The five fingertip landmarks of one hand, extracted once per
/// classification.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TipSet {
    pub(crate) thumb: Landmark,
    pub(crate) index: Landmark,
    pub(crate) middle: Landmark,
    pub(crate) ring: Landmark,
    pub(crate) pinky: Landmark,
}

impl TipSet {
    pub(crate) fn from_hand(hand: &Hand) -> Self {
        Self {
            thumb: *hand.tip(Finger::Thumb),
            index: *hand.tip(Finger::Index),
            middle: *hand.tip(Finger::Middle),
            ring: *hand.tip(Finger::Ring),
            pinky: *hand.tip(Finger::Pinky),
        }
    }
}

/// One entry of the classification cascade.
pub struct LetterRule {
    letter: Letter,
    description: &'static str,
    predicate: fn(&TipSet, &ClassifierThresholds) -> bool,
}

impl LetterRule {
    /// The letter this rule produces.
    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.letter
    }

    /// Short description of the pose the rule looks for.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    pub(crate) fn matches(&self, tips: &TipSet, thresholds: &ClassifierThresholds) -> bool {
        (self.predicate)(tips, thresholds)
    }
}

/// The cascade in evaluation order, one rule per static letter.
#[must_use]
pub fn rules() -> &'static [LetterRule] {
    &RULES
}

static RULES: [LetterRule; STATIC_LETTER_COUNT] = [
    LetterRule {
        letter: Letter::A,
        description: "thumb raised above four curled fingers",
        predicate: pose_a,
    },
    LetterRule {
        letter: Letter::B,
        description: "four fingers raised, thumb tucked below them",
        predicate: pose_b,
    },
    LetterRule {
        letter: Letter::C,
        description: "fingertips curved in a chain, thumb held away from the index",
        predicate: pose_c,
    },
    LetterRule {
        letter: Letter::D,
        description: "index raised above every other tip",
        predicate: pose_d,
    },
    LetterRule {
        letter: Letter::E,
        description: "fingertips curled into a chain with the thumb closing it",
        predicate: pose_e,
    },
    LetterRule {
        letter: Letter::F,
        description: "thumb and index pinched, middle raised past ring and pinky",
        predicate: pose_f,
    },
    LetterRule {
        letter: Letter::G,
        description: "index raised highest with the thumb against the middle finger",
        predicate: pose_g,
    },
    LetterRule {
        letter: Letter::H,
        description: "index and middle above the thumb, ring and pinky below it",
        predicate: pose_h,
    },
    LetterRule {
        letter: Letter::I,
        description: "pinky raised above every other tip",
        predicate: pose_i,
    },
    LetterRule {
        letter: Letter::K,
        description: "index and middle above the thumb and spread wide",
        predicate: pose_k,
    },
    LetterRule {
        letter: Letter::L,
        description: "thumb and index above a middle finger that sits below ring and pinky",
        predicate: pose_l,
    },
    LetterRule {
        letter: Letter::M,
        description: "thumb, index, middle, and ring tips bunched in a row",
        predicate: pose_m,
    },
    LetterRule {
        letter: Letter::N,
        description: "thumb, index, and middle bunched with the ring finger clear",
        predicate: pose_n,
    },
    LetterRule {
        letter: Letter::O,
        description: "all four fingertips gathered onto the thumb",
        predicate: pose_o,
    },
    LetterRule {
        letter: Letter::P,
        description: "thumb above all four fingers, hand tipped forward",
        predicate: pose_p,
    },
    LetterRule {
        letter: Letter::Q,
        description: "thumb and index pinched and pointing down",
        predicate: pose_q,
    },
    LetterRule {
        letter: Letter::R,
        description: "index and middle raised and crossed",
        predicate: pose_r,
    },
    LetterRule {
        letter: Letter::S,
        description: "fist with every neighbouring tip touching",
        predicate: pose_s,
    },
    LetterRule {
        letter: Letter::T,
        description: "thumb pinched between index and middle, ring and pinky down",
        predicate: pose_t,
    },
    LetterRule {
        letter: Letter::U,
        description: "index and middle raised together, tips touching",
        predicate: pose_u,
    },
    LetterRule {
        letter: Letter::V,
        description: "index and middle raised and spread apart",
        predicate: pose_v,
    },
    LetterRule {
        letter: Letter::W,
        description: "index, middle, and ring raised with the pinky down",
        predicate: pose_w,
    },
    LetterRule {
        letter: Letter::X,
        description: "middle raised past ring and pinky with the index hooked below it",
        predicate: pose_x,
    },
    LetterRule {
        letter: Letter::Y,
        description: "thumb and pinky above an index that sits below middle and ring",
        predicate: pose_y,
    },
    LetterRule {
        letter: Letter::Z,
        description: "index above the thumb with the other fingers below it",
        predicate: pose_z,
    },
];

// ============================================================================
// Predicates
// ============================================================================

fn pose_a(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.thumb.y < t.index.y
        && t.thumb.y < t.middle.y
        && t.thumb.y < t.ring.y
        && t.thumb.y < t.pinky.y
}

fn pose_b(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.thumb.y > t.index.y
        && t.thumb.y > t.middle.y
        && t.thumb.y > t.ring.y
        && t.thumb.y > t.pinky.y
}

fn pose_c(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.index.distance_to(&t.middle) < th.touch
        && t.middle.distance_to(&t.ring) < th.touch
        && t.ring.distance_to(&t.pinky) < th.touch
        && t.thumb.distance_to(&t.index) > th.spread
}

fn pose_d(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.index.y < t.thumb.y
        && t.index.y < t.middle.y
        && t.index.y < t.ring.y
        && t.index.y < t.pinky.y
}

fn pose_e(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.index.distance_to(&t.middle) < th.touch
        && t.middle.distance_to(&t.ring) < th.touch
        && t.ring.distance_to(&t.pinky) < th.touch
        && t.thumb.distance_to(&t.index) < th.touch
}

fn pose_f(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.thumb.distance_to(&t.index) < th.touch
        && t.middle.y < t.ring.y
        && t.middle.y < t.pinky.y
}

fn pose_g(t: &TipSet, th: &ClassifierThresholds) -> bool {
    pose_d(t, th) && t.thumb.distance_to(&t.middle) < th.touch
}

fn pose_h(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.index.y < t.thumb.y
        && t.middle.y < t.thumb.y
        && t.ring.y > t.thumb.y
        && t.pinky.y > t.thumb.y
}

fn pose_i(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.pinky.y < t.thumb.y
        && t.pinky.y < t.index.y
        && t.pinky.y < t.middle.y
        && t.pinky.y < t.ring.y
}

fn pose_k(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.index.y < t.thumb.y
        && t.middle.y < t.thumb.y
        && t.index.distance_to(&t.middle) > th.spread
}

fn pose_l(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.thumb.y < t.middle.y
        && t.index.y < t.middle.y
        && t.middle.y > t.ring.y
        && t.middle.y > t.pinky.y
}

fn pose_m(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.thumb.distance_to(&t.index) < th.touch
        && t.index.distance_to(&t.middle) < th.touch
        && t.middle.distance_to(&t.ring) < th.touch
}

fn pose_n(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.thumb.distance_to(&t.index) < th.touch
        && t.index.distance_to(&t.middle) < th.touch
        && t.middle.distance_to(&t.ring) > th.spread
}

fn pose_o(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.index.distance_to(&t.thumb) < th.touch
        && t.middle.distance_to(&t.thumb) < th.touch
        && t.ring.distance_to(&t.thumb) < th.touch
        && t.pinky.distance_to(&t.thumb) < th.touch
}

fn pose_p(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.index.y > t.thumb.y
        && t.middle.y > t.thumb.y
        && t.ring.y > t.thumb.y
        && t.pinky.y > t.thumb.y
}

fn pose_q(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.thumb.distance_to(&t.index) < th.touch
        && t.middle.y > t.thumb.y
        && t.ring.y > t.thumb.y
        && t.pinky.y > t.thumb.y
}

// Crossing is approximated by the tips overlapping horizontally, so the
// x gap is compared rather than the full planar distance.
fn pose_r(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.index.y < t.thumb.y
        && t.middle.y < t.thumb.y
        && horizontal_gap(t.index.x, t.middle.x) < th.touch
}

fn pose_s(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.thumb.distance_to(&t.index) < th.touch
        && t.index.distance_to(&t.middle) < th.touch
        && t.middle.distance_to(&t.ring) < th.touch
        && t.ring.distance_to(&t.pinky) < th.touch
}

fn pose_t(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.thumb.distance_to(&t.index) < th.touch
        && t.thumb.distance_to(&t.middle) < th.touch
        && t.ring.y > t.thumb.y
        && t.pinky.y > t.thumb.y
}

fn pose_u(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.index.y < t.thumb.y
        && t.middle.y < t.thumb.y
        && t.index.distance_to(&t.middle) < th.touch
}

fn pose_v(t: &TipSet, th: &ClassifierThresholds) -> bool {
    t.index.y < t.thumb.y
        && t.middle.y < t.thumb.y
        && t.index.distance_to(&t.middle) > th.spread
}

fn pose_w(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.index.y < t.thumb.y
        && t.middle.y < t.thumb.y
        && t.ring.y < t.thumb.y
        && t.pinky.y > t.thumb.y
}

fn pose_x(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.index.y > t.middle.y && t.middle.y < t.ring.y && t.middle.y < t.pinky.y
}

fn pose_y(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.thumb.y < t.index.y
        && t.pinky.y < t.index.y
        && t.index.y > t.middle.y
        && t.index.y > t.ring.y
}

fn pose_z(t: &TipSet, _: &ClassifierThresholds) -> bool {
    t.index.y < t.thumb.y
        && t.middle.y > t.thumb.y
        && t.ring.y > t.thumb.y
        && t.pinky.y > t.thumb.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use fingerspell_core::Letter;

    fn lm(p: (f32, f32)) -> Landmark {
        Landmark::new(p.0, p.1)
    }

    fn tips(
        thumb: (f32, f32),
        index: (f32, f32),
        middle: (f32, f32),
        ring: (f32, f32),
        pinky: (f32, f32),
    ) -> TipSet {
        TipSet {
            thumb: lm(thumb),
            index: lm(index),
            middle: lm(middle),
            ring: lm(ring),
            pinky: lm(pinky),
        }
    }

    fn th() -> ClassifierThresholds {
        ClassifierThresholds::default()
    }

    #[test]
    fn test_table_covers_every_letter_in_order() {
        assert_eq!(rules().len(), STATIC_LETTER_COUNT);
        for (rule, letter) in rules().iter().zip(Letter::all()) {
            assert_eq!(rule.letter(), *letter);
        }
    }

    #[test]
    fn test_descriptions_are_present() {
        for rule in rules() {
            assert!(!rule.description().is_empty());
        }
    }

    #[test]
    fn test_pose_a_requires_thumb_strictly_highest() {
        let raised = tips((0.5, 0.1), (0.4, 0.5), (0.5, 0.5), (0.6, 0.5), (0.7, 0.5));
        assert!(pose_a(&raised, &th()));

        // A tie with any fingertip is not "above" it.
        let tied = tips((0.5, 0.5), (0.4, 0.5), (0.5, 0.6), (0.6, 0.6), (0.7, 0.6));
        assert!(!pose_a(&tied, &th()));
    }

    #[test]
    fn test_pose_b_requires_thumb_strictly_lowest() {
        let tucked = tips((0.5, 0.9), (0.4, 0.3), (0.5, 0.3), (0.6, 0.3), (0.7, 0.3));
        assert!(pose_b(&tucked, &th()));
        assert!(!pose_a(&tucked, &th()));
    }

    #[test]
    fn test_pose_r_reads_horizontal_gap_only() {
        // Tips vertically far apart still count as crossed when their x
        // coordinates overlap.
        let crossed = tips((0.5, 0.6), (0.48, 0.25), (0.52, 0.4), (0.55, 0.7), (0.6, 0.55));
        assert!(pose_r(&crossed, &th()));

        let apart = tips((0.5, 0.6), (0.3, 0.25), (0.52, 0.4), (0.55, 0.7), (0.6, 0.55));
        assert!(!pose_r(&apart, &th()));
    }

    #[test]
    fn test_pose_v_repeats_pose_k() {
        let spread = tips((0.5, 0.6), (0.3, 0.25), (0.7, 0.2), (0.55, 0.5), (0.65, 0.8));
        assert!(pose_k(&spread, &th()));
        assert!(pose_v(&spread, &th()));
    }

    #[test]
    fn test_pose_s_repeats_pose_e() {
        let fist = tips((0.5, 0.5), (0.52, 0.5), (0.54, 0.5), (0.56, 0.5), (0.58, 0.5));
        assert!(pose_e(&fist, &th()));
        assert!(pose_s(&fist, &th()));
    }

    #[test]
    fn test_pose_u_is_contained_in_pose_r() {
        // Touching tips always overlap horizontally, so any U pose already
        // satisfies R.
        let together = tips((0.5, 0.6), (0.5, 0.2), (0.55, 0.22), (0.6, 0.7), (0.65, 0.7));
        assert!(pose_u(&together, &th()));
        assert!(pose_r(&together, &th()));
    }

    #[test]
    fn test_pose_z_is_contained_in_pose_d() {
        let pointed = tips((0.45, 0.5), (0.5, 0.2), (0.55, 0.7), (0.6, 0.72), (0.65, 0.74));
        assert!(pose_z(&pointed, &th()));
        assert!(pose_d(&pointed, &th()));
    }

    #[test]
    fn test_pose_g_is_contained_in_pose_d() {
        let pointed = tips((0.5, 0.5), (0.45, 0.2), (0.52, 0.48), (0.55, 0.52), (0.6, 0.55));
        assert!(pose_g(&pointed, &th()));
        assert!(pose_d(&pointed, &th()));
    }

    #[test]
    fn test_pose_w_rejects_raised_pinky() {
        let three_up = tips((0.5, 0.6), (0.35, 0.22), (0.5, 0.2), (0.65, 0.25), (0.8, 0.8));
        assert!(pose_w(&three_up, &th()));

        let four_up = tips((0.5, 0.6), (0.35, 0.22), (0.5, 0.2), (0.65, 0.25), (0.8, 0.3));
        assert!(!pose_w(&four_up, &th()));
    }

    #[test]
    fn test_pose_o_allows_tips_on_opposite_sides() {
        // Every tip near the thumb without neighbouring tips touching each
        // other, which keeps the pose out of E's slot.
        let ring = tips((0.5, 0.6), (0.41, 0.6), (0.59, 0.6), (0.43, 0.57), (0.57, 0.57));
        assert!(pose_o(&ring, &th()));
        assert!(!pose_e(&ring, &th()));
    }

    #[test]
    fn test_thresholds_are_honoured() {
        // 0.15 apart: touching under a loose threshold, not under default.
        let near = tips((0.5, 0.5), (0.65, 0.5), (0.67, 0.5), (0.69, 0.5), (0.71, 0.5));
        assert!(!pose_m(&near, &th()));

        let loose = ClassifierThresholds {
            touch: 0.16,
            spread: 0.3,
        };
        assert!(pose_m(&near, &loose));
    }
}
