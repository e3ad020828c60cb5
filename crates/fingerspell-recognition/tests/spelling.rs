//! End-to-end tests over the classifier and both frame consumers.

use fingerspell_core::{
    FrameSink, Hand, HandJoint, HandSelection, Landmark, Letter, Passphrase, Resettable,
    HAND_LANDMARK_COUNT,
};
use fingerspell_recognition::{
    AuthenticatorConfig, ContinuousDetector, DetectorConfig, RuleClassifier,
    SequenceAuthenticator, SessionState,
};

fn hand_with_tips(
    thumb: (f32, f32),
    index: (f32, f32),
    middle: (f32, f32),
    ring: (f32, f32),
    pinky: (f32, f32),
) -> Hand {
    let mut landmarks = [Landmark::new(0.5, 0.9); HAND_LANDMARK_COUNT];
    landmarks[HandJoint::ThumbTip as usize] = Landmark::new(thumb.0, thumb.1);
    landmarks[HandJoint::IndexTip as usize] = Landmark::new(index.0, index.1);
    landmarks[HandJoint::MiddleTip as usize] = Landmark::new(middle.0, middle.1);
    landmarks[HandJoint::RingTip as usize] = Landmark::new(ring.0, ring.1);
    landmarks[HandJoint::PinkyTip as usize] = Landmark::new(pinky.0, pinky.1);
    Hand::new(landmarks)
}

fn hand_a() -> Hand {
    hand_with_tips((0.5, 0.1), (0.4, 0.5), (0.5, 0.5), (0.6, 0.5), (0.7, 0.5))
}

fn hand_b() -> Hand {
    hand_with_tips((0.5, 0.9), (0.4, 0.3), (0.5, 0.3), (0.6, 0.3), (0.7, 0.3))
}

fn hand_h() -> Hand {
    hand_with_tips((0.5, 0.6), (0.3, 0.25), (0.7, 0.2), (0.55, 0.8), (0.65, 0.8))
}

fn hand_i() -> Hand {
    hand_with_tips((0.5, 0.6), (0.3, 0.65), (0.45, 0.5), (0.55, 0.5), (0.8, 0.15))
}

/// Poses with no matching rule: five tips level and spread out.
fn hand_unreadable() -> Hand {
    hand_with_tips((0.1, 0.5), (0.3, 0.5), (0.5, 0.5), (0.7, 0.5), (0.9, 0.5))
}

/// One representative hand per letter the cascade can reach directly.
fn reference_poses() -> Vec<(Letter, Hand)> {
    vec![
        (Letter::A, hand_a()),
        (Letter::B, hand_b()),
        (
            Letter::C,
            hand_with_tips((0.2, 0.5), (0.5, 0.47), (0.52, 0.47), (0.54, 0.54), (0.56, 0.61)),
        ),
        (
            Letter::D,
            hand_with_tips((0.45, 0.5), (0.5, 0.2), (0.55, 0.7), (0.6, 0.72), (0.65, 0.74)),
        ),
        (
            Letter::E,
            hand_with_tips((0.5, 0.5), (0.52, 0.5), (0.54, 0.5), (0.56, 0.5), (0.58, 0.5)),
        ),
        (
            Letter::F,
            hand_with_tips((0.5, 0.55), (0.52, 0.57), (0.5, 0.2), (0.55, 0.3), (0.6, 0.35)),
        ),
        (Letter::H, hand_h()),
        (Letter::I, hand_i()),
        (
            Letter::K,
            hand_with_tips((0.5, 0.6), (0.3, 0.25), (0.7, 0.2), (0.55, 0.5), (0.65, 0.8)),
        ),
        (
            Letter::L,
            hand_with_tips((0.3, 0.3), (0.5, 0.3), (0.55, 0.8), (0.6, 0.6), (0.65, 0.55)),
        ),
        (
            Letter::M,
            hand_with_tips((0.5, 0.55), (0.52, 0.5), (0.54, 0.45), (0.56, 0.4), (0.7, 0.58)),
        ),
        (
            Letter::N,
            hand_with_tips((0.5, 0.55), (0.52, 0.5), (0.54, 0.45), (0.75, 0.45), (0.8, 0.57)),
        ),
        (
            Letter::O,
            hand_with_tips((0.5, 0.6), (0.41, 0.6), (0.59, 0.6), (0.43, 0.57), (0.57, 0.57)),
        ),
        (
            Letter::R,
            hand_with_tips((0.5, 0.6), (0.48, 0.25), (0.52, 0.2), (0.55, 0.7), (0.6, 0.55)),
        ),
        (
            Letter::W,
            hand_with_tips((0.5, 0.6), (0.35, 0.22), (0.5, 0.2), (0.65, 0.25), (0.8, 0.8)),
        ),
        (
            Letter::X,
            hand_with_tips((0.4, 0.62), (0.62, 0.64), (0.5, 0.2), (0.55, 0.66), (0.6, 0.65)),
        ),
        (
            Letter::Y,
            hand_with_tips((0.3, 0.3), (0.5, 0.8), (0.55, 0.6), (0.6, 0.6), (0.8, 0.3)),
        ),
    ]
}

fn drive<S: FrameSink>(sink: &mut S, frames: &[Vec<Hand>]) -> Vec<S::Reading> {
    frames.iter().map(|hands| sink.observe_frame(hands)).collect()
}

#[test]
fn classifies_reference_poses() {
    let classifier = RuleClassifier::default();
    for (expected, hand) in reference_poses() {
        assert_eq!(
            classifier.classify(&hand),
            Some(expected),
            "pose for {expected} was not read back"
        );
    }
}

#[test]
fn classification_is_pure_and_deterministic() {
    let classifier = RuleClassifier::default();
    for (_, hand) in reference_poses() {
        assert_eq!(classifier.classify(&hand), classifier.classify(&hand));
    }
}

#[test]
fn unreadable_pose_is_none() {
    let classifier = RuleClassifier::default();
    assert_eq!(classifier.classify(&hand_unreadable()), None);
}

#[test]
fn nan_landmarks_read_as_nothing() {
    let classifier = RuleClassifier::default();
    let hand = Hand::new([Landmark::new(f32::NAN, f32::NAN); HAND_LANDMARK_COUNT]);
    assert_eq!(classifier.classify(&hand), None);
}

#[test]
fn malformed_landmark_slices_are_skipped() {
    let classifier = RuleClassifier::default();
    assert_eq!(classifier.classify_landmarks(&[]), None);
    assert_eq!(
        classifier.classify_landmarks(&[Landmark::new(0.5, 0.5); 7]),
        None
    );
}

// The cascade resolves overlapping poses by order. These inputs satisfy a
// later rule as well; the earlier letter must win.

#[test]
fn spread_fingers_read_as_k_not_v() {
    let classifier = RuleClassifier::default();
    let hand = hand_with_tips((0.5, 0.6), (0.3, 0.25), (0.7, 0.2), (0.55, 0.5), (0.65, 0.8));
    assert_eq!(classifier.classify(&hand), Some(Letter::K));
}

#[test]
fn closed_fist_reads_as_e_not_s() {
    let classifier = RuleClassifier::default();
    let hand = hand_with_tips((0.5, 0.5), (0.52, 0.5), (0.54, 0.5), (0.56, 0.5), (0.58, 0.5));
    assert_eq!(classifier.classify(&hand), Some(Letter::E));
}

#[test]
fn pointed_index_reads_as_d_not_z() {
    let classifier = RuleClassifier::default();
    let hand = hand_with_tips((0.45, 0.5), (0.5, 0.2), (0.55, 0.7), (0.6, 0.72), (0.65, 0.74));
    assert_eq!(classifier.classify(&hand), Some(Letter::D));
}

#[test]
fn raised_thumb_reads_as_a_not_p() {
    let classifier = RuleClassifier::default();
    assert_eq!(classifier.classify(&hand_a()), Some(Letter::A));
}

#[test]
fn detector_follows_the_stream() {
    let mut detector = ContinuousDetector::default_config();

    let readings = drive(
        &mut detector,
        &[
            vec![hand_a()],
            vec![hand_a()],
            vec![],
            vec![hand_b()],
            vec![hand_unreadable()],
        ],
    );

    let letters: Vec<_> = readings.iter().map(|r| r.letter).collect();
    assert_eq!(
        letters,
        vec![
            Some(Letter::A),
            Some(Letter::A),
            None,
            Some(Letter::B),
            None
        ]
    );
    let presence: Vec<_> = readings.iter().map(|r| r.hand_present).collect();
    assert_eq!(presence, vec![true, true, false, true, true]);

    let stats = detector.stats();
    assert_eq!(stats.frames_observed, 5);
    assert_eq!(stats.frames_with_hand, 4);
    assert_eq!(stats.frames_classified, 3);
}

#[test]
fn authentication_flow_over_a_real_spelling() {
    let config = AuthenticatorConfig::new(Passphrase::parse("hi").unwrap());
    let mut auth = SequenceAuthenticator::new(config);

    let readings = drive(
        &mut auth,
        &[
            vec![hand_h()],
            vec![hand_h()],
            vec![],
            vec![hand_i()],
        ],
    );

    assert_eq!(readings[0].sequence, "H");
    assert!((readings[0].progress - 50.0).abs() < 1e-9);
    assert_eq!(readings[1].sequence, "H");
    assert!(!readings[2].hand_present);
    assert!(readings[3].just_matched);
    assert_eq!(readings[3].sequence, "HI");
    assert_eq!(readings[3].state, SessionState::Matched);
    assert!(auth.is_authenticated());
}

#[test]
fn empty_frames_clear_display_but_not_sequence() {
    let mut detector = ContinuousDetector::default_config();
    let mut auth = SequenceAuthenticator::new(AuthenticatorConfig::new(
        Passphrase::parse("ab").unwrap(),
    ));

    for hands in [vec![hand_a()], vec![]] {
        detector.observe_frame(&hands);
        auth.observe_frame(&hands);
    }

    assert_eq!(detector.current_letter(), None);
    assert_eq!(auth.sequence_string(), "A");
}

#[test]
fn both_policies_honour_hand_selection() {
    let frame = vec![vec![hand_a(), hand_b()]];

    let mut detector = ContinuousDetector::new(DetectorConfig {
        selection: HandSelection::Last,
        ..DetectorConfig::default()
    })
    .unwrap();
    assert_eq!(drive(&mut detector, &frame)[0].letter, Some(Letter::B));

    let mut auth = SequenceAuthenticator::new(AuthenticatorConfig {
        passphrase: Passphrase::parse("a").unwrap(),
        selection: HandSelection::First,
    });
    assert!(drive(&mut auth, &frame)[0].just_matched);
}

#[test]
fn reset_reuses_both_consumers() {
    let mut detector = ContinuousDetector::default_config();
    let mut auth = SequenceAuthenticator::new(AuthenticatorConfig::new(
        Passphrase::parse("a").unwrap(),
    ));

    detector.observe_frame(&[hand_a()]);
    auth.observe_frame(&[hand_a()]);
    assert!(auth.is_authenticated());

    detector.reset();
    auth.reset();

    assert_eq!(detector.stats().frames_observed, 0);
    assert_eq!(auth.state(), SessionState::AwaitingInput);
    assert!(auth.observe_frame(&[hand_a()]).just_matched);
}
