//! Stream replay commands.
//!
//! Frames arrive as JSON Lines: each line is one frame, a JSON array of
//! hands, each hand an array of landmark objects `{"x", "y", "z"?}`. A hand
//! without exactly 21 landmarks is dropped with a warning; the rest of the
//! frame is still processed.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};
use tracing::warn;

use fingerspell_core::{Hand, HandSelection, Landmark, Passphrase};
use fingerspell_recognition::{
    rules, AuthenticatorConfig, ClassifierThresholds, ContinuousDetector, DetectorConfig,
    DetectorReading, DetectorStats, RuleClassifier, SequenceAuthenticator,
};

/// Which hand to read when a frame contains several.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HandPick {
    /// First detected hand.
    #[default]
    First,
    /// Last detected hand.
    Last,
}

impl From<HandPick> for HandSelection {
    fn from(pick: HandPick) -> Self {
        match pick {
            HandPick::First => Self::First,
            HandPick::Last => Self::Last,
        }
    }
}

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// JSON, one object per reading.
    Json,
}

/// Options shared by the stream commands.
#[derive(Args, Debug)]
pub struct StreamArgs {
    /// Path to a JSONL landmark stream, or '-' for stdin
    pub input: PathBuf,

    /// Milliseconds to wait between frames (0 replays as fast as possible)
    #[arg(long, default_value_t = 0)]
    pub interval: u64,

    /// Distance below which two fingertips touch, in normalized units
    #[arg(long, default_value_t = fingerspell_core::DEFAULT_TOUCH_DISTANCE)]
    pub touch: f32,

    /// Distance above which two fingertips are spread, in normalized units
    #[arg(long, default_value_t = fingerspell_core::DEFAULT_SPREAD_DISTANCE)]
    pub spread: f32,

    /// Which hand to read when a frame contains several
    #[arg(long, value_enum, default_value_t = HandPick::First)]
    pub hand: HandPick,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `classify` command.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    #[command(flatten)]
    pub stream: StreamArgs,
}

/// Arguments for the `auth` command.
#[derive(Args, Debug)]
pub struct AuthArgs {
    /// Passphrase the spelled sequence must end with
    #[arg(long)]
    pub passphrase: String,

    #[command(flatten)]
    pub stream: StreamArgs,
}

/// Arguments for the `letters` command.
#[derive(Args, Debug)]
pub struct LettersArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Execute the classify command.
pub async fn execute_classify(args: ClassifyArgs) -> Result<()> {
    let thresholds = ClassifierThresholds::new(args.stream.touch, args.stream.spread)?;
    let mut detector = ContinuousDetector::new(DetectorConfig {
        thresholds,
        selection: args.stream.hand.into(),
    })?;

    let frames = read_frames(&args.stream.input)?;
    for (index, hands) in frames.iter().enumerate() {
        pace(args.stream.interval).await;
        let reading = detector.observe_frame(hands);
        print_detector_reading(index, &reading, args.stream.format)?;
    }

    if args.stream.format == OutputFormat::Text {
        print_classify_summary(&detector.stats());
    }
    Ok(())
}

/// Execute the auth command.
pub async fn execute_auth(args: AuthArgs) -> Result<()> {
    let passphrase = Passphrase::parse(&args.passphrase)?;
    let target = passphrase.to_string();
    let classifier =
        RuleClassifier::new(ClassifierThresholds::new(args.stream.touch, args.stream.spread)?)?;
    let mut auth = SequenceAuthenticator::with_classifier(
        AuthenticatorConfig {
            passphrase,
            selection: args.stream.hand.into(),
        },
        classifier,
    );

    let frames = read_frames(&args.stream.input)?;
    let mut matched_frame = None;
    let mut accepted = 0;

    for (index, hands) in frames.iter().enumerate() {
        pace(args.stream.interval).await;
        let reading = auth.observe_frame(hands);

        match args.stream.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&reading)?),
            OutputFormat::Text => {
                if reading.sequence.len() > accepted {
                    if let Some(letter) = reading.letter {
                        println!(
                            "{} frame {:>5}  accepted {}  sequence \"{}\"  progress {:>3.0}%",
                            "[+]".green().bold(),
                            index,
                            letter.to_string().cyan().bold(),
                            reading.sequence,
                            reading.progress
                        );
                    }
                }
            }
        }
        accepted = reading.sequence.len();

        if reading.just_matched {
            matched_frame = Some(index);
            break;
        }
    }

    match matched_frame {
        Some(index) => {
            if args.stream.format == OutputFormat::Text {
                println!(
                    "{} passphrase {} matched on frame {} after {} letters",
                    "[OK]".green().bold(),
                    target.cyan().bold(),
                    index,
                    auth.sequence().len()
                );
            }
            Ok(())
        }
        None => bail!(
            "stream ended without matching the passphrase (sequence \"{}\", progress {:.0}%)",
            auth.sequence_string(),
            auth.progress()
        ),
    }
}

/// Execute the letters command.
pub fn execute_letters(args: LettersArgs) -> Result<()> {
    let rows = letter_rows();
    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => {
            println!("{}", Table::new(rows).with(Style::rounded()));
            println!("{}", "J is not listed: its sign is a motion.".dimmed());
        }
    }
    Ok(())
}

/// One row of the letter table.
#[derive(Tabled, serde::Serialize)]
pub struct LetterRow {
    /// The letter.
    #[tabled(rename = "Letter")]
    pub letter: char,
    /// The pose that produces it.
    #[tabled(rename = "Pose")]
    pub pose: &'static str,
}

fn letter_rows() -> Vec<LetterRow> {
    rules()
        .iter()
        .map(|rule| LetterRow {
            letter: rule.letter().as_char(),
            pose: rule.description(),
        })
        .collect()
}

fn print_detector_reading(
    index: usize,
    reading: &DetectorReading,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(reading)?),
        OutputFormat::Text => match (reading.hand_present, reading.letter) {
            (true, Some(letter)) => println!(
                "{} frame {:>5}  {}",
                "[OK]".green().bold(),
                index,
                letter.to_string().cyan().bold()
            ),
            (true, None) => println!(
                "{} frame {:>5}  {}",
                "[??]".yellow().bold(),
                index,
                "no letter".dimmed()
            ),
            (false, _) => println!(
                "{} frame {:>5}  {}",
                "[--]".dimmed(),
                index,
                "no hand".dimmed()
            ),
        },
    }
    Ok(())
}

fn print_classify_summary(stats: &DetectorStats) {
    println!();
    println!(
        "{} {} frames, {} with a hand, {} letters read ({:.1}% of frames)",
        "[DONE]".green().bold(),
        stats.frames_observed,
        stats.frames_with_hand,
        stats.frames_classified,
        stats.classification_rate * 100.0
    );
}

async fn pace(interval_ms: u64) {
    if interval_ms > 0 {
        tokio::time::sleep(Duration::from_millis(interval_ms)).await;
    }
}

/// Read every frame from a JSONL stream, `-` meaning stdin.
pub fn read_frames(path: &Path) -> Result<Vec<Vec<Hand>>> {
    if path.as_os_str() == "-" {
        parse_frames(io::stdin().lock())
    } else {
        let file =
            File::open(path).with_context(|| format!("opening {}", path.display()))?;
        parse_frames(BufReader::new(file))
    }
}

fn parse_frames(reader: impl BufRead) -> Result<Vec<Vec<Hand>>> {
    let mut frames = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line.context("reading landmark stream")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let raw: Vec<Vec<Landmark>> = serde_json::from_str(trimmed)
            .with_context(|| format!("parsing frame on line {}", number + 1))?;
        let mut hands = Vec::with_capacity(raw.len());
        for landmarks in &raw {
            match Hand::from_landmarks(landmarks) {
                Ok(hand) => hands.push(hand),
                Err(err) => warn!(line = number + 1, %err, "dropping malformed hand"),
            }
        }
        frames.push(hands);
    }
    Ok(frames)
}
