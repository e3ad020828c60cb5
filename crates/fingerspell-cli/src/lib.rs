//! fingerspell CLI
//!
//! Command-line interface for finger-spelling recognition over recorded
//! hand-landmark streams.
//!
//! # Features
//!
//! - **classify**: replay a stream and print the letter read from each frame
//! - **auth**: replay a stream against a passphrase until it matches
//! - **letters**: list the static letters and the poses that produce them
//! - **version**: display version information
//!
//! # Usage
//!
//! ```bash
//! # Read letters from a recorded stream
//! fingerspell classify session.jsonl
//!
//! # Pipe frames in and authenticate against a passphrase
//! cat session.jsonl | fingerspell auth - --passphrase hello
//!
//! # Replay at roughly camera rate
//! fingerspell classify session.jsonl --interval 33
//!
//! # Show the pose table
//! fingerspell letters
//! ```

use clap::{Parser, Subcommand};

pub mod replay;

/// Finger-spelling Command Line Interface
#[derive(Parser, Debug)]
#[command(name = "fingerspell")]
#[command(author, version, about = "Finger-spelling recognition over hand-landmark streams")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a landmark stream and print the letter read from each frame
    Classify(replay::ClassifyArgs),

    /// Replay a landmark stream against a passphrase until it matches
    Auth(replay::AuthArgs),

    /// List the static letters and the poses that produce them
    Letters(replay::LettersArgs),

    /// Display version information
    Version,
}
