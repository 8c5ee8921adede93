// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Coinche training sequences.
//!
//! A training sequence is a seeded permutation of all hands indices, a
//! [Trainer] walks the sequence so that each hand is presented once per pass:
//!
//! ```no_run
//! # use coinche_trainer::{Config, Trainer};
//! let mut trainer = Trainer::new(Config::default()).unwrap();
//! let first = trainer.hand().unwrap();
//! let second = trainer.next_hand().unwrap();
//! assert_ne!(first, second);
//! ```
//!
//! The trainer state is a [TrainingSession] that callers can store and use
//! later to resume training from the same position, sessions over explicit
//! sequences have no seed and cannot be resumed.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use thiserror::Error;

pub mod sequence;
pub use sequence::TrainingSequence;

pub mod trainer;
pub use trainer::{Config, Trainer, TrainingSession};

/// Reexport cards types.
pub use coinche_cards as cards;

/// Training errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cards error.
    #[error(transparent)]
    Cards(#[from] cards::Error),
    /// A position past the end of the training sequence.
    #[error("training position {position} out of range, must be less than {len}")]
    PositionOutOfRange {
        /// The requested position.
        position: usize,
        /// The sequence length.
        len: usize,
    },
    /// An index that appears twice in a training sequence.
    #[error("duplicate hand index {0} in training sequence")]
    DuplicateIndex(u32),
    /// A session over an explicit sequence that cannot be rebuilt from a seed.
    #[error("training session has no seed")]
    UnseededSession,
    /// A training sequence with no hands.
    #[error("empty training sequence")]
    EmptySequence,
}

/// Training result type.
pub type Result<T> = std::result::Result<T, Error>;
