// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Training session state.
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{Error, Result, TrainingSequence, sequence::DEFAULT_SEED};
use coinche_cards::Hand;

/// The trainer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// The seed used to shuffle the hands.
    pub seed: u64,
    /// The first position in the training sequence.
    pub start: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            start: 0,
        }
    }
}

/// The state of a training session.
///
/// The session only stores the position in the sequence, the hands are
/// computed on demand from the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// The seed of the sequence used by this session, `None` for explicit
    /// sequences.
    pub seed: Option<u64>,
    /// The current position in the sequence.
    pub position: usize,
}

impl TrainingSession {
    /// Creates a session at the start of a seeded sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            position: 0,
        }
    }

    fn check_position(&self, seq: &TrainingSequence) -> Result<()> {
        if self.position >= seq.len() {
            Err(Error::PositionOutOfRange {
                position: self.position,
                len: seq.len(),
            })
        } else {
            Ok(())
        }
    }

    /// Returns the hand at the current position.
    pub fn current(&self, seq: &TrainingSequence) -> Result<Hand> {
        seq.hand(self.position)
    }

    /// Moves to the next position, wrapping after the last one.
    ///
    /// Fails without moving if the current position is not in the sequence.
    pub fn advance(&mut self, seq: &TrainingSequence) -> Result<Hand> {
        self.check_position(seq)?;

        self.position = (self.position + 1) % seq.len();
        self.current(seq)
    }

    /// Moves to the given position.
    pub fn jump(&mut self, seq: &TrainingSequence, position: usize) -> Result<Hand> {
        let hand = seq.hand(position)?;
        self.position = position;
        Ok(hand)
    }
}

/// A trainer that walks a training sequence.
#[derive(Debug)]
pub struct Trainer {
    sequence: TrainingSequence,
    session: TrainingSession,
}

impl Trainer {
    /// Creates a trainer with a new sequence from the config.
    ///
    /// Fails if the start position is past the end of the sequence.
    pub fn new(config: Config) -> Result<Self> {
        let session = TrainingSession {
            seed: Some(config.seed),
            position: config.start,
        };

        Self::from_session(session)
    }

    /// Creates a trainer that resumes a session.
    ///
    /// Fails if the session has no seed or its position is past the end of
    /// the sequence.
    pub fn from_session(session: TrainingSession) -> Result<Self> {
        let seed = session.seed.ok_or(Error::UnseededSession)?;
        let sequence = TrainingSequence::new(seed);
        session.check_position(&sequence)?;

        Ok(Self { sequence, session })
    }

    /// Creates a trainer with the given sequence.
    pub fn with_sequence(sequence: TrainingSequence) -> Self {
        let session = TrainingSession {
            seed: sequence.seed(),
            position: 0,
        };

        Self { sequence, session }
    }

    /// The current session state.
    pub fn session(&self) -> TrainingSession {
        self.session
    }

    /// The training sequence.
    pub fn sequence(&self) -> &TrainingSequence {
        &self.sequence
    }

    /// Returns the current hand.
    pub fn hand(&self) -> Result<Hand> {
        self.session.current(&self.sequence)
    }

    /// Moves to the next hand.
    pub fn next_hand(&mut self) -> Result<Hand> {
        let hand = self.session.advance(&self.sequence)?;
        debug!("Training position {}", self.session.position);
        Ok(hand)
    }

    /// Moves to the hand at the given position.
    pub fn jump(&mut self, position: usize) -> Result<Hand> {
        let hand = self.session.jump(&self.sequence, position)?;
        debug!("Training position {position}");
        Ok(hand)
    }
}
