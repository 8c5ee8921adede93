// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards error types.
use thiserror::Error;

use crate::{Card, Hand, ksubset};

/// Cards errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A combination index past the last combination.
    #[error("combination index {index} out of range, must be less than {count}")]
    IndexOutOfRange {
        /// The requested index.
        index: u32,
        /// The number of combinations.
        count: u32,
    },
    /// Subset or universe size not supported.
    #[error("invalid subset size k={k} n={n}, must be 0 <= k <= n, n <= {max_n}, k <= {max_k}",
        max_n = ksubset::MAX_N, max_k = ksubset::MAX_K)]
    InvalidSubsetSize {
        /// The universe size.
        n: usize,
        /// The subset size.
        k: usize,
    },
    /// A subset that is not strictly increasing or outside the universe.
    #[error("invalid subset {0:?}")]
    InvalidSubset(Vec<usize>),
    /// A hand with the wrong number of cards.
    #[error("a hand must have {size} cards, got {0}", size = Hand::SIZE)]
    InvalidHandSize(usize),
    /// A card that appears more than once in a hand.
    #[error("duplicate card {0} in hand")]
    DuplicateCard(Card),
    /// A hand card that is not in the deck used for indexing.
    #[error("card {0} is not in the deck")]
    CardNotInDeck(Card),
    /// A string that is not a card stem.
    #[error("invalid card '{0}'")]
    InvalidCard(String),
}

/// Cards result type.
pub type Result<T> = std::result::Result<T, Error>;
