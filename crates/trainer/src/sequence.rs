// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Training sequence of hands indices.
use ahash::{HashSet, HashSetExt};
use log::debug;
use rand::prelude::*;

use crate::{Error, Result};
use coinche_cards::{Deck, Hand};

/// The default seed for training sequences.
pub const DEFAULT_SEED: u64 = 42;

/// A sequence of hands indices over the canonical deck.
///
/// Each index appears once so walking the sequence visits each hand at most
/// once. Sequences created with [TrainingSequence::new] contain all hands and
/// are reproducible from the seed for a given `rand` version.
#[derive(Debug, Clone)]
pub struct TrainingSequence {
    deck: Deck,
    indices: Vec<u32>,
    seed: Option<u64>,
}

impl TrainingSequence {
    /// Creates a sequence with all hands shuffled using the given seed.
    pub fn new(seed: u64) -> Self {
        let deck = Deck::default();
        let count = deck.num_hands(Hand::SIZE) as u32;

        let mut indices = (0..count).collect::<Vec<_>>();
        indices.shuffle(&mut StdRng::seed_from_u64(seed));

        debug!("Created training sequence with {count} hands seed {seed}");

        Self {
            deck,
            indices,
            seed: Some(seed),
        }
    }

    /// Creates a sequence from the given hands indices.
    ///
    /// Fails if the sequence is empty or if an index is out of range or
    /// appears more than once.
    pub fn with_indices(indices: Vec<u32>) -> Result<Self> {
        if indices.is_empty() {
            return Err(Error::EmptySequence);
        }

        let deck = Deck::default();
        let count = deck.num_hands(Hand::SIZE) as u32;

        let mut seen = HashSet::with_capacity(indices.len());
        for &index in &indices {
            if index >= count {
                return Err(coinche_cards::Error::IndexOutOfRange { index, count }.into());
            }

            if !seen.insert(index) {
                return Err(Error::DuplicateIndex(index));
            }
        }

        debug!("Created training sequence with {} hands", indices.len());

        Ok(Self {
            deck,
            indices,
            seed: None,
        })
    }

    /// The seed used to shuffle this sequence.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// The number of hands in the sequence.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Checks if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The deck used to map indices to hands.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the hand index at the given position.
    pub fn index(&self, position: usize) -> Result<u32> {
        self.indices
            .get(position)
            .copied()
            .ok_or(Error::PositionOutOfRange {
                position,
                len: self.indices.len(),
            })
    }

    /// Returns the hand at the given position.
    pub fn hand(&self, position: usize) -> Result<Hand> {
        let index = self.index(position)?;
        Ok(self.deck.hand(index)?)
    }

    /// Iterates the hands indices in sequence order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.indices.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_indices() {
        let seq = TrainingSequence::with_indices(vec![5, 0, 10_518_299]).unwrap();
        assert_eq!(seq.len(), 3);
        assert_eq!(seq.seed(), None);
        assert_eq!(seq.iter().collect::<Vec<_>>(), [5, 0, 10_518_299]);
        assert_eq!(seq.index(1), Ok(0));
        assert_eq!(seq.hand(1), seq.deck().hand(0).map_err(Error::from));
        assert_eq!(
            seq.index(3),
            Err(Error::PositionOutOfRange {
                position: 3,
                len: 3
            })
        );
    }

    #[test]
    fn with_invalid_indices() {
        assert_eq!(
            TrainingSequence::with_indices(vec![]).unwrap_err(),
            Error::EmptySequence
        );
        assert_eq!(
            TrainingSequence::with_indices(vec![1, 2, 1]).unwrap_err(),
            Error::DuplicateIndex(1)
        );
        assert_eq!(
            TrainingSequence::with_indices(vec![10_518_300]).unwrap_err(),
            Error::Cards(coinche_cards::Error::IndexOutOfRange {
                index: 10_518_300,
                count: 10_518_300
            })
        );
    }

    #[test]
    fn seeded_permutation() {
        let seq = TrainingSequence::new(DEFAULT_SEED);
        assert_eq!(seq.seed(), Some(DEFAULT_SEED));
        assert_eq!(seq.len(), 10_518_300);

        // Each index appears once.
        let mut seen = vec![false; seq.len()];
        for index in seq.iter() {
            assert!(!seen[index as usize]);
            seen[index as usize] = true;
        }

        // Same seed same sequence.
        let other = TrainingSequence::new(DEFAULT_SEED);
        assert!(seq.iter().take(1_000).eq(other.iter().take(1_000)));

        // Different seed different sequence.
        let other = TrainingSequence::new(7);
        assert!(!seq.iter().take(1_000).eq(other.iter().take(1_000)));

        // Shuffled.
        assert!(!seq.iter().take(1_000).eq(0..1_000));
    }
}
