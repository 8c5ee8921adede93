// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Coinche hand type and storage keys.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Card, Deck, Error, Rank, Result, Suit, ksubset, order};

/// A Coinche hand.
///
/// An unordered set of [Hand::SIZE] distinct cards, two hands with the same
/// cards are equal regardless of the order used to build them. The ordered
/// view used for display and storage is given by [Hand::ordered].
///
/// A hand storage key is the comma separated list of the ordered cards stems:
///
/// ```
/// # use coinche_cards::Hand;
/// let hand = "spades_ace,hearts_7,clubs_jack,hearts_8,diamonds_king,clubs_9,spades_queen,clubs_10"
///     .parse::<Hand>()
///     .unwrap();
///
/// assert_eq!(
///     hand.to_key(),
///     "clubs_jack,clubs_10,clubs_9,diamonds_king,spades_ace,spades_queen,hearts_8,hearts_7"
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hand {
    // Bit i set for the card with canonical index i.
    mask: u32,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 8;

    /// Creates a hand, fails if the cards are not 8 distinct cards.
    pub fn new(cards: &[Card]) -> Result<Self> {
        if cards.len() != Self::SIZE {
            return Err(Error::InvalidHandSize(cards.len()));
        }

        let mut mask = 0u32;
        for card in cards {
            let bit = 1 << card.index();
            if mask & bit != 0 {
                return Err(Error::DuplicateCard(*card));
            }

            mask |= bit;
        }

        Ok(Self { mask })
    }

    /// Returns the hand with the given combination index over the deck cards.
    pub fn from_index(deck: &Deck, index: u32) -> Result<Self> {
        let positions = ksubset::unrank(index, Self::SIZE, deck.count())?;
        let cards = positions
            .into_iter()
            .map(|pos| deck.cards()[pos])
            .collect::<Vec<_>>();
        Self::new(&cards)
    }

    /// Returns this hand combination index over the deck cards.
    pub fn index(&self, deck: &Deck) -> Result<u32> {
        let mut positions = Vec::with_capacity(Self::SIZE);
        for card in self.cards() {
            let pos = deck.position(card).ok_or(Error::CardNotInDeck(card))?;
            positions.push(pos);
        }

        positions.sort_unstable();
        ksubset::rank(&positions, deck.count())
    }

    /// Parses a hand storage key, the cards can be in any order.
    pub fn from_key(key: &str) -> Result<Self> {
        let cards = key
            .split(',')
            .map(|s| s.trim().parse::<Card>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(&cards)
    }

    /// Returns this hand storage key.
    pub fn to_key(&self) -> String {
        self.ordered()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Iterates the hand cards in canonical order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        (0..Deck::SIZE)
            .filter(|idx| self.mask & (1 << idx) != 0)
            .filter_map(Card::from_index)
    }

    /// Checks if the hand has the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.mask & (1 << card.index()) != 0
    }

    /// Returns the hand cards in display order.
    pub fn ordered(&self) -> [Card; Self::SIZE] {
        let mut out = [Card::new(Rank::Seven, Suit::Hearts); Self::SIZE];
        let cards = self.cards().collect::<Vec<_>>();
        for (slot, card) in out.iter_mut().zip(order::order_cards(&cards)) {
            *slot = card;
        }

        out
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_key())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand({})", self.to_key())
    }
}

impl FromStr for Hand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_key(s)
    }
}

impl TryFrom<String> for Hand {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        Self::from_key(&s)
    }
}

impl From<Hand> for String {
    fn from(hand: Hand) -> Self {
        hand.to_key()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::prelude::*;

    const KEY: &str =
        "clubs_jack,clubs_10,clubs_9,diamonds_king,spades_ace,spades_queen,hearts_8,hearts_7";

    #[test]
    fn key_is_order_independent() {
        let hand = Hand::from_key(KEY).unwrap();
        assert_eq!(hand.to_key(), KEY);
        assert_eq!(hand.to_string(), KEY);

        let mut stems = KEY.split(',').collect::<Vec<_>>();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            stems.shuffle(&mut rng);
            let other = stems.join(", ").parse::<Hand>().unwrap();
            assert_eq!(other, hand);
            assert_eq!(other.to_key(), KEY);
        }
    }

    #[test]
    fn key_errors() {
        assert_eq!(Hand::from_key(""), Err(Error::InvalidCard(String::new())));
        assert_eq!(
            Hand::from_key("hearts_7,hearts_1"),
            Err(Error::InvalidCard("hearts_1".to_string()))
        );
        assert_eq!(
            Hand::from_key("hearts_7,hearts_8"),
            Err(Error::InvalidHandSize(2))
        );

        let dup = KEY.replace("clubs_9", "clubs_10");
        assert_eq!(
            Hand::from_key(&dup),
            Err(Error::DuplicateCard(Card::new(Rank::Ten, Suit::Clubs)))
        );
    }

    #[test]
    fn hand_index() {
        let deck = Deck::default();

        let first = deck.hand(0).unwrap();
        assert!(first.cards().all(|c| c.suit() == Suit::Hearts));
        assert_eq!(first.index(&deck), Ok(0));

        let last = deck.hand(10_518_299).unwrap();
        assert!(last.cards().all(|c| c.suit() == Suit::Clubs));
        assert_eq!(last.index(&deck), Ok(10_518_299));

        assert!(deck.hand(10_518_300).is_err());

        let hand = Hand::from_key(KEY).unwrap();
        let index = hand.index(&deck).unwrap();
        assert_eq!(deck.hand(index), Ok(hand));
    }

    #[test]
    fn distinct_indices_distinct_hands() {
        let deck = Deck::default();
        let mut hands = HashSet::default();

        for index in (0..10_518_300).step_by(997) {
            let hand = deck.hand(index).unwrap();
            assert_eq!(hand.cards().count(), Hand::SIZE);
            assert!(hands.insert(hand));
        }
    }

    #[test]
    fn index_over_smaller_deck() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Hearts));

        let hand = deck.hand(0).unwrap();
        assert!(!hand.contains(Card::new(Rank::Ace, Suit::Hearts)));
        assert!(hand.contains(Card::new(Rank::Seven, Suit::Diamonds)));
        assert_eq!(hand.index(&deck), Ok(0));

        let with_ace = Deck::default().hand(0).unwrap();
        assert_eq!(
            with_ace.index(&deck),
            Err(Error::CardNotInDeck(Card::new(Rank::Ace, Suit::Hearts)))
        );
    }

    #[test]
    fn hand_serde() {
        let hand = Hand::from_key(KEY).unwrap();
        let json = serde_json::to_string(&hand).unwrap();
        assert_eq!(json, format!("\"{KEY}\""));
        assert_eq!(serde_json::from_str::<Hand>(&json).unwrap(), hand);
        assert!(serde_json::from_str::<Hand>("\"hearts_7\"").is_err());
    }
}
