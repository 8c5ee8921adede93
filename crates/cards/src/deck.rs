// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Coinche cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{Error, Hand, Result, ksubset};

/// A Coinche card.
///
/// A card is represented by its position in the canonical deck order, suits
/// first and ranks second:
///
/// ```text
///   +--------+
///   |xxxssrrr|
///   +--------+
///   r = rank of card (seven=0,eight=1,nine=2,ten=3,...,ace=7)
///   s = suit of card (hearts=0,diamonds=1,spades=2,clubs=3)
/// ```
///
/// Cards are displayed and serialized using their stem, for example
/// `hearts_7` or `spades_ace`.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Card(u8);

impl Card {
    /// Create a card given a suit and rank.
    pub fn new(rank: Rank, suit: Suit) -> Card {
        Self(((suit as u8) << 3) | rank as u8)
    }

    /// Creates a card from its position in the canonical deck.
    pub fn from_index(index: usize) -> Option<Card> {
        (index < Deck::SIZE).then_some(Self(index as u8))
    }

    /// This card position in the canonical deck.
    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        match self.0 >> 3 {
            0 => Suit::Hearts,
            1 => Suit::Diamonds,
            2 => Suit::Spades,
            3 => Suit::Clubs,
            _ => panic!("Invalid suit value 0x{:x}", self.0),
        }
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        match self.0 & 0x7 {
            0 => Rank::Seven,
            1 => Rank::Eight,
            2 => Rank::Nine,
            3 => Rank::Ten,
            4 => Rank::Jack,
            5 => Rank::Queen,
            6 => Rank::King,
            _ => Rank::Ace,
        }
    }

    /// Returns the card color.
    pub fn color(&self) -> Color {
        self.suit().color()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.suit(), self.rank())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}_{})", self.suit(), self.rank())
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidCard(s.to_string());
        let (suit, rank) = s.split_once('_').ok_or_else(invalid)?;
        let suit = Suit::suits().find(|x| x.name() == suit).ok_or_else(invalid)?;
        let rank = Rank::ranks().find(|x| x.name() == rank).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

impl TryFrom<String> for Card {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Card> for String {
    fn from(card: Card) -> Self {
        card.to_string()
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Seven
    Seven = 0,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [Seven, Eight, Nine, Ten, Jack, Queen, King, Ace].into_iter()
    }

    /// The rank name used in card stems.
    pub fn name(&self) -> &'static str {
        match self {
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "jack",
            Rank::Queen => "queen",
            Rank::King => "king",
            Rank::Ace => "ace",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts suit.
    Hearts = 0,
    /// Diamonds suit.
    Diamonds,
    /// Spades suit.
    Spades,
    /// Clubs suit.
    Clubs,
}

impl Suit {
    /// Returns all suits in canonical order.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs].into_iter()
    }

    /// The suit name used in card stems.
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "hearts",
            Suit::Diamonds => "diamonds",
            Suit::Spades => "spades",
            Suit::Clubs => "clubs",
        }
    }

    /// The suit symbol.
    pub fn symbol(&self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }

    /// Returns the suit color.
    pub fn color(&self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Suit color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// Hearts and diamonds.
    Red,
    /// Spades and clubs.
    Black,
}

impl Color {
    /// The suits of this color in their fixed order.
    pub fn suits(&self) -> [Suit; 2] {
        match self {
            Color::Red => [Suit::Hearts, Suit::Diamonds],
            Color::Black => [Suit::Spades, Suit::Clubs],
        }
    }

    /// The other color.
    pub fn other(&self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

/// A cards Deck.
///
/// The default deck holds the 32 cards in canonical order, this order is the
/// basis for hands indices and must not change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 32;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deals a hand from the deck.
    pub fn deal_hand(&mut self) -> Result<Hand> {
        if self.cards.len() < Hand::SIZE {
            return Err(Error::InvalidHandSize(self.cards.len()));
        }

        let cards = self.cards.split_off(self.cards.len() - Hand::SIZE);
        Hand::new(&cards)
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// The deck cards in order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at the given position.
    pub fn card(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// Returns the position of a card in this deck.
    pub fn position(&self, card: Card) -> Option<usize> {
        self.cards.iter().position(|c| c == &card)
    }

    /// Number of k-cards hands in this deck.
    pub fn num_hands(&self, k: usize) -> usize {
        if k > ksubset::MAX_K || self.cards.len() > ksubset::MAX_N {
            0
        } else {
            ksubset::nck(self.cards.len(), k) as usize
        }
    }

    /// Returns the hand with the given combination index.
    pub fn hand(&self, index: u32) -> Result<Hand> {
        Hand::from_index(self, index)
    }

    /// Calls the `f` closure for each k-cards hand in combination index order.
    pub fn for_each<F>(&self, k: usize, mut f: F) -> Result<()>
    where
        F: FnMut(&[Card]),
    {
        let n = self.cards.len();
        if k == 0 || k > n {
            return Ok(());
        }

        let count = self.num_hands(k);
        let mut h = vec![Card::new(Rank::Ace, Suit::Hearts); k];
        ksubset::for_each_ksubset(n, k, 0, count, |p| {
            for (idx, &pos) in p.iter().enumerate() {
                h[idx] = self.cards[pos];
            }

            f(&h);
        })
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            assert_eq!(card.index() & 0x7, card.rank() as usize);
            assert_eq!(card.index() >> 3, card.suit() as usize);
            assert_eq!(Card::from_index(card.index()), Some(card));
            cards.insert(card.index());
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(Card::from_index(Deck::SIZE), None);
    }

    #[test]
    fn canonical_order() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        for (idx, card) in deck.cards().iter().enumerate() {
            assert_eq!(card.index(), idx);
        }

        assert_eq!(deck.card(0), Some(Card::new(Rank::Seven, Suit::Hearts)));
        assert_eq!(deck.card(7), Some(Card::new(Rank::Ace, Suit::Hearts)));
        assert_eq!(deck.card(8), Some(Card::new(Rank::Seven, Suit::Diamonds)));
        assert_eq!(deck.card(31), Some(Card::new(Rank::Ace, Suit::Clubs)));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "diamonds_king");

        let c = Card::new(Rank::Ten, Suit::Spades);
        assert_eq!(c.to_string(), "spades_10");

        let c = Card::new(Rank::Seven, Suit::Hearts);
        assert_eq!(c.to_string(), "hearts_7");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.to_string(), "clubs_ace");
    }

    #[test]
    fn card_from_str() {
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>(), Ok(card));
        }

        for s in ["", "hearts", "hearts_", "_7", "hearts_6", "hearts_Ace", "stars_7"] {
            assert_eq!(s.parse::<Card>(), Err(Error::InvalidCard(s.to_string())));
        }
    }

    #[test]
    fn card_serde() {
        let card = Card::new(Rank::Queen, Suit::Clubs);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, "\"clubs_queen\"");
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
        assert!(serde_json::from_str::<Card>("\"clubs_2\"").is_err());
    }

    #[test]
    fn colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
        assert_eq!(Color::Red.other(), Color::Black);

        for color in [Color::Red, Color::Black] {
            assert!(color.suits().iter().all(|s| s.color() == color));
        }
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        })
        .unwrap();
        assert_eq!(hands.len(), 4_960);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        })
        .unwrap();
        assert_eq!(count, 201_376);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.num_hands(4), 27_405);

        let mut count = 0;
        deck.for_each(4, |cards| {
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
            count += 1;
        })
        .unwrap();
        assert_eq!(count, 27_405);
    }

    #[test]
    fn deal_hands() {
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        let mut seen = HashSet::default();

        for _ in 0..4 {
            let hand = deck.deal_hand().unwrap();
            assert!(hand.cards().all(|c| seen.insert(c)));
        }

        assert!(deck.is_empty());
        assert_eq!(deck.deal_hand(), Err(Error::InvalidHandSize(0)));
    }
}
