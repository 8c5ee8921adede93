// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand ordering for display and storage.
//!
//! Suits alternate colors so that two suits of the same color are never next
//! to each other when possible, and cards within a suit go from ace to seven.
//! The color with more suits in the hand goes first in the alternation, with
//! red winning ties, and the final order lists the suits from the last one in
//! the alternation to the first one:
//!
//! ```
//! # use coinche_cards::{Card, order_cards};
//! let cards = ["hearts_7", "spades_ace", "clubs_9", "hearts_king"]
//!     .into_iter()
//!     .map(|s| s.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! // Black has two suits, the alternation is spades, hearts, clubs.
//! let ordered = order_cards(&cards)
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect::<Vec<_>>();
//! assert_eq!(ordered, ["clubs_9", "hearts_king", "hearts_7", "spades_ace"]);
//! ```
use std::cmp::{Ordering, Reverse};

use crate::{Card, Color, Hand, Result, Suit};

/// Color that goes first when both colors have the same number of suits.
const TIE_COLOR: Color = Color::Red;

/// Returns the color with more distinct suits in the given cards.
pub fn majority_color(cards: &[Card]) -> Color {
    let count = |color: Color| {
        color
            .suits()
            .into_iter()
            .filter(|s| cards.iter().any(|c| c.suit() == *s))
            .count()
    };

    match count(Color::Red).cmp(&count(Color::Black)) {
        Ordering::Greater => Color::Red,
        Ordering::Less => Color::Black,
        Ordering::Equal => TIE_COLOR,
    }
}

/// Returns the suits present in the cards alternating colors, majority first.
pub fn suit_order(cards: &[Card]) -> Vec<Suit> {
    let present = |color: Color| {
        color
            .suits()
            .into_iter()
            .filter(|s| cards.iter().any(|c| c.suit() == *s))
            .collect::<Vec<_>>()
    };

    let major = majority_color(cards);
    let (major, minor) = (present(major), present(major.other()));

    let mut order = Vec::with_capacity(major.len() + minor.len());
    for idx in 0..major.len().max(minor.len()) {
        order.extend(major.get(idx));
        order.extend(minor.get(idx));
    }

    order
}

/// Orders any number of cards, duplicates are kept next to each other.
pub fn order_cards(cards: &[Card]) -> Vec<Card> {
    let mut priority = [0; 4];
    for (pos, suit) in suit_order(cards).into_iter().enumerate() {
        priority[suit as usize] = pos;
    }

    let mut ordered = cards.to_vec();
    ordered.sort_unstable_by_key(|c| Reverse((priority[c.suit() as usize], c.rank())));
    ordered
}

/// Orders a hand, fails if the cards are not [Hand::SIZE] distinct cards.
pub fn order_hand(cards: &[Card]) -> Result<[Card; Hand::SIZE]> {
    Ok(Hand::new(cards)?.ordered())
}
