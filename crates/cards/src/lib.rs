// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Coinche cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use coinche_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "hearts_ace");
//! assert_eq!("hearts_ace".parse::<Card>().unwrap(), ah);
//! ```
//!
//! and a [Deck] type with the 32 cards in canonical order. Every 8-cards
//! [Hand] has an index in `[0, 10_518_300)` so that hands can be enumerated
//! and replayed without storing them:
//!
//! ```
//! # use coinche_cards::{Deck, Hand};
//! let deck = Deck::default();
//! assert_eq!(deck.num_hands(Hand::SIZE), 10_518_300);
//!
//! let hand = deck.hand(1_234_567).unwrap();
//! assert_eq!(hand.index(&deck).unwrap(), 1_234_567);
//! ```
//!
//! The [ksubset] module has the ranking functions for any subset size, and the
//! [order] module the hand ordering used for display and storage keys:
//!
//! ```
//! # use coinche_cards::{Deck, order_hand, unrank_combination};
//! let deck = Deck::default();
//! let cards = unrank_combination(0)
//!     .unwrap()
//!     .map(|pos| deck.cards()[pos]);
//!
//! let ordered = order_hand(&cards).unwrap();
//! assert_eq!(ordered[0].to_string(), "hearts_ace");
//! assert_eq!(ordered[7].to_string(), "hearts_7");
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Color, Deck, Rank, Suit};

mod error;
pub use error::{Error, Result};

mod hand;
pub use hand::Hand;

pub mod ksubset;
pub use ksubset::unrank_combination;

pub mod order;
pub use order::{order_cards, order_hand};
