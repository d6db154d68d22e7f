// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` once the deck is exhausted.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
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

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are visited in lexicographic order of the deck positions, the
    /// cards in a hand keep the deck order.
    ///
    /// Panics if k is not 2 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((2..=7).contains(&k), "2 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; 7];
        for (i, p) in pos.iter_mut().enumerate() {
            *p = i;
        }

        let mut hand = [self.cards[0]; 7];
        loop {
            for (card, &p) in hand.iter_mut().zip(&pos[..k]) {
                *card = self.cards[p];
            }

            f(&hand[..k]);

            // Find the rightmost position that can still move forward.
            let mut j = k;
            loop {
                if j == 0 {
                    return;
                }

                j -= 1;
                if pos[j] < n - k + j {
                    break;
                }
            }

            pos[j] += 1;
            for i in (j + 1)..k {
                pos[i] = pos[i - 1] + 1;
            }
        }
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
    fn deck_deal_all() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());
        assert_eq!(deck.count(), Deck::SIZE);

        while let Some(card) = deck.deal() {
            cards.insert(card);
        }

        // Check uniqueness.
        assert_eq!(cards.len(), Deck::SIZE);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
    }

    #[test]
    fn deck_shuffle_is_seeded() {
        let d1 = Deck::new_and_shuffled(&mut SmallRng::seed_from_u64(7));
        let d2 = Deck::new_and_shuffled(&mut SmallRng::seed_from_u64(7));
        let d3 = Deck::new_and_shuffled(&mut SmallRng::seed_from_u64(8));

        let d1 = d1.into_iter().collect::<Vec<_>>();
        assert_eq!(d1, d2.into_iter().collect::<Vec<_>>());
        assert_ne!(d1, d3.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 2_598_960);

        hands.clear();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn deck_for_each_small_deck() {
        let mut deck = Deck::default();
        for card in Deck::default().into_iter().skip(4) {
            deck.remove(card);
        }
        assert_eq!(deck.count(), 4);

        let mut hands = Vec::new();
        deck.for_each(3, |cards| hands.push(cards.to_owned()));
        assert_eq!(hands.len(), 4);

        // Each hand is distinct and keeps the deck order.
        for hand in &hands {
            assert!(hand.windows(2).all(|w| w[0] < w[1]));
        }

        // Not enough cards.
        let mut count = 0;
        deck.for_each(5, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    #[ignore]
    fn deck_for_each_7cards_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 99_884_400);
    }
}
