// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straights and flushes detection.
//!
//! Flushes are filtered first so that a straight flush is searched only among
//! the suited cards: a suited straight can be lower than the best straight
//! available ignoring suits and it must still win over it.
use crate::{Card, HandRanking, RankedHand, Rank, Suit};

/// Returns the best flush, straight, straight flush, or royal flush hand for the
/// given cards, or `None` if the cards contain neither a straight nor a flush.
///
/// The cards must be sorted by descending rank.
pub(crate) fn straight_or_flush(cards: &[Card; 7]) -> Option<RankedHand> {
    let mut buf = [cards[0]; 7];
    match flush_cards(cards, &mut buf) {
        Some(flush) => {
            let hand = match straight_cards(flush) {
                Some(straight) if straight[0].rank() == Rank::Ace => {
                    RankedHand::new(straight, HandRanking::RoyalFlush)
                }
                Some(straight) => RankedHand::new(straight, HandRanking::StraightFlush),
                None => {
                    // The flush cards are sorted, keep the five highest.
                    let top = std::array::from_fn(|idx| flush[idx]);
                    RankedHand::new(top, HandRanking::Flush)
                }
            };

            Some(hand)
        }
        None => straight_cards(cards).map(|s| RankedHand::new(s, HandRanking::Straight)),
    }
}

/// Copies all the cards of a suit with at least 5 cards into `buf` and returns
/// them, there may be more than 5 of them.
fn flush_cards<'a>(cards: &[Card; 7], buf: &'a mut [Card; 7]) -> Option<&'a [Card]> {
    let mut counts = [0usize; Suit::COUNT];
    for card in cards {
        counts[card.suit().index()] += 1;
    }

    let suit = Suit::suits().find(|s| counts[s.index()] >= RankedHand::SIZE)?;

    let mut len = 0;
    for card in cards.iter().filter(|c| c.suit() == suit) {
        buf[len] = *card;
        len += 1;
    }

    Some(&buf[..len])
}

/// Returns the highest 5 cards straight in cards sorted by descending rank.
fn straight_cards(cards: &[Card]) -> Option<[Card; RankedHand::SIZE]> {
    let (&first, rest) = cards.split_first()?;
    let last = *rest.last()?;

    // The Ace plays low after a Deuce: 5, 4, 3, 2, A.
    let low_ace = (first.rank() == Rank::Ace && last.rank() == Rank::Deuce).then_some(first);

    let mut run = [first; RankedHand::SIZE];
    let mut len = 1;
    let mut prev = first;

    for card in rest.iter().copied().chain(low_ace) {
        if is_next_lower(card, prev) {
            run[len] = card;
            len += 1;
            if len == RankedHand::SIZE {
                return Some(run);
            }
        } else if card.rank() != prev.rank() {
            // A pair card is skipped, any other gap starts a new run.
            run[0] = card;
            len = 1;
        }

        prev = card;
    }

    None
}

/// Checks if `card` is one rank below `prev` in a straight.
#[inline]
fn is_next_lower(card: Card, prev: Card) -> bool {
    card.rank() as u8 + 1 == prev.rank() as u8
        || (card.rank() == Rank::Ace && prev.rank() == Rank::Deuce)
}
