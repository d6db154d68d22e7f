// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Game rules that build the 7 cards to evaluate from a player's hole cards and
//! the community cards.
use crate::{Card, EvalError, NUM_CARDS, Rank, RankedHand, Suit, try_evaluate};

/// The cards layout of a Poker game.
pub trait PokerRules: Sync {
    /// The number of private cards dealt to each player.
    fn hole_cards(&self) -> usize;

    /// The number of cards shared by all players.
    fn community_cards(&self) -> usize;

    /// Returns the best hand a player can make with its hole cards and the
    /// community cards.
    ///
    /// The cards can be in any order, an error is returned if the number of
    /// cards doesn't match the game or if a card appears more than once.
    fn rank_hand(&self, hole: &[Card], community: &[Card]) -> Result<RankedHand, EvalError> {
        if hole.len() != self.hole_cards() {
            return Err(EvalError::CardCount {
                expected: self.hole_cards(),
                found: hole.len(),
            });
        }

        if community.len() != self.community_cards() {
            return Err(EvalError::CardCount {
                expected: self.community_cards(),
                found: community.len(),
            });
        }

        let found = hole.len() + community.len();
        if found != NUM_CARDS {
            return Err(EvalError::CardCount {
                expected: NUM_CARDS,
                found,
            });
        }

        let mut cards = [Card::new(Rank::Deuce, Suit::Clubs); NUM_CARDS];
        cards[..hole.len()].copy_from_slice(hole);
        cards[hole.len()..].copy_from_slice(community);
        cards.sort_unstable_by(|a, b| b.cmp(a));

        try_evaluate(&cards)
    }
}

/// Texas Hold'em, two hole cards and five community cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct TexasHoldem;

impl PokerRules for TexasHoldem {
    fn hole_cards(&self) -> usize {
        2
    }

    fn community_cards(&self) -> usize {
        5
    }
}

/// 7-Card Stud, seven cards for each player and no community cards.
#[derive(Debug, Clone, Copy, Default)]
pub struct SevenCardStud;

impl PokerRules for SevenCardStud {
    fn hole_cards(&self) -> usize {
        7
    }

    fn community_cards(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HandRanking, tests::hand_cards};

    fn parse(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn holdem_rank_hand() {
        let board = parse("2H 9C 4H KD 3H");
        let hand = TexasHoldem.rank_hand(&parse("5H AH"), &board).unwrap();
        assert_eq!(hand.ranking(), HandRanking::StraightFlush);
        assert_eq!(hand.cards(), &hand_cards("5H 4H 3H 2H AH"));

        let hand = TexasHoldem.rank_hand(&parse("KS KC"), &board).unwrap();
        assert_eq!(hand.ranking(), HandRanking::ThreeOfAKind);
        assert_eq!(hand.cards(), &hand_cards("KS KD KC 9C 4H"));
    }

    #[test]
    fn holdem_split_pot() {
        let board = parse("AH KD QC JS TD");
        let h1 = TexasHoldem.rank_hand(&parse("2C 3D"), &board).unwrap();
        let h2 = TexasHoldem.rank_hand(&parse("4S 5H"), &board).unwrap();
        assert_eq!(h1.ranking(), HandRanking::Straight);
        assert_eq!(h1, h2);
    }

    #[test]
    fn holdem_wrong_cards() {
        let board = parse("2H 9C 4H KD 3H");
        assert_eq!(
            TexasHoldem.rank_hand(&parse("5H"), &board),
            Err(EvalError::CardCount {
                expected: 2,
                found: 1
            })
        );

        assert_eq!(
            TexasHoldem.rank_hand(&parse("5H AH"), &board[..4]),
            Err(EvalError::CardCount {
                expected: 5,
                found: 4
            })
        );

        let dup = "9C".parse().unwrap();
        assert_eq!(
            TexasHoldem.rank_hand(&parse("9C AH"), &board),
            Err(EvalError::DuplicateCard(dup))
        );
    }

    #[test]
    fn stud_rank_hand() {
        let hand = SevenCardStud
            .rank_hand(&parse("7S 2D 7D KH 2C 7C 9H"), &[])
            .unwrap();
        assert_eq!(hand.ranking(), HandRanking::FullHouse);
        assert_eq!(hand.cards(), &hand_cards("7S 7D 7C 2D 2C"));
    }
}
