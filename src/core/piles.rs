//! The board: a row of stone piles and the moves that shrink them.
//!
//! Piles are addressed 1-based everywhere a player can see them and
//! 0-based internally. The only way to change a [`PileSet`] is
//! [`PileSet::apply`], which refuses any move that would reference a missing
//! pile or take more stones than a pile holds, so a pile can never go below
//! zero.

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rng::GameRng;
use crate::error::MoveError;

/// Number of piles dealt at the start of a match.
pub const PILE_COUNT: RangeInclusive<usize> = 2..=5;

/// Stones dealt to each pile at the start of a match.
pub const STONES_PER_PILE: RangeInclusive<u32> = 1..=9;

/// One player's choice for a turn: which pile, and how many stones.
///
/// Obtain one through [`PileSet::check_move`], which validates it against the
/// current board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pile: usize,
    stones: u32,
}

impl Move {
    /// 1-based pile index.
    #[must_use]
    pub const fn pile(self) -> usize {
        self.pile
    }

    /// Stones removed by this move.
    #[must_use]
    pub const fn stones(self) -> u32 {
        self.stones
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from pile {}", self.stones, self.pile)
    }
}

/// Ordered stone counts, one per pile.
///
/// SmallVec keeps the usual 2-5 piles inline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileSet {
    piles: SmallVec<[u32; 5]>,
}

impl PileSet {
    /// Deal a fresh board: 2-5 piles of 1-9 stones each.
    pub fn deal(rng: &mut GameRng) -> Self {
        let count = rng.gen_range_usize(PILE_COUNT);
        let piles = (0..count)
            .map(|_| rng.gen_range_inclusive(STONES_PER_PILE))
            .collect();

        let board = Self { piles };
        tracing::debug!(seed = rng.seed(), %board, "dealt board");
        board
    }

    /// Build a board from explicit pile sizes.
    #[must_use]
    pub fn from_piles(piles: &[u32]) -> Self {
        Self {
            piles: SmallVec::from_slice(piles),
        }
    }

    /// Read-only view of the pile sizes, in display order.
    #[must_use]
    pub fn snapshot(&self) -> &[u32] {
        &self.piles
    }

    /// Number of piles (including empty ones).
    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    /// True when the board has no piles at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Stones left in a 1-based pile, or `None` if there is no such pile.
    #[must_use]
    pub fn stones(&self, pile: usize) -> Option<u32> {
        pile.checked_sub(1).and_then(|i| self.piles.get(i)).copied()
    }

    /// True iff every pile is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.piles.iter().all(|&stones| stones == 0)
    }

    /// Validate a (pile, stones) pair against the current board.
    pub fn check_move(&self, pile: usize, stones: u32) -> Result<Move, MoveError> {
        let available = self.stones(pile).ok_or(MoveError::PileOutOfRange {
            pile,
            piles: self.len(),
        })?;

        if stones > available {
            return Err(MoveError::NotEnoughStones {
                pile,
                requested: stones,
                available,
            });
        }

        Ok(Move { pile, stones })
    }

    /// Remove the move's stones from its pile.
    ///
    /// The move is checked again against this board; on error nothing changes.
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        let Move { pile, stones } = self.check_move(mv.pile, mv.stones)?;
        self.piles[pile - 1] -= stones;
        Ok(())
    }
}

impl fmt::Display for PileSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.piles.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_deal_is_deterministic() {
        let a = PileSet::deal(&mut GameRng::new(42));
        let b = PileSet::deal(&mut GameRng::new(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_terminal_only_when_all_empty() {
        assert!(PileSet::from_piles(&[0, 0, 0]).is_terminal());
        assert!(!PileSet::from_piles(&[0, 1, 0]).is_terminal());
        assert!(!PileSet::from_piles(&[5]).is_terminal());
    }

    #[test]
    fn test_apply_reduces_one_pile() {
        let mut board = PileSet::from_piles(&[5]);
        let mv = board.check_move(1, 2).unwrap();
        board.apply(mv).unwrap();

        assert_eq!(board.snapshot(), &[3]);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_emptying_last_pile_is_terminal() {
        let mut board = PileSet::from_piles(&[3, 0]);
        let mv = board.check_move(1, 3).unwrap();
        board.apply(mv).unwrap();

        assert_eq!(board.snapshot(), &[0, 0]);
        assert!(board.is_terminal());
    }

    #[test]
    fn test_rejects_overdraw() {
        let board = PileSet::from_piles(&[2]);
        assert_eq!(
            board.check_move(1, 5),
            Err(MoveError::NotEnoughStones {
                pile: 1,
                requested: 5,
                available: 2
            })
        );
        assert_eq!(board.snapshot(), &[2]);
    }

    #[test]
    fn test_rejects_missing_pile() {
        let board = PileSet::from_piles(&[2, 4]);
        assert_eq!(
            board.check_move(0, 1),
            Err(MoveError::PileOutOfRange { pile: 0, piles: 2 })
        );
        assert_eq!(
            board.check_move(3, 1),
            Err(MoveError::PileOutOfRange { pile: 3, piles: 2 })
        );
    }

    #[test]
    fn test_zero_stone_move_leaves_board_alone() {
        let mut board = PileSet::from_piles(&[3, 0]);
        board.apply(board.check_move(1, 0).unwrap()).unwrap();
        board.apply(board.check_move(2, 0).unwrap()).unwrap();

        assert_eq!(board.snapshot(), &[3, 0]);
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_apply_revalidates_stale_move() {
        let mut board = PileSet::from_piles(&[4, 1]);
        let mv = board.check_move(1, 3).unwrap();
        board.apply(board.check_move(1, 2).unwrap()).unwrap();

        assert!(board.apply(mv).is_err());
        assert_eq!(board.snapshot(), &[2, 1]);
    }

    #[test]
    fn test_stones_lookup() {
        let board = PileSet::from_piles(&[4, 1]);
        assert_eq!(board.stones(1), Some(4));
        assert_eq!(board.stones(2), Some(1));
        assert_eq!(board.stones(0), None);
        assert_eq!(board.stones(3), None);
    }

    #[test]
    fn test_display() {
        let board = PileSet::from_piles(&[3, 0, 2]);
        assert_eq!(board.to_string(), "[3, 0, 2]");
        assert_eq!(board.check_move(1, 2).unwrap().to_string(), "2 from pile 1");
    }

    #[test]
    fn test_serialization() {
        let board = PileSet::from_piles(&[3, 0, 2]);
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: PileSet = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    proptest! {
        #[test]
        fn prop_deal_within_bounds(seed in any::<u64>()) {
            let board = PileSet::deal(&mut GameRng::new(seed));
            prop_assert!(PILE_COUNT.contains(&board.len()));
            prop_assert!(board.snapshot().iter().all(|s| STONES_PER_PILE.contains(s)));
            prop_assert!(!board.is_terminal());
        }

        #[test]
        fn prop_terminal_iff_all_zero(piles in prop::collection::vec(0u32..4, 1..6)) {
            let board = PileSet::from_piles(&piles);
            prop_assert_eq!(board.is_terminal(), piles.iter().all(|&p| p == 0));
        }

        #[test]
        fn prop_apply_touches_only_target(
            piles in prop::collection::vec(1u32..10, 1..6),
            pick in any::<prop::sample::Index>(),
            take in any::<prop::sample::Index>(),
        ) {
            let mut board = PileSet::from_piles(&piles);
            let pile = pick.index(piles.len()) + 1;
            let stones = take.index(piles[pile - 1] as usize + 1) as u32;

            board.apply(board.check_move(pile, stones).unwrap()).unwrap();

            for (i, (&before, &after)) in piles.iter().zip(board.snapshot()).enumerate() {
                if i == pile - 1 {
                    prop_assert_eq!(after, before - stones);
                } else {
                    prop_assert_eq!(after, before);
                }
            }
        }

        #[test]
        fn prop_invalid_moves_leave_board_unchanged(
            piles in prop::collection::vec(0u32..10, 1..6),
            pile in 0usize..10,
            stones in 0u32..20,
        ) {
            let mut board = PileSet::from_piles(&piles);
            let valid = pile >= 1 && pile <= piles.len() && stones <= piles[pile - 1];

            match board.check_move(pile, stones) {
                Ok(mv) => {
                    prop_assert!(valid);
                    board.apply(mv).unwrap();
                    prop_assert_eq!(board.stones(pile), Some(piles[pile - 1] - stones));
                }
                Err(_) => {
                    prop_assert!(!valid);
                    prop_assert_eq!(board.snapshot(), piles.as_slice());
                }
            }
        }
    }
}
