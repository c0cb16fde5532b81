//! Attack masks for short-range pieces and the derived candidate tables.
//!
//! Everything here is blocker-free geometry over an empty board. King masks
//! are color-independent; gold, silver, and knight masks come in mirrored
//! color pairs, and the pairing is verified against the rank-mirror law at
//! build time. The derived tables (sliding origins, check candidates, king
//! move candidates) are coarse pre-filters consumed by check detection; they
//! over-approximate, never under-approximate.

use super::rays::RayTable;
use super::types::{Bitboard, Color, Square};

/// Offsets are written from Black's point of view (forward = decreasing
/// row); White masks negate `dy`.
const KING_DELTAS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Gold: the three forward steps, both sideways steps, straight back.
const GOLD_DELTAS: [(i32, i32); 6] = [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, 0)];

/// Silver: the three forward steps and both backward diagonals.
const SILVER_DELTAS: [(i32, i32); 5] = [(-1, -1), (-1, 0), (-1, 1), (1, -1), (1, 1)];

const KNIGHT_DELTAS: [(i32, i32); 2] = [(-2, -1), (-2, 1)];

/// Every square a knight's move away, both orientations.
const JUMP_DELTAS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Short-range attack tables plus the derived candidate tables.
pub struct ShortRangeTables {
    king: [Bitboard; Square::NUM],
    gold: [[Bitboard; Square::NUM]; 2],
    silver: [[Bitboard; Square::NUM]; 2],
    knight: [[Bitboard; Square::NUM]; 2],
    queen: [Bitboard; Square::NUM],
    sliding_origins: [Bitboard; Square::NUM],
    check_candidates: [[Bitboard; Square::NUM]; 2],
    king_move_candidates: [[Bitboard; Square::NUM]; 2],
}

impl ShortRangeTables {
    /// Build every short-range table. `rays` supplies the queen union used
    /// by the sliding-origin derivation.
    ///
    /// # Panics
    ///
    /// Panics if any color pair breaks the rank-mirror law; a table set
    /// failing its own symmetry must not be published.
    pub(crate) fn build(rays: &RayTable) -> Self {
        let mut king = [Bitboard::EMPTY; Square::NUM];
        let mut gold = [[Bitboard::EMPTY; Square::NUM]; 2];
        let mut silver = [[Bitboard::EMPTY; Square::NUM]; 2];
        let mut knight = [[Bitboard::EMPTY; Square::NUM]; 2];
        let mut queen = [Bitboard::EMPTY; Square::NUM];

        for sq in Square::all() {
            king[sq.index()] = delta_mask(sq, &KING_DELTAS, false);
            queen[sq.index()] = rays.queen_attacks(sq);
            for color in Color::ALL {
                let flip = color == Color::White;
                gold[color.index()][sq.index()] = delta_mask(sq, &GOLD_DELTAS, flip);
                silver[color.index()][sq.index()] = delta_mask(sq, &SILVER_DELTAS, flip);
                knight[color.index()][sq.index()] = delta_mask(sq, &KNIGHT_DELTAS, flip);
            }
        }

        let mut sliding_origins = [Bitboard::EMPTY; Square::NUM];
        let mut check_candidates = [[Bitboard::EMPTY; Square::NUM]; 2];
        let mut king_move_candidates = [[Bitboard::EMPTY; Square::NUM]; 2];

        for sq in Square::all() {
            sliding_origins[sq.index()] = king[sq.index()]
                .iter()
                .fold(Bitboard::EMPTY, |acc, n| acc.or(queen[n.index()]));
            for color in Color::ALL {
                check_candidates[color.index()][sq.index()] = check_candidate_mask(sq, color);
                king_move_candidates[color.index()][sq.index()] =
                    king[sq.index()].iter().fold(Bitboard::EMPTY, |acc, n| {
                        acc.or(king[n.index()]).or(knight[color.index()][n.index()])
                    });
            }
        }

        let tables = ShortRangeTables {
            king,
            gold,
            silver,
            knight,
            queen,
            sliding_origins,
            check_candidates,
            king_move_candidates,
        };
        tables.assert_mirror_law("gold", &tables.gold);
        tables.assert_mirror_law("silver", &tables.silver);
        tables.assert_mirror_law("knight", &tables.knight);
        tables.assert_mirror_law("check_candidates", &tables.check_candidates);
        tables.assert_mirror_law("king_move_candidates", &tables.king_move_candidates);
        tables
    }

    fn assert_mirror_law(&self, name: &str, pair: &[[Bitboard; Square::NUM]; 2]) {
        for sq in Square::all() {
            let mirrored = pair[Color::Black.index()][sq.flip_rank().index()].flip_rank();
            assert_eq!(
                mirrored,
                pair[Color::White.index()][sq.index()],
                "{name} tables break the rank-mirror law at {sq}"
            );
        }
    }

    /// King attacks from `sq`.
    #[inline]
    #[must_use]
    pub fn king(&self, sq: Square) -> Bitboard {
        self.king[sq.index()]
    }

    /// Gold attacks from `sq` (also the move set of every promoted minor).
    #[inline]
    #[must_use]
    pub fn gold(&self, color: Color, sq: Square) -> Bitboard {
        self.gold[color.index()][sq.index()]
    }

    /// Silver attacks from `sq`.
    #[inline]
    #[must_use]
    pub fn silver(&self, color: Color, sq: Square) -> Bitboard {
        self.silver[color.index()][sq.index()]
    }

    /// Knight attacks from `sq`.
    #[inline]
    #[must_use]
    pub fn knight(&self, color: Color, sq: Square) -> Bitboard {
        self.knight[color.index()][sq.index()]
    }

    /// Empty-board queen reach from `sq` (union of all 8 rays).
    #[inline]
    #[must_use]
    pub fn queen(&self, sq: Square) -> Bitboard {
        self.queen[sq.index()]
    }

    /// Every square from which a sliding piece could threaten `sq` or one of
    /// its neighbors on an empty board. Lets a consumer skip the full attack
    /// scan when no slider is anywhere near.
    #[inline]
    #[must_use]
    pub fn sliding_origins(&self, sq: Square) -> Bitboard {
        self.sliding_origins[sq.index()]
    }

    /// Origin squares of fast local checks against a king on `sq`: all
    /// knight-jump-distance squares plus the long forward jumps, widened
    /// near the color's back ranks.
    #[inline]
    #[must_use]
    pub fn check_candidates(&self, color: Color, sq: Square) -> Bitboard {
        self.check_candidates[color.index()][sq.index()]
    }

    /// Squares whose near attack (king or forward knight) covers some
    /// neighbor of `sq`; a pre-filter for "is the king's destination square
    /// attacked".
    #[inline]
    #[must_use]
    pub fn king_move_candidates(&self, color: Color, sq: Square) -> Bitboard {
        self.king_move_candidates[color.index()][sq.index()]
    }
}

fn delta_mask(sq: Square, deltas: &[(i32, i32)], flip: bool) -> Bitboard {
    let mut mask = Bitboard::EMPTY;
    for &(dy, dx) in deltas {
        let dy = if flip { -dy } else { dy };
        if let Some(to) = sq.offset(dy, dx) {
            mask = mask.or(Bitboard::from_square(to));
        }
    }
    mask
}

/// The local-check origin heuristic. The jump ring is orientation-free; the
/// long `4*forward` jumps and the five-column `3*forward` spread near the
/// color's own two back ranks are fixed offsets, kept exactly as tuned.
fn check_candidate_mask(sq: Square, color: Color) -> Bitboard {
    let f = color.forward();
    let mut mask = delta_mask(sq, &JUMP_DELTAS, false);
    for dx in [-2, 2] {
        if let Some(to) = sq.offset(4 * f, dx) {
            mask = mask.or(Bitboard::from_square(to));
        }
    }
    let near_back_rank = match color {
        Color::Black => sq.row() >= 7,
        Color::White => sq.row() <= 1,
    };
    if near_back_rank {
        for dx in -2..=2 {
            if let Some(to) = sq.offset(3 * f, dx) {
                mask = mask.or(Bitboard::from_square(to));
            }
        }
    }
    mask
}
