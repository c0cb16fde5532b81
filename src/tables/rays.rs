//! Unobstructed ray masks for sliding pieces.
//!
//! For every (square, direction) pair, the set of squares reachable by
//! sliding from the square to the board edge, excluding the square itself.
//! Blockers are applied later by the occupancy tables; these masks are pure
//! geometry.

use super::types::{Bitboard, Direction, Square};

/// The 81x8 exclusive ray mask table.
pub struct RayTable {
    rays: [[Bitboard; 8]; Square::NUM],
}

impl RayTable {
    /// Build all ray masks.
    ///
    /// Each mask satisfies `ray(sq, dir) = {next} | ray(next, dir)` where
    /// `next` is one step along `dir`, and is empty when that step leaves
    /// the board. The table is filled iteratively in reverse ray order so
    /// every `ray(next, dir)` is complete before it is extended; the
    /// recursion of the definition never materializes as call depth.
    ///
    /// # Panics
    ///
    /// Panics if extending a ray would set a square already present in its
    /// tail. That can only happen if the geometry itself is wrong, and a
    /// partially-built table must never be published.
    pub(crate) fn build() -> Self {
        let mut rays = [[Bitboard::EMPTY; 8]; Square::NUM];
        for dir in Direction::ALL {
            let (dy, dx) = dir.delta();
            for &row in scan_order(dy).iter() {
                for &col in scan_order(dx).iter() {
                    let sq = Square(row, col);
                    let Some(next) = sq.offset(dy, dx) else {
                        continue;
                    };
                    let tail = rays[next.index()][dir.index()];
                    let bit = Bitboard::from_square(next);
                    assert!(
                        tail.and(bit).is_empty(),
                        "ray tail beyond {next} ({dir:?}) loops back onto {next}"
                    );
                    rays[sq.index()][dir.index()] = tail.or(bit);
                }
            }
        }
        RayTable { rays }
    }

    /// The exclusive ray from `sq` toward `dir`.
    #[inline]
    #[must_use]
    pub fn ray(&self, sq: Square, dir: Direction) -> Bitboard {
        self.rays[sq.index()][dir.index()]
    }

    /// Union of all 8 rays: every square a queen-moving piece on an empty
    /// board would reach from `sq`.
    #[must_use]
    pub fn queen_attacks(&self, sq: Square) -> Bitboard {
        Direction::ALL
            .iter()
            .fold(Bitboard::EMPTY, |acc, &dir| acc.or(self.ray(sq, dir)))
    }

    /// Squares strictly between two aligned squares; empty when `a` and `b`
    /// share no rank, file, or diagonal.
    ///
    /// The rays from both endpoints along the connecting direction differ
    /// exactly in the closed interval between them, so one XOR and removing
    /// the near endpoint yields the open interval.
    #[must_use]
    pub fn between(&self, a: Square, b: Square) -> Bitboard {
        match Direction::between(b, a) {
            Some(dir) => self
                .ray(b, dir)
                .xor(self.ray(a, dir))
                .xor(Bitboard::from_square(a)),
            None => Bitboard::EMPTY,
        }
    }
}

/// Row (or column) visit order for one axis step: squares whose ray tail is
/// longer come first, so every tail is complete before it is extended.
fn scan_order(step: i32) -> [usize; 9] {
    let mut order = [0usize; 9];
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = if step > 0 { 8 - i } else { i };
    }
    order
}
