//! Zobrist hashing tables for shogi positions.
//!
//! Provides incrementally-updatable 64-bit fingerprints covering both
//! on-board pieces and pocket (hand) counts. Promotion contributes a
//! per-square delta layered over the base piece key, so promoting in place
//! is one XOR; pocket entries are per-count boundary deltas, so changing a
//! held count by one is one XOR as well.

use rand::prelude::*;

use crate::tables::{Color, Piece, Square};

/// Seed for the key generator.
///
/// Load-bearing: every persisted artifact keyed by these hashes
/// (transposition tables, opening books, stored positions) is invalidated
/// if this string changes, or if the `rand` crate changes the `StdRng`
/// algorithm across a major version. Treat either as a breaking change.
pub const ZOBRIST_SEED: &str = "shogi-tables-zobrist-v1";

/// Slot 0 is the promotion delta layer; slots 1-8 are the base piece types.
const PIECE_SLOTS: usize = 9;

/// 6 non-pawn hand types with 4 count slots each, then 18 pawn count slots.
const POCKET_SLOTS: usize = 42;

/// Pawn counts `c` live at `PAWN_POCKET_BASE + c`.
const PAWN_POCKET_BASE: usize = 23;

pub struct ZobristKeys {
    // piece_keys[color][slot][square]
    piece_keys: [[[u64; Square::NUM]; PIECE_SLOTS]; 2],
    // pocket_keys[color][slot]: chained boundary deltas, see build()
    pocket_keys: [[u64; POCKET_SLOTS]; 2],
}

impl ZobristKeys {
    /// Generate all keys from the fixed seed.
    ///
    /// Draw order is fixed (Black pieces, White pieces, Black pockets,
    /// White pockets) so the tables are bit-identical on every build.
    /// Pocket draws are then chained in place per piece type
    /// (`slot[c] ^= slot[c-1]` in increasing count order): the stored
    /// entries are uniformly distributed but deliberately not independent,
    /// and serve as the boundary deltas between adjacent counts.
    pub(crate) fn build() -> Self {
        let mut rng = StdRng::from_seed(seed_bytes(ZOBRIST_SEED));
        let mut piece_keys = [[[0u64; Square::NUM]; PIECE_SLOTS]; 2];
        let mut pocket_keys = [[0u64; POCKET_SLOTS]; 2];

        for color in &mut piece_keys {
            for slot in color.iter_mut() {
                for key in slot.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        for color in &mut pocket_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
            for piece in Piece::HAND {
                for count in 2..=piece.pocket_capacity() {
                    let prev = color[pocket_slot(piece, count - 1)];
                    color[pocket_slot(piece, count)] ^= prev;
                }
            }
        }

        ZobristKeys {
            piece_keys,
            pocket_keys,
        }
    }

    /// Key of an unpromoted piece standing on `sq`.
    #[inline]
    #[must_use]
    pub fn piece_key(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[color.index()][piece.key_slot()][sq.index()]
    }

    /// The promotion delta of `sq`: one extra pattern layered over any base
    /// piece key, shared by all piece types.
    #[inline]
    #[must_use]
    pub fn promotion_delta(&self, color: Color, sq: Square) -> u64 {
        self.piece_keys[color.index()][0][sq.index()]
    }

    /// Key of a promoted piece standing on `sq`. Promote-then-demote in
    /// place cancels to the base key.
    #[inline]
    #[must_use]
    pub fn promoted_piece_key(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        debug_assert!(piece.can_promote(), "{piece:?} has no promoted form");
        self.piece_key(color, piece, sq) ^ self.promotion_delta(color, sq)
    }

    /// Boundary delta between holding `count - 1` and `count` pieces of a
    /// type (`count >= 1`). A ±1 change of a held count XORs exactly this
    /// one entry into the position hash.
    #[inline]
    #[must_use]
    pub fn pocket_delta(&self, color: Color, piece: Piece, count: usize) -> u64 {
        self.pocket_keys[color.index()][pocket_slot(piece, count)]
    }

    /// Contribution of holding exactly `count` pieces of a type: the
    /// XOR-fold of the boundary deltas from 1 through `count`. Zero when
    /// the pocket is empty.
    #[must_use]
    pub fn cumulative_pocket_hash(&self, color: Color, piece: Piece, count: usize) -> u64 {
        (1..=count).fold(0, |acc, c| acc ^ self.pocket_delta(color, piece, c))
    }

    /// Full pocket contribution of one side. `counts` follows the
    /// `Piece::HAND` order.
    #[must_use]
    pub fn pockets_hash(&self, color: Color, counts: &[u8; 7]) -> u64 {
        Piece::HAND
            .iter()
            .zip(counts)
            .filter(|(_, &count)| count > 0)
            .fold(0, |acc, (&piece, &count)| {
                acc ^ self.cumulative_pocket_hash(color, piece, count as usize)
            })
    }
}

/// Index of a (piece type, count) pocket slot. Non-pawn hand types get four
/// consecutive slots in `key_slot` order; pawn counts follow.
fn pocket_slot(piece: Piece, count: usize) -> usize {
    debug_assert!(
        (1..=piece.pocket_capacity()).contains(&count),
        "{piece:?} cannot be held {count} times"
    );
    match piece {
        Piece::Pawn => PAWN_POCKET_BASE + count,
        _ => 4 * (piece.key_slot() - 2) + count - 1,
    }
}

fn seed_bytes(seed: &str) -> [u8; 32] {
    let mut bytes = [0u8; 32];
    for (dst, src) in bytes.iter_mut().zip(seed.bytes()) {
        *dst = src;
    }
    bytes
}
