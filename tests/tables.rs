//! End-to-end checks of the published table contract.

use shogi_tables::{
    tables, Bitboard, Color, DiagonalKind, Direction, Piece, Square, Tables,
};

#[test]
fn ray_masks_exclude_origin_and_vanish_at_edges() {
    let t = tables();
    for sq in Square::all() {
        for dir in Direction::ALL {
            let ray = t.rays.ray(sq, dir);
            assert!(!ray.contains(sq), "{sq} {dir:?} contains its origin");
            let (dy, dx) = dir.delta();
            assert_eq!(
                ray.is_empty(),
                sq.offset(dy, dx).is_none(),
                "{sq} {dir:?} emptiness disagrees with the board edge"
            );
        }
    }
}

#[test]
fn short_range_tables_mirror_between_colors() {
    let t = tables();
    for sq in Square::all() {
        let m = sq.flip_rank();
        assert_eq!(
            t.short_range.gold(Color::Black, m).flip_rank(),
            t.short_range.gold(Color::White, sq),
            "gold at {sq}"
        );
        assert_eq!(
            t.short_range.silver(Color::Black, m).flip_rank(),
            t.short_range.silver(Color::White, sq),
            "silver at {sq}"
        );
        assert_eq!(
            t.short_range.knight(Color::Black, m).flip_rank(),
            t.short_range.knight(Color::White, sq),
            "knight at {sq}"
        );
        assert_eq!(
            t.short_range.check_candidates(Color::Black, m).flip_rank(),
            t.short_range.check_candidates(Color::White, sq),
            "check candidates at {sq}"
        );
        assert_eq!(
            t.short_range
                .king_move_candidates(Color::Black, m)
                .flip_rank(),
            t.short_range.king_move_candidates(Color::White, sq),
            "king move candidates at {sq}"
        );
    }
}

#[test]
fn rank_occupancy_worked_example() {
    let t = tables();
    // origin 4 on a line, interior occupancy bits 2 and 6 (line cells 3 and
    // 7): the slide stops at and includes each first blocker.
    let attack = t.lines.rank_entry(4, (1 << 2) | (1 << 6));
    assert_eq!(attack, (1 << 3) | (1 << 5) | (1 << 6) | (1 << 7));
}

#[test]
fn degenerate_diagonals_match_contract() {
    let t = tables();
    for kind in DiagonalKind::ALL {
        let family = t.diagonal(kind);
        assert_eq!(family.kind(), kind);
        for sq in Square::all() {
            let cells: Vec<Square> = Square::all()
                .filter(|&c| kind.key(c) == kind.key(sq))
                .collect();
            let d = family.descriptor(sq);
            match cells.len() {
                1 => {
                    assert_eq!(d.mask, 0, "{sq}");
                    assert_eq!(family.data()[d.offset as usize], Bitboard::EMPTY, "{sq}");
                }
                2 => {
                    let other = if cells[0] == sq { cells[1] } else { cells[0] };
                    for occupancy in [Bitboard::EMPTY, Bitboard::ALL] {
                        assert_eq!(
                            family.attacks(sq, family.rotate(occupancy)),
                            Bitboard::from_square(other),
                            "{sq}"
                        );
                    }
                }
                len => {
                    assert_eq!(u32::from(d.mask), (1u32 << (len - 2)) - 1, "{sq}");
                }
            }
        }
    }
}

#[test]
fn promotion_law_and_round_trip() {
    let t = tables();
    for color in Color::ALL {
        for sq in Square::all() {
            for piece in [
                Piece::Pawn,
                Piece::Lance,
                Piece::Knight,
                Piece::Silver,
                Piece::Bishop,
                Piece::Rook,
            ] {
                let base = t.zobrist.piece_key(color, piece, sq);
                let delta = t.zobrist.promotion_delta(color, sq);
                assert_eq!(
                    t.zobrist.promoted_piece_key(color, piece, sq),
                    base ^ delta
                );
                // promote in place, then demote: back to the original
                let mut hash = 0x5eed_f00d_u64 ^ base;
                hash ^= delta;
                hash ^= delta;
                assert_eq!(hash, 0x5eed_f00d_u64 ^ base);
            }
        }
    }
}

#[test]
fn pocket_cumulative_law() {
    let t = tables();
    for color in Color::ALL {
        for piece in Piece::HAND {
            for count in 1..=piece.pocket_capacity() {
                assert_eq!(
                    t.zobrist.cumulative_pocket_hash(color, piece, count)
                        ^ t.zobrist.cumulative_pocket_hash(color, piece, count - 1),
                    t.zobrist.pocket_delta(color, piece, count),
                    "{piece:?} x{count}"
                );
            }
        }
    }
}

#[test]
fn pocket_count_changes_are_single_entry_updates() {
    let t = tables();
    let mut counts: [u8; 7] = [0; 7];
    let mut hash = t.zobrist.pockets_hash(Color::White, &counts);
    // fill the pawn pocket one capture at a time
    for count in 1..=18u8 {
        counts[0] = count;
        hash ^= t
            .zobrist
            .pocket_delta(Color::White, Piece::Pawn, count as usize);
        assert_eq!(hash, t.zobrist.pockets_hash(Color::White, &counts));
    }
    // and drop the pawns again
    for count in (0..18u8).rev() {
        hash ^= t
            .zobrist
            .pocket_delta(Color::White, Piece::Pawn, count as usize + 1);
        counts[0] = count;
        assert_eq!(hash, t.zobrist.pockets_hash(Color::White, &counts));
    }
    assert_eq!(hash, 0);
}

#[test]
fn independent_builds_are_identical() {
    let a = Tables::build();
    let b = Tables::build();
    for sq in Square::all() {
        for dir in Direction::ALL {
            assert_eq!(a.rays.ray(sq, dir), b.rays.ray(sq, dir));
        }
        assert_eq!(a.short_range.king(sq), b.short_range.king(sq));
        for color in Color::ALL {
            assert_eq!(
                a.short_range.silver(color, sq),
                b.short_range.silver(color, sq)
            );
            for piece in Piece::ALL {
                assert_eq!(
                    a.zobrist.piece_key(color, piece, sq),
                    b.zobrist.piece_key(color, piece, sq)
                );
            }
        }
        for kind in DiagonalKind::ALL {
            assert_eq!(
                a.diagonal(kind).descriptor(sq),
                b.diagonal(kind).descriptor(sq)
            );
            assert_eq!(
                a.diagonal(kind).rotation_mask(sq),
                b.diagonal(kind).rotation_mask(sq)
            );
        }
    }
    for kind in DiagonalKind::ALL {
        assert_eq!(a.diagonal(kind).data(), b.diagonal(kind).data());
    }
    for color in Color::ALL {
        for piece in Piece::HAND {
            for count in 1..=piece.pocket_capacity() {
                assert_eq!(
                    a.zobrist.pocket_delta(color, piece, count),
                    b.zobrist.pocket_delta(color, piece, count)
                );
            }
        }
    }
}

#[test]
fn between_agrees_with_ray_geometry() {
    let t = tables();
    // a rook pinning line: everything strictly between 5i and 5a
    let a: Square = "5i".parse().unwrap();
    let b: Square = "5a".parse().unwrap();
    let between = t.rays.between(a, b);
    assert_eq!(between.popcount(), 7);
    assert!(!between.contains(a));
    assert!(!between.contains(b));
    // non-aligned squares produce nothing
    assert_eq!(
        t.rays.between("5e".parse().unwrap(), "4c".parse().unwrap()),
        Bitboard::EMPTY
    );
}
