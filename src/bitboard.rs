// Bitboard helpers (a1 = bit 0 … h8 = bit 63).

use crate::board::Color;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_H: u64 = 0x8080_8080_8080_8080;
pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
pub const RANK_8: u64 = 0xFF00_0000_0000_0000;

/// Squares where file + rank is even (a1, c1, ... h8).
pub const DARK_SQUARES: u64 = 0xAA55_AA55_AA55_AA55;
pub const LIGHT_SQUARES: u64 = !DARK_SQUARES;

pub trait BitboardExt {
    /// Index of the least significant set bit. Undefined for an empty board.
    fn lsb(self) -> u8;
    /// Number of set bits as a signed score operand.
    fn popcnt(self) -> i32;
}

impl BitboardExt for u64 {
    #[inline(always)]
    fn lsb(self) -> u8 {
        debug_assert!(self != 0);
        self.trailing_zeros() as u8
    }

    #[inline(always)]
    fn popcnt(self) -> i32 {
        self.count_ones() as i32
    }
}

/// Iterates set squares, least significant first.
pub struct Bits(pub u64);

impl Iterator for Bits {
    type Item = u8;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let lsb = self.0.trailing_zeros() as u8;
            self.0 &= self.0 - 1;
            Some(lsb)
        }
    }
}

#[inline(always)]
pub const fn shift_north(bb: u64) -> u64 {
    bb << 8
}

#[inline(always)]
pub const fn shift_south(bb: u64) -> u64 {
    bb >> 8
}

#[inline(always)]
pub const fn shift_east(bb: u64) -> u64 {
    (bb & !FILE_H) << 1
}

#[inline(always)]
pub const fn shift_west(bb: u64) -> u64 {
    (bb & !FILE_A) >> 1
}

/// One step towards the opponent's back rank.
#[inline(always)]
pub const fn shift_forward(bb: u64, color: Color) -> u64 {
    match color {
        Color::White => shift_north(bb),
        Color::Black => shift_south(bb),
    }
}

/// Smear bits towards rank 8, keeping the originals.
#[inline(always)]
pub const fn fill_north(mut bb: u64) -> u64 {
    bb |= bb << 8;
    bb |= bb << 16;
    bb |= bb << 32;
    bb
}

/// Smear bits towards rank 1, keeping the originals.
#[inline(always)]
pub const fn fill_south(mut bb: u64) -> u64 {
    bb |= bb >> 8;
    bb |= bb >> 16;
    bb |= bb >> 32;
    bb
}

/// Whole files touched by `bb`.
#[inline(always)]
pub const fn file_fill(bb: u64) -> u64 {
    fill_north(bb) | fill_south(bb)
}

/// Squares strictly in front of the set bits, from `color`'s point of view.
#[inline(always)]
pub const fn front_span(bb: u64, color: Color) -> u64 {
    match color {
        Color::White => fill_north(shift_north(bb)),
        Color::Black => fill_south(shift_south(bb)),
    }
}

/// Squares attacked by pawns of `color`.
#[inline(always)]
pub const fn pawn_control(pawns: u64, color: Color) -> u64 {
    match color {
        Color::White => ((pawns & !FILE_A) << 7) | ((pawns & !FILE_H) << 9),
        Color::Black => ((pawns & !FILE_H) >> 7) | ((pawns & !FILE_A) >> 9),
    }
}

/// Squares attacked by two pawns of `color` at once.
#[inline(always)]
pub const fn pawn_double_control(pawns: u64, color: Color) -> u64 {
    match color {
        Color::White => ((pawns & !FILE_A) << 7) & ((pawns & !FILE_H) << 9),
        Color::Black => ((pawns & !FILE_H) >> 7) & ((pawns & !FILE_A) >> 9),
    }
}

/// Squares pawns of `color` attack now or could attack after advancing.
#[inline(always)]
pub const fn pawn_reach(pawns: u64, color: Color) -> u64 {
    match color {
        Color::White => fill_north(pawn_control(pawns, color)),
        Color::Black => fill_south(pawn_control(pawns, color)),
    }
}

/// Rank mask counted from `color`'s back rank.
#[inline(always)]
pub const fn relative_rank_mask(color: Color, rank: u8) -> u64 {
    match color {
        Color::White => RANK_1 << (8 * rank),
        Color::Black => RANK_8 >> (8 * rank),
    }
}
