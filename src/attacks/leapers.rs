//! Knight, king and pawn attack tables, built at compile time.

use crate::bitboard::{FILE_A, FILE_H};
use crate::board::Color;

const NOT_FILE_AB: u64 = !(FILE_A | (FILE_A << 1));
const NOT_FILE_GH: u64 = !(FILE_H | (FILE_H >> 1));

pub const KNIGHT_ATTACKS: [u64; 64] = {
    let mut table = [0u64; 64];
    let mut sq = 0;
    while sq < 64 {
        let b = 1u64 << sq;
        table[sq] = ((b << 17) & !FILE_A)
            | ((b << 15) & !FILE_H)
            | ((b << 10) & NOT_FILE_AB)
            | ((b << 6) & NOT_FILE_GH)
            | ((b >> 6) & NOT_FILE_AB)
            | ((b >> 10) & NOT_FILE_GH)
            | ((b >> 15) & !FILE_A)
            | ((b >> 17) & !FILE_H);
        sq += 1;
    }
    table
};

pub const KING_ATTACKS: [u64; 64] = {
    let mut table = [0u64; 64];
    let mut sq = 0;
    while sq < 64 {
        let b = 1u64 << sq;
        let row = b | ((b << 1) & !FILE_A) | ((b >> 1) & !FILE_H);
        table[sq] = (row | (row << 8) | (row >> 8)) & !b;
        sq += 1;
    }
    table
};

/// [color][square]
pub const PAWN_ATTACKS: [[u64; 64]; 2] = {
    let mut table = [[0u64; 64]; 2];
    let mut sq = 0;
    while sq < 64 {
        let b = 1u64 << sq;
        table[0][sq] = ((b << 7) & !FILE_H) | ((b << 9) & !FILE_A);
        table[1][sq] = ((b >> 7) & !FILE_A) | ((b >> 9) & !FILE_H);
        sq += 1;
    }
    table
};

#[inline(always)]
pub fn knight_attacks(sq: u8) -> u64 {
    KNIGHT_ATTACKS[sq as usize]
}

#[inline(always)]
pub fn king_attacks(sq: u8) -> u64 {
    KING_ATTACKS[sq as usize]
}

#[inline(always)]
pub fn pawn_attacks(sq: u8, color: Color) -> u64 {
    PAWN_ATTACKS[color as usize][sq as usize]
}
