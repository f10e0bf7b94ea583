mod fen;

use crate::bitboard::BitboardExt;
use crate::eval::Score;
use crate::square::Square;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod castle_bits;
mod fen_tables;
pub use castle_bits::*;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

// Empty square value, no piece 0-13 will coincide with 255
pub(crate) const EMPTY_SQ: u8 = 0xFF;

/// Which side is to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    White,
    Black,
}

/// Piece enum to hold all types of pieces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Core board representation using bitboards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub piece_bb: [[u64; 6]; 2],
    pub occ_white: u64,
    pub occ_black: u64,
    pub occ_all: u64,
    /// 0xFF = empty, otherwise (color<<3)|piece
    pub piece_on_sq: [u8; 64],
    pub side_to_move: Color,
    /// bit 0=White kingside, 1=White queenside, 2=Black kingside, 3=Black queenside
    pub castling_rights: u8,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub zobrist: u64,
    /// Material + piece-square partial sums per side, filled by
    /// `Evaluator::refresh_pst` and kept in step by whoever mutates the board.
    pub pst: [Score; 2],
}

impl Board {
    #[inline]
    pub fn refresh_zobrist(&mut self) {
        self.zobrist = self.compute_zobrist_full();
    }

    #[inline(always)]
    pub(crate) fn bb(&self, color: Color, piece: Piece) -> u64 {
        self.piece_bb[color as usize][piece as usize]
    }

    #[inline(always)]
    pub(crate) fn set_bb(&mut self, color: Color, piece: Piece, new_bb: u64) {
        use crate::hash::zobrist::zobrist_keys;
        let ci = color as usize;
        let pi = piece as usize;

        let old_bb = self.piece_bb[ci][pi];
        let delta = old_bb ^ new_bb;
        if delta == 0 {
            return;
        }

        self.piece_bb[ci][pi] = new_bb;

        if color == Color::White {
            self.occ_white ^= delta;
        } else {
            self.occ_black ^= delta;
        }
        self.occ_all = self.occ_white | self.occ_black;

        let keys = zobrist_keys();

        let mut bits_to_update = delta;
        while bits_to_update != 0 {
            let single_bit = bits_to_update & bits_to_update.wrapping_neg();
            let sq_idx = single_bit.trailing_zeros() as usize;

            if new_bb & single_bit != 0 {
                self.place_piece_at_sq(color, piece, Square::from_index(sq_idx as u8));
            } else {
                self.clear_square(Square::from_index(sq_idx as u8));
            }

            self.zobrist ^= keys.piece[ci][pi][sq_idx];

            bits_to_update &= bits_to_update - 1;
        }
    }

    #[inline(always)]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.piece_on_sq[sq.idx()] = EMPTY_SQ;
    }

    #[inline(always)]
    pub(crate) fn place_piece_at_sq(&mut self, color: Color, piece: Piece, sq: Square) {
        self.piece_on_sq[sq.idx()] = (color as u8) << 3 | (piece as u8);
    }

    /// Put a piece on an empty square.
    pub fn put_piece(&mut self, color: Color, piece: Piece, sq: Square) {
        debug_assert!(self.piece_at(sq).is_none(), "square {} already occupied", sq);
        let bb = self.bb(color, piece) | sq.bb();
        self.set_bb(color, piece, bb);
    }

    /// Create an empty board (all bitboards zero, White to move).
    pub fn new_empty() -> Self {
        let mut b = Board {
            piece_bb: [[0u64; 6]; 2],
            occ_white: 0,
            occ_black: 0,
            occ_all: 0,
            piece_on_sq: [EMPTY_SQ; 64],
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            zobrist: 0,
            pst: [Score::ZERO; 2],
        };
        b.refresh_zobrist();
        b
    }

    pub fn new() -> Self {
        let mut b = Board::new_empty();
        // The start position FEN is a constant and always parses.
        let _ = b.set_fen(START_FEN);
        b
    }

    #[inline(always)]
    pub fn occupied(&self) -> u64 {
        self.occ_all
    }

    #[inline(always)]
    pub fn occupancy(&self, color: Color) -> u64 {
        match color {
            Color::White => self.occ_white,
            Color::Black => self.occ_black,
        }
    }

    #[inline(always)]
    pub fn pieces(&self, piece: Piece, color: Color) -> u64 {
        self.bb(color, piece)
    }

    #[inline(always)]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        let val = self.piece_on_sq[sq.idx()];
        if val == EMPTY_SQ {
            None
        } else {
            let color = Color::from_u8((val >> 3) & 1);
            let piece = Piece::from_u8(val & 0b111);
            Some((color, piece))
        }
    }

    #[inline(always)]
    pub fn piece_type_at(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Validate that no square is occupied by more than one piece and each side has one king.
    pub fn validate(&self) -> Result<(), String> {
        let mut seen: u64 = 0;
        for color in [Color::White, Color::Black] {
            for piece in Piece::ALL {
                let bb = self.bb(color, piece);
                if seen & bb != 0 {
                    return Err(format!("{:?} {:?} overlaps with another piece", color, piece));
                }
                seen |= bb;
            }
            if self.bb(color, Piece::King).count_ones() != 1 {
                return Err(format!("{:?} must have exactly one king", color));
            }
        }
        Ok(())
    }

    #[inline(always)]
    pub fn king_square(&self, color: Color) -> Square {
        let king_bb = self.pieces(Piece::King, color);
        if king_bb == 0 {
            panic!("King missing for {:?}! FEN: {}", color, self.to_fen());
        }
        Square::from_index(king_bb.lsb())
    }

    /// Game phase from remaining non-pawn material (N=1, B=1, R=2, Q=4), not capped.
    pub fn phase(&self) -> i32 {
        let mut phase = 0;
        for color in [Color::White, Color::Black] {
            phase += self.bb(color, Piece::Knight).popcnt() * Piece::Knight.phase_weight();
            phase += self.bb(color, Piece::Bishop).popcnt() * Piece::Bishop.phase_weight();
            phase += self.bb(color, Piece::Rook).popcnt() * Piece::Rook.phase_weight();
            phase += self.bb(color, Piece::Queen).popcnt() * Piece::Queen.phase_weight();
        }
        phase
    }

    /// The same position seen from the other side: ranks flipped, colors swapped.
    pub fn mirrored(&self) -> Board {
        let mut m = Board::new_empty();
        for color in [Color::White, Color::Black] {
            for piece in Piece::ALL {
                let bb = self.bb(color, piece).swap_bytes();
                m.set_bb(!color, piece, bb);
            }
        }
        m.side_to_move = !self.side_to_move;
        m.castling_rights = mirror_castling(self.castling_rights);
        m.en_passant = self.en_passant.map(Square::flip);
        m.halfmove_clock = self.halfmove_clock;
        m.fullmove_number = self.fullmove_number;
        m.pst = [self.pst[1], self.pst[0]];
        m.refresh_zobrist();
        m
    }

    /// Full recompute from current state. Must match the incremental hash at all times.
    pub fn compute_zobrist_full(&self) -> u64 {
        use crate::hash::zobrist::zobrist_keys;

        let keys = zobrist_keys();
        let mut board_hash: u64 = 0;

        for c in [Color::White, Color::Black] {
            for p in Piece::ALL {
                let mut bb = self.bb(c, p);
                while bb != 0 {
                    let sq = bb.trailing_zeros() as usize;
                    board_hash ^= keys.piece[c as usize][p as usize][sq];
                    bb &= bb - 1;
                }
            }
        }

        if self.side_to_move == Color::Black {
            board_hash ^= keys.side_to_move;
        }

        let rights = self.castling_rights;
        for (i, flag) in [CASTLE_WK, CASTLE_WQ, CASTLE_BK, CASTLE_BQ].into_iter().enumerate() {
            if rights & flag != 0 {
                board_hash ^= keys.castling[i];
            }
        }

        if let Some(file) = crate::hash::zobrist::ep_file_to_hash(self) {
            board_hash ^= keys.ep_file[file as usize];
        }

        board_hash
    }
}

impl Color {
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    pub fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline(always)]
    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            0 => Color::White,
            1 => Color::Black,
            _ => panic!("Invalid Color encoding: {}", v),
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opposite()
    }
}

impl Piece {
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    #[inline(always)]
    pub(crate) fn from_u8(v: u8) -> Self {
        match v {
            0 => Piece::Pawn,
            1 => Piece::Knight,
            2 => Piece::Bishop,
            3 => Piece::Rook,
            4 => Piece::Queen,
            5 => Piece::King,
            _ => panic!("Invalid Piece encoding: {}", v),
        }
    }

    /// Contribution to the game phase counter.
    #[inline(always)]
    pub const fn phase_weight(self) -> i32 {
        match self {
            Piece::Knight | Piece::Bishop => 1,
            Piece::Rook => 2,
            Piece::Queen => 4,
            Piece::Pawn | Piece::King => 0,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new_empty()
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::new_empty();
        board.set_fen(s)?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let glyph = match self.piece_at(Square::from_file_rank(file, rank)) {
                    Some((color, piece)) => fen_tables::PC_TO_CHAR[color as usize * 6 + piece as usize],
                    None => '.',
                };
                write!(f, "{} ", glyph)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")?;
        write!(f, "{}", self.to_fen())
    }
}
