use super::params::MAX_PHASE;
use super::Score;
use crate::bitboard::BitboardExt;
use crate::board::{Board, Color, Piece};
use crate::square::Square;

/// Read-only view of a position the evaluator can score.
///
/// `Board` implements it; any other representation that can answer these
/// queries can be evaluated too.
pub trait Position {
    fn pieces(&self, piece: Piece, color: Color) -> u64;
    fn occupancy(&self, color: Color) -> u64;
    fn occupied(&self) -> u64;
    fn piece_type_at(&self, sq: Square) -> Option<Piece>;
    fn king_square(&self, color: Color) -> Square;
    fn side_to_move(&self) -> Color;
    fn hash_key(&self) -> u64;
    /// Material plus piece-square sum for `color`, kept by the position owner.
    fn pst(&self, color: Color) -> Score;
    /// Remaining non-pawn material on the N=1 B=1 R=2 Q=4 scale, uncapped.
    fn raw_phase(&self) -> i32;

    #[inline(always)]
    fn count(&self, piece: Piece, color: Color) -> i32 {
        self.pieces(piece, color).popcnt()
    }

    /// Game phase 0 (bare kings and pawns) ..= 24 (all pieces on board).
    #[inline(always)]
    fn phase(&self) -> i32 {
        self.raw_phase().min(MAX_PHASE)
    }

    /// Bishops and queens.
    #[inline(always)]
    fn diag_movers(&self, color: Color) -> u64 {
        self.pieces(Piece::Bishop, color) | self.pieces(Piece::Queen, color)
    }

    /// Rooks and queens.
    #[inline(always)]
    fn straight_movers(&self, color: Color) -> u64 {
        self.pieces(Piece::Rook, color) | self.pieces(Piece::Queen, color)
    }

    #[inline(always)]
    fn minors(&self, color: Color) -> u64 {
        self.pieces(Piece::Knight, color) | self.pieces(Piece::Bishop, color)
    }

    /// True when `color` has nothing but king and pawns.
    #[inline(always)]
    fn has_no_pieces(&self, color: Color) -> bool {
        self.minors(color) | self.straight_movers(color) == 0
    }

    fn color_at(&self, sq: Square) -> Option<Color> {
        if self.occupancy(Color::White) & sq.bb() != 0 {
            Some(Color::White)
        } else if self.occupancy(Color::Black) & sq.bb() != 0 {
            Some(Color::Black)
        } else {
            None
        }
    }
}

impl Position for Board {
    #[inline(always)]
    fn pieces(&self, piece: Piece, color: Color) -> u64 {
        Board::pieces(self, piece, color)
    }

    #[inline(always)]
    fn occupancy(&self, color: Color) -> u64 {
        Board::occupancy(self, color)
    }

    #[inline(always)]
    fn occupied(&self) -> u64 {
        Board::occupied(self)
    }

    #[inline(always)]
    fn piece_type_at(&self, sq: Square) -> Option<Piece> {
        Board::piece_type_at(self, sq)
    }

    #[inline(always)]
    fn king_square(&self, color: Color) -> Square {
        Board::king_square(self, color)
    }

    #[inline(always)]
    fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline(always)]
    fn hash_key(&self) -> u64 {
        self.zobrist
    }

    #[inline(always)]
    fn pst(&self, color: Color) -> Score {
        self.pst[color as usize]
    }

    #[inline(always)]
    fn raw_phase(&self) -> i32 {
        Board::phase(self)
    }
}
