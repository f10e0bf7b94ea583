// FEN glyph lookup in both directions, indexed color * 6 + piece.

use super::{Color, Piece};

pub(super) const PC_TO_CHAR: [char; 12] = ['P', 'N', 'B', 'R', 'Q', 'K', 'p', 'n', 'b', 'r', 'q', 'k'];

pub(super) const CHAR_TO_PC: [Option<(Piece, Color)>; 128] = {
    let mut table: [Option<(Piece, Color)>; 128] = [None; 128];
    let pieces = [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen, Piece::King];
    let mut i = 0;
    while i < 12 {
        let color = if i < 6 { Color::White } else { Color::Black };
        table[PC_TO_CHAR[i] as usize] = Some((pieces[i % 6], color));
        i += 1;
    }
    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_round_trip() {
        for (i, &g) in PC_TO_CHAR.iter().enumerate() {
            let (piece, color) = CHAR_TO_PC[g as usize].unwrap();
            assert_eq!(color as usize * 6 + piece as usize, i, "glyph {}", g);
        }
        assert!(CHAR_TO_PC['x' as usize].is_none());
    }
}
