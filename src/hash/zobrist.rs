// src/hash/zobrist.rs

use crate::bitboard::{FILE_A, FILE_H};
use crate::board::{Board, Color, Piece};
use once_cell::sync::OnceCell;
use rand::{RngCore, SeedableRng, rngs::StdRng};

#[cfg(feature = "deterministic_zobrist")]
const ZOBRIST_SEED: u64 = 0x9E37_79B9_AAAC_5C87;

fn make_zobrist_rng() -> StdRng {
    #[cfg(feature = "deterministic_zobrist")]
    {
        StdRng::seed_from_u64(ZOBRIST_SEED)
    }
    #[cfg(not(feature = "deterministic_zobrist"))]
    {
        let mut seed = [0u8; 32];
        rand::rng().fill_bytes(&mut seed);
        StdRng::from_seed(seed)
    }
}

/// Position hash keys. The evaluation cache is keyed by the resulting hash.
pub struct ZobristKeys {
    /// [color][piece][square]
    pub piece: [[[u64; 64]; 6]; 2],
    pub side_to_move: u64,
    /// K, Q, k, q
    pub castling: [u64; 4],
    /// a..h
    pub ep_file: [u64; 8],
}

/// File of the en passant square when a pawn of the side to move could capture onto it.
/// Pins are ignored.
pub fn ep_file_to_hash(board: &Board) -> Option<u8> {
    let ep = board.en_passant?;
    let target = ep.bb();

    let capturers = match board.side_to_move {
        Color::White if ep.rank() == 5 => ((target >> 9) & !FILE_H) | ((target >> 7) & !FILE_A),
        Color::Black if ep.rank() == 2 => ((target << 7) & !FILE_H) | ((target << 9) & !FILE_A),
        _ => return None,
    };

    if capturers & board.bb(board.side_to_move, Piece::Pawn) != 0 {
        Some(ep.file())
    } else {
        None
    }
}

pub fn zobrist_keys() -> &'static ZobristKeys {
    static KEYS: OnceCell<ZobristKeys> = OnceCell::new();
    KEYS.get_or_init(|| generate_keys(make_zobrist_rng()))
}

fn generate_keys(mut rng: StdRng) -> ZobristKeys {
    // zero keys would make pieces invisible to the hash
    let mut draw = || loop {
        let v = rng.next_u64();
        if v != 0 {
            break v;
        }
    };

    let mut keys = ZobristKeys {
        piece: [[[0u64; 64]; 6]; 2],
        side_to_move: 0,
        castling: [0u64; 4],
        ep_file: [0u64; 8],
    };

    for color_keys in keys.piece.iter_mut() {
        for piece_keys in color_keys.iter_mut() {
            for key in piece_keys.iter_mut() {
                *key = draw();
            }
        }
    }
    for key in keys.castling.iter_mut().chain(keys.ep_file.iter_mut()) {
        *key = draw();
    }
    keys.side_to_move = draw();

    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn side_to_move_changes_hash() {
        let w = Board::from_str("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let b = Board::from_str("4k3/8/8/8/8/8/8/4K3 b - - 0 1").unwrap();
        assert_ne!(w.zobrist, b.zobrist);
        assert_eq!(w.zobrist ^ b.zobrist, zobrist_keys().side_to_move);
    }

    #[test]
    fn unusable_ep_square_is_ignored() {
        let with_ep = Board::from_str("4k3/8/8/3p4/8/8/8/4K3 w - d6 0 1").unwrap();
        let without = Board::from_str("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").unwrap();
        assert_eq!(with_ep.zobrist, without.zobrist);

        let capturable = Board::from_str("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
        assert_eq!(ep_file_to_hash(&capturable), Some(3));
    }
}
