// src/board/fen.rs

use super::fen_tables::{CHAR_TO_PC, PC_TO_CHAR};
use super::{Board, CASTLE_BK, CASTLE_BQ, CASTLE_WK, CASTLE_WQ, Color};
use crate::square::Square;
use std::str::FromStr;

impl Board {
    /// Replace the board contents with the position described by `fen`.
    /// The move counters are optional; everything else is required.
    pub fn set_fen(&mut self, fen: &str) -> Result<(), String> {
        let mut parts = fen.split_whitespace();
        let placement = parts.next().ok_or("empty FEN")?;
        let side = parts.next().ok_or("FEN missing side to move")?;
        let castling = parts.next().ok_or("FEN missing castling field")?;
        let ep = parts.next().ok_or("FEN missing en passant field")?;
        let halfmove = parts.next().unwrap_or("0");
        let fullmove = parts.next().unwrap_or("1");

        *self = Board::new_empty();

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(format!("FEN placement needs 8 ranks, got {}", ranks.len()));
        }

        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8;
            let mut file: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(skip) = ch.to_digit(10) {
                    if skip == 0 || skip > 8 {
                        return Err(format!("bad empty-square count {:?}", ch));
                    }
                    file += skip as u8;
                } else {
                    let (piece, color) = CHAR_TO_PC
                        .get(ch as usize)
                        .copied()
                        .flatten()
                        .ok_or_else(|| format!("unknown piece glyph {:?}", ch))?;
                    if file > 7 {
                        return Err(format!("rank {} overflows", rank + 1));
                    }
                    self.put_piece(color, piece, Square::from_file_rank(file, rank));
                    file += 1;
                }
                if file > 8 {
                    return Err(format!("rank {} overflows", rank + 1));
                }
            }
            if file != 8 {
                return Err(format!("rank {} has {} files", rank + 1, file));
            }
        }

        self.side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(format!("bad side to move {:?}", side)),
        };

        self.castling_rights = 0;
        if castling != "-" {
            for ch in castling.chars() {
                self.castling_rights |= match ch {
                    'K' => CASTLE_WK,
                    'Q' => CASTLE_WQ,
                    'k' => CASTLE_BK,
                    'q' => CASTLE_BQ,
                    _ => return Err(format!("bad castling glyph {:?}", ch)),
                };
            }
        }

        self.en_passant = if ep == "-" {
            None
        } else {
            Some(Square::from_str(ep)?)
        };

        self.halfmove_clock = halfmove
            .parse()
            .map_err(|_| format!("bad halfmove clock {:?}", halfmove))?;
        self.fullmove_number = fullmove
            .parse()
            .map_err(|_| format!("bad fullmove number {:?}", fullmove))?;

        self.refresh_zobrist();
        Ok(())
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);

        for rank in (0..8u8).rev() {
            let mut empty = 0;
            for file in 0..8u8 {
                match self.piece_at(Square::from_file_rank(file, rank)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            out.push(char::from(b'0' + empty));
                            empty = 0;
                        }
                        out.push(PC_TO_CHAR[color as usize * 6 + piece as usize]);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push(char::from(b'0' + empty));
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(if self.side_to_move == Color::White { 'w' } else { 'b' });
        out.push(' ');

        if self.castling_rights == 0 {
            out.push('-');
        } else {
            for (flag, glyph) in [(CASTLE_WK, 'K'), (CASTLE_WQ, 'Q'), (CASTLE_BK, 'k'), (CASTLE_BQ, 'q')] {
                if self.castling_rights & flag != 0 {
                    out.push(glyph);
                }
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(sq) => out.push_str(&sq.to_string()),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }
}
