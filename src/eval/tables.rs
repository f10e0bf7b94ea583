//! Lookup tables derived from an `EvalConfig`. Rebuilt on every reconfigure.

use super::config::EvalConfig;
use super::params::*;
use super::pst::piece_shape;
use super::Score;
use crate::attacks::king_attacks;
use crate::bitboard::{
    FILE_A, front_span, relative_rank_mask, shift_east, shift_north, shift_south, shift_west,
};
use crate::board::{Color, Piece};
use crate::utils::manhattan_distance;
use tracing::debug;

pub struct Tables {
    /// Material plus positional value, [color][piece][square].
    pub pst: [[[Score; 64]; 6]; 2],
    /// King attack units to score, nondecreasing and capped.
    pub danger: [i32; DANGER_LEN],
    /// King neighbourhood plus one more step towards `color`'s attacking pieces.
    /// Indexed [attacker][enemy king square].
    pub king_zone: [[u64; 64]; 2],
    /// Enemy pawns able to stop a pawn: front span on the own and adjacent files.
    pub passed_mask: [[u64; 64]; 2],
    /// Own pawns able to support a pawn: adjacent files, level or behind.
    pub support_mask: [[u64; 64]; 2],
    pub adjacent_files: [u64; 8],
    /// `14 - manhattan distance`.
    pub dist: [[i32; 64]; 64],
    /// [piece][reachable squares], pawns and kings unused.
    pub mobility: [[Score; 28]; 6],
    /// [color][0 knight / 1 bishop][square]
    pub outpost: [[[i32; 64]; 2]; 2],
    /// Own half of the board.
    pub home: [u64; 2],
    pub away: [u64; 2],
    pub phalanx: [[Score; 64]; 2],
    pub defended: [[Score; 64]; 2],
}

impl Tables {
    pub fn new(cfg: &EvalConfig) -> Box<Tables> {
        let mut t = Box::new(Tables {
            pst: [[[Score::ZERO; 64]; 6]; 2],
            danger: [0; DANGER_LEN],
            king_zone: [[0; 64]; 2],
            passed_mask: [[0; 64]; 2],
            support_mask: [[0; 64]; 2],
            adjacent_files: [0; 8],
            dist: [[0; 64]; 64],
            mobility: [[Score::ZERO; 28]; 6],
            outpost: [[[0; 64]; 2]; 2],
            home: [0; 2],
            away: [0; 2],
            phalanx: [[Score::ZERO; 64]; 2],
            defended: [[Score::ZERO; 64]; 2],
        });

        t.init_pst(cfg);
        t.init_danger();
        t.init_masks();
        t.init_mobility();
        t.init_pawn_terms();

        for a in 0..64u8 {
            for b in 0..64u8 {
                t.dist[a as usize][b as usize] = 14 - manhattan_distance(a, b);
            }
        }

        for sq in 0..64 {
            t.outpost[Color::White as usize][0][sq] = KNIGHT_OUTPOST[sq];
            t.outpost[Color::White as usize][1][sq] = BISHOP_OUTPOST[sq];
            t.outpost[Color::Black as usize][0][sq ^ 56] = KNIGHT_OUTPOST[sq];
            t.outpost[Color::Black as usize][1][sq ^ 56] = BISHOP_OUTPOST[sq];
        }

        debug!(
            material_pct = cfg.material_pct,
            pst_pct = cfg.pst_pct,
            "evaluation tables built"
        );
        t
    }

    #[inline(always)]
    pub fn pst(&self, color: Color, piece: Piece, sq: u8) -> Score {
        self.pst[color as usize][piece as usize][sq as usize]
    }

    #[inline(always)]
    pub fn mobility(&self, piece: Piece, count: i32) -> Score {
        self.mobility[piece as usize][count.clamp(0, 27) as usize]
    }

    fn init_pst(&mut self, cfg: &EvalConfig) {
        for piece in Piece::ALL {
            let shape = piece_shape(piece);
            let value = PIECE_VALUE[piece as usize] * cfg.material_pct / 100;
            for sq in 0..64 {
                let s = shape[sq].percent(cfg.pst_pct) + Score::new(value, value);
                self.pst[Color::White as usize][piece as usize][sq] = s;
                self.pst[Color::Black as usize][piece as usize][sq ^ 56] = s;
            }
        }
    }

    fn init_danger(&mut self) {
        let mut t = 0;
        for i in 0..DANGER_LEN as i32 {
            t = MAX_DANGER.min((i * i * 2 / 5).min(t + MAX_DANGER_STEP));
            self.danger[i as usize] = t * 100 / 256;
        }
    }

    fn init_masks(&mut self) {
        for file in 0..8 {
            let f = FILE_A << file;
            self.adjacent_files[file] = shift_east(f) | shift_west(f);
        }

        for sq in 0..64u8 {
            let bb = 1u64 << sq;
            let beside = shift_east(bb) | shift_west(bb);
            let ring = king_attacks(sq);
            for color in Color::ALL {
                let c = color as usize;
                self.passed_mask[c][sq as usize] = front_span(bb | beside, color);
                self.support_mask[c][sq as usize] = (front_span(beside, !color)) | beside;
            }
            // zone extends towards the side the attack comes from
            self.king_zone[Color::White as usize][sq as usize] = ring | shift_south(ring);
            self.king_zone[Color::Black as usize][sq as usize] = ring | shift_north(ring);
        }

        for color in Color::ALL {
            let mut home = 0;
            for r in 0..4 {
                home |= relative_rank_mask(color, r);
            }
            self.home[color as usize] = home;
            self.away[color as usize] = !home;
        }
    }

    fn init_mobility(&mut self) {
        for (piece, curve) in [
            (Piece::Knight, KNIGHT_MOBILITY),
            (Piece::Bishop, BISHOP_MOBILITY),
            (Piece::Rook, ROOK_MOBILITY),
            (Piece::Queen, QUEEN_MOBILITY),
        ] {
            let row = &mut self.mobility[piece as usize];
            for (cnt, entry) in row.iter_mut().enumerate() {
                let c = (cnt as i32).min(curve.len as i32 - 1) - curve.pivot;
                *entry = Score::new(curve.mg_step * c, curve.eg_step * c);
            }
        }
    }

    fn init_pawn_terms(&mut self) {
        for sq in 0..64usize {
            let rank = sq >> 3;
            let phalanx = match sq {
                27 => 15,      // d4
                19 => 10,      // d3
                26 | 28 => 10, // c4, e4
                _ => PAWN_ADVANCE[rank] * 2,
            };
            let defended = PAWN_ADVANCE[rank];
            for (color, rel) in [(Color::White, sq), (Color::Black, sq ^ 56)] {
                self.phalanx[color as usize][rel] = Score::new(phalanx, phalanx);
                self.defended[color as usize][rel] = Score::new(defended, defended);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::square::Square;
    use std::str::FromStr;

    fn sq(name: &str) -> usize {
        Square::from_str(name).unwrap().idx()
    }

    #[test]
    fn danger_curve_is_monotone_and_capped() {
        let t = Tables::new(&EvalConfig::default());
        assert_eq!(t.danger[0], 0);
        for w in t.danger.windows(2) {
            assert!(w[0] <= w[1]);
        }
        assert_eq!(t.danger.len(), 512);
        assert_eq!(t.danger[MAX_ATT_UNITS], MAX_DANGER * 100 / 256);
        assert_eq!(t.danger[DANGER_LEN - 1], t.danger[MAX_ATT_UNITS]);
    }

    #[test]
    fn passed_mask_covers_three_files_ahead() {
        let t = Tables::new(&EvalConfig::default());
        let m = t.passed_mask[Color::White as usize][sq("e4")];
        assert_eq!(m.count_ones(), 12);
        assert!(m & (1u64 << sq("d5")) != 0);
        assert!(m & (1u64 << sq("e3")) == 0);
        let b = t.passed_mask[Color::Black as usize][sq("a5")];
        assert_eq!(b.count_ones(), 8);
    }

    #[test]
    fn black_tables_mirror_white() {
        let t = Tables::new(&EvalConfig::default());
        for piece in Piece::ALL {
            for s in 0..64u8 {
                assert_eq!(t.pst(Color::White, piece, s), t.pst(Color::Black, piece, s ^ 56));
            }
        }
        assert_eq!(t.outpost[1][0][sq("d4")], KNIGHT_OUTPOST[sq("d5")]);
    }

    #[test]
    fn material_pct_scales_piece_values() {
        let full = Tables::new(&EvalConfig::default());
        let half = Tables::new(&EvalConfig { material_pct: 50, pst_pct: 0, ..EvalConfig::default() });
        let e4 = sq("e4") as u8;
        assert_eq!(half.pst(Color::White, Piece::Rook, e4), Score::new(250, 250));
        assert!(full.pst(Color::White, Piece::Rook, e4).mg > 500);
    }

    #[test]
    fn mobility_pivots() {
        let t = Tables::new(&EvalConfig::default());
        assert_eq!(t.mobility(Piece::Knight, 4), Score::ZERO);
        assert_eq!(t.mobility(Piece::Knight, 8), Score::new(16, 16));
        assert_eq!(t.mobility(Piece::Rook, 0), Score::new(-14, -28));
        assert_eq!(t.mobility(Piece::Queen, 27), Score::new(13, 26));
    }

    #[test]
    fn dist_is_inverted_manhattan() {
        let t = Tables::new(&EvalConfig::default());
        assert_eq!(t.dist[0][63], 0);
        assert_eq!(t.dist[sq("e4")][sq("e4")], 14);
    }
}
