//! Static evaluation.
//!
//! An [`Evaluator`] owns its configuration, the tables derived from it and a
//! score cache. `evaluate` takes `&self` and can be shared between threads;
//! changing weights goes through `reconfigure`, which needs `&mut self`.

mod accumulator;
mod cache;
pub mod config;
mod context;
mod endgame;
mod passers;
mod patterns;
mod pawns;
mod pieces;
pub mod params;
mod position;
mod print;
pub mod pst;
mod score;
pub mod see;
mod tables;
mod threats;

pub use accumulator::{Adjustments, EvalBuilder};
pub use cache::EvalCache;
pub use config::{EvalConfig, Factor, KeepBias, Weights};
pub use params::{MATE_SCORE, MAX_EVAL, MAX_PHASE};
pub use position::Position;
pub use print::Breakdown;
pub use score::Score;
pub use tables::Tables;

use crate::bitboard::Bits;
use crate::board::{Board, Color, Piece};
use context::{AttackMaps, EvalContext};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, trace};

pub struct Evaluator {
    config: EvalConfig,
    tables: Box<Tables>,
    cache: EvalCache,
    full_evaluations: AtomicU64,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        let tables = Tables::new(&config);
        let cache = EvalCache::new(config.cache_entries);
        Evaluator {
            config,
            tables,
            cache,
            full_evaluations: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Replace the weights. Tables are rebuilt and cached scores dropped.
    pub fn reconfigure(&mut self, config: EvalConfig) {
        debug!(?config, "reconfiguring evaluator");
        self.tables = Tables::new(&config);
        if config.cache_entries != self.cache.capacity() {
            self.cache = EvalCache::new(config.cache_entries);
        } else {
            self.cache.clear();
        }
        self.config = config;
    }

    /// Key the asymmetric attack and mobility weights to `side`.
    pub fn set_program_side(&mut self, side: Color) {
        if self.config.program_side != side {
            debug!(?side, "program side changed");
            self.config.program_side = side;
            self.cache.clear();
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of evaluations that ran the full pipeline (cache misses included,
    /// cache hits and breakdowns excluded).
    pub fn full_evaluations(&self) -> u64 {
        self.full_evaluations.load(Ordering::Relaxed)
    }

    /// Material plus piece-square totals for both sides, computed from scratch.
    pub fn pst_sums<P: Position>(&self, pos: &P) -> [Score; 2] {
        let mut sums = [Score::ZERO; 2];
        for color in Color::ALL {
            for piece in Piece::ALL {
                for sq in Bits(pos.pieces(piece, color)) {
                    sums[color as usize] += self.tables.pst(color, piece, sq);
                }
            }
        }
        sums
    }

    /// Fill the board's partial sums from this evaluator's tables.
    pub fn refresh_pst(&self, board: &mut Board) {
        board.pst = self.pst_sums(board);
    }

    /// Score of `pos` in centipawns from the side to move's point of view.
    pub fn evaluate<P: Position>(&self, pos: &P, use_cache: bool) -> i32 {
        let key = pos.hash_key();
        let hit = if use_cache { self.cache.probe(key) } else { None };
        let score = match hit {
            Some(hit) => hit,
            None => {
                self.full_evaluations.fetch_add(1, Ordering::Relaxed);
                let mut acc = EvalBuilder::new();
                let adj = self.run(pos, &mut acc);
                let score = acc.finalize(&self.config, &adj);
                self.cache.store(key, score);
                score
            }
        };
        match pos.side_to_move() {
            Color::White => score,
            Color::Black => -score,
        }
    }

    /// Full pipeline without the cache, keeping every intermediate total.
    pub fn breakdown<P: Position>(&self, pos: &P) -> Breakdown {
        let mut acc = EvalBuilder::new();
        let adjustments = self.run(pos, &mut acc);
        let score = acc.finalize(&self.config, &adjustments);
        trace!(score, ?adjustments, "evaluation breakdown");
        Breakdown {
            factors: acc,
            adjustments,
            config: self.config.clone(),
            score,
            side_to_move: pos.side_to_move(),
        }
    }

    pub fn print<P: Position>(&self, pos: &P) {
        println!("{}", self.breakdown(pos));
    }

    fn run<P: Position>(&self, pos: &P, acc: &mut EvalBuilder) -> Adjustments {
        let ctx = EvalContext {
            pos,
            tables: &self.tables,
            config: &self.config,
        };

        acc.clear();
        for color in Color::ALL {
            acc.add_score(color, Factor::Pst, pos.pst(color));
        }
        acc.add_score(pos.side_to_move(), Factor::Others, params::TEMPO);

        let mut maps = AttackMaps::new(pos);
        for color in Color::ALL {
            pieces::score_pieces(&ctx, color, &mut maps, acc);
        }
        // attack maps are complete from here on
        for color in Color::ALL {
            pawns::score_pawn_structure(&ctx, color, &maps, acc);
            pawns::score_king_shelter(&ctx, color, acc);
            passers::score_passers(&ctx, color, &maps, acc);
            threats::score_hanging(&ctx, color, &maps, acc);
            patterns::score_patterns(pos, color, acc);
        }
        passers::score_unstoppable(&ctx, acc);
        self.score_keep_bias(pos, acc);

        Adjustments {
            phase: pos.phase(),
            imbalance: endgame::imbalance(pos, &self.config),
            mate_helper: endgame::checkmate_helper(pos),
            draw_factor: [
                endgame::draw_factor(pos, Color::White),
                endgame::draw_factor(pos, Color::Black),
            ],
            blur: self.blur(pos.hash_key()),
        }
    }

    fn score_keep_bias<P: Position>(&self, pos: &P, acc: &mut EvalBuilder) {
        let side = self.config.program_side;
        let bonus: i32 = [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
            .into_iter()
            .map(|p| self.config.keep.get(p) * pos.count(p, side))
            .sum();
        if bonus != 0 {
            acc.add(side, Factor::Others, bonus, 0);
        }
    }

    /// Deterministic per-position noise in `(-blur/2, blur/2]`.
    fn blur(&self, key: u64) -> i32 {
        let blur = self.config.blur;
        if blur <= 0 {
            return 0;
        }
        blur / 2 - (key % blur as u64) as i32
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new(EvalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn prepared(eval: &Evaluator, fen: &str) -> Board {
        let mut b = Board::from_str(fen).unwrap();
        eval.refresh_pst(&mut b);
        b
    }

    #[test]
    fn start_position_is_balanced() {
        let eval = Evaluator::default();
        let b = prepared(&eval, crate::board::START_FEN);
        let bd = eval.breakdown(&b);
        // only tempo and the attack/mobility asymmetry separate the sides
        assert!(bd.score.abs() < 40, "start position scored {}", bd.score);
        assert_eq!(bd.factors.get(Color::White, Factor::Pst), bd.factors.get(Color::Black, Factor::Pst));
    }

    #[test]
    fn extra_queen_wins() {
        let eval = Evaluator::default();
        let b = prepared(&eval, "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(eval.evaluate(&b, false) > 700);
        let mut black = b.clone();
        black.side_to_move = Color::Black;
        black.refresh_zobrist();
        assert!(eval.evaluate(&black, false) < -700);
    }

    #[test]
    fn cache_hit_skips_the_pipeline() {
        let eval = Evaluator::default();
        let b = prepared(&eval, crate::board::START_FEN);
        let first = eval.evaluate(&b, true);
        assert_eq!(eval.full_evaluations(), 1);
        assert_eq!(eval.evaluate(&b, true), first);
        assert_eq!(eval.full_evaluations(), 1);
        eval.evaluate(&b, false);
        assert_eq!(eval.full_evaluations(), 2);
    }

    #[test]
    fn pst_sums_match_board() {
        let eval = Evaluator::default();
        let b = prepared(&eval, "r3k2r/pp3ppp/2n5/3q4/3P4/2N5/PP3PPP/R2QK2R w KQkq - 0 1");
        assert_eq!(b.pst, eval.pst_sums(&b));
        assert_eq!(b.mirrored().pst, eval.pst_sums(&b.mirrored()));
    }

    #[test]
    fn keep_bias_goes_to_program_side() {
        let cfg = EvalConfig {
            keep: KeepBias { queen: 30, ..KeepBias::default() },
            ..EvalConfig::default()
        };
        let eval = Evaluator::new(cfg);
        let b = prepared(&eval, crate::board::START_FEN);
        let neutral = Evaluator::default().breakdown(&b);
        let biased = eval.breakdown(&b);
        let delta = biased.factors.get(Color::White, Factor::Others) - neutral.factors.get(Color::White, Factor::Others);
        assert_eq!(delta, Score::new(30, 0));
        assert_eq!(biased.factors.get(Color::Black, Factor::Others), neutral.factors.get(Color::Black, Factor::Others));
    }

    #[test]
    fn blur_stays_in_range_and_bound() {
        let cfg = EvalConfig { blur: 20, ..EvalConfig::default() };
        let eval = Evaluator::new(cfg);
        for key in [0u64, 1, 19, 12345, u64::MAX] {
            let n = eval.blur(key);
            assert!((-9..=10).contains(&n), "blur {} for key {}", n, key);
        }
        assert_eq!(Evaluator::default().blur(12345), 0);
    }

    #[test]
    fn program_side_switch_drops_cached_scores() {
        let mut eval = Evaluator::default();
        let b = prepared(&eval, crate::board::START_FEN);
        eval.evaluate(&b, true);
        assert!(eval.cache.probe(b.zobrist).is_some());
        eval.set_program_side(Color::Black);
        assert_eq!(eval.config().program_side, Color::Black);
        assert!(eval.cache.probe(b.zobrist).is_none());

        eval.evaluate(&b, true);
        eval.clear_cache();
        assert!(eval.cache.probe(b.zobrist).is_none());
    }

    #[test]
    fn reconfigure_rebuilds_and_clears() {
        let mut eval = Evaluator::default();
        let b = prepared(&eval, crate::board::START_FEN);
        eval.evaluate(&b, true);
        eval.reconfigure(EvalConfig { material_pct: 50, ..EvalConfig::default() });
        assert!(eval.cache.probe(b.zobrist).is_none());
        assert_eq!(eval.tables().pst(Color::White, Piece::Rook, 0), Score::new(250 - 6, 250));
    }
}
