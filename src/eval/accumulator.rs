use super::config::{EvalConfig, Factor};
use super::params::{MATE_SCORE, MAX_PHASE};
use super::Score;
use crate::board::Color;

/// Whole-position terms applied after the per-factor blend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustments {
    pub phase: i32,
    /// White-relative, already scaled.
    pub imbalance: i32,
    /// White-relative.
    pub mate_helper: i32,
    /// 0..=64 per side, applied to the side the score favours.
    pub draw_factor: [i32; 2],
    pub blur: i32,
}

impl Default for Adjustments {
    fn default() -> Self {
        Adjustments {
            phase: MAX_PHASE,
            imbalance: 0,
            mate_helper: 0,
            draw_factor: [64; 2],
            blur: 0,
        }
    }
}

/// Per-side, per-factor midgame and endgame sub-totals for one evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalBuilder {
    mg: [[i32; Factor::COUNT]; 2],
    eg: [[i32; Factor::COUNT]; 2],
}

impl EvalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[inline(always)]
    pub fn add(&mut self, color: Color, factor: Factor, mg: i32, eg: i32) {
        self.mg[color as usize][factor as usize] += mg;
        self.eg[color as usize][factor as usize] += eg;
    }

    #[inline(always)]
    pub fn add_score(&mut self, color: Color, factor: Factor, s: Score) {
        self.add(color, factor, s.mg, s.eg);
    }

    #[inline(always)]
    pub fn get(&self, color: Color, factor: Factor) -> Score {
        Score::new(self.mg[color as usize][factor as usize], self.eg[color as usize][factor as usize])
    }

    /// Weighted white-minus-black totals for both phases.
    pub fn weighted(&self, cfg: &EvalConfig) -> (i64, i64) {
        let (w, b) = (Color::White as usize, Color::Black as usize);
        let mut mg = 0i64;
        let mut eg = 0i64;
        for factor in Factor::ALL {
            let f = factor as usize;
            if factor.is_asymmetric() {
                let ww = cfg.factor_weight(factor, Color::White) as i64;
                let bw = cfg.factor_weight(factor, Color::Black) as i64;
                mg += self.mg[w][f] as i64 * ww / 100 - self.mg[b][f] as i64 * bw / 100;
                eg += self.eg[w][f] as i64 * ww / 100 - self.eg[b][f] as i64 * bw / 100;
            } else {
                let weight = cfg.weights.get(factor) as i64;
                mg += (self.mg[w][f] as i64 - self.mg[b][f] as i64) * weight / 100;
                eg += (self.eg[w][f] as i64 - self.eg[b][f] as i64) * weight / 100;
            }
        }
        (mg, eg)
    }

    /// Phase-interpolated total, before whole-position adjustments.
    pub fn blend(&self, cfg: &EvalConfig, phase: i32) -> i64 {
        let phase = phase.clamp(0, MAX_PHASE) as i64;
        let (mg, eg) = self.weighted(cfg);
        (mg * phase + eg * (MAX_PHASE as i64 - phase)) / MAX_PHASE as i64
    }

    /// Final white-relative score.
    pub fn finalize(&self, cfg: &EvalConfig, adj: &Adjustments) -> i32 {
        let bound = cfg.max_eval.clamp(0, MATE_SCORE - 1) as i64;

        let mut score = self.blend(cfg, adj.phase) + adj.imbalance as i64 + adj.mate_helper as i64;

        let df = if score > 0 {
            adj.draw_factor[Color::White as usize]
        } else {
            adj.draw_factor[Color::Black as usize]
        };
        score = score * df as i64 / 64;

        score = score.clamp(-bound, bound);
        score += adj.blur as i64;
        score.clamp(-bound, bound) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(mg: i32, eg: i32) -> EvalBuilder {
        let mut b = EvalBuilder::new();
        b.add(Color::White, Factor::Pawns, mg, eg);
        b
    }

    #[test]
    fn opposite_contributions_cancel() {
        let mut b = EvalBuilder::new();
        b.add(Color::White, Factor::Lines, 14, 10);
        b.add(Color::Black, Factor::Lines, 14, 10);
        assert_eq!(b.weighted(&EvalConfig::default()), (0, 0));
    }

    #[test]
    fn phase_interpolates_between_midgame_and_endgame() {
        let cfg = EvalConfig::default();
        let b = builder(100, 20);
        assert_eq!(b.blend(&cfg, 24), 100);
        assert_eq!(b.blend(&cfg, 0), 20);
        assert_eq!(b.blend(&cfg, 12), 60);
        assert_eq!(b.blend(&cfg, 40), 100);
    }

    #[test]
    fn asymmetric_weights_follow_program_side() {
        let mut b = EvalBuilder::new();
        b.add(Color::White, Factor::Attack, 100, 100);
        b.add(Color::Black, Factor::Attack, 100, 100);
        let white = EvalConfig::default();
        let black = EvalConfig::default().with_program_side(Color::Black);
        assert_eq!(b.weighted(&white), (10, 10));
        assert_eq!(b.weighted(&black), (-10, -10));
    }

    #[test]
    fn draw_factor_uses_the_favoured_side() {
        let cfg = EvalConfig::default();
        let adj = Adjustments { draw_factor: [32, 64], ..Adjustments::default() };
        assert_eq!(builder(100, 100).finalize(&cfg, &adj), 50);
        assert_eq!(builder(-100, -100).finalize(&cfg, &adj), -100);
        let dead = Adjustments { draw_factor: [0, 0], ..Adjustments::default() };
        assert_eq!(builder(900, 900).finalize(&cfg, &dead), 0);
    }

    #[test]
    fn result_is_clamped_below_mate() {
        let cfg = EvalConfig { max_eval: 50_000, ..EvalConfig::default() };
        let adj = Adjustments { mate_helper: 40_000, ..Adjustments::default() };
        assert_eq!(EvalBuilder::new().finalize(&cfg, &adj), MATE_SCORE - 1);

        let tight = EvalConfig { max_eval: 300, ..EvalConfig::default() };
        let noisy = Adjustments { blur: 50, ..Adjustments::default() };
        assert_eq!(builder(1_000, 1_000).finalize(&tight, &noisy), 300);
        assert_eq!(builder(-1_000, -1_000).finalize(&tight, &noisy), -250);
    }

    #[test]
    fn extreme_subtotals_keep_their_sign() {
        let cfg = EvalConfig::default();
        let mut b = EvalBuilder::new();
        b.add(Color::White, Factor::Pawns, i32::MAX, i32::MAX);
        b.add(Color::Black, Factor::Pawns, -i32::MAX, -i32::MAX);
        assert_eq!(b.weighted(&cfg), (2 * i32::MAX as i64, 2 * i32::MAX as i64));
        assert_eq!(b.finalize(&cfg, &Adjustments::default()), cfg.max_eval);

        let mut flipped = EvalBuilder::new();
        flipped.add(Color::White, Factor::Mobility, -i32::MAX, -i32::MAX);
        flipped.add(Color::Black, Factor::Pawns, i32::MAX, i32::MAX);
        assert_eq!(flipped.finalize(&cfg, &Adjustments::default()), -cfg.max_eval);
    }

    #[test]
    fn adjustments_are_added_before_draw_scaling() {
        let cfg = EvalConfig::default();
        let adj = Adjustments { imbalance: 40, mate_helper: 24, draw_factor: [32, 32], ..Adjustments::default() };
        assert_eq!(EvalBuilder::new().finalize(&cfg, &adj), 32);
    }
}
