use super::accumulator::{Adjustments, EvalBuilder};
use super::config::{EvalConfig, Factor};
use super::params::MAX_PHASE;
use super::Score;
use crate::board::Color;
use std::fmt;

/// Everything one evaluation computed, for inspection.
#[derive(Debug, Clone)]
pub struct Breakdown {
    pub factors: EvalBuilder,
    pub adjustments: Adjustments,
    pub config: EvalConfig,
    /// White-relative final score.
    pub score: i32,
    pub side_to_move: Color,
}

impl Breakdown {
    /// Final score from the side to move's point of view.
    pub fn relative_score(&self) -> i32 {
        match self.side_to_move {
            Color::White => self.score,
            Color::Black => -self.score,
        }
    }

    /// Weighted white-minus-black difference for one factor, per phase.
    pub fn factor_diff(&self, factor: Factor) -> Score {
        let w = self.factors.get(Color::White, factor);
        let b = self.factors.get(Color::Black, factor);
        let ww = self.config.factor_weight(factor, Color::White);
        let bw = self.config.factor_weight(factor, Color::Black);
        if factor.is_asymmetric() {
            Score::new(w.mg * ww / 100 - b.mg * bw / 100, w.eg * ww / 100 - b.eg * bw / 100)
        } else {
            (w - b).percent(ww)
        }
    }

    /// Phase-blended contribution of one factor.
    pub fn factor_total(&self, factor: Factor) -> i32 {
        let d = self.factor_diff(factor);
        let phase = self.adjustments.phase.clamp(0, MAX_PHASE);
        (d.mg * phase + d.eg * (MAX_PHASE - phase)) / MAX_PHASE
    }
}

impl fmt::Display for Breakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Factor     |  Val |  Weight |   Mg (   WC,    BC) |   Eg (   WC,    BC)")?;
        writeln!(f, "-----------+------+---------+---------------------+--------------------")?;
        for factor in Factor::ALL {
            let w = self.factors.get(Color::White, factor);
            let b = self.factors.get(Color::Black, factor);
            let d = self.factor_diff(factor);
            let weight = if factor.is_asymmetric() {
                format!(
                    "{}/{}",
                    self.config.factor_weight(factor, Color::White),
                    self.config.factor_weight(factor, Color::Black)
                )
            } else {
                self.config.weights.get(factor).to_string()
            };
            writeln!(
                f,
                "{:<10} | {:>4} | {:>7} | {:>4} ({:>5}, {:>5}) | {:>4} ({:>5}, {:>5})",
                factor.name(),
                self.factor_total(factor),
                weight,
                d.mg,
                w.mg,
                b.mg,
                d.eg,
                w.eg,
                b.eg
            )?;
        }
        writeln!(f, "-----------+------+---------+---------------------+--------------------")?;
        let adj = &self.adjustments;
        writeln!(f, "Imbalance  | {:>4}", adj.imbalance)?;
        writeln!(f, "Mate help  | {:>4}", adj.mate_helper)?;
        writeln!(f, "Phase      | {:>4}", adj.phase)?;
        writeln!(f, "Draw scale | {:>4} / {} (white / black)", adj.draw_factor[0], adj.draw_factor[1])?;
        if adj.blur != 0 {
            writeln!(f, "Blur       | {:>4}", adj.blur)?;
        }
        write!(
            f,
            "Score      | {:>4} (white), {} for {:?} to move",
            self.score,
            self.relative_score(),
            self.side_to_move
        )
    }
}
