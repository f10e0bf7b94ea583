//! Tunable evaluation weights. Owned by an `Evaluator`; changing them requires
//! `Evaluator::reconfigure`, which rebuilds the derived tables.

use crate::board::{Color, Piece};
use serde::{Deserialize, Serialize};

/// Scoring factors the accumulator keeps separate sub-totals for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Factor {
    Attack,
    Mobility,
    Pst,
    Pawns,
    Passers,
    Tropism,
    Outposts,
    Lines,
    Pressure,
    Others,
}

impl Factor {
    pub const COUNT: usize = 10;

    pub const ALL: [Factor; Factor::COUNT] = [
        Factor::Attack,
        Factor::Mobility,
        Factor::Pst,
        Factor::Pawns,
        Factor::Passers,
        Factor::Tropism,
        Factor::Outposts,
        Factor::Lines,
        Factor::Pressure,
        Factor::Others,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Factor::Attack => "Attack",
            Factor::Mobility => "Mobility",
            Factor::Pst => "Pst",
            Factor::Pawns => "Pawns",
            Factor::Passers => "Passers",
            Factor::Tropism => "Tropism",
            Factor::Outposts => "Outposts",
            Factor::Lines => "Lines",
            Factor::Pressure => "Pressure",
            Factor::Others => "Others",
        }
    }

    /// Attack and mobility are weighted per side instead of symmetrically.
    #[inline(always)]
    pub const fn is_asymmetric(self) -> bool {
        matches!(self, Factor::Attack | Factor::Mobility)
    }
}

/// Percentage multiplier per factor, 100 = unmodified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights([i32; Factor::COUNT]);

impl Weights {
    #[inline(always)]
    pub fn get(&self, factor: Factor) -> i32 {
        self.0[factor as usize]
    }

    pub fn set(&mut self, factor: Factor, pct: i32) {
        self.0[factor as usize] = pct;
    }
}

impl Default for Weights {
    fn default() -> Self {
        let mut w = Weights([100; Factor::COUNT]);
        w.set(Factor::Tropism, 20);
        w
    }
}

/// Midgame bonus per own piece, applied to the program side only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeepBias {
    pub pawn: i32,
    pub knight: i32,
    pub bishop: i32,
    pub rook: i32,
    pub queen: i32,
}

impl KeepBias {
    pub fn get(&self, piece: Piece) -> i32 {
        match piece {
            Piece::Pawn => self.pawn,
            Piece::Knight => self.knight,
            Piece::Bishop => self.bishop,
            Piece::Rook => self.rook,
            Piece::Queen => self.queen,
            Piece::King => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    pub weights: Weights,
    /// Scales piece values (and material-like terms).
    pub material_pct: i32,
    /// Scales the piece-square part of the value tables.
    pub pst_pct: i32,
    pub own_attack: i32,
    pub opp_attack: i32,
    pub own_mobility: i32,
    pub opp_mobility: i32,
    /// The side that receives the `own_*` weights.
    pub program_side: Color,
    pub keep: KeepBias,
    /// Magnitude of the hash-derived score noise, 0 disables it.
    pub blur: i32,
    /// Largest absolute score returned. Always kept below the mate score.
    pub max_eval: i32,
    /// Evaluation cache slots, 0 disables caching.
    pub cache_entries: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            weights: Weights::default(),
            material_pct: 100,
            pst_pct: 100,
            own_attack: 110,
            opp_attack: 100,
            own_mobility: 100,
            opp_mobility: 110,
            program_side: Color::White,
            keep: KeepBias::default(),
            blur: 0,
            max_eval: super::MAX_EVAL,
            cache_entries: 1 << 16,
        }
    }
}

impl EvalConfig {
    /// Per-side weight of the attack factor.
    #[inline(always)]
    pub fn attack_weight(&self, side: Color) -> i32 {
        if side == self.program_side {
            self.own_attack
        } else {
            self.opp_attack
        }
    }

    /// Per-side weight of the mobility factor.
    #[inline(always)]
    pub fn mobility_weight(&self, side: Color) -> i32 {
        if side == self.program_side {
            self.own_mobility
        } else {
            self.opp_mobility
        }
    }

    /// Weight used when reducing `factor` for `side`.
    #[inline(always)]
    pub fn factor_weight(&self, factor: Factor, side: Color) -> i32 {
        match factor {
            Factor::Attack => self.attack_weight(side),
            Factor::Mobility => self.mobility_weight(side),
            _ => self.weights.get(factor),
        }
    }

    /// Same settings with the asymmetric weights keyed to the other side.
    pub fn with_program_side(mut self, side: Color) -> Self {
        self.program_side = side;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = EvalConfig::default();
        assert_eq!(cfg.weights.get(Factor::Tropism), 20);
        assert_eq!(cfg.weights.get(Factor::Pawns), 100);
        assert_eq!(cfg.attack_weight(Color::White), 110);
        assert_eq!(cfg.attack_weight(Color::Black), 100);
        assert_eq!(cfg.mobility_weight(Color::Black), 110);
    }

    #[test]
    fn program_side_swaps_asymmetric_weights() {
        let cfg = EvalConfig::default().with_program_side(Color::Black);
        assert_eq!(cfg.factor_weight(Factor::Attack, Color::Black), 110);
        assert_eq!(cfg.factor_weight(Factor::Mobility, Color::White), 110);
        assert_eq!(cfg.factor_weight(Factor::Lines, Color::White), 100);
    }
}
