// Evaluation constants. Values are centipawns unless noted.

use super::Score;

pub const MAX_PHASE: i32 = 24;
pub const MATE_SCORE: i32 = 32_000;
pub const MAX_EVAL: i32 = 29_999;

/// Indexed by `Piece`.
pub const PIECE_VALUE: [i32; 6] = [100, 325, 335, 500, 975, 0];
/// Exchange values, the king outweighs any material swing.
pub const SEE_VALUE: [i32; 6] = [100, 325, 335, 500, 975, 20_000];

pub const TEMPO: Score = Score::new(10, 5);

// Piece configuration
pub const N_PAWN_ADJ: i32 = 6;
pub const R_PAWN_ADJ: i32 = 3;
/// Indexed by own pawn count, centred on five pawns.
pub const PAWN_COUNT_ADJ: [i32; 9] = [-4, -3, -2, -1, 0, 1, 2, 3, 4];
pub const KNIGHT_PAIR: i32 = -10;
pub const ROOK_PAIR: i32 = -5;
pub const QUEEN_VS_MINOR: i32 = 25;
pub const BISHOP_PAIR: Score = Score::new(50, 60);

// King attack
pub const KING_ATT_UNITS: [i32; 6] = [0, 4, 4, 6, 10, 0];
pub const CHECK_THREAT: [i32; 6] = [0, 12, 12, 16, 24, 0];
pub const ROOK_CONTACT_CHECK: i32 = 24;
pub const QUEEN_CONTACT_CHECK: i32 = 36;
/// Attack units are capped here before the danger lookup.
pub const MAX_ATT_UNITS: usize = 399;
/// Danger curve entries, indices 0..=511.
pub const DANGER_LEN: usize = 512;
pub const MAX_DANGER: i32 = 1280;
pub const MAX_DANGER_STEP: i32 = 8;

/// Per unit of `14 - manhattan distance` to the enemy king.
pub const TROPISM: [Score; 6] = [
    Score::ZERO,
    Score::new(3, 3),
    Score::new(2, 1),
    Score::new(2, 1),
    Score::new(2, 1),
    Score::ZERO,
];

/// Mobility curve: `step * (count - pivot)` for each phase, `len` reachable counts.
#[derive(Debug, Clone, Copy)]
pub struct MobilityCurve {
    pub len: usize,
    pub pivot: i32,
    pub mg_step: i32,
    pub eg_step: i32,
}

pub const KNIGHT_MOBILITY: MobilityCurve = MobilityCurve { len: 9, pivot: 4, mg_step: 4, eg_step: 4 };
pub const BISHOP_MOBILITY: MobilityCurve = MobilityCurve { len: 14, pivot: 7, mg_step: 5, eg_step: 5 };
pub const ROOK_MOBILITY: MobilityCurve = MobilityCurve { len: 15, pivot: 7, mg_step: 2, eg_step: 4 };
pub const QUEEN_MOBILITY: MobilityCurve = MobilityCurve { len: 28, pivot: 14, mg_step: 1, eg_step: 2 };

pub const BISHOP_CONFINED: Score = Score::new(-5, -5);
pub const MINOR_BEHIND_PAWN: Score = Score::new(5, 5);

// Outposts, white's point of view, a1 first.
#[rustfmt::skip]
pub const KNIGHT_OUTPOST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 4, 4, 4, 4, 1, 0,
    0, 2, 6, 8, 8, 6, 2, 0,
    0, 1, 4, 4, 4, 4, 1, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
];

#[rustfmt::skip]
pub const BISHOP_OUTPOST: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 1, 2, 2, 2, 2, 1, 0,
    0, 1, 4, 4, 4, 4, 1, 0,
    0, 0, 1, 1, 1, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
];

// Lines
pub const ROOK_ON_QUEEN_FILE: Score = Score::new(5, 5);
pub const QUEEN_ON_QUEEN_FILE: Score = Score::new(5, 5);
pub const ROOK_OPEN: Score = Score::new(14, 10);
pub const ROOK_HALF_OPEN: Score = Score::new(7, 5);
pub const ROOK_HALF_OPEN_BAD: Score = Score::new(3, 2);
pub const ROOK_ON_7TH: Score = Score::new(16, 32);
pub const QUEEN_ON_7TH: Score = Score::new(4, 8);
pub const TWO_ROOKS_ON_7TH: Score = Score::new(8, 16);

// Pawn structure
pub const DOUBLED: Score = Score::new(-12, -24);
pub const ISOLATED: Score = Score::new(-10, -20);
pub const ISOLATED_OPEN: Score = Score::new(-10, 0);
pub const BACKWARD: Score = Score::new(-8, -8);
pub const BACKWARD_OPEN: Score = Score::new(-8, 0);
/// By relative rank.
pub const PAWN_ADVANCE: [i32; 8] = [0, 1, 1, 3, 5, 8, 12, 0];
/// By relative rank of the nearest own pawn on a shield file, 0 = none.
pub const SHELTER: [i32; 8] = [-36, 0, -8, -20, -28, -32, -36, -36];
/// By relative rank (from the defender's side) of the nearest enemy pawn on a shield file, 0 = none.
pub const STORM: [i32; 8] = [0, -10, -28, -16, -8, -4, 0, 0];

// Passed pawns, by relative rank
pub const PASSED_MG: [i32; 8] = [0, 12, 12, 30, 50, 80, 130, 0];
pub const PASSED_EG: [i32; 8] = [0, 16, 16, 39, 65, 104, 156, 0];
pub const PASSER_BLOCKED_PCT: i32 = 80;
pub const PASSER_FREE_PCT: i32 = 110;
pub const UNSTOPPABLE_PASSER: i32 = 500;

// Pressure
pub const HANGING_BASE: Score = Score::new(10, 18);
pub const DEFENDED_ATTACKED_BASE: Score = Score::new(5, 9);

// Patterns
pub const TRAPPED_BISHOP: Score = Score::new(-150, -150);
pub const TRAPPED_KNIGHT: Score = Score::new(-150, -150);
pub const BLOCKED_CENTRAL_BISHOP: Score = Score::new(-50, 0);
pub const KING_BLOCKS_ROOK: Score = Score::new(-50, 0);

/// Major/minor imbalance, indexed by clamped (major diff + 4, minor diff + 4).
#[rustfmt::skip]
pub const IMBALANCE: [[i32; 9]; 9] = [
    // minor diff: -4    -3    -2    -1     0    +1    +2    +3    +4
    [  -126, -126, -126, -126, -126, -126, -126, -126,  -42 ], // major -4
    [  -126, -126, -126, -126, -126, -126, -126,  -42,   42 ], // -3
    [  -126, -126, -126, -126, -126, -126,  -42,   42,   84 ], // -2
    [  -126, -126, -126, -126, -104,  -42,   42,   84,  126 ], // -1
    [  -126, -126, -126,  -88,    0,   88,  126,  126,  126 ], //  0
    [  -126,  -84,  -42,   42,  104,  126,  126,  126,  126 ], // +1
    [   -84,  -42,   42,  126,  126,  126,  126,  126,  126 ], // +2
    [   -42,   42,  126,  126,  126,  126,  126,  126,  126 ], // +3
    [    42,  126,  126,  126,  126,  126,  126,  126,  126 ], // +4
];
