mod precompute;
pub mod scan;
mod search;
mod tables;

pub use precompute::generate_magic_tables;
pub use tables::{MagicEntry, MagicTables, SliderTables};

use once_cell::sync::Lazy;

const DEFAULT_SEED: u64 = 0x45;

static TABLES: Lazy<MagicTables> = Lazy::new(|| {
    generate_magic_tables(DEFAULT_SEED)
        .unwrap_or_else(|e| panic!("magic table generation failed: {}", e))
});

#[inline(always)]
pub fn bishop_attacks(sq: u8, occupancy: u64) -> u64 {
    TABLES.bishop.get_attacks(sq as usize, occupancy)
}

#[inline(always)]
pub fn rook_attacks(sq: u8, occupancy: u64) -> u64 {
    TABLES.rook.get_attacks(sq as usize, occupancy)
}

#[inline(always)]
pub fn queen_attacks(sq: u8, occupancy: u64) -> u64 {
    TABLES.queen_attacks(sq as usize, occupancy)
}
