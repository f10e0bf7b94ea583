pub mod attacks;
pub mod bitboard;
pub mod board;
pub mod eval;
pub mod hash;
#[cfg(feature = "cli")]
pub mod logger;
pub mod square;
pub mod utils;
