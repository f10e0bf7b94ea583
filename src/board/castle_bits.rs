/// Castling rights as a 4-bit set.
pub type CastleBits = u8;

pub const CASTLE_WK: CastleBits = 0b0001;
pub const CASTLE_WQ: CastleBits = 0b0010;
pub const CASTLE_BK: CastleBits = 0b0100;
pub const CASTLE_BQ: CastleBits = 0b1000;

/// Rights that survive a vertical mirror with colours swapped.
#[inline(always)]
pub const fn mirror_castling(rights: CastleBits) -> CastleBits {
    ((rights & (CASTLE_WK | CASTLE_WQ)) << 2) | ((rights & (CASTLE_BK | CASTLE_BQ)) >> 2)
}
