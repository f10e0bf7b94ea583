//! Slow ray-walking slider attacks, used to fill the magic tables and as a test oracle.

use crate::utils::square_index;

#[inline]
fn scan_ray(square: usize, (dr, df): (isize, isize), blockers: u64) -> u64 {
    let mut attacks = 0u64;
    let mut rank = (square / 8) as isize + dr;
    let mut file = (square % 8) as isize + df;

    while (0..=7).contains(&rank) && (0..=7).contains(&file) {
        let sq = square_index(rank as usize, file as usize);
        attacks |= 1 << sq;
        if (blockers >> sq) & 1 != 0 {
            break; // first blocker is capturable, nothing behind it is
        }
        rank += dr;
        file += df;
    }
    attacks
}

const ROOK_DIRS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const BISHOP_DIRS: [(isize, isize); 4] = [(1, 1), (-1, -1), (1, -1), (-1, 1)];

#[inline]
pub fn rook_attacks_per_square(square: usize, blockers: u64) -> u64 {
    ROOK_DIRS
        .iter()
        .fold(0, |acc, &dir| acc | scan_ray(square, dir, blockers))
}

#[inline]
pub fn bishop_attacks_per_square(square: usize, blockers: u64) -> u64 {
    BISHOP_DIRS
        .iter()
        .fold(0, |acc, &dir| acc | scan_ray(square, dir, blockers))
}

/// Relevant occupancy for a rook: its rays without the board edge squares.
pub fn rook_mask(square: usize) -> u64 {
    let rank = square / 8;
    let file = square % 8;
    let mut mask = 0u64;
    for r in 1..7 {
        if r != rank {
            mask |= 1 << square_index(r, file);
        }
    }
    for f in 1..7 {
        if f != file {
            mask |= 1 << square_index(rank, f);
        }
    }
    mask
}

/// Relevant occupancy for a bishop: its diagonals without the board edge squares.
pub fn bishop_mask(square: usize) -> u64 {
    const EDGES: u64 = 0xFF81_8181_8181_81FF;
    bishop_attacks_per_square(square, 0) & !EDGES
}

/// Every subset of `mask` (carry-rippler enumeration).
pub fn blocker_subsets(mask: u64) -> Vec<u64> {
    let mut subsets = Vec::with_capacity(1 << mask.count_ones());
    let mut subset = 0u64;
    loop {
        subsets.push(subset);
        subset = subset.wrapping_sub(mask) & mask;
        if subset == 0 {
            break;
        }
    }
    subsets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bit(sq: usize) -> u64 {
        1u64 << sq
    }

    #[test]
    fn rook_attacks_blocked_east() {
        let d4 = 27;
        let result = rook_attacks_per_square(d4, bit(28));
        let file_d = 0x0808_0808_0808_0808 & !bit(d4);
        let west_and_e4 = bit(24) | bit(25) | bit(26) | bit(28);
        assert_eq!(result, file_d | west_and_e4);
    }

    #[test]
    fn bishop_attacks_blocked_ne() {
        let d4 = 27;
        let result = bishop_attacks_per_square(d4, bit(36));
        let expected = bit(36)
            | bit(20) | bit(13) | bit(6)
            | bit(18) | bit(9) | bit(0)
            | bit(34) | bit(41) | bit(48);
        assert_eq!(result, expected);
    }

    #[test]
    fn mask_sizes() {
        assert_eq!(rook_mask(0).count_ones(), 12);
        assert_eq!(rook_mask(27).count_ones(), 10);
        assert_eq!(bishop_mask(0).count_ones(), 6);
        assert_eq!(bishop_mask(27).count_ones(), 9);
    }

    #[test]
    fn subsets_cover_powerset() {
        let mask = bit(3) | bit(10) | bit(40);
        let subsets = blocker_subsets(mask);
        assert_eq!(subsets.len(), 8);
        assert!(subsets.iter().all(|s| s & !mask == 0));
    }
}
