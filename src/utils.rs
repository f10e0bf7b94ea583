#[inline(always)]
pub fn square_index(rank: usize, file: usize) -> usize {
    rank * 8 + file
}

/// Chebyshev (king-move) distance.
#[inline(always)]
pub fn chebyshev_distance(a: u8, b: u8) -> i32 {
    let rank_d = ((a >> 3) as i32 - (b >> 3) as i32).abs();
    let file_d = ((a & 7) as i32 - (b & 7) as i32).abs();
    rank_d.max(file_d)
}

/// Manhattan (file + rank) distance.
#[inline(always)]
pub fn manhattan_distance(a: u8, b: u8) -> i32 {
    ((a >> 3) as i32 - (b >> 3) as i32).abs() + ((a & 7) as i32 - (b & 7) as i32).abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        // a1 -> h8
        assert_eq!(chebyshev_distance(0, 63), 7);
        assert_eq!(manhattan_distance(0, 63), 14);
        // e4 -> f6
        assert_eq!(chebyshev_distance(28, 45), 2);
        assert_eq!(manhattan_distance(28, 45), 3);
    }
}
