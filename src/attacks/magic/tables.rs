/// One square's magic lookup: `table[((occ & mask) * magic) >> shift]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicEntry {
    pub magic: u64,
    pub shift: u32,
    /// Relevant blocker squares (rays without edges).
    pub mask: u64,
    pub table: Box<[u64]>,
}

impl MagicEntry {
    #[inline(always)]
    pub fn index(&self, occupancy: u64) -> usize {
        ((occupancy & self.mask).wrapping_mul(self.magic) >> self.shift) as usize
    }
}

/// Attack lookup for one slider geometry (rook or bishop), 64 entries.
#[derive(Debug)]
pub struct SliderTables {
    pub entries: Vec<MagicEntry>,
}

impl SliderTables {
    #[inline(always)]
    pub fn get_attacks(&self, square: usize, occupancy: u64) -> u64 {
        let entry = &self.entries[square];
        entry.table[entry.index(occupancy)]
    }
}

#[derive(Debug)]
pub struct MagicTables {
    pub rook: SliderTables,
    pub bishop: SliderTables,
}

impl MagicTables {
    #[inline(always)]
    pub fn queen_attacks(&self, square: usize, occupancy: u64) -> u64 {
        self.rook.get_attacks(square, occupancy) | self.bishop.get_attacks(square, occupancy)
    }
}
