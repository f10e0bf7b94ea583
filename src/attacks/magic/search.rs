use rand::RngCore;

/// Sparse candidates (few set bits) make good magics far more often.
#[inline(always)]
pub fn random_sparse_u64<R: RngCore>(rng: &mut R) -> u64 {
    rng.next_u64() & rng.next_u64() & rng.next_u64()
}

/// A magic is valid when no two blocker sets with different attacks share a slot.
/// `scratch` must hold `1 << (64 - shift)` entries; it is overwritten.
pub fn is_magic_candidate_valid(
    blockers: &[u64],
    attacks: &[u64],
    magic: u64,
    shift: u32,
    scratch: &mut [(u32, u64)],
    epoch: u32,
) -> bool {
    for (&blocker, &attack) in blockers.iter().zip(attacks) {
        let index = (blocker.wrapping_mul(magic) >> shift) as usize;
        let slot = &mut scratch[index];
        if slot.0 != epoch {
            *slot = (epoch, attack);
        } else if slot.1 != attack {
            return false;
        }
    }
    true
}

pub fn find_magic_number_for_square<R: RngCore>(
    blockers: &[u64],
    attacks: &[u64],
    shift: u32,
    rng: &mut R,
) -> Result<u64, String> {
    let mut scratch = vec![(0u32, 0u64); 1 << (64 - shift)];
    for attempt in 1..=1_000_000u32 {
        let magic = random_sparse_u64(rng);
        if is_magic_candidate_valid(blockers, attacks, magic, shift, &mut scratch, attempt) {
            return Ok(magic);
        }
    }
    Err("Failed to find a valid magic number after 1,000,000 attempts".to_string())
}
