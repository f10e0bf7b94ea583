use super::scan::{
    bishop_attacks_per_square, bishop_mask, blocker_subsets, rook_attacks_per_square, rook_mask,
};
use super::search::find_magic_number_for_square;
use super::tables::{MagicEntry, MagicTables, SliderTables};
use rand::{SeedableRng, rngs::StdRng};
use tracing::debug;

#[derive(Clone, Copy)]
enum Slider {
    Rook,
    Bishop,
}

impl Slider {
    fn mask(self, square: usize) -> u64 {
        match self {
            Slider::Rook => rook_mask(square),
            Slider::Bishop => bishop_mask(square),
        }
    }

    fn attacks(self, square: usize, blockers: u64) -> u64 {
        match self {
            Slider::Rook => rook_attacks_per_square(square, blockers),
            Slider::Bishop => bishop_attacks_per_square(square, blockers),
        }
    }
}

fn build_entry(slider: Slider, square: usize, rng: &mut StdRng) -> Result<MagicEntry, String> {
    let mask = slider.mask(square);
    let shift = 64 - mask.count_ones();
    let blockers = blocker_subsets(mask);
    let attacks: Vec<u64> = blockers.iter().map(|&b| slider.attacks(square, b)).collect();

    let magic = find_magic_number_for_square(&blockers, &attacks, shift, rng)
        .map_err(|e| format!("square {}: {}", square, e))?;

    let mut table = vec![0u64; 1 << (64 - shift)].into_boxed_slice();
    let mut entry = MagicEntry {
        magic,
        shift,
        mask,
        table: Box::default(),
    };
    for (&b, &a) in blockers.iter().zip(&attacks) {
        table[entry.index(b)] = a;
    }
    entry.table = table;
    Ok(entry)
}

fn build_slider(slider: Slider, rng: &mut StdRng) -> Result<SliderTables, String> {
    let entries = (0..64)
        .map(|sq| build_entry(slider, sq, rng))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(SliderTables { entries })
}

/// Search magics for every square. The same seed always yields the same tables.
pub fn generate_magic_tables(seed: u64) -> Result<MagicTables, String> {
    let mut rng = StdRng::seed_from_u64(seed);

    let rook = build_slider(Slider::Rook, &mut rng)?;
    let bishop = build_slider(Slider::Bishop, &mut rng)?;

    let slots: usize = rook
        .entries
        .iter()
        .chain(&bishop.entries)
        .map(|e| e.table.len())
        .sum();
    debug!(slots, "magic tables generated");

    Ok(MagicTables { rook, bishop })
}
