pub mod leapers;
pub mod magic;
pub mod square_control;

pub use leapers::{king_attacks, knight_attacks, pawn_attacks};
pub use magic::{bishop_attacks, queen_attacks, rook_attacks};
pub use square_control::{attackers_of, attacks_from, attacks_to, attacks_to_through, is_attacked};
