use burrow::board::{Board, Color};
use burrow::eval::{Adjustments, EvalBuilder, EvalConfig, Evaluator, Factor};
use std::str::FromStr;

fn breakdown(fen: &str) -> burrow::eval::Breakdown {
    let eval = Evaluator::default();
    let mut b = Board::from_str(fen).unwrap();
    eval.refresh_pst(&mut b);
    eval.breakdown(&b)
}

#[test]
fn blend_moves_monotonically_between_phases() {
    let cfg = EvalConfig::default();
    let mut acc = EvalBuilder::new();
    acc.add(Color::White, Factor::Pst, 200, 40);
    let mut last = i32::MAX;
    for phase in (0..=24).rev() {
        let adj = Adjustments { phase, ..Adjustments::default() };
        let s = acc.finalize(&cfg, &adj);
        assert!(s <= last, "phase {} scored {} after {}", phase, s, last);
        last = s;
    }
    assert_eq!(last, 40);
}

#[test]
fn passer_on_seventh_with_free_stop_beats_blocked_second_rank_pawn() {
    let free = breakdown("8/3KP3/8/8/8/8/8/k7 w - - 0 1");
    let blocked = breakdown("k7/8/8/8/8/4n3/4P3/4K3 w - - 0 1");
    assert!(
        free.factors.get(Color::White, Factor::Passers).eg > blocked.factors.get(Color::White, Factor::Passers).eg
    );
}

#[test]
fn unstoppable_passer_only_in_pawn_endings() {
    let race = breakdown("8/4P3/8/8/8/8/8/k6K w - - 0 1");
    assert!(race.factors.get(Color::White, Factor::Passers).eg >= 500);
    let with_rook = breakdown("8/4P3/8/8/8/8/8/k2r3K w - - 0 1");
    assert!(with_rook.factors.get(Color::White, Factor::Passers).eg < 500);
}

#[test]
fn pawn_defended_hole_is_a_better_outpost() {
    // knight on d5, supported by c4 and e4, no black pawn can ever chase it
    let supported = breakdown("4k3/8/8/3N4/2P1P3/8/8/4K3 w - - 0 1");
    let bare = breakdown("4k3/8/8/3N4/8/8/8/4K3 w - - 0 1");
    let s = supported.factors.get(Color::White, Factor::Outposts);
    let b = bare.factors.get(Color::White, Factor::Outposts);
    assert!(s.mg > b.mg, "{:?} vs {:?}", s, b);
    assert!(b.mg > 0);
}

#[test]
fn chased_knight_is_no_outpost() {
    // c7 pawn can still reach c6 and hit d5
    let chased = breakdown("4k3/2p5/8/3N4/8/8/8/4K3 w - - 0 1");
    assert_eq!(chased.factors.get(Color::White, Factor::Outposts).mg, 0);
}

#[test]
fn king_attack_grows_with_attackers() {
    let two = breakdown("6k1/5ppp/8/6N1/8/8/5Q2/6K1 w - - 0 1");
    let three = breakdown("6k1/5ppp/8/6N1/8/8/5Q2/4R1K1 w - - 0 1");
    let a2 = two.factors.get(Color::White, Factor::Attack).mg;
    let a3 = three.factors.get(Color::White, Factor::Attack).mg;
    assert!(a2 > 0);
    assert!(a3 >= a2, "{} < {}", a3, a2);
}

#[test]
fn drawish_material_is_scaled_down() {
    let b = breakdown("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1");
    assert_eq!(b.adjustments.draw_factor, [0, 0]);
    assert_eq!(b.score, 0);
}

#[test]
fn tempo_goes_to_the_mover() {
    let w = breakdown("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
    let b = breakdown("4k3/8/8/8/8/8/8/4K3 b - - 0 1");
    assert_eq!(w.factors.get(Color::White, Factor::Others).mg - b.factors.get(Color::White, Factor::Others).mg, 10);
}
