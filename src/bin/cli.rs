use burrow::board::{Board, Color, START_FEN};
use burrow::eval::{EvalConfig, Evaluator, Factor};
use burrow::logger::init_logging;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::str::FromStr;
use std::time::Instant;
use tracing::{info, warn};

const BENCH_FENS: &[&str] = &[
    START_FEN,
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    "6k1/5ppp/8/8/8/8/5PPP/3R2K1 w - - 0 1",
    "8/8/4k3/8/2n5/8/4K3/3B4 w - - 0 1",
];

fn main() {
    init_logging("logs/burrow.log", "burrow=info");

    let mut eval = Evaluator::default();
    let mut board = Board::new();
    eval.refresh_pst(&mut board);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(&command) = parts.first() else {
            continue;
        };

        match command {
            "position" => match parse_position(&parts) {
                Ok(mut b) => {
                    eval.refresh_pst(&mut b);
                    board = b;
                }
                Err(e) => println!("error: {}", e),
            },
            "d" | "display" => println!("{}", board),
            "fen" => println!("{}", board.to_fen()),
            "eval" => eval.print(&board),
            "score" => println!("{}", eval.evaluate(&board, true)),
            "mirror" => {
                board = board.mirrored();
                println!("{}", board.to_fen());
            }
            "set" => match apply_setting(eval.config().clone(), &parts[1..]) {
                Ok(cfg) => {
                    eval.reconfigure(cfg);
                    eval.refresh_pst(&mut board);
                }
                Err(e) => println!("error: {}", e),
            },
            "config" => println!("{:#?}", eval.config()),
            "bench" => run_bench(&eval, parts.get(1).copied()),
            "quit" => break,
            _ => println!("unknown command: {}", command),
        }
    }
}

fn parse_position(parts: &[&str]) -> Result<Board, String> {
    match parts.get(1) {
        Some(&"startpos") | None => Ok(Board::new()),
        Some(&"fen") => {
            let board = Board::from_str(&parts[2..].join(" "))?;
            board.validate()?;
            Ok(board)
        }
        Some(other) => Err(format!("expected startpos or fen, got {}", other)),
    }
}

fn apply_setting(mut cfg: EvalConfig, args: &[&str]) -> Result<EvalConfig, String> {
    let [name, value] = args else {
        return Err("usage: set <name> <value>".to_string());
    };
    if *name == "side" {
        cfg.program_side = match *value {
            "white" => Color::White,
            "black" => Color::Black,
            _ => return Err(format!("bad side {:?}", value)),
        };
        return Ok(cfg);
    }

    let v: i32 = value.parse().map_err(|_| format!("bad value {:?}", value))?;
    match *name {
        "material" => cfg.material_pct = v,
        "pst" => cfg.pst_pct = v,
        "own_attack" => cfg.own_attack = v,
        "opp_attack" => cfg.opp_attack = v,
        "own_mobility" => cfg.own_mobility = v,
        "opp_mobility" => cfg.opp_mobility = v,
        "blur" => cfg.blur = v,
        "max_eval" => cfg.max_eval = v,
        "cache" => cfg.cache_entries = v.max(0) as usize,
        other => {
            let factor = Factor::ALL
                .into_iter()
                .find(|f| f.name().eq_ignore_ascii_case(other))
                .ok_or_else(|| format!("unknown setting {:?}", other))?;
            cfg.weights.set(factor, v);
        }
    }
    Ok(cfg)
}

fn load_fens(path: Option<&str>) -> Vec<String> {
    let Some(path) = path else {
        return BENCH_FENS.iter().map(|s| s.to_string()).collect();
    };
    match File::open(path) {
        Ok(f) => BufReader::new(f)
            .lines()
            .map_while(Result::ok)
            .map(|l| l.split(';').next().unwrap_or_default().trim().to_string())
            .filter(|l| !l.is_empty())
            .collect(),
        Err(e) => {
            warn!(path, error = %e, "bench file unreadable, using built-in positions");
            BENCH_FENS.iter().map(|s| s.to_string()).collect()
        }
    }
}

fn run_bench(eval: &Evaluator, path: Option<&str>) {
    const ROUNDS: u64 = 2_000;

    let mut boards = Vec::new();
    for fen in load_fens(path) {
        match Board::from_str(&fen) {
            Ok(mut b) if b.validate().is_ok() => {
                eval.refresh_pst(&mut b);
                boards.push(b);
            }
            _ => warn!(fen, "skipping bad bench position"),
        }
    }
    if boards.is_empty() {
        println!("no positions to bench");
        return;
    }

    let bar = ProgressBar::new(ROUNDS);
    if let Ok(style) = ProgressStyle::with_template("{spinner} rounds {pos}/{len} {elapsed_precise} {bar:40} {msg}") {
        bar.set_style(style);
    }

    let before = eval.full_evaluations();
    let start = Instant::now();
    let mut checksum: i64 = 0;
    for _ in 0..ROUNDS {
        for b in &boards {
            checksum += eval.evaluate(b, false) as i64;
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    let elapsed = start.elapsed();
    let evals = eval.full_evaluations() - before;
    let per_sec = evals as f64 / elapsed.as_secs_f64().max(1e-9);
    info!(evals, ?elapsed, checksum, "bench finished");
    println!(
        "{} positions, {} evaluations in {:.2?} ({:.0} evals/s), checksum {}",
        boards.len(),
        evals,
        elapsed,
        per_sec,
        checksum
    );
}
