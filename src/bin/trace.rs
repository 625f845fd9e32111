//! Minimal command-line front end for the evaluator: reads a FEN fixture
//! (piece placement + side to move) from argv or stdin and prints a
//! per-feature score trace.

use std::io::{self, BufRead};

use evalcore::evaluator::Evaluator;
use evalcore::position::fen;

fn main() {
    evalcore::logging::init_logging();

    let eval = Evaluator::new();
    let arg: Vec<String> = std::env::args().skip(1).collect();

    if !arg.is_empty() {
        trace_one(&eval, &arg.join(" "));
        return;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };
        if line.is_empty() {
            continue;
        }
        trace_one(&eval, &line);
    }
}

fn trace_one(eval: &Evaluator, fen_str: &str) {
    let pos = fen::parse(fen_str);
    let mut out = String::new();
    eval.trace(&pos, &mut out).expect("writing to a String cannot fail");
    print!("{out}");
}
