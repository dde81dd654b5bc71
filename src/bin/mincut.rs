use std::env;
use std::process;
use std::time::Instant;

use mincut::{load_adjacency, TrialRunner};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 4 {
        eprintln!("usage: mincut <adjacency-file> [trials] [seed]");
        process::exit(2);
    }

    let trials: usize = match args.get(2) {
        Some(token) => match token.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("bad trial count '{}'", token);
                process::exit(2);
            }
        },
        None => 1000,
    };
    let seed: Option<u64> = match args.get(3) {
        Some(token) => match token.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                eprintln!("bad seed '{}'", token);
                process::exit(2);
            }
        },
        None => None,
    };

    let adjacency = match load_adjacency(&args[1]) {
        Ok(adjacency) => adjacency,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };

    let mut runner = TrialRunner::new().trials(trials);
    if let Some(seed) = seed {
        runner = runner.seed(seed);
    }

    let start = Instant::now();
    match runner.run(&adjacency) {
        Ok(cut) => {
            println!("minimum cut: {}", cut);
            println!("seconds: {:.3}", start.elapsed().as_secs_f64());
        }
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    }
}
