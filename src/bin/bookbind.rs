//! Solver entry point: reads a challenge-format graph from standard input,
//! minimizes its crossings and continuously persists the best embedding
//! found to the given output file.

use std::io;
use std::path::Path;
use std::process;

use rand::SeedableRng;
use rand::rngs::StdRng;

use bookbind::core::crossings::crossing_number;
use bookbind::core::io::read_embedding;
use bookbind::search::annealing::{SolverOptions, solve};
use bookbind::search::tracker::BestFound;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("One argument is required - the output filename.");
        return;
    }

    let graph = match read_embedding(io::stdin().lock()) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{}", err);
            process::exit(1);
        }
    };
    println!("Loaded graph has {} crossings.", crossing_number(&graph));

    let mut best = BestFound::new(Some(Path::new(&args[1])), &graph);
    let mut rng = StdRng::from_os_rng();
    let result = solve(&graph, &SolverOptions::default(), &mut best, &mut rng);
    println!("Result is: {}", result);
}
