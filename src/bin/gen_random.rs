//! Prints a random graph in the challenge format.

use std::io::{self, Write};
use std::process;

use rand::Rng;

use bookbind::core::generators::random;
use bookbind::core::io::write_embedding;

const USAGE: &str = "Exactly three arguments are required -- the number of the pages provided \
for the drawing, the number of vertices of the graph and the probability, in percents, of \
each edge. The edges are created independently.\n\
E.g. a graph with 10 vertices and edge probability 20% (will have 9 edges on average) to be \
drawn in a book with 3 pages: \"gen_random 3 10 20\".";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let parsed = (|| -> Option<(usize, usize, f64)> {
        if args.len() != 4 {
            return None;
        }
        Some((
            args[1].parse().ok()?,
            args[2].parse().ok()?,
            args[3].parse().ok()?,
        ))
    })();
    let Some((pages, n, probability)) = parsed else {
        eprintln!("{}", USAGE);
        return;
    };
    let seed: u64 = rand::rng().random();
    let Ok(graph) = random(pages, n, probability, seed) else {
        eprintln!("{}", USAGE);
        return;
    };
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if write_embedding(&graph, &mut out).and_then(|_| out.flush()).is_err() {
        process::exit(1);
    }
}
