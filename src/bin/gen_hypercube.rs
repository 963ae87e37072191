//! Prints a hypercube graph in the challenge format.

use std::io::{self, Write};
use std::process;

use bookbind::core::generators::hypercube;
use bookbind::core::io::write_embedding;

const USAGE: &str = "Exactly two arguments are required -- the number of the pages provided \
for the drawing, and the number of dimensions of the hypercube. A d-dimensional hypercube \
has 2^d vertices.\n\
E.g. the 4-dimensional hypercube to be drawn in a book with 3 pages (there is a \
crossing-free drawing): \"gen_hypercube 3 4\".";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let parsed = (|| -> Option<(usize, u32)> {
        if args.len() != 3 {
            return None;
        }
        Some((args[1].parse().ok()?, args[2].parse().ok()?))
    })();
    let Some((pages, dim)) = parsed else {
        eprintln!("{}", USAGE);
        return;
    };
    let Ok(graph) = hypercube(pages, dim) else {
        eprintln!("{}", USAGE);
        return;
    };
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if write_embedding(&graph, &mut out).and_then(|_| out.flush()).is_err() {
        process::exit(1);
    }
}
