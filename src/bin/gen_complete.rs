//! Prints a complete graph in the challenge format.

use std::io::{self, Write};
use std::process;

use bookbind::core::generators::complete;
use bookbind::core::io::write_embedding;

const USAGE: &str = "Exactly two arguments are required -- the number of the pages provided \
for the drawing, and the number of vertices of the graph.\n\
E.g. the complete graph with 10 vertices to be drawn in a book with 5 pages (there is a \
crossing-free drawing): \"gen_complete 5 10\".";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let parsed = (|| -> Option<(usize, usize)> {
        if args.len() != 3 {
            return None;
        }
        Some((args[1].parse().ok()?, args[2].parse().ok()?))
    })();
    let Some((pages, n)) = parsed else {
        eprintln!("{}", USAGE);
        return;
    };
    let Ok(graph) = complete(pages, n) else {
        eprintln!("{}", USAGE);
        return;
    };
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if write_embedding(&graph, &mut out).and_then(|_| out.flush()).is_err() {
        process::exit(1);
    }
}
