//! Prints a circulant graph in the challenge format.

use std::io::{self, Write};
use std::process;

use bookbind::core::generators::circulant;
use bookbind::core::io::write_embedding;

const USAGE: &str = "Exactly three arguments are required -- the number of the pages provided \
for the drawing, the number of vertices of the graph, and a comma-separated list of the edge \
lengths. Two vertices u,v are connected iff abs(u-v) mod n is from the list of edge lengths. \
No spaces in the list of edge lengths.\n\
E.g. \"gen_circulant 2 10 1,2,3\".";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let parsed = (|| -> Option<(usize, usize, Vec<usize>)> {
        if args.len() != 4 {
            return None;
        }
        let lengths = args[3]
            .split(',')
            .map(|token| token.trim().parse::<usize>().ok())
            .collect::<Option<Vec<_>>>()?;
        Some((args[1].parse().ok()?, args[2].parse().ok()?, lengths))
    })();
    let Some((pages, n, lengths)) = parsed else {
        eprintln!("{}", USAGE);
        return;
    };
    let Ok(graph) = circulant(pages, n, &lengths) else {
        eprintln!("{}", USAGE);
        return;
    };
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if write_embedding(&graph, &mut out).and_then(|_| out.flush()).is_err() {
        process::exit(1);
    }
}
