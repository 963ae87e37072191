//! Prints a complete multipartite graph with equally-sized partitions in
//! the challenge format.

use std::io::{self, Write};
use std::process;

use bookbind::core::generators::complete_multipartite;
use bookbind::core::io::write_embedding;

const USAGE: &str = "Exactly three arguments are required -- the number of the pages provided \
for the drawing, the number of vertices in each partition of the graph, and the number of \
partitions. Two vertices are connected iff they belong to different partitions.\n\
E.g. the complete bipartite graph with 20 vertices in total to be drawn in a book with 3 \
pages: \"gen_complete_tpartite 3 10 2\".";

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let parsed = (|| -> Option<(usize, usize, usize)> {
        if args.len() != 4 {
            return None;
        }
        Some((
            args[1].parse().ok()?,
            args[2].parse().ok()?,
            args[3].parse().ok()?,
        ))
    })();
    let Some((pages, part_size, parts)) = parsed else {
        eprintln!("{}", USAGE);
        return;
    };
    let Ok(graph) = complete_multipartite(pages, part_size, parts) else {
        eprintln!("{}", USAGE);
        return;
    };
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    if write_embedding(&graph, &mut out).and_then(|_| out.flush()).is_err() {
        process::exit(1);
    }
}
