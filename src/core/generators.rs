/*!
# Graph Generators

Constructors for the classic graph families used to exercise the solver:
complete graphs, complete multipartite graphs with equal partitions,
hypercubes, random graphs and circulant graphs. Every generator returns a
ready [`BookEmbedding`] with the identity ordering and all edges on page 0,
mirroring the challenge inputs the solver consumes.

Invalid parameters are reported as
[`BookbindError::InvalidArgument`](crate::core::error::BookbindError). The
random generator takes an explicit seed for reproducibility.

# Examples

```rust
use bookbind::core::generators::complete;

let g = complete(2, 5).expect("failed to generate complete graph");
assert_eq!(g.edge_count(), 10);
```
*/

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::error::{BookbindError, Result};
use crate::core::types::BookEmbedding;

fn check_counts(pages: usize, n: usize) -> Result<()> {
    if pages == 0 {
        return Err(BookbindError::invalid_argument(
            "page count must be greater than zero",
        ));
    }
    if n == 0 {
        return Err(BookbindError::invalid_argument(
            "vertex count must be greater than zero",
        ));
    }
    Ok(())
}

/// Generates the complete graph on `n` vertices.
pub fn complete(pages: usize, n: usize) -> Result<BookEmbedding> {
    check_counts(pages, n)?;
    let mut graph = BookEmbedding::new(n, pages);
    for v1 in 0..n {
        for v2 in v1 + 1..n {
            graph.add_edge(v1, v2, Some(0));
        }
    }
    Ok(graph)
}

/// Generates the complete multipartite graph with `parts` partitions of
/// `part_size` consecutive vertices each; two vertices are adjacent iff
/// they belong to different partitions.
pub fn complete_multipartite(pages: usize, part_size: usize, parts: usize) -> Result<BookEmbedding> {
    if part_size == 0 || parts == 0 {
        return Err(BookbindError::invalid_argument(
            "partition size and count must be greater than zero",
        ));
    }
    let n = part_size * parts;
    check_counts(pages, n)?;
    let mut graph = BookEmbedding::new(n, pages);
    for v1 in 0..n {
        for v2 in v1 + 1..n {
            if v1 / part_size != v2 / part_size {
                graph.add_edge(v1, v2, Some(0));
            }
        }
    }
    Ok(graph)
}

/// Generates the `dim`-dimensional hypercube graph on `2^dim` vertices;
/// two vertices are adjacent iff their ids differ in exactly one bit.
pub fn hypercube(pages: usize, dim: u32) -> Result<BookEmbedding> {
    if dim == 0 || dim > 30 {
        return Err(BookbindError::invalid_argument(
            "hypercube dimension must be in 1..=30",
        ));
    }
    let n = 1usize << dim;
    check_counts(pages, n)?;
    let mut graph = BookEmbedding::new(n, pages);
    for v1 in 0..n {
        for bit in 0..dim {
            let v2 = v1 ^ (1usize << bit);
            if v2 > v1 {
                graph.add_edge(v1, v2, Some(0));
            }
        }
    }
    Ok(graph)
}

/// Generates a random graph on `n` vertices where each pair is connected
/// independently with the given probability in percent `(0, 100]`.
pub fn random(pages: usize, n: usize, probability: f64, seed: u64) -> Result<BookEmbedding> {
    check_counts(pages, n)?;
    if !(probability > 0.0 && probability <= 100.0) {
        return Err(BookbindError::invalid_argument(
            "edge probability must be in (0, 100] percent",
        ));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = BookEmbedding::new(n, pages);
    for v1 in 0..n {
        for v2 in v1 + 1..n {
            if rng.random_bool(probability / 100.0) {
                graph.add_edge(v1, v2, Some(0));
            }
        }
    }
    Ok(graph)
}

/// Generates the circulant graph on `n` vertices: for every vertex `i` and
/// every length `l` the edge `(i, (i + l) mod n)` is created. Symmetric
/// length lists produce parallel edges, which are kept as distinct edge
/// indices.
pub fn circulant(pages: usize, n: usize, lengths: &[usize]) -> Result<BookEmbedding> {
    check_counts(pages, n)?;
    for &l in lengths {
        if l % n == 0 {
            return Err(BookbindError::invalid_argument(format!(
                "edge length {} is a multiple of the vertex count and would form a self-loop",
                l
            )));
        }
    }
    let mut graph = BookEmbedding::new(n, pages);
    for v1 in 0..n {
        for &l in lengths {
            graph.add_edge(v1, (v1 + l) % n, Some(0));
        }
    }
    Ok(graph)
}
