/*!
# Position Finder

Computes the best alternative spine position for a single vertex without
mutating the caller's embedding.

The sweep works on a private copy where the vertex is first moved to
position 0. For every incident edge a probe is kept per page, counting how
many edges of the embedding would cross that incident edge on that page
with the vertex at the current sweep position. The counters are initialized
by one scan over all edges and then updated incrementally while the vertex
is swapped rightwards past one spine vertex at a time: only edges incident
to the passed vertex can change state against a probe, and every such
same-page pair that does not share an endpoint flips its crossing state.

The cost of a position is the sum over incident edges of the cheapest page
counter; the reported delta is `cost(best) - cost(origin)`, negative
meaning an improvement. Complexity is
`O(N * deg * avg-deg + N * P * deg)`.
*/

use crate::core::crossings::spans_cross;
use crate::core::mutation::{move_vertex, swap_vertices};
use crate::core::types::BookEmbedding;

struct Probe {
    /// Current position of the incident edge's far endpoint.
    other: usize,
    page: usize,
    cr: i64,
}

/// Finds the position `b != origin` minimizing the crossings on the edges
/// incident to the vertex at `origin`, assuming each incident edge is then
/// put on its cheapest page. Returns `(b, delta)` where `delta` is the cost
/// change relative to the origin position; ties keep the earliest sweep
/// position. Returns `None` iff the embedding has a single vertex.
pub fn find_best_position(g: &BookEmbedding, origin: usize) -> Option<(usize, i64)> {
    let n = g.vertex_count();
    if n < 2 {
        return None;
    }
    let pages = g.page_count();

    let mut work = g.clone();
    move_vertex(&mut work, origin, 0);

    let deg = work.vertices[0].neighs.len();
    let mut probes: Vec<Probe> = Vec::with_capacity(deg * pages);
    for &ei in &work.vertices[0].neighs {
        let other = work.edges[ei].other_end(0);
        for page in 0..pages {
            probes.push(Probe { other, page, cr: 0 });
        }
    }
    // Initial counters with the vertex at position 0. Probes share their
    // endpoint with the vertex's own edges, so those never contribute.
    for probe in &mut probes {
        for ed in &work.edges {
            if ed.page != Some(probe.page) {
                continue;
            }
            if spans_cross(0, probe.other, ed.v1, ed.v2) {
                probe.cr += 1;
            }
        }
    }

    let position_cost = |probes: &[Probe]| -> i64 {
        (0..deg)
            .map(|k| {
                probes[k * pages..(k + 1) * pages]
                    .iter()
                    .map(|p| p.cr)
                    .min()
                    .unwrap_or(0)
            })
            .sum()
    };

    let mut best: Option<(usize, i64)> = None;
    let mut origin_cost = 0;
    for j in 0..n {
        if j > 0 {
            // The vertex moves from position j-1 past the spine vertex at j;
            // crossing states flip only against edges incident to that vertex.
            for k in 0..work.vertices[j].neighs.len() {
                let ei = work.vertices[j].neighs[k];
                let ed = &work.edges[ei];
                let Some(page) = ed.page else { continue };
                let y = ed.other_end(j);
                if y == j - 1 {
                    continue; // the edge to the swept vertex itself
                }
                for probe in probes.iter_mut().skip(page).step_by(pages) {
                    let x = probe.other;
                    if x == j || x == y {
                        continue;
                    }
                    let crossed = spans_cross(j - 1, x, j, y);
                    probe.cr += if crossed { -1 } else { 1 };
                }
            }
            swap_vertices(&mut work, j - 1, j);
            for probe in &mut probes {
                if probe.other == j {
                    probe.other = j - 1;
                }
            }
        }
        let cost = position_cost(&probes);
        if j == origin {
            origin_cost = cost;
        } else if best.is_none_or(|(_, c)| cost < c) {
            best = Some((j, cost));
        }
    }

    best.map(|(pos, cost)| (pos, cost - origin_cost))
}
