/*!
# Crossing Primitives

Counting routines for edge crossings in a book embedding. Two edges on the
same page cross iff their endpoint intervals on the spine properly
interleave; edges on different pages (or with at least one unassigned page)
never cross, and neither do edges sharing an endpoint.

All counts walk the spine positions strictly between an edge's endpoints and
inspect the incident edges found there, so the cost of counting a single
edge is proportional to its span times the average degree, with an `O(m)`
worst case.
*/

use crate::core::types::{BookEmbedding, Edge};

/// True iff the open intervals spanned by positions `(a1, a2)` and
/// `(b1, b2)` properly interleave. Shared endpoints never interleave.
pub(crate) fn spans_cross(a1: usize, a2: usize, b1: usize, b2: usize) -> bool {
    let (alo, ahi) = if a1 < a2 { (a1, a2) } else { (a2, a1) };
    let (blo, bhi) = if b1 < b2 { (b1, b2) } else { (b2, b1) };
    (alo < blo && ahi > blo && ahi < bhi) || (alo > blo && alo < bhi && ahi > bhi)
}

/// True iff the two edges cross: same (assigned) page and properly
/// interleaving spine intervals.
pub fn edges_cross(e1: &Edge, e2: &Edge) -> bool {
    if e1.page.is_none() || e1.page != e2.page {
        return false;
    }
    spans_cross(e1.v1, e1.v2, e2.v1, e2.v2)
}

/// Number of crossings on the given edge in the current state.
///
/// An edge with an unassigned page crosses nothing; edges with unassigned
/// pages encountered along the spine are ignored.
pub fn edge_crossings(g: &BookEmbedding, ed: &Edge) -> i64 {
    let Some(page) = ed.page else {
        return 0;
    };
    let lo = ed.v1.min(ed.v2);
    let hi = ed.v1.max(ed.v2);

    let mut result = 0;
    for mid in lo + 1..hi {
        for &ei in g.neighbor_edges(mid) {
            let other = &g.edges[ei];
            if other.page != Some(page) {
                continue;
            }
            let far = other.other_end(mid);
            debug_assert_eq!(edges_cross(ed, other), far < lo || far > hi);
            if far < lo || far > hi {
                result += 1;
            }
        }
    }
    result
}

/// Sum of [`edge_crossings`] over the edges incident to position `pos`.
///
/// Incident edges share the vertex and never cross each other, so this is
/// also the number of crossings involving at least one edge of the vertex.
pub fn vertex_crossings(g: &BookEmbedding, pos: usize) -> i64 {
    g.neighbor_edges(pos)
        .iter()
        .map(|&ei| edge_crossings(g, &g.edges[ei]))
        .sum()
}

/// Total number of crossings of the embedding.
pub fn crossing_number(g: &BookEmbedding) -> i64 {
    let total: i64 = g.edges.iter().map(|ed| edge_crossings(g, ed)).sum();
    total / 2
}

/// Change in the total crossing number if the vertices at positions `pos`
/// and `pos + 1` were swapped. The swap is not performed.
///
/// Only pairs with one edge incident to `pos` and the other to `pos + 1`
/// can change state, and every such same-page pair that does not share an
/// endpoint flips: crossing pairs contribute `-1`, non-crossing ones `+1`.
pub fn adjacent_swap_delta(g: &BookEmbedding, pos: usize) -> i64 {
    debug_assert!(pos + 1 < g.vertex_count());
    let mut delta = 0;
    for &e1 in g.neighbor_edges(pos) {
        let ed1 = &g.edges[e1];
        let x = ed1.other_end(pos);
        if x == pos + 1 {
            continue; // the connecting edge shares an endpoint with every partner
        }
        for &e2 in g.neighbor_edges(pos + 1) {
            let ed2 = &g.edges[e2];
            if ed1.page.is_none() || ed1.page != ed2.page {
                continue;
            }
            let y = ed2.other_end(pos + 1);
            if y == pos || y == x {
                continue;
            }
            let crossed = (x > pos + 1 && (y < pos || y > x)) || (x < pos && y < pos && y > x);
            debug_assert_eq!(crossed, edges_cross(ed1, ed2));
            delta += if crossed { -1 } else { 1 };
        }
    }
    delta
}
