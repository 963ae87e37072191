//! Reordering operations on the spine.
//!
//! Both operations rewrite the positional endpoint fields of the affected
//! edges and move whole `Vertex` values, so the adjacency index stays exact
//! without a rebuild.

use crate::core::types::BookEmbedding;

/// Removes the vertex at `old_pos` and re-inserts it at `new_pos`; the
/// vertices in between shift by one toward the freed slot. Every edge
/// endpoint is re-mapped through the resulting permutation.
pub fn move_vertex(g: &mut BookEmbedding, old_pos: usize, new_pos: usize) {
    if old_pos == new_pos {
        return;
    }
    let moved = g.vertices.remove(old_pos);
    g.vertices.insert(new_pos, moved);

    let remap = |pos: usize| -> usize {
        if pos == old_pos {
            return new_pos;
        }
        let mut np = pos;
        if pos > old_pos {
            np -= 1;
        }
        if np >= new_pos {
            np += 1;
        }
        np
    };
    for ed in &mut g.edges {
        ed.v1 = remap(ed.v1);
        ed.v2 = remap(ed.v2);
    }
}

/// Exchanges the vertices at positions `a` and `b` (not necessarily
/// adjacent) in `O(deg(a) + deg(b))`.
pub fn swap_vertices(g: &mut BookEmbedding, a: usize, b: usize) {
    for k in 0..g.vertices[a].neighs.len() {
        let ei = g.vertices[a].neighs[k];
        let ed = &mut g.edges[ei];
        if (ed.v1 == a && ed.v2 == b) || (ed.v1 == b && ed.v2 == a) {
            std::mem::swap(&mut ed.v1, &mut ed.v2);
        } else if ed.v1 == a {
            ed.v1 = b;
        } else if ed.v2 == a {
            ed.v2 = b;
        }
    }
    for k in 0..g.vertices[b].neighs.len() {
        let ei = g.vertices[b].neighs[k];
        let ed = &mut g.edges[ei];
        // The edge between a and b was already taken care of above.
        if ed.v1 == b && ed.v2 != a {
            ed.v1 = a;
        } else if ed.v2 == b && ed.v1 != a {
            ed.v2 = a;
        }
    }
    g.vertices.swap(a, b);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::BookEmbedding;

    fn path4() -> BookEmbedding {
        let mut g = BookEmbedding::new(4, 1);
        g.add_edge(0, 1, Some(0));
        g.add_edge(1, 2, Some(0));
        g.add_edge(2, 3, Some(0));
        g
    }

    fn ordering(g: &BookEmbedding) -> Vec<usize> {
        g.vertices().iter().map(|v| v.id).collect()
    }

    fn id_pairs(g: &BookEmbedding) -> Vec<(usize, usize)> {
        g.edges()
            .iter()
            .map(|ed| {
                let a = g.id_at(ed.v1);
                let b = g.id_at(ed.v2);
                (a.min(b), a.max(b))
            })
            .collect()
    }

    #[test]
    fn move_vertex_shifts_the_gap() {
        let mut g = path4();
        move_vertex(&mut g, 0, 2);
        assert_eq!(ordering(&g), vec![1, 2, 0, 3]);
        assert_eq!(id_pairs(&g), vec![(0, 1), (1, 2), (2, 3)]);

        let mut g = path4();
        move_vertex(&mut g, 3, 1);
        assert_eq!(ordering(&g), vec![0, 3, 1, 2]);
        assert_eq!(id_pairs(&g), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn move_vertex_round_trips() {
        let mut g = path4();
        let before = ordering(&g);
        let edges_before = g.edges().to_vec();
        move_vertex(&mut g, 1, 3);
        move_vertex(&mut g, 3, 1);
        assert_eq!(ordering(&g), before);
        assert_eq!(g.edges(), &edges_before[..]);
    }

    #[test]
    fn swap_vertices_rewrites_endpoints_once() {
        let mut g = path4();
        swap_vertices(&mut g, 1, 2);
        assert_eq!(ordering(&g), vec![0, 2, 1, 3]);
        assert_eq!(id_pairs(&g), vec![(0, 1), (1, 2), (2, 3)]);
    }

    #[test]
    fn swap_distant_vertices_with_parallel_edges() {
        let mut g = BookEmbedding::new(4, 1);
        g.add_edge(0, 3, Some(0));
        g.add_edge(0, 3, Some(0));
        g.add_edge(1, 3, Some(0));
        swap_vertices(&mut g, 0, 3);
        assert_eq!(ordering(&g), vec![3, 1, 2, 0]);
        assert_eq!(id_pairs(&g), vec![(0, 3), (0, 3), (1, 3)]);
    }
}
