// File: tests/core_crossings_tests.rs

use bookbind::core::crossings::{
    adjacent_swap_delta, crossing_number, edge_crossings, edges_cross, vertex_crossings,
};
use bookbind::core::generators::{complete, complete_multipartite};
use bookbind::core::mutation::swap_vertices;
use bookbind::core::types::{BookEmbedding, Edge};

/// Brute-force reference count over all edge pairs.
fn pairwise_crossings(g: &BookEmbedding) -> i64 {
    let edges = g.edges();
    let mut total = 0;
    for i in 0..edges.len() {
        for j in i + 1..edges.len() {
            if edges_cross(&edges[i], &edges[j]) {
                total += 1;
            }
        }
    }
    total
}

#[test]
fn test_total_count_matches_pairwise_count() {
    let graphs = [
        complete(1, 6).unwrap(),
        complete(2, 6).unwrap(),
        complete_multipartite(2, 3, 2).unwrap(),
    ];
    for g in &graphs {
        assert_eq!(crossing_number(g), pairwise_crossings(g));
    }
}

#[test]
fn test_per_edge_counts_sum_to_twice_the_total() {
    let g = complete(1, 7).unwrap();
    let sum: i64 = g.edges().iter().map(|ed| edge_crossings(&g, ed)).sum();
    assert_eq!(sum, 2 * crossing_number(&g));
}

#[test]
fn test_k5_on_one_page_has_five_crossings() {
    // In convex position, every 4-subset of vertices contributes one
    // crossing: C(5, 4) = 5.
    let g = complete(1, 5).unwrap();
    assert_eq!(crossing_number(&g), 5);
}

#[test]
fn test_vertex_count_covers_incident_edges_only() {
    let mut g = BookEmbedding::new(5, 1);
    g.add_edge(0, 2, Some(0));
    g.add_edge(1, 3, Some(0));
    g.add_edge(2, 4, Some(0));
    // (1,3) crosses both (0,2) and (2,4).
    assert_eq!(vertex_crossings(&g, 1), 2);
    assert_eq!(vertex_crossings(&g, 0), 1);
    assert_eq!(vertex_crossings(&g, 4), 1);
}

#[test]
fn test_unassigned_edges_cross_nothing() {
    let mut g = BookEmbedding::new(4, 2);
    g.add_edge(0, 2, Some(0));
    g.add_edge(1, 3, None);
    assert_eq!(crossing_number(&g), 0);
    assert!(!edges_cross(
        &Edge::new(0, 2, None),
        &Edge::new(1, 3, None)
    ));
}

#[test]
fn test_swap_delta_agrees_with_recount_on_every_position() {
    let mut g = complete_multipartite(2, 3, 2).unwrap();
    for pos in 0..g.vertex_count() - 1 {
        let before = crossing_number(&g);
        let delta = adjacent_swap_delta(&g, pos);
        swap_vertices(&mut g, pos, pos + 1);
        assert_eq!(crossing_number(&g), before + delta);
        // Swap back and check the inverse delta as well.
        let back = adjacent_swap_delta(&g, pos);
        assert_eq!(back, -delta);
        swap_vertices(&mut g, pos, pos + 1);
        assert_eq!(crossing_number(&g), before);
    }
}
