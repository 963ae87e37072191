#![no_main]
use bookbind::core::crossings::{adjacent_swap_delta, crossing_number};
use bookbind::core::mutation::{move_vertex, swap_vertices};
use bookbind::core::types::BookEmbedding;
use bookbind::search::placers::greedy_at_vertex;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }

    let n = (data[0] as usize % 12) + 2;
    let pages = (data[1] as usize % 3) + 1;
    let mut graph = BookEmbedding::new(n, pages);

    // Build edges from the next bytes.
    let mut bytes = data[2..].iter().copied();
    while let (Some(a), Some(b), Some(p)) = (bytes.next(), bytes.next(), bytes.next()) {
        let v1 = a as usize % n;
        let v2 = b as usize % n;
        if v1 != v2 {
            graph.add_edge(v1, v2, Some(p as usize % pages));
        }
        if graph.edge_count() >= 32 {
            break;
        }
    }

    let id_pairs = |g: &BookEmbedding| -> Vec<(usize, usize)> {
        g.edges()
            .iter()
            .map(|ed| {
                let a = g.id_at(ed.v1);
                let b = g.id_at(ed.v2);
                (a.min(b), a.max(b))
            })
            .collect()
    };
    let pairs = id_pairs(&graph);

    // Drive the engine with an operation sequence derived from the input.
    let mut cr = crossing_number(&graph);
    for chunk in data.chunks(3) {
        let (op, x, y) = match chunk {
            [op, x, y] => (*op, *x, *y),
            _ => break,
        };
        let a = x as usize % n;
        let b = y as usize % n;
        match op % 4 {
            0 => move_vertex(&mut graph, a, b),
            1 => swap_vertices(&mut graph, a, b),
            2 => {
                if a + 1 < n {
                    let delta = adjacent_swap_delta(&graph, a);
                    swap_vertices(&mut graph, a, a + 1);
                    assert_eq!(crossing_number(&graph), cr + delta);
                }
            }
            _ => greedy_at_vertex(&mut graph, a),
        }
        cr = crossing_number(&graph);
    }

    // Edges must still bind the same id pairs, and the ordering must stay
    // a permutation.
    assert_eq!(pairs, id_pairs(&graph));
    let mut seen = vec![false; n];
    for v in graph.vertices() {
        assert!(v.id < n && !seen[v.id]);
        seen[v.id] = true;
    }
});
