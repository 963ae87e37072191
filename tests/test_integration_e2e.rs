// End-to-End Tests
//
// These tests run the full solver orchestration on the literal scenarios
// from the challenge: small graphs whose optimal (or provably reachable)
// crossing counts are known. The annealing budget per round is the
// default; the number of rounds is reduced where two rounds are already
// sufficient, to keep the suite fast.

use rand::SeedableRng;
use rand::rngs::StdRng;

use bookbind::core::crossings::crossing_number;
use bookbind::core::generators::{complete, complete_multipartite, hypercube};
use bookbind::core::io::{read_embedding, write_embedding};
use bookbind::search::annealing::{SolverOptions, solve};
use bookbind::search::tracker::BestFound;

fn run(graph: &bookbind::core::types::BookEmbedding, restarts: usize, seed: u64) -> i64 {
    let mut best = BestFound::new(None, graph);
    let mut rng = StdRng::seed_from_u64(seed);
    let opts = SolverOptions {
        restarts,
        ..SolverOptions::default()
    };
    let val = solve(graph, &opts, &mut best, &mut rng);
    assert_eq!(val, best.value());
    assert_eq!(crossing_number(best.best()), val);
    val
}

#[test]
fn test_k4_on_a_single_page_keeps_its_one_crossing() {
    // K4 is not outerplanar: one crossing is optimal on a single page.
    let g = complete(1, 4).unwrap();
    assert_eq!(crossing_number(&g), 1);
    assert_eq!(run(&g, 2, 1), 1);
}

#[test]
fn test_k4_on_two_pages_is_solved() {
    let g = complete(2, 4).unwrap();
    assert_eq!(run(&g, 2, 2), 0);
}

#[test]
fn test_triangle_is_crossing_free() {
    let g = complete(1, 3).unwrap();
    assert_eq!(run(&g, 1, 3), 0);
}

#[test]
fn test_k33_on_two_pages_reaches_one_crossing() {
    // The book thickness of K_{3,3} is 3, so one crossing is unavoidable
    // on two pages, and a drawing with exactly one exists.
    let g = complete_multipartite(2, 3, 2).unwrap();
    assert_eq!(run(&g, 2, 4), 1);
}

#[test]
fn test_hypercube_q4_on_three_pages_is_solved() {
    // Q_d is three-page embeddable for d <= 4.
    let g = hypercube(3, 4).unwrap();
    assert_eq!(run(&g, 2, 5), 0);
}

#[test]
fn test_single_vertex_input_produces_valid_output() {
    let g = read_embedding(&b"1\n1\n0\n"[..]).unwrap();
    assert_eq!(run(&g, 1, 6), 0);
    let mut buf = Vec::new();
    write_embedding(&g, &mut buf).unwrap();
    assert_eq!(buf, b"1\n1\n0\n");
}

#[test]
fn test_solver_consumes_challenge_input() {
    // A K4 instance in the literal challenge format, pages pre-assigned.
    let input = "\
4
2
0
1
2
3
0 1 [0]
0 2 [0]
0 3 [0]
1 2 [0]
1 3 [0]
2 3 [0]
";
    let g = read_embedding(input.as_bytes()).unwrap();
    assert_eq!(run(&g, 2, 7), 0);
}

#[test]
fn test_isolated_vertices_do_not_disturb_the_search() {
    // A triangle plus two isolated vertices: still crossing-free, and the
    // solver must not trip over degree-zero vertices.
    let input = "5\n1\n0\n1\n2\n3\n4\n0 1 [0]\n1 2 [0]\n0 2 [0]\n";
    let g = read_embedding(input.as_bytes()).unwrap();
    assert_eq!(run(&g, 1, 8), 0);
}
