/*!
# Local Searches

The Baur–Brandes repositioning sweep and the two combined loops that
alternate it with the page placers. Both combined loops are monotone
non-increasing in the crossing number per outer pass and terminate when a
pass yields no change.
*/

use crate::core::crossings::crossing_number;
use crate::core::mutation::move_vertex;
use crate::core::types::BookEmbedding;
use crate::search::placers::{Placer, greedy_at_vertex, greedy_pages, restart_edges};
use crate::search::position::find_best_position;
use crate::search::tracker::BestFound;

/// Repeatedly sweeps every position, moving each vertex to its best other
/// position whenever that improves its cost, and re-running the per-vertex
/// greedy after each move. Stops after a full sweep without improvement.
pub fn baur_brandes(g: &mut BookEmbedding, best: &mut BestFound) {
    let n = g.vertex_count();
    let mut improved = true;
    while improved {
        improved = false;
        for pos in 0..n {
            let Some((target, delta)) = find_best_position(g, pos) else {
                continue;
            };
            if delta < 0 {
                move_vertex(g, pos, target);
                greedy_at_vertex(g, target);
                improved = true;
            }
        }
        if improved {
            best.test_if_best(g, None);
        }
    }
}

/// Loop of Baur–Brandes followed by the page placers (greedy pass, then a
/// length-ordered and an edge-ordered restart), offering every intermediate
/// state to the tracker. Exits when a full round leaves the crossing number
/// unchanged.
pub fn bb_greedy(g: &mut BookEmbedding, best: &mut BestFound) -> i64 {
    loop {
        let old_cr = crossing_number(g);
        baur_brandes(g, best);
        let mut new_cr = crossing_number(g);
        best.test_if_best(g, Some(new_cr));

        greedy_pages(g);
        new_cr = crossing_number(g);
        best.test_if_best(g, Some(new_cr));
        new_cr = restart_edges(g, new_cr, Placer::LengthOrder);
        new_cr = restart_edges(g, new_cr, Placer::EdgeOrder);

        if new_cr == old_cr {
            break;
        }
        best.test_if_best(g, Some(new_cr));
    }
    let final_cr = crossing_number(g);
    tracing::debug!("BBGreedy: {} crossings", final_cr);
    final_cr
}

/// The symmetric loop starting with the placers and ending with
/// Baur–Brandes.
pub fn greedy_bb(g: &mut BookEmbedding, best: &mut BestFound) -> i64 {
    loop {
        let old_cr = crossing_number(g);
        greedy_pages(g);
        let mut new_cr = crossing_number(g);
        best.test_if_best(g, Some(new_cr));

        new_cr = restart_edges(g, new_cr, Placer::LengthOrder);
        new_cr = restart_edges(g, new_cr, Placer::EdgeOrder);
        best.test_if_best(g, Some(new_cr));

        baur_brandes(g, best);
        new_cr = crossing_number(g);
        if new_cr == old_cr {
            break;
        }
        best.test_if_best(g, Some(new_cr));
    }
    let final_cr = crossing_number(g);
    tracing::debug!("GreedyBB: {} crossings", final_cr);
    final_cr
}
