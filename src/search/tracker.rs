/*!
# Best-Found Tracker

Keeps the best embedding observed so far, verifies every candidate that
claims to beat it, and persists new bests to the output file with a
one-deep backup rotation. The verification is deliberately kept in release
builds: it runs only when a new best is found, and a candidate that fails
it means the engine itself is broken, so the process aborts after printing
the offending condition together with both the original and the candidate
embedding.
*/

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::core::crossings::crossing_number;
use crate::core::io::write_embedding;
use crate::core::types::BookEmbedding;

/// Monotone minimum over offered embeddings, with verification and
/// persistence. A tracker without a path (used for the annealer's local
/// best) only keeps the in-memory copy.
pub struct BestFound {
    path: Option<PathBuf>,
    backup_path: Option<PathBuf>,
    val: i64,
    best: BookEmbedding,
    origin: BookEmbedding,
    improved: bool,
}

impl BestFound {
    /// Creates a tracker seeded with `origin` as candidate zero: the input
    /// state is verified, stored and (when a path is given) written out,
    /// but does not count as an improvement.
    pub fn new(path: Option<&Path>, origin: &BookEmbedding) -> Self {
        let mut tracker = BestFound {
            path: path.map(Path::to_path_buf),
            backup_path: path.map(|p| {
                let mut name = p.as_os_str().to_os_string();
                name.push(".bck");
                PathBuf::from(name)
            }),
            val: i64::MAX,
            best: origin.clone(),
            origin: origin.clone(),
            improved: false,
        };
        tracker.test_if_best(origin, None);
        tracker.improved = false;
        tracker
    }

    /// Best crossing count seen so far.
    pub fn value(&self) -> i64 {
        self.val
    }

    /// The stored best embedding.
    pub fn best(&self) -> &BookEmbedding {
        &self.best
    }

    /// True iff any offer after construction improved on the initial state.
    pub fn improved_on_initial(&self) -> bool {
        self.improved
    }

    /// Offers a candidate with a claimed crossing count (`None` means
    /// "recompute it"). A candidate that does not beat the stored value is
    /// ignored; one that does is verified, stored and persisted.
    pub fn test_if_best(&mut self, candidate: &BookEmbedding, claimed_cr: Option<i64>) {
        let claimed = claimed_cr.unwrap_or_else(|| crossing_number(candidate));
        if claimed >= self.val {
            return;
        }
        self.verify(candidate, claimed);
        self.val = claimed;
        self.best.load_from(candidate);
        self.improved = true;
        self.persist();
    }

    /// Aborts after printing the failing condition and both embeddings.
    fn verify_failure(&self, candidate: &BookEmbedding, message: &str) -> ! {
        tracing::error!("embedding verification failed: {}", message);
        let stderr = std::io::stderr();
        let mut out = stderr.lock();
        let _ = writeln!(out, "--- original ---");
        let _ = write_embedding(&self.origin, &mut out);
        let _ = writeln!(out, "--- candidate ---");
        let _ = write_embedding(candidate, &mut out);
        panic!("embedding verification failed: {}", message);
    }

    /// Checks the candidate against the original: the claimed crossing
    /// count must match a recount, the shape must be unchanged, the
    /// ordering must be a permutation and every edge must still bind the
    /// same id pair on a valid page.
    fn verify(&self, candidate: &BookEmbedding, claimed_cr: i64) {
        if crossing_number(candidate) != claimed_cr {
            self.verify_failure(
                candidate,
                "number of crossings differs from the claimed value",
            );
        }
        if candidate.vertex_count() != self.origin.vertex_count() {
            self.verify_failure(candidate, "number of vertices changed");
        }
        if candidate.edge_count() != self.origin.edge_count() {
            self.verify_failure(candidate, "number of edges changed");
        }
        if candidate.page_count() != self.origin.page_count() {
            self.verify_failure(candidate, "number of pages changed");
        }

        let n = candidate.vertex_count();
        let mut used = vec![false; n];
        for vertex in candidate.vertices() {
            if vertex.id >= n || used[vertex.id] {
                self.verify_failure(
                    candidate,
                    &format!("bad or duplicate vertex id {}", vertex.id),
                );
            }
            used[vertex.id] = true;
        }

        for (i, ed) in candidate.edges().iter().enumerate() {
            let pair = |g: &BookEmbedding, v1: usize, v2: usize| {
                let a = g.id_at(v1);
                let b = g.id_at(v2);
                (a.min(b), a.max(b))
            };
            let orig = &self.origin.edges()[i];
            if pair(candidate, ed.v1, ed.v2) != pair(&self.origin, orig.v1, orig.v2) {
                self.verify_failure(candidate, &format!("edge {} changed its endpoint ids", i));
            }
            match ed.page {
                Some(p) if p < candidate.page_count() => {}
                _ => self.verify_failure(candidate, &format!("page of edge {} is out of range", i)),
            }
        }
    }

    /// Rotates `path` to `path.bck` and writes the stored best. A path that
    /// cannot be opened is silently skipped; the in-memory best is kept.
    fn persist(&self) {
        let (Some(path), Some(backup)) = (&self.path, &self.backup_path) else {
            return;
        };
        tracing::info!("writing embedding with {} crossings", self.val);
        if path.exists() {
            let _ = fs::remove_file(backup);
            let _ = fs::rename(path, backup);
        }
        let Ok(file) = fs::File::create(path) else {
            return;
        };
        let mut out = BufWriter::new(file);
        if write_embedding(&self.best, &mut out).is_ok() {
            let _ = out.flush();
        }
    }
}
