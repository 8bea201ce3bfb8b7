//! Shortest ancestral paths.
//!
//! An *ancestral path* between vertex sets `V` and `W` is a pair of directed paths, one from
//! some `v ∈ V` and one from some `w ∈ W`, that end at the same vertex `x` (the common
//! ancestor). Its length is `d_V(x) + d_W(x)`. [`Sap`] finds the shortest one by running one
//! multi-source BFS per side and sweeping all vertices in index order.
//!
//! Public invariants:
//! - Results are symmetric in `V` and `W`.
//! - Ties on length go to the lowest-indexed ancestor.
//! - "No common ancestor" is `Ok(None)`, never an error.
//!
//! The host graph does not need to be acyclic.

use tracing::trace;

use crate::bfs::{validate_sources, BreadthFirstPaths};
use crate::error::Result;
use crate::graph::GraphRef;

/// Length and common ancestor of a shortest ancestral path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AncestralPath {
    pub length: usize,
    pub ancestor: usize,
}

/// Reusable BFS buffers for repeated [`Sap`] queries.
///
/// The plain query methods allocate two fresh distance fields per call; the `*_with` variants
/// run against a scratch instead and stop allocating once it has grown to the graph size.
#[derive(Debug, Clone, Default)]
pub struct SapScratch {
    from_v: BreadthFirstPaths,
    from_w: BreadthFirstPaths,
}

impl SapScratch {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shortest-ancestral-path queries over a borrowed graph.
#[derive(Debug)]
pub struct Sap<'g, G> {
    graph: &'g G,
}

impl<G> Clone for Sap<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<G> Copy for Sap<'_, G> {}

impl<'g, G: GraphRef> Sap<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// Length of a shortest ancestral path between `v` and `w`.
    pub fn length(&self, v: usize, w: usize) -> Result<Option<usize>> {
        Ok(self.shortest(v, w)?.map(|p| p.length))
    }

    /// Common ancestor on a shortest ancestral path between `v` and `w`.
    pub fn ancestor(&self, v: usize, w: usize) -> Result<Option<usize>> {
        Ok(self.shortest(v, w)?.map(|p| p.ancestor))
    }

    pub fn length_multi(&self, v: &[usize], w: &[usize]) -> Result<Option<usize>> {
        Ok(self.shortest_multi(v, w)?.map(|p| p.length))
    }

    pub fn ancestor_multi(&self, v: &[usize], w: &[usize]) -> Result<Option<usize>> {
        Ok(self.shortest_multi(v, w)?.map(|p| p.ancestor))
    }

    pub fn shortest(&self, v: usize, w: usize) -> Result<Option<AncestralPath>> {
        self.shortest_multi(&[v], &[w])
    }

    /// Shortest ancestral path between any vertex of `v` and any vertex of `w`.
    ///
    /// Both sets must be non-empty and contain only vertices of the graph; duplicates are fine.
    pub fn shortest_multi(&self, v: &[usize], w: &[usize]) -> Result<Option<AncestralPath>> {
        self.shortest_multi_with(&mut SapScratch::new(), v, w)
    }

    pub fn shortest_with(
        &self,
        scratch: &mut SapScratch,
        v: usize,
        w: usize,
    ) -> Result<Option<AncestralPath>> {
        self.shortest_multi_with(scratch, &[v], &[w])
    }

    /// [`Sap::shortest_multi`] using caller-owned BFS buffers.
    pub fn shortest_multi_with(
        &self,
        scratch: &mut SapScratch,
        v: &[usize],
        w: &[usize],
    ) -> Result<Option<AncestralPath>> {
        let n = self.graph.node_count();
        // Validate both sides before doing any work.
        validate_sources(v, n)?;
        validate_sources(w, n)?;

        scratch.from_v.search(self.graph, v)?;
        scratch.from_w.search(self.graph, w)?;

        let mut best: Option<AncestralPath> = None;
        for x in 0..n {
            let (Some(dv), Some(dw)) = (scratch.from_v.dist_to(x), scratch.from_w.dist_to(x)) else {
                continue;
            };
            let length = dv + dw;
            // Strict `<` keeps the lowest index among equal lengths.
            if best.map_or(true, |b| length < b.length) {
                best = Some(AncestralPath { length, ancestor: x });
            }
        }
        trace!(v = ?v, w = ?w, result = ?best, "sap query");
        Ok(best)
    }
}
