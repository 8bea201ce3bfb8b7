//! Multi-source breadth-first shortest paths.
//!
//! Allocation-light in the same way as the reachability counters: the frontier is a `Vec`
//! with a moving head, and all buffers survive across [`BreadthFirstPaths::search`] calls so a
//! caller running many searches over one graph pays for allocation once.

use crate::error::{Error, Result};
use crate::graph::{check_vertex, GraphRef};

const UNREACHED: usize = usize::MAX;

/// Hop distances from a set of source vertices to every vertex of a graph.
#[derive(Debug, Clone, Default)]
pub struct BreadthFirstPaths {
    dist_to: Vec<usize>,
    edge_to: Vec<usize>,
    queue: Vec<usize>,
}

impl BreadthFirstPaths {
    /// Run a search from `sources` over `graph`.
    ///
    /// Fails with [`Error::EmptyVertexSet`] if `sources` is empty and with
    /// [`Error::VertexOutOfRange`] if any source is not a vertex of `graph`. Duplicate sources
    /// are harmless.
    pub fn new<G: GraphRef>(graph: &G, sources: &[usize]) -> Result<Self> {
        let mut paths = Self::default();
        paths.search(graph, sources)?;
        Ok(paths)
    }

    /// Single-source convenience for [`BreadthFirstPaths::new`].
    pub fn from_vertex<G: GraphRef>(graph: &G, source: usize) -> Result<Self> {
        Self::new(graph, &[source])
    }

    /// Re-run the search in place, reusing this value's buffers.
    ///
    /// On error the previous results are left as they were.
    pub fn search<G: GraphRef>(&mut self, graph: &G, sources: &[usize]) -> Result<()> {
        let n = graph.node_count();
        validate_sources(sources, n)?;

        self.dist_to.clear();
        self.dist_to.resize(n, UNREACHED);
        self.edge_to.clear();
        self.edge_to.resize(n, UNREACHED);
        self.queue.clear();

        for &s in sources {
            if self.dist_to[s] == UNREACHED {
                self.dist_to[s] = 0;
                self.edge_to[s] = s;
                self.queue.push(s);
            }
        }

        let mut head = 0usize;
        while head < self.queue.len() {
            let cur = self.queue[head];
            head += 1;
            let next = self.dist_to[cur] + 1;
            for &nx in graph.neighbors_ref(cur) {
                if self.dist_to[nx] == UNREACHED {
                    self.dist_to[nx] = next;
                    self.edge_to[nx] = cur;
                    self.queue.push(nx);
                }
            }
        }
        Ok(())
    }

    /// Number of vertices covered by the last search.
    pub fn vertex_count(&self) -> usize {
        self.dist_to.len()
    }

    pub fn has_path_to(&self, v: usize) -> bool {
        self.dist_to.get(v).is_some_and(|&d| d != UNREACHED)
    }

    /// Edges on a shortest path from the nearest source to `v`, or `None` if unreachable.
    pub fn dist_to(&self, v: usize) -> Option<usize> {
        self.dist_to.get(v).copied().filter(|&d| d != UNREACHED)
    }

    /// A shortest path `source, ..., v`, or `None` if `v` is unreachable.
    pub fn path_to(&self, v: usize) -> Option<Vec<usize>> {
        let d = self.dist_to(v)?;
        let mut path = Vec::with_capacity(d + 1);
        let mut cur = v;
        path.push(cur);
        while self.edge_to[cur] != cur {
            cur = self.edge_to[cur];
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }

    /// Vertices reached by the last search, in BFS (non-decreasing distance) order.
    pub fn reached(&self) -> &[usize] {
        &self.queue
    }
}

pub(crate) fn validate_sources(sources: &[usize], vertex_count: usize) -> Result<()> {
    if sources.is_empty() {
        return Err(Error::EmptyVertexSet);
    }
    for &s in sources {
        check_vertex(s, vertex_count)?;
    }
    Ok(())
}
