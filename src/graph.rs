//! Graph adapter trait and the owned [`Digraph`].

use std::fmt;

use crate::error::{Error, Result};

/// A directed graph view that can return **borrowed** out-neighbor slices.
///
/// Vertices are the dense indices `0..node_count()`. Implementations may assume callers have
/// already range-checked `node`; the checked entry points live on [`Digraph`] and in the
/// algorithms that validate their inputs up front.
pub trait GraphRef {
    fn node_count(&self) -> usize;
    fn neighbors_ref(&self, node: usize) -> &[usize];
    fn out_degree(&self, node: usize) -> usize {
        self.neighbors_ref(node).len()
    }
}

/// Fail with [`Error::VertexOutOfRange`] unless `vertex < vertex_count`.
pub(crate) fn check_vertex(vertex: usize, vertex_count: usize) -> Result<()> {
    if vertex < vertex_count {
        Ok(())
    } else {
        Err(Error::VertexOutOfRange { vertex, vertex_count })
    }
}

/// Fixed-size adjacency-list digraph.
///
/// The vertex count is fixed at construction. Each vertex keeps its out-neighbors in insertion
/// order; parallel edges are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Digraph {
    adj: Vec<Vec<usize>>,
    indegree: Vec<usize>,
    edge_count: usize,
}

impl Digraph {
    /// An edgeless digraph on `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertex_count],
            indegree: vec![0; vertex_count],
            edge_count: 0,
        }
    }

    /// Build from an edge list, failing on the first out-of-range endpoint.
    pub fn from_edges(vertex_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let mut g = Self::new(vertex_count);
        for &(u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Append the edge `u -> v`.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<()> {
        check_vertex(u, self.vertex_count())?;
        check_vertex(v, self.vertex_count())?;
        self.adj[u].push(v);
        self.indegree[v] += 1;
        self.edge_count += 1;
        Ok(())
    }

    /// Out-neighbors of `v`, in insertion order.
    pub fn adj(&self, v: usize) -> Result<&[usize]> {
        check_vertex(v, self.vertex_count())?;
        Ok(&self.adj[v])
    }

    pub fn outdegree(&self, v: usize) -> Result<usize> {
        self.adj(v).map(<[usize]>::len)
    }

    pub fn indegree(&self, v: usize) -> Result<usize> {
        check_vertex(v, self.vertex_count())?;
        Ok(self.indegree[v])
    }

    /// Vertices with out-degree 0, ascending.
    pub fn sinks(&self) -> Vec<usize> {
        crate::dag::sinks(self)
    }

    /// The same graph with every edge flipped.
    pub fn reverse(&self) -> Digraph {
        let mut rev = Digraph::new(self.vertex_count());
        for (u, nbrs) in self.adj.iter().enumerate() {
            for &v in nbrs {
                rev.adj[v].push(u);
                rev.indegree[u] += 1;
            }
        }
        rev.edge_count = self.edge_count;
        rev
    }

    /// Convert a `petgraph` directed graph, keeping `NodeIndex::index()` as the vertex id.
    #[cfg(feature = "petgraph")]
    pub fn from_petgraph<N, E, Ix>(graph: &petgraph::Graph<N, E, petgraph::Directed, Ix>) -> Self
    where
        Ix: petgraph::graph::IndexType,
    {
        use petgraph::visit::EdgeRef;

        let mut g = Digraph::new(graph.node_count());
        for e in graph.edge_references() {
            let (u, v) = (e.source().index(), e.target().index());
            g.adj[u].push(v);
            g.indegree[v] += 1;
            g.edge_count += 1;
        }
        g
    }
}

impl GraphRef for Digraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn neighbors_ref(&self, node: usize) -> &[usize] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.vertex_count(), self.edge_count)?;
        for (v, nbrs) in self.adj.iter().enumerate() {
            write!(f, "{v}:")?;
            for w in nbrs {
                write!(f, " {w}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_and_insertion_order() {
        // 0 -> 2, 0 -> 1, 0 -> 2 (parallel), 1 -> 2
        let g = Digraph::from_edges(3, &[(0, 2), (0, 1), (0, 2), (1, 2)]).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.adj(0).unwrap(), &[2, 1, 2]);
        assert_eq!(g.outdegree(0).unwrap(), 3);
        assert_eq!(g.indegree(2).unwrap(), 3);
        assert_eq!(g.sinks(), vec![2]);
    }

    #[test]
    fn out_of_range_is_rejected() {
        let mut g = Digraph::new(2);
        assert!(matches!(
            g.add_edge(0, 2),
            Err(Error::VertexOutOfRange { vertex: 2, vertex_count: 2 })
        ));
        assert!(g.adj(5).is_err());
        assert!(g.outdegree(2).is_err());
        assert!(g.indegree(2).is_err());
        // Failed inserts leave the graph untouched.
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn reverse_flips_edges() {
        let g = Digraph::from_edges(3, &[(0, 1), (1, 2), (0, 2)]).unwrap();
        let r = g.reverse();
        assert_eq!(r.edge_count(), 3);
        assert_eq!(r.adj(2).unwrap(), &[0, 1]);
        assert_eq!(r.adj(1).unwrap(), &[0]);
        assert_eq!(r.sinks(), vec![0]);
        assert_eq!(r.reverse(), g);
    }

    #[test]
    fn display_lists_adjacency() {
        let g = Digraph::from_edges(2, &[(0, 1)]).unwrap();
        assert_eq!(g.to_string(), "2 vertices, 1 edges\n0: 1\n1:\n");
    }

    #[cfg(feature = "petgraph")]
    #[test]
    fn from_petgraph_keeps_indices() {
        use petgraph::prelude::*;

        let mut pg: DiGraph<(), ()> = DiGraph::new();
        let a = pg.add_node(());
        let b = pg.add_node(());
        let c = pg.add_node(());
        pg.add_edge(a, b, ());
        pg.add_edge(b, c, ());

        let g = Digraph::from_petgraph(&pg);
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.adj(a.index()).unwrap(), &[b.index()]);
        assert_eq!(g.sinks(), vec![c.index()]);
    }
}
