//! Directed-acyclicity checks: cycle detection, topological order and rooted-DAG validation.
//!
//! All traversals are iterative (explicit stacks), so deep hypernym chains cannot overflow the
//! call stack.

use crate::error::{Error, Result};
use crate::graph::GraphRef;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    White,
    OnStack,
    Done,
}

/// Depth-first search over every vertex, in index order.
///
/// Returns `Ok(postorder)` when the graph is acyclic and `Err(cycle)` with the first directed
/// cycle found otherwise. The cycle is closed: its first and last entries are the same vertex.
fn dfs_postorder<G: GraphRef>(graph: &G) -> std::result::Result<Vec<usize>, Vec<usize>> {
    let n = graph.node_count();
    let mut mark = vec![Mark::White; n];
    let mut postorder = Vec::with_capacity(n);
    // (vertex, index of the next neighbor to look at)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if mark[root] != Mark::White {
            continue;
        }
        mark[root] = Mark::OnStack;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (v, i) = *top;
            let nbrs = graph.neighbors_ref(v);
            if i < nbrs.len() {
                top.1 += 1;
                let w = nbrs[i];
                match mark[w] {
                    Mark::White => {
                        mark[w] = Mark::OnStack;
                        stack.push((w, 0));
                    }
                    Mark::OnStack => {
                        let start = stack.iter().position(|&(u, _)| u == w).unwrap_or(0);
                        let mut cycle: Vec<usize> = stack[start..].iter().map(|&(u, _)| u).collect();
                        cycle.push(w);
                        return Err(cycle);
                    }
                    Mark::Done => {}
                }
            } else {
                mark[v] = Mark::Done;
                postorder.push(v);
                stack.pop();
            }
        }
    }
    Ok(postorder)
}

/// One directed cycle, if the graph has any.
pub fn find_cycle<G: GraphRef>(graph: &G) -> Option<Vec<usize>> {
    dfs_postorder(graph).err()
}

pub fn is_acyclic<G: GraphRef>(graph: &G) -> bool {
    find_cycle(graph).is_none()
}

/// A topological order (every edge `u -> v` has `u` before `v`), or `None` if there is a cycle.
pub fn topological_order<G: GraphRef>(graph: &G) -> Option<Vec<usize>> {
    let mut order = dfs_postorder(graph).ok()?;
    order.reverse();
    Some(order)
}

/// Vertices with no outgoing edges, ascending.
pub fn sinks<G: GraphRef>(graph: &G) -> Vec<usize> {
    (0..graph.node_count()).filter(|&v| graph.out_degree(v) == 0).collect()
}

/// Check that `graph` is acyclic with exactly one sink, and return that sink.
///
/// In such a graph every vertex reaches the sink, so it is the common root of the hierarchy.
pub fn validate_rooted_dag<G: GraphRef>(graph: &G) -> Result<usize> {
    validate_acyclic(graph)?;
    match sinks(graph).as_slice() {
        [root] => Ok(*root),
        roots => Err(Error::RootCount(roots.to_vec())),
    }
}

/// Fail with [`Error::Cycle`] if `graph` has a directed cycle.
pub fn validate_acyclic<G: GraphRef>(graph: &G) -> Result<()> {
    match find_cycle(graph) {
        Some(cycle) => Err(Error::Cycle(cycle)),
        None => Ok(()),
    }
}
