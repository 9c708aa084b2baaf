//! Node degrees from COO adjacency lists.
//!
//! Conventions
//! - A COO adjacency stores one column per edge: `sources[k] → targets[k]`.
//! - Undirected graphs store both directions, so counting the source row
//!   yields the degree.

use crate::error::GeomError;

/// Edge list in coordinate (COO) form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CooAdjacency {
    pub sources: Vec<usize>,
    pub targets: Vec<usize>,
}

impl CooAdjacency {
    pub fn new(sources: Vec<usize>, targets: Vec<usize>) -> Result<Self, GeomError> {
        if sources.len() != targets.len() {
            return Err(GeomError::shape(
                "COO adjacency",
                "rows of equal length",
                targets.len(),
            ));
        }
        Ok(Self { sources, targets })
    }

    /// Number of stored edges (columns).
    #[inline]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

fn count_row(row: &[usize], order: usize) -> Result<Vec<usize>, GeomError> {
    let mut counts = vec![0; order];
    for &node in row {
        let slot = counts
            .get_mut(node)
            .ok_or(GeomError::shape("node index", "index below graph order", node))?;
        *slot += 1;
    }
    Ok(counts)
}

/// Degree of every node of an undirected graph with `order` nodes.
pub fn degree(adj: &CooAdjacency, order: usize) -> Result<Vec<usize>, GeomError> {
    count_row(&adj.sources, order)
}

/// `(in_degree, out_degree)` of every node of a directed graph.
pub fn in_out_degree(
    adj: &CooAdjacency,
    order: usize,
) -> Result<(Vec<usize>, Vec<usize>), GeomError> {
    let indegree = count_row(&adj.targets, order)?;
    let outdegree = count_row(&adj.sources, order)?;
    Ok((indegree, outdegree))
}
