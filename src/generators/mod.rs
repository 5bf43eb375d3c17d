// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generators for well-known model families.
//!
//! - [`random`]: models with random biases on a given interaction graph
//! - [`constraints`]: penalty models whose ground states encode a constraint

pub mod constraints;
pub mod random;

pub use constraints::combinations;
pub use random::{ran_r, randint, uniform, RandomConfig};

use crate::error::{ModelError, Result};

/// Interaction graph for generated models.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Graph {
    /// Every pair of the `n` variables interacts.
    Complete(usize),

    /// Explicit edge list over `num_variables` variables.
    Edges {
        num_variables: usize,
        edges: Vec<(usize, usize)>,
    },
}

impl Graph {
    pub fn num_variables(&self) -> usize {
        match self {
            Graph::Complete(n) => *n,
            Graph::Edges { num_variables, .. } => *num_variables,
        }
    }

    /// Validated edge list.
    ///
    /// Every edge must join two distinct variables in range. Edges of a
    /// complete graph are listed as `(u, v)` with `u < v`.
    pub fn edges(&self) -> Result<Vec<(usize, usize)>> {
        match self {
            Graph::Complete(n) => Ok((0..*n)
                .flat_map(|u| ((u + 1)..*n).map(move |v| (u, v)))
                .collect()),
            Graph::Edges {
                num_variables,
                edges,
            } => {
                for &(u, v) in edges {
                    for index in [u, v] {
                        if index >= *num_variables {
                            return Err(ModelError::OutOfRange {
                                index,
                                num_variables: *num_variables,
                            });
                        }
                    }
                    if u == v {
                        return Err(ModelError::SelfLoop { variable: u });
                    }
                }
                Ok(edges.clone())
            }
        }
    }
}

impl From<usize> for Graph {
    fn from(n: usize) -> Self {
        Graph::Complete(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_edges() {
        let graph = Graph::Complete(4);
        assert_eq!(graph.num_variables(), 4);
        assert_eq!(
            graph.edges().unwrap(),
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
        assert!(Graph::from(0).edges().unwrap().is_empty());
    }

    #[test]
    fn test_edge_list_validation() {
        let graph = Graph::Edges {
            num_variables: 3,
            edges: vec![(0, 1), (2, 1)],
        };
        assert_eq!(graph.edges().unwrap(), vec![(0, 1), (2, 1)]);

        let out_of_range = Graph::Edges {
            num_variables: 3,
            edges: vec![(0, 3)],
        };
        assert_eq!(
            out_of_range.edges(),
            Err(ModelError::OutOfRange {
                index: 3,
                num_variables: 3
            })
        );

        let self_loop = Graph::Edges {
            num_variables: 3,
            edges: vec![(1, 1)],
        };
        assert_eq!(self_loop.edges(), Err(ModelError::SelfLoop { variable: 1 }));
    }
}
