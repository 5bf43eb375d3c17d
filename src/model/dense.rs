// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Import from a dense coefficient matrix.

use tracing::debug;

use super::BinaryQuadraticModel;
use crate::bias::Bias;
use crate::error::{ModelError, Result};
use crate::neighborhood::Neighborhood;
use crate::vartype::Vartype;

impl<B: Bias> BinaryQuadraticModel<B> {
    /// Build a model from a row-major `num_variables × num_variables` matrix.
    ///
    /// - Off-diagonal: the interaction `(i, j)` is `Q[i][j] + Q[j][i]`. A sum
    ///   of exactly zero stores nothing.
    /// - Diagonal, BINARY: `Q[i][i]` is the linear bias of `i` (x² = x).
    /// - Diagonal, SPIN: `Q[i][i]` is added to the offset (s² = 1) and the
    ///   linear bias stays zero.
    ///
    /// Fails with `InvalidArgument` if the matrix does not have
    /// `num_variables²` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparse_bqm::{BinaryQuadraticModel, Vartype};
    ///
    /// let q: [f32; 9] = [1.0, 0.0, 3.0, 2.0, 1.0, 0.0, 1.0, 0.0, 0.0];
    /// let bqm = BinaryQuadraticModel::<f64>::from_dense(&q, 3, Vartype::Binary).unwrap();
    ///
    /// assert_eq!(bqm.linear_biases(), &[1.0, 1.0, 0.0]);
    /// assert_eq!(bqm.quadratic(0, 2).unwrap(), 4.0);
    /// assert!(bqm.quadratic_at(1, 2).is_err());
    /// ```
    pub fn from_dense<T>(matrix: &[T], num_variables: usize, vartype: Vartype) -> Result<Self>
    where
        T: Copy + Into<B>,
    {
        let expected = num_variables.checked_mul(num_variables).ok_or_else(|| {
            ModelError::invalid(format!("{} variables overflows a dense matrix", num_variables))
        })?;
        if matrix.len() != expected {
            return Err(ModelError::invalid(format!(
                "dense matrix has {} entries, expected {} for {} variables",
                matrix.len(),
                expected,
                num_variables
            )));
        }

        let entry = |row: usize, col: usize| -> B { matrix[row * num_variables + col].into() };

        let mut linear = vec![B::ZERO; num_variables];
        let mut adj: Vec<Neighborhood<B>> = (0..num_variables).map(|_| Neighborhood::new()).collect();
        let mut offset = B::ZERO;

        for u in 0..num_variables {
            match vartype {
                Vartype::Binary => linear[u] += entry(u, u),
                Vartype::Spin => offset += entry(u, u),
            }

            for v in (u + 1)..num_variables {
                let bias = entry(u, v) + entry(v, u);
                if bias != B::ZERO {
                    // Rows are visited in ascending order, so both
                    // neighborhoods only ever receive increasing keys.
                    adj[u].emplace_back(v, bias);
                    adj[v].emplace_back(u, bias);
                }
            }
        }

        let bqm = Self::from_parts(linear, adj, offset, vartype);
        debug!(
            num_variables,
            num_interactions = bqm.num_interactions(),
            %vartype,
            "imported dense matrix"
        );
        Ok(bqm)
    }
}
