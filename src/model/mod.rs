// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sparse binary quadratic model.
//!
//! The model stores the objective
//!
//! ```text
//! E(x) = offset + Σ_v linear[v]·x_v + Σ_{u<v} quadratic(u,v)·x_u·x_v
//! ```
//!
//! over variables `0..num_variables()`, all drawn from one [`Vartype`].
//!
//! # Storage
//!
//! - `linear`: one bias per variable
//! - `adj`: one [`Neighborhood`] per variable; every interaction is stored in
//!   both endpoints' neighborhoods with bit-identical biases
//! - `offset`: the constant term
//!
//! Every mutating operation validates its arguments first and only then
//! writes, so a failed call never leaves a half-updated pair behind.
//!
//! # Examples
//!
//! ```
//! use sparse_bqm::{BinaryQuadraticModel, Vartype};
//!
//! let mut bqm = BinaryQuadraticModel::<f64>::with_variables(3, Vartype::Binary);
//! *bqm.linear_mut(0).unwrap() = 1.0;
//! bqm.set_quadratic(0, 2, -2.0).unwrap();
//! *bqm.offset_mut() = 0.5;
//!
//! assert_eq!(bqm.quadratic(2, 0).unwrap(), -2.0);
//! assert_eq!(bqm.num_interactions(), 1);
//! assert_eq!(bqm.energy(&[1, 0, 1]).unwrap(), -0.5);
//! ```

pub mod dense;
pub mod energy;
pub mod vartype_change;

use tracing::debug;

use crate::bias::Bias;
use crate::error::{ModelError, Result};
use crate::neighborhood::Neighborhood;
use crate::vartype::Vartype;

/// A binary quadratic model with sparse symmetric adjacency.
///
/// # Concurrency
///
/// A model has one writer at a time. Neighborhood views returned by
/// [`neighborhood`](Self::neighborhood) borrow the model, so they are
/// invalidated (rejected by the borrow checker) by any later mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryQuadraticModel<B = f64> {
    linear: Vec<B>,
    adj: Vec<Neighborhood<B>>,
    offset: B,
    vartype: Vartype,
}

impl<B: Bias> BinaryQuadraticModel<B> {
    /// Create an empty model.
    pub fn new(vartype: Vartype) -> Self {
        Self {
            linear: Vec::new(),
            adj: Vec::new(),
            offset: B::ZERO,
            vartype,
        }
    }

    /// Create a model with `num_variables` isolated variables and zero biases.
    pub fn with_variables(num_variables: usize, vartype: Vartype) -> Self {
        let mut bqm = Self::new(vartype);
        bqm.resize(num_variables);
        bqm
    }

    pub fn num_variables(&self) -> usize {
        self.linear.len()
    }

    /// Number of stored interactions.
    ///
    /// Recomputed from the neighborhood sizes, O(num_variables).
    pub fn num_interactions(&self) -> usize {
        self.adj.iter().map(Neighborhood::len).sum::<usize>() / 2
    }

    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    /// Check that `v` names a variable of the model.
    fn check_variable(&self, v: usize) -> Result<()> {
        if v < self.num_variables() {
            Ok(())
        } else {
            Err(ModelError::OutOfRange {
                index: v,
                num_variables: self.num_variables(),
            })
        }
    }

    /// Check that `(u, v)` names a pair of distinct variables.
    fn check_pair(&self, u: usize, v: usize) -> Result<()> {
        self.check_variable(u)?;
        self.check_variable(v)?;
        if u == v {
            return Err(ModelError::SelfLoop { variable: u });
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Linear biases
    // ------------------------------------------------------------------

    /// Linear bias of `v`.
    pub fn linear(&self, v: usize) -> Result<B> {
        self.check_variable(v)?;
        Ok(self.linear[v])
    }

    /// Mutable reference to the linear bias of `v`.
    pub fn linear_mut(&mut self, v: usize) -> Result<&mut B> {
        self.check_variable(v)?;
        Ok(&mut self.linear[v])
    }

    pub fn set_linear(&mut self, v: usize, bias: B) -> Result<()> {
        *self.linear_mut(v)? = bias;
        Ok(())
    }

    pub fn add_linear(&mut self, v: usize, bias: B) -> Result<()> {
        *self.linear_mut(v)? += bias;
        Ok(())
    }

    /// All linear biases, indexed by variable.
    pub fn linear_biases(&self) -> &[B] {
        &self.linear
    }

    // ------------------------------------------------------------------
    // Quadratic biases
    // ------------------------------------------------------------------

    /// Interaction bias between `u` and `v`, or zero if none is stored.
    pub fn quadratic(&self, u: usize, v: usize) -> Result<B> {
        self.check_pair(u, v)?;
        Ok(self.adj[u].get(v, B::ZERO))
    }

    /// Interaction bias between `u` and `v`.
    ///
    /// Unlike [`quadratic`](Self::quadratic) this fails with
    /// `InteractionNotFound` when no bias is stored, which distinguishes an
    /// absent interaction from a stored zero.
    pub fn quadratic_at(&self, u: usize, v: usize) -> Result<B> {
        self.check_pair(u, v)?;
        self.adj[u]
            .at(v)
            .map_err(|_| ModelError::InteractionNotFound { u, v })
    }

    /// Check whether an interaction is stored between `u` and `v`.
    pub fn has_interaction(&self, u: usize, v: usize) -> Result<bool> {
        self.check_pair(u, v)?;
        Ok(self.adj[u].contains(v))
    }

    /// Overwrite the interaction bias between `u` and `v`.
    pub fn set_quadratic(&mut self, u: usize, v: usize, bias: B) -> Result<()> {
        self.check_pair(u, v)?;
        *self.adj[u].entry(v) = bias;
        *self.adj[v].entry(u) = bias;
        Ok(())
    }

    /// Add `bias` to the interaction between `u` and `v`, creating it if needed.
    pub fn add_quadratic(&mut self, u: usize, v: usize, bias: B) -> Result<()> {
        self.check_pair(u, v)?;
        // Sum once so both endpoints hold the same bits.
        let total = self.adj[u].get(v, B::ZERO) + bias;
        *self.adj[u].entry(v) = total;
        *self.adj[v].entry(u) = total;
        Ok(())
    }

    /// Remove the interaction between `u` and `v`.
    ///
    /// Returns whether an interaction was stored.
    pub fn remove_interaction(&mut self, u: usize, v: usize) -> Result<bool> {
        self.check_pair(u, v)?;
        let removed = self.adj[u].remove(v).is_some();
        if removed {
            self.adj[v].remove(u);
        }
        Ok(removed)
    }

    /// Iterate over stored interactions as `(u, v, bias)` with `u < v`.
    pub fn interactions(&self) -> impl Iterator<Item = (usize, usize, B)> + '_ {
        self.adj.iter().enumerate().flat_map(|(u, neighborhood)| {
            neighborhood
                .iter()
                .filter(move |&(v, _)| v > u)
                .map(move |(v, bias)| (u, v, bias))
        })
    }

    /// Read-only view of the neighbors of `v`, ascending by neighbor.
    pub fn neighborhood(&self, v: usize) -> Result<&Neighborhood<B>> {
        self.check_variable(v)?;
        Ok(&self.adj[v])
    }

    // ------------------------------------------------------------------
    // Offset
    // ------------------------------------------------------------------

    pub fn offset(&self) -> B {
        self.offset
    }

    pub fn offset_mut(&mut self) -> &mut B {
        &mut self.offset
    }

    pub fn set_offset(&mut self, offset: B) {
        self.offset = offset;
    }

    // ------------------------------------------------------------------
    // Shape
    // ------------------------------------------------------------------

    /// Grow or shrink the model to `num_variables` variables.
    ///
    /// New variables are isolated with zero bias. Removed variables take
    /// their interactions with them: every surviving neighborhood is purged
    /// of keys `>= num_variables`.
    pub fn resize(&mut self, num_variables: usize) {
        let old = self.num_variables();
        if num_variables < old {
            self.adj.truncate(num_variables);
            for neighborhood in &mut self.adj {
                neighborhood.truncate(num_variables);
            }
        } else {
            self.adj.resize_with(num_variables, Neighborhood::new);
        }
        self.linear.resize(num_variables, B::ZERO);
        debug!(from = old, to = num_variables, "resized model");
    }

    /// Append one isolated variable and return its index.
    pub fn add_variable(&mut self) -> usize {
        let v = self.num_variables();
        self.linear.push(B::ZERO);
        self.adj.push(Neighborhood::new());
        v
    }

    /// Multiply every bias and the offset by `factor`.
    pub fn scale(&mut self, factor: B) {
        for bias in &mut self.linear {
            *bias *= factor;
        }
        for neighborhood in &mut self.adj {
            for (_, bias) in neighborhood.iter_mut() {
                *bias *= factor;
            }
        }
        self.offset *= factor;
    }

    /// Build a model from parts that are already consistent.
    pub(crate) fn from_parts(
        linear: Vec<B>,
        adj: Vec<Neighborhood<B>>,
        offset: B,
        vartype: Vartype,
    ) -> Self {
        debug_assert_eq!(linear.len(), adj.len());
        Self {
            linear,
            adj,
            offset,
            vartype,
        }
    }
}
