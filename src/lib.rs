// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sparse binary quadratic models.
//!
//! A binary quadratic model (BQM) is the objective
//!
//! ```text
//! E(x) = offset + Σ_v a_v x_v + Σ_{u<v} b_uv x_u x_v
//! ```
//!
//! over variables that are either all BINARY (`x ∈ {0, 1}`, a QUBO) or all
//! SPIN (`x ∈ {-1, +1}`, an Ising model). Solvers and samplers read the
//! biases and evaluate energies; this crate owns the model itself.
//!
//! # Architecture
//!
//! - [`Neighborhood`]: a variable's interaction partners and biases, kept as
//!   sorted parallel vectors for binary-search lookup
//! - [`BinaryQuadraticModel`]: linear biases, one neighborhood per variable,
//!   the offset and the [`Vartype`]. Each interaction lives in both
//!   endpoints' neighborhoods with bit-identical biases
//! - dense import, exact vartype change and energy evaluation are
//!   implemented on the model in `model::{dense, vartype_change, energy}`
//! - [`generators`]: random and constraint models
//!
//! # Example
//!
//! ```
//! use sparse_bqm::{BinaryQuadraticModel, Vartype};
//!
//! let mut bqm = BinaryQuadraticModel::<f64>::with_variables(2, Vartype::Spin);
//! bqm.set_linear(0, 1.0).unwrap();
//! bqm.set_quadratic(0, 1, -1.0).unwrap();
//!
//! let before = bqm.energy(&[1, -1]).unwrap();
//! bqm.change_vartype(Vartype::Binary);
//! let after = bqm.energy(&[1, 0]).unwrap();
//! assert!((before - after).abs() < 1e-12);
//! ```

pub mod bias;
pub mod error;
pub mod generators;
pub mod model;
pub mod neighborhood;
pub mod vartype;

// Re-export commonly used types
pub use bias::Bias;
pub use error::{ModelError, Result};
pub use model::BinaryQuadraticModel;
pub use neighborhood::Neighborhood;
pub use vartype::Vartype;
