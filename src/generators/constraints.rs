// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Penalty models for combinatorial constraints.

use tracing::debug;

use crate::bias::Bias;
use crate::error::{ModelError, Result};
use crate::model::BinaryQuadraticModel;
use crate::vartype::Vartype;

/// Model whose ground states are exactly the assignments with `k` of the
/// `num_variables` variables active (1 in BINARY, +1 in SPIN).
///
/// Built in BINARY as `strength · (Σ x_v - k)²`, which expands (using
/// `x² = x`) to linear `strength · (1 - 2k)`, quadratic `2 · strength` and
/// offset `strength · k²`, then moved to `vartype`. Ground states have energy
/// zero; every other assignment has energy at least `strength`.
///
/// Fails with `InvalidArgument` when `k > num_variables`.
///
/// # Examples
///
/// ```
/// use sparse_bqm::generators::combinations;
/// use sparse_bqm::Vartype;
///
/// let bqm = combinations::<f64>(3, 1, 1.0, Vartype::Binary).unwrap();
/// assert_eq!(bqm.energy(&[0, 1, 0]).unwrap(), 0.0);
/// assert_eq!(bqm.energy(&[1, 1, 0]).unwrap(), 1.0);
/// ```
pub fn combinations<B: Bias>(
    num_variables: usize,
    k: usize,
    strength: B,
    vartype: Vartype,
) -> Result<BinaryQuadraticModel<B>> {
    if k > num_variables {
        return Err(ModelError::invalid(format!(
            "cannot select k={} from {} variables",
            k, num_variables
        )));
    }
    let k_bias = B::from_f64(k as f64);
    let linear = strength * (B::ONE - B::from_i8(2) * k_bias);
    let quadratic = B::from_i8(2) * strength;

    let mut bqm = BinaryQuadraticModel::with_variables(num_variables, Vartype::Binary);
    for u in 0..num_variables {
        bqm.set_linear(u, linear)?;
        for v in (u + 1)..num_variables {
            bqm.set_quadratic(u, v, quadratic)?;
        }
    }
    bqm.set_offset(strength * k_bias * k_bias);
    bqm.change_vartype(vartype);

    debug!(num_variables, k, %vartype, "generated combinations model");
    Ok(bqm)
}
