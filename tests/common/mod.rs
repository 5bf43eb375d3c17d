// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use sparse_bqm::{BinaryQuadraticModel, Vartype};

/// Five variables, three interactions and an offset.
///
/// linear = [1, -3.25, 0, 3, -4.5], (0,3) = -1, (3,1) = 5.6, (0,1) = 1.6,
/// offset = -3.8.
pub fn five_variable_model(vartype: Vartype) -> BinaryQuadraticModel<f64> {
    let mut bqm = BinaryQuadraticModel::with_variables(5, vartype);
    *bqm.linear_mut(0).unwrap() = 1.0;
    *bqm.linear_mut(1).unwrap() = -3.25;
    *bqm.linear_mut(2).unwrap() = 0.0;
    *bqm.linear_mut(3).unwrap() = 3.0;
    *bqm.linear_mut(4).unwrap() = -4.5;
    bqm.set_quadratic(0, 3, -1.0).unwrap();
    bqm.set_quadratic(3, 1, 5.6).unwrap();
    bqm.set_quadratic(0, 1, 1.6).unwrap();
    *bqm.offset_mut() = -3.8;
    bqm
}

/// Every assignment of `n` variables in `vartype`, enumerated so that the
/// i-th sample of both vartypes correspond pointwise (0 ↔ -1, 1 ↔ +1).
pub fn all_samples(n: usize, vartype: Vartype) -> Vec<Vec<i8>> {
    let [low, high] = vartype.values();
    (0..1usize << n)
        .map(|i| {
            (0..n)
                .map(|v| if (i >> v) & 1 == 1 { high } else { low })
                .collect()
        })
        .collect()
}

/// Energy computed term by term from the public queries.
pub fn brute_force_energy(bqm: &BinaryQuadraticModel<f64>, sample: &[i8]) -> f64 {
    let n = bqm.num_variables();
    let mut energy = bqm.offset();
    for v in 0..n {
        energy += bqm.linear(v).unwrap() * f64::from(sample[v]);
    }
    for u in 0..n {
        for v in (u + 1)..n {
            energy += bqm.quadratic(u, v).unwrap() * f64::from(sample[u]) * f64::from(sample[v]);
        }
    }
    energy
}
