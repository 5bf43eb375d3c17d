// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact reparameterization between the BINARY and SPIN domains.
//!
//! With `x = (s + 1) / 2` (equivalently `s = 2x - 1`) the two objectives
//!
//! ```text
//! E_bin(x)  = c  + Σ l_v x_v  + Σ_{u<v} q_uv x_u x_v
//! E_spin(s) = c' + Σ l'_v s_v + Σ_{u<v} q'_uv s_u s_v
//! ```
//!
//! agree on every pair of corresponding assignments when
//!
//! | | BINARY → SPIN | SPIN → BINARY |
//! |---|---|---|
//! | `q'_uv` | `q_uv / 4` | `4 q_uv` |
//! | `l'_v` | `l_v / 2 + Σ_u q_uv / 4` | `2 l_v - 2 Σ_u q_uv` |
//! | `c'` | `c + Σ l_v / 2 + Σ_{u<v} q_uv / 4` | `c - Σ l_v + Σ_{u<v} q_uv` |

use tracing::debug;

use super::BinaryQuadraticModel;
use crate::bias::Bias;
use crate::vartype::Vartype;

impl<B: Bias> BinaryQuadraticModel<B> {
    /// Change the model's domain in place, preserving every energy.
    ///
    /// Does nothing when `target` is already the model's domain.
    pub fn change_vartype(&mut self, target: Vartype) {
        if target == self.vartype {
            return;
        }
        match target {
            Vartype::Spin => self.binary_to_spin(),
            Vartype::Binary => self.spin_to_binary(),
        }
        self.vartype = target;
        debug!(
            %target,
            num_variables = self.num_variables(),
            num_interactions = self.num_interactions(),
            "changed vartype"
        );
    }

    /// Return a copy of the model expressed in `target`.
    pub fn to_vartype(&self, target: Vartype) -> Self {
        let mut bqm = self.clone();
        bqm.change_vartype(target);
        bqm
    }

    fn binary_to_spin(&mut self) {
        let two = B::from_i8(2);
        let four = B::from_i8(4);

        let mut linear_total = B::ZERO;
        let mut quadratic_total = B::ZERO;

        for (v, (linear, neighborhood)) in self.linear.iter_mut().zip(&mut self.adj).enumerate() {
            let mut incident = B::ZERO;
            for (u, bias) in neighborhood.iter_mut() {
                incident += *bias;
                if u > v {
                    quadratic_total += *bias;
                }
                *bias = *bias / four;
            }
            linear_total += *linear;
            *linear = *linear / two + incident / four;
        }

        self.offset += linear_total / two + quadratic_total / four;
    }

    fn spin_to_binary(&mut self) {
        let two = B::from_i8(2);
        let four = B::from_i8(4);

        let mut linear_total = B::ZERO;
        let mut quadratic_total = B::ZERO;

        for (v, (linear, neighborhood)) in self.linear.iter_mut().zip(&mut self.adj).enumerate() {
            let mut incident = B::ZERO;
            for (u, bias) in neighborhood.iter_mut() {
                incident += *bias;
                if u > v {
                    quadratic_total += *bias;
                }
                *bias = four * *bias;
            }
            linear_total += *linear;
            *linear = two * *linear - two * incident;
        }

        self.offset += quadratic_total - linear_total;
    }
}
