// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Energy evaluation.
//!
//! Samples are slices of `i8`, one value per variable. Every sample is
//! validated before it is evaluated: a length mismatch fails with
//! `SampleLength`, and a value outside the model's domain fails with
//! `ValueOutOfDomain`. Evaluation is O(num_variables + num_interactions).

use super::BinaryQuadraticModel;
use crate::bias::Bias;
use crate::error::{ModelError, Result};

impl<B: Bias> BinaryQuadraticModel<B> {
    /// Check that `sample` is a full assignment drawn from the model's domain.
    fn check_sample(&self, sample: &[i8]) -> Result<()> {
        if sample.len() != self.num_variables() {
            return Err(ModelError::SampleLength {
                expected: self.num_variables(),
                actual: sample.len(),
            });
        }
        if let Some((index, &value)) = sample
            .iter()
            .enumerate()
            .find(|&(_, &value)| !self.vartype.contains(value))
        {
            return Err(ModelError::ValueOutOfDomain {
                index,
                value,
                vartype: self.vartype,
            });
        }
        Ok(())
    }

    /// Energy of the model at `sample`.
    pub fn energy(&self, sample: &[i8]) -> Result<B> {
        self.check_sample(sample)?;

        let mut energy = self.offset;
        for (u, (&bias, neighborhood)) in self.linear.iter().zip(&self.adj).enumerate() {
            let x_u = B::from_i8(sample[u]);
            energy += bias * x_u;

            // Each interaction is counted once, from its lower endpoint.
            let start = neighborhood.keys().partition_point(|&v| v < u);
            for (v, q) in neighborhood.iter().skip(start) {
                energy += q * x_u * B::from_i8(sample[v]);
            }
        }
        Ok(energy)
    }

    /// Energies of several samples.
    ///
    /// Fails on the first invalid sample.
    pub fn energies<S: AsRef<[i8]>>(&self, samples: &[S]) -> Result<Vec<B>> {
        samples
            .iter()
            .map(|sample| self.energy(sample.as_ref()))
            .collect()
    }
}
