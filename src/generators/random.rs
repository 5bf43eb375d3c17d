// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Models with random biases.
//!
//! All generators draw linear biases first (by variable), then quadratic
//! biases (by edge), then the offset, so a fixed seed always reproduces the
//! same model.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::Graph;
use crate::bias::Bias;
use crate::error::{ModelError, Result};
use crate::model::BinaryQuadraticModel;
use crate::vartype::Vartype;

/// Bias range and seed for the random generators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomConfig {
    /// Lowest bias value.
    pub low: f64,
    /// Highest bias value (exclusive for `uniform`, inclusive for `randint`).
    pub high: f64,
    /// Seed for a reproducible model; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl RandomConfig {
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            low,
            high,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(&self) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() {
            return Err(ModelError::invalid("bias range must be finite"));
        }
        if self.low > self.high {
            return Err(ModelError::invalid(format!(
                "low ({}) must not exceed high ({})",
                self.low, self.high
            )));
        }
        if !(self.high - self.low).is_finite() {
            return Err(ModelError::invalid(format!(
                "bias range [{}, {}] is too wide to sample",
                self.low, self.high
            )));
        }
        Ok(())
    }

    fn rng(&self) -> StdRng {
        make_rng(self.seed)
    }
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Fill a model on `graph` with biases produced by `draw`.
fn build<B, F>(graph: &Graph, vartype: Vartype, mut draw: F) -> Result<BinaryQuadraticModel<B>>
where
    B: Bias,
    F: FnMut() -> B,
{
    let edges = graph.edges()?;
    let mut bqm = BinaryQuadraticModel::with_variables(graph.num_variables(), vartype);
    for v in 0..bqm.num_variables() {
        bqm.set_linear(v, draw())?;
    }
    for (u, v) in edges {
        bqm.set_quadratic(u, v, draw())?;
    }
    bqm.set_offset(draw());
    Ok(bqm)
}

/// Model with every bias and the offset drawn uniformly from `[low, high)`.
///
/// # Examples
///
/// ```
/// use sparse_bqm::generators::{uniform, Graph, RandomConfig};
/// use sparse_bqm::Vartype;
///
/// let config = RandomConfig::new(-1.0, 1.0).with_seed(7);
/// let bqm = uniform::<f64>(&Graph::Complete(4), Vartype::Spin, &config).unwrap();
/// assert_eq!(bqm.num_interactions(), 6);
/// ```
pub fn uniform<B: Bias>(
    graph: &Graph,
    vartype: Vartype,
    config: &RandomConfig,
) -> Result<BinaryQuadraticModel<B>> {
    config.validate()?;
    let mut rng = config.rng();
    let (low, high) = (config.low, config.high);

    let bqm = build(graph, vartype, || {
        if high > low {
            B::from_f64(rng.random_range(low..high))
        } else {
            B::from_f64(low)
        }
    })?;
    debug!(
        num_variables = bqm.num_variables(),
        num_interactions = bqm.num_interactions(),
        "generated uniform model"
    );
    Ok(bqm)
}

/// Model with every bias and the offset drawn uniformly from the integers
/// in `[low, high]`.
pub fn randint<B: Bias>(
    graph: &Graph,
    vartype: Vartype,
    config: &RandomConfig,
) -> Result<BinaryQuadraticModel<B>> {
    config.validate()?;
    let low = config.low.ceil() as i64;
    let high = config.high.floor() as i64;
    if low > high {
        return Err(ModelError::invalid(format!(
            "no integers between {} and {}",
            config.low, config.high
        )));
    }
    let mut rng = config.rng();

    let bqm = build(graph, vartype, || {
        B::from_f64(rng.random_range(low..=high) as f64)
    })?;
    debug!(
        num_variables = bqm.num_variables(),
        num_interactions = bqm.num_interactions(),
        "generated randint model"
    );
    Ok(bqm)
}

/// SPIN model with interactions drawn uniformly from `{-r, ..., -1, 1, ..., r}`.
///
/// Linear biases and the offset are zero. Fails with `InvalidArgument` when
/// `r < 1`.
pub fn ran_r<B: Bias>(r: i32, graph: &Graph, seed: Option<u64>) -> Result<BinaryQuadraticModel<B>> {
    if r < 1 {
        return Err(ModelError::invalid(format!("r must be at least 1, got {}", r)));
    }
    let edges = graph.edges()?;
    let mut rng = make_rng(seed);

    let mut bqm = BinaryQuadraticModel::with_variables(graph.num_variables(), Vartype::Spin);
    for (u, v) in edges {
        let magnitude = rng.random_range(1..=r);
        let value = if rng.random_bool(0.5) {
            magnitude
        } else {
            -magnitude
        };
        bqm.set_quadratic(u, v, B::from_f64(value as f64))?;
    }
    debug!(
        r,
        num_variables = bqm.num_variables(),
        num_interactions = bqm.num_interactions(),
        "generated ran-r model"
    );
    Ok(bqm)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_in_range() {
        let config = RandomConfig::new(-2.0, 3.0).with_seed(11);
        let bqm = uniform::<f64>(&Graph::Complete(6), Vartype::Binary, &config).unwrap();

        assert_eq!(bqm.num_variables(), 6);
        assert_eq!(bqm.num_interactions(), 15);
        for &bias in bqm.linear_biases() {
            assert!((-2.0..3.0).contains(&bias));
        }
        for (_, _, bias) in bqm.interactions() {
            assert!((-2.0..3.0).contains(&bias));
        }
        assert!((-2.0..3.0).contains(&bqm.offset()));
    }

    #[test]
    fn test_uniform_seed_reproducible() {
        let config = RandomConfig::default().with_seed(5);
        let a = uniform::<f64>(&Graph::Complete(5), Vartype::Spin, &config).unwrap();
        let b = uniform::<f64>(&Graph::Complete(5), Vartype::Spin, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_uniform_degenerate_range() {
        let config = RandomConfig::new(0.5, 0.5).with_seed(1);
        let bqm = uniform::<f32>(&Graph::Complete(3), Vartype::Spin, &config).unwrap();
        assert!(bqm.linear_biases().iter().all(|&b| b == 0.5));
        assert_eq!(bqm.offset(), 0.5);
    }

    #[test]
    fn test_uniform_rejects_inverted_range() {
        let config = RandomConfig::new(1.0, -1.0);
        let err = uniform::<f64>(&Graph::Complete(2), Vartype::Spin, &config).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument(_)));
    }

    #[test]
    fn test_uniform_rejects_overflowing_width() {
        let config = RandomConfig::new(-f64::MAX, f64::MAX).with_seed(1);
        let err = uniform::<f64>(&Graph::Complete(2), Vartype::Spin, &config).unwrap_err();
        assert!(matches!(err, ModelError::InvalidArgument(_)));

        // Finite endpoints with a finite width are still accepted
        let config = RandomConfig::new(-f64::MAX / 4.0, f64::MAX / 4.0).with_seed(1);
        assert!(uniform::<f64>(&Graph::Complete(2), Vartype::Spin, &config).is_ok());
    }

    #[test]
    fn test_randint_integral() {
        let config = RandomConfig::new(-3.0, 3.0).with_seed(3);
        let bqm = randint::<f64>(&Graph::Complete(5), Vartype::Binary, &config).unwrap();
        for &bias in bqm.linear_biases() {
            assert_eq!(bias.fract(), 0.0);
            assert!((-3.0..=3.0).contains(&bias));
        }
        for (_, _, bias) in bqm.interactions() {
            assert_eq!(bias.fract(), 0.0);
        }
    }

    #[test]
    fn test_randint_empty_integer_range() {
        let config = RandomConfig::new(0.2, 0.8);
        assert!(randint::<f64>(&Graph::Complete(2), Vartype::Spin, &config).is_err());
    }

    #[test]
    fn test_ran_r_values() {
        let graph = Graph::Edges {
            num_variables: 4,
            edges: vec![(0, 1), (1, 2), (2, 3), (3, 0)],
        };
        let bqm = ran_r::<f64>(2, &graph, Some(42)).unwrap();

        assert_eq!(bqm.vartype(), Vartype::Spin);
        assert_eq!(bqm.num_interactions(), 4);
        assert_eq!(bqm.offset(), 0.0);
        assert!(bqm.linear_biases().iter().all(|&b| b == 0.0));
        for (_, _, bias) in bqm.interactions() {
            assert!([-2.0, -1.0, 1.0, 2.0].contains(&bias));
        }
    }

    #[test]
    fn test_ran_r_rejects_zero() {
        assert!(ran_r::<f64>(0, &Graph::Complete(3), None).is_err());
    }
}
