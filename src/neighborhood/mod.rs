// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Sparse, key-ordered neighbor lists.
//!
//! A `Neighborhood` stores the interaction partners of one variable together
//! with the interaction biases, as two parallel vectors sorted ascending by
//! key. Lookups binary-search the key vector; insertion shifts the tail.
//!
//! # Examples
//!
//! ```
//! use sparse_bqm::Neighborhood;
//!
//! let mut neighborhood = Neighborhood::<f32>::new();
//! neighborhood.emplace_back(0, 0.5);
//! neighborhood.emplace_back(1, 1.5);
//! neighborhood.emplace_back(3, -3.0);
//!
//! assert_eq!(neighborhood.at(1).unwrap(), 1.5);
//! assert_eq!(neighborhood.get(2, 7.0), 7.0);
//!
//! *neighborhood.entry(2) -= 3.0;
//! let pairs: Vec<(usize, f32)> = neighborhood.iter().collect();
//! assert_eq!(pairs, vec![(0, 0.5), (1, 1.5), (2, -3.0), (3, -3.0)]);
//! ```

pub mod iter;

pub use iter::{Iter, IterMut};

use crate::bias::Bias;
use crate::error::{ModelError, Result};

/// Sorted sparse vector of `(neighbor, bias)` pairs.
///
/// Keys are kept strictly ascending. `emplace_back` is the only operation
/// that trusts the caller to maintain the order.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighborhood<B> {
    keys: Vec<usize>,
    biases: Vec<B>,
}

impl<B: Bias> Neighborhood<B> {
    /// Create an empty neighborhood.
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            biases: Vec::new(),
        }
    }

    /// Number of stored neighbors.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Check whether `key` is stored.
    pub fn contains(&self, key: usize) -> bool {
        self.keys.binary_search(&key).is_ok()
    }

    /// Get the bias stored for `key`.
    ///
    /// Fails with `NotFound` if the key is absent. Never inserts.
    pub fn at(&self, key: usize) -> Result<B> {
        match self.keys.binary_search(&key) {
            Ok(pos) => Ok(self.biases[pos]),
            Err(_) => Err(ModelError::NotFound { key }),
        }
    }

    /// Get the bias stored for `key`, or `default` if absent. Never inserts.
    pub fn get(&self, key: usize, default: B) -> B {
        match self.keys.binary_search(&key) {
            Ok(pos) => self.biases[pos],
            Err(_) => default,
        }
    }

    /// Mutable reference to the bias for `key`, inserting a zero bias at the
    /// sorted position when the key is absent.
    ///
    /// This is the read-or-create path as well as the in-place update path:
    ///
    /// ```
    /// # use sparse_bqm::Neighborhood;
    /// let mut n = Neighborhood::<f64>::new();
    /// *n.entry(4) += 2.0;
    /// *n.entry(4) += 2.0;
    /// assert_eq!(n.at(4).unwrap(), 4.0);
    /// assert_eq!(n.len(), 1);
    /// ```
    pub fn entry(&mut self, key: usize) -> &mut B {
        let pos = match self.keys.binary_search(&key) {
            Ok(pos) => pos,
            Err(pos) => {
                self.keys.insert(pos, key);
                self.biases.insert(pos, B::ZERO);
                pos
            }
        };
        &mut self.biases[pos]
    }

    /// Append a neighbor without searching.
    ///
    /// Used for bulk construction; `key` must be greater than every stored key.
    pub fn emplace_back(&mut self, key: usize, bias: B) {
        debug_assert!(
            self.keys.last().map_or(true, |&last| last < key),
            "emplace_back key {} out of order",
            key
        );
        self.keys.push(key);
        self.biases.push(bias);
    }

    /// Remove `key`, returning its bias if it was stored.
    pub fn remove(&mut self, key: usize) -> Option<B> {
        let pos = self.keys.binary_search(&key).ok()?;
        self.keys.remove(pos);
        Some(self.biases.remove(pos))
    }

    /// Drop every neighbor whose key is `>= bound`.
    pub fn truncate(&mut self, bound: usize) {
        let cut = self.keys.partition_point(|&key| key < bound);
        self.keys.truncate(cut);
        self.biases.truncate(cut);
    }

    /// Stored keys in ascending order.
    pub fn keys(&self) -> &[usize] {
        &self.keys
    }

    /// Iterate over `(key, bias)` pairs in ascending key order.
    pub fn iter(&self) -> Iter<'_, B> {
        Iter::new(&self.keys, &self.biases)
    }

    /// Iterate over `(key, &mut bias)` pairs in ascending key order.
    ///
    /// Keys cannot be changed through the cursor, so the order is preserved.
    pub fn iter_mut(&mut self) -> IterMut<'_, B> {
        IterMut::new(&self.keys, &mut self.biases)
    }

    /// Sum of all stored biases.
    pub fn total(&self) -> B {
        self.biases.iter().copied().sum()
    }
}

impl<B: Bias> Default for Neighborhood<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, B: Bias> IntoIterator for &'a Neighborhood<B> {
    type Item = (usize, B);
    type IntoIter = Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, B: Bias> IntoIterator for &'a mut Neighborhood<B> {
    type Item = (usize, &'a mut B);
    type IntoIter = IterMut<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
