// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ordered cursors over a neighborhood.

use std::iter::FusedIterator;
use std::slice;

/// Read-only iterator over `(key, bias)` pairs, ascending by key.
#[derive(Debug, Clone)]
pub struct Iter<'a, B> {
    keys: slice::Iter<'a, usize>,
    biases: slice::Iter<'a, B>,
}

impl<'a, B> Iter<'a, B> {
    pub(crate) fn new(keys: &'a [usize], biases: &'a [B]) -> Self {
        debug_assert_eq!(keys.len(), biases.len());
        Self {
            keys: keys.iter(),
            biases: biases.iter(),
        }
    }
}

impl<B: Copy> Iterator for Iter<'_, B> {
    type Item = (usize, B);

    fn next(&mut self) -> Option<Self::Item> {
        Some((*self.keys.next()?, *self.biases.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<B: Copy> DoubleEndedIterator for Iter<'_, B> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some((*self.keys.next_back()?, *self.biases.next_back()?))
    }
}

impl<B: Copy> ExactSizeIterator for Iter<'_, B> {}

impl<B: Copy> FusedIterator for Iter<'_, B> {}

/// Iterator over `(key, &mut bias)` pairs, ascending by key.
#[derive(Debug)]
pub struct IterMut<'a, B> {
    keys: slice::Iter<'a, usize>,
    biases: slice::IterMut<'a, B>,
}

impl<'a, B> IterMut<'a, B> {
    pub(crate) fn new(keys: &'a [usize], biases: &'a mut [B]) -> Self {
        debug_assert_eq!(keys.len(), biases.len());
        Self {
            keys: keys.iter(),
            biases: biases.iter_mut(),
        }
    }
}

impl<'a, B> Iterator for IterMut<'a, B> {
    type Item = (usize, &'a mut B);

    fn next(&mut self) -> Option<Self::Item> {
        Some((*self.keys.next()?, self.biases.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<B> ExactSizeIterator for IterMut<'_, B> {}

impl<B> FusedIterator for IterMut<'_, B> {}
