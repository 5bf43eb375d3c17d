// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Numeric trait for linear and quadratic biases.

use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// Trait for bias scalar types.
///
/// Implemented for `f32` and `f64`. The arithmetic bounds are the ones the
/// domain change and energy evaluation need; the conversions let integer
/// sample values and generator draws enter the bias type.
pub trait Bias:
    Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + Sum
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// Convert a sample value (0/1 or -1/+1).
    fn from_i8(v: i8) -> Self;

    /// Convert from f64, rounding to the nearest representable value.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_bias {
    ($t:ty) => {
        impl Bias for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline]
            fn from_i8(v: i8) -> Self {
                v as $t
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                v as $t
            }
        }
    };
}

impl_bias!(f32);
impl_bias!(f64);
