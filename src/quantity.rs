pub mod cost;
pub mod energy;
pub mod rate;

use std::iter::Sum;

use serde::{Deserialize, Serialize};

/// Dimensioned `f64` wrapper, the dimensions being the exponents of energy and currency.
#[derive(
    Clone,
    Copy,
    Deserialize,
    PartialEq,
    PartialOrd,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
)]
#[serde(transparent)]
pub struct Quantity<const ENERGY: isize, const COST: isize>(pub f64);

impl<const ENERGY: isize, const COST: isize> Quantity<ENERGY, COST> {
    pub const ZERO: Self = Self(0.0);

    pub fn min(mut self, rhs: Self) -> Self {
        if rhs < self {
            self = rhs;
        }
        self
    }

    /// `false` for `NaN`.
    pub fn is_non_negative(self) -> bool {
        self.0 >= 0.0
    }
}

/// Starts from `+0.0`, unlike `f64` summation which yields `-0.0` for an empty iterator.
impl<const ENERGY: isize, const COST: isize> Sum for Quantity<ENERGY, COST> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, item| total + item)
    }
}
