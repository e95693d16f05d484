use crate::quantity::{energy::KilowattHours, rate::KilowattHourRate};

/// Capacity of a single tier.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BlockSize {
    Finite(KilowattHours),

    /// Absorbs whatever consumption is left, normally the last tier.
    Unlimited,
}

impl BlockSize {
    /// Finite blocks must be strictly positive, `NaN` is not.
    pub fn is_valid(self) -> bool {
        match self {
            Self::Finite(size) => size.0 > 0.0,
            Self::Unlimited => true,
        }
    }
}

impl From<Option<f64>> for BlockSize {
    fn from(size: Option<f64>) -> Self {
        size.map_or(Self::Unlimited, |size| Self::Finite(KilowattHours::from(size)))
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tier {
    pub block: BlockSize,
    pub rate: KilowattHourRate,
}

impl Tier {
    pub fn finite(block_kwh: f64, rate: f64) -> Self {
        Self {
            block: BlockSize::Finite(KilowattHours::from(block_kwh)),
            rate: KilowattHourRate::from(rate),
        }
    }

    pub fn unlimited(rate: f64) -> Self {
        Self { block: BlockSize::Unlimited, rate: KilowattHourRate::from(rate) }
    }
}

impl From<(Option<f64>, f64)> for Tier {
    fn from((block_kwh, rate): (Option<f64>, f64)) -> Self {
        Self { block: BlockSize::from(block_kwh), rate: KilowattHourRate::from(rate) }
    }
}
