//! Bill calculators: the flat fixed-rate one and the progressive tiered (block) one.

mod error;
mod fixed;
mod parse;
mod tier;
mod tiered;

pub use self::{
    error::{ParseError, TariffError, ValidationError},
    fixed::fixed_rate_bill,
    parse::parse_tiers,
    tier::{BlockSize, Tier},
    tiered::{Bill, TierBreakdown, calculate_tiered_bill},
};
