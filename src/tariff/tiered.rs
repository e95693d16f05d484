use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::{
    prelude::*,
    quantity::{Quantity, cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    tariff::{BlockSize, TariffError, Tier, ValidationError},
};

/// Leftover consumption below this is floating-point noise, not an overflow.
const OVERFLOW_TOLERANCE: KilowattHours = Quantity(1e-9);

/// Consumption billed within a single tier.
#[derive(Clone, Debug, PartialEq, Builder, Serialize, Deserialize)]
pub struct TierBreakdown {
    /// 1-based tier index.
    pub tier: usize,

    pub kwh: KilowattHours,

    pub rate: KilowattHourRate,

    /// May be missing in hand-built or deserialized entries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Cost>,
}

impl TierBreakdown {
    /// Explicit cost, or `kwh × rate` when there is none.
    pub fn cost(&self) -> Cost {
        self.cost.unwrap_or_else(|| self.kwh * self.rate)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Only the tiers actually touched, in order.
    pub breakdown: Vec<TierBreakdown>,

    pub energy_cost: Cost,
    pub fixed_fee: Cost,
    pub total: Cost,
}

impl Bill {
    /// Total consumption split across the breakdown.
    pub fn consumption(&self) -> KilowattHours {
        self.breakdown.iter().map(|entry| entry.kwh).sum()
    }
}

/// Progressive tiered bill: consume the tiers in order, each one up to its block size.
///
/// All the inputs are validated first. Completeness of the tiers is checked only after the walk,
/// when the remaining consumption is known.
#[instrument(skip_all, fields(consumption = %consumption, n_tiers = tiers.len()))]
pub fn calculate_tiered_bill(
    consumption: KilowattHours,
    tiers: &[Tier],
    fixed_fee: Cost,
) -> Result<Bill, TariffError> {
    validate(consumption, tiers, fixed_fee)?;

    let mut remaining = consumption;
    let mut breakdown = Vec::new();

    for (index, tier) in tiers.iter().enumerate() {
        if remaining <= KilowattHours::ZERO {
            break;
        }
        let block = match tier.block {
            BlockSize::Unlimited => remaining,
            BlockSize::Finite(size) => remaining.min(size),
        };
        let entry = TierBreakdown::builder()
            .tier(index + 1)
            .kwh(block)
            .rate(tier.rate)
            .cost(block * tier.rate)
            .build();
        trace!(tier = entry.tier, kwh = %block, rate = %tier.rate, "consumed");
        breakdown.push(entry);
        remaining -= block;
    }

    if remaining > OVERFLOW_TOLERANCE {
        return Err(TariffError::Overflow { excess: remaining.0 });
    }

    let energy_cost: Cost = breakdown.iter().map(TierBreakdown::cost).sum();
    let total = energy_cost + fixed_fee;
    debug!(%energy_cost, %total, n_touched = breakdown.len(), "calculated");

    Ok(Bill { breakdown, energy_cost, fixed_fee, total })
}

fn validate(
    consumption: KilowattHours,
    tiers: &[Tier],
    fixed_fee: Cost,
) -> Result<(), ValidationError> {
    if !consumption.is_non_negative() {
        return Err(ValidationError::NegativeConsumption);
    }
    if !fixed_fee.is_non_negative() {
        return Err(ValidationError::NegativeFixedFee);
    }
    if tiers.is_empty() {
        return Err(ValidationError::EmptyTiers);
    }
    for (tier, Tier { block, rate }) in (1..).zip(tiers) {
        if !rate.is_non_negative() {
            return Err(ValidationError::NegativeRate { tier });
        }
        if !block.is_valid() {
            return Err(ValidationError::NonPositiveBlock { tier });
        }
    }
    Ok(())
}
