use crate::{
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    tariff::{TariffError, ValidationError},
};

/// Flat tariff: `total_usage × rate + fixed_fee`, not rounded.
///
/// A `NaN` input is reported as a [`TariffError::TypeMismatch`] rather than a validation error.
pub fn fixed_rate_bill(
    total_usage: KilowattHours,
    rate: KilowattHourRate,
    fixed_fee: Cost,
) -> Result<Cost, TariffError> {
    for (field, value) in
        [("total_usage", total_usage.0), ("rate", rate.0), ("fixed_fee", fixed_fee.0)]
    {
        if value.is_nan() {
            return Err(TariffError::TypeMismatch { field, value: value.to_string() });
        }
    }
    if !total_usage.is_non_negative() || !rate.is_non_negative() || !fixed_fee.is_non_negative() {
        return Err(ValidationError::NegativeInputs.into());
    }
    Ok(total_usage * rate + fixed_fee)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_fixed_rate_bill() {
        let bill = fixed_rate_bill(
            KilowattHours::from(300.0),
            KilowattHourRate::from(0.25),
            Cost::from(10.0),
        )
        .unwrap();
        assert_abs_diff_eq!(bill.0, 85.0);
    }

    #[test]
    fn test_zero_usage_costs_fixed_fee() {
        let bill =
            fixed_rate_bill(KilowattHours::ZERO, KilowattHourRate::from(0.25), Cost::from(10.0))
                .unwrap();
        assert_abs_diff_eq!(bill.0, 10.0);
    }

    #[test]
    fn test_negative_input() {
        for (usage, rate, fee) in [(-1.0, 0.25, 10.0), (300.0, -0.25, 10.0), (300.0, 0.25, -10.0)] {
            let error = fixed_rate_bill(
                KilowattHours::from(usage),
                KilowattHourRate::from(rate),
                Cost::from(fee),
            )
            .unwrap_err();
            assert!(matches!(error, TariffError::Validation(ValidationError::NegativeInputs)));
            assert_eq!(error.to_string(), "inputs must be non-negative");
        }
    }

    #[test]
    fn test_nan_is_type_mismatch() {
        let error = fixed_rate_bill(
            KilowattHours::from(300.0),
            KilowattHourRate::from(f64::NAN),
            Cost::from(-10.0),
        )
        .unwrap_err();
        assert!(matches!(error, TariffError::TypeMismatch { field: "rate", .. }));
    }
}
