use std::fmt::{Debug, Display, Formatter};

use itertools::Itertools;

use crate::{
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    tariff::Bill,
};

/// Amount of money with the currency symbol, thousands separators, and two decimals.
pub struct FormattedCurrency<'a> {
    pub value: f64,
    pub symbol: &'a str,
}

impl Debug for FormattedCurrency<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedCurrency<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.value.is_finite() {
            return write!(f, "{}{}", self.symbol, self.value);
        }
        let formatted = format!("{:.2}", self.value);
        let (sign, unsigned) = formatted
            .strip_prefix('-')
            .map_or(("", formatted.as_str()), |unsigned| ("-", unsigned));
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, "00"));
        let digits = integer.chars().collect_vec();
        let grouped =
            digits.rchunks(3).rev().map(|chunk| chunk.iter().collect::<String>()).join(",");
        write!(f, "{}{sign}{grouped}.{fraction}", self.symbol)
    }
}

pub fn format_currency(value: f64, symbol: &str) -> String {
    FormattedCurrency { value, symbol }.to_string()
}

/// Human-readable breakdown of the bill, one line per touched tier followed by the totals.
pub fn format_breakdown(bill: &Bill, currency_symbol: &str) -> String {
    let currency = |value: f64| FormattedCurrency { value, symbol: currency_symbol };
    let mut lines = vec!["Breakdown:".to_string()];
    for entry in &bill.breakdown {
        lines.push(format!(
            "  Tier {}: {:.3} kWh × {} = {}",
            entry.tier,
            entry.kwh.0,
            currency(entry.rate.0),
            currency(entry.cost().0),
        ));
    }
    lines.push(String::new());
    lines.push(format!("Energy cost = {}", currency(bill.energy_cost.0)));
    lines.push(format!("Fixed fee   = {}", currency(bill.fixed_fee.0)));
    lines.push(format!("Total bill  = {}", currency(bill.total.0)));
    lines.join("\n")
}

pub fn format_fixed_bill(
    total_usage: KilowattHours,
    rate: KilowattHourRate,
    fixed_fee: Cost,
    bill: Cost,
    currency_symbol: &str,
) -> String {
    let currency = |value: f64| FormattedCurrency { value, symbol: currency_symbol };
    [
        "===== Fixed-Rate Bill =====".to_string(),
        format!("Total electricity consumption: {total_usage}"),
        format!("Rate: {}/kWh", currency(rate.0)),
        format!("Fixed fee: {}", currency(fixed_fee.0)),
        format!("Bill amount: {}", currency(bill.0)),
    ]
    .join("\n")
}
