use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{fmt::FormattedCurrency, tariff::Bill};

#[must_use]
pub fn build_breakdown_table(bill: &Bill, currency_symbol: &str) -> Table {
    let currency = |value: f64| FormattedCurrency { value, symbol: currency_symbol }.to_string();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Tier", "Usage", "Rate", "Cost"]);
    for entry in &bill.breakdown {
        table.add_row(vec![
            Cell::new(entry.tier),
            Cell::new(entry.kwh).set_alignment(CellAlignment::Right),
            Cell::new(format!("{}/kWh", currency(entry.rate.0)))
                .set_alignment(CellAlignment::Right),
            Cell::new(currency(entry.cost().0)).set_alignment(CellAlignment::Right),
        ]);
    }
    for (label, value, attribute, color) in [
        ("Energy cost", bill.energy_cost, Attribute::Dim, Color::Reset),
        ("Fixed fee", bill.fixed_fee, Attribute::Dim, Color::Reset),
        ("Total bill", bill.total, Attribute::Bold, Color::Green),
    ] {
        table.add_row(vec![
            Cell::new(label).add_attribute(attribute),
            Cell::new(""),
            Cell::new(""),
            Cell::new(currency(value.0))
                .set_alignment(CellAlignment::Right)
                .add_attribute(attribute)
                .fg(color),
        ]);
    }
    table
}
