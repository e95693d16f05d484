use clap::{Parser, ValueEnum};

use crate::{
    fmt::format_breakdown,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours},
    tables::build_breakdown_table,
    tariff::{calculate_tiered_bill, parse_tiers},
};

#[derive(Parser)]
pub struct TieredArgs {
    /// Total consumption in kilowatt-hours.
    #[clap(long, env = "TARIFF_CONSUMPTION", default_value = "350")]
    pub consumption: KilowattHours,

    /// Tiers as JSON (`[[100, 0.2], [null, 0.3]]`) or shorthand (`100@0.2,*@0.3`).
    #[clap(long, env = "TARIFF_TIERS", default_value = "100@0.20,200@0.30,*@0.40")]
    pub tiers: String,

    /// Fixed fee per billing period.
    #[clap(long = "fixed-fee", env = "TARIFF_FIXED_FEE", default_value = "10")]
    pub fixed_fee: Cost,

    #[clap(long, env = "TARIFF_CURRENCY", default_value = "$")]
    pub currency: String,

    #[clap(long, env = "TARIFF_FORMAT", value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Copy, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Plain-text breakdown.
    Text,

    /// Terminal table.
    Table,

    /// The bill as JSON.
    Json,
}

#[instrument(skip_all)]
pub fn tiered(args: &TieredArgs) -> Result {
    let tiers = parse_tiers(&args.tiers).context("failed to parse the tiers")?;
    info!(n_tiers = tiers.len(), consumption = %args.consumption, "calculating…");
    let bill = calculate_tiered_bill(args.consumption, &tiers, args.fixed_fee)?;
    debug!(n_touched = bill.breakdown.len(), billed = %bill.consumption(), "split");
    match args.format {
        OutputFormat::Text => println!("{}", format_breakdown(&bill, &args.currency)),
        OutputFormat::Table => println!("{}", build_breakdown_table(&bill, &args.currency)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bill)?),
    }
    Ok(())
}
