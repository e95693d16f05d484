use std::path::PathBuf;

use clap::Parser;

use crate::{
    fmt::format_fixed_bill,
    prelude::*,
    quantity::{cost::Cost, energy::KilowattHours, rate::KilowattHourRate},
    tariff::fixed_rate_bill,
    usage::total_usage_from_path,
};

#[derive(Parser)]
pub struct FixedArgs {
    /// CSV meter export with a `kWh` column.
    #[clap(
        long = "usage-file",
        env = "TARIFF_USAGE_FILE",
        default_value = "sample_usage_data_month.csv"
    )]
    pub usage_file: PathBuf,

    /// Total usage in kilowatt-hours, overrides the usage file.
    #[clap(long, env = "TARIFF_USAGE", conflicts_with = "usage_file")]
    pub usage: Option<KilowattHours>,

    /// Energy rate per kilowatt-hour.
    #[clap(long, env = "TARIFF_RATE", default_value = "0.25")]
    pub rate: KilowattHourRate,

    /// Fixed fee per billing period.
    #[clap(long = "fixed-fee", env = "TARIFF_FIXED_FEE", default_value = "10")]
    pub fixed_fee: Cost,

    #[clap(long, env = "TARIFF_CURRENCY", default_value = "$")]
    pub currency: String,
}

#[instrument(skip_all)]
pub fn fixed(args: &FixedArgs) -> Result {
    let total_usage = match args.usage {
        Some(usage) => usage,
        None => total_usage_from_path(&args.usage_file)?,
    };
    info!(%total_usage, rate = %args.rate, fixed_fee = %args.fixed_fee, "calculating…");
    let bill = fixed_rate_bill(total_usage, args.rate, args.fixed_fee)?;
    println!("{}", format_fixed_bill(total_usage, args.rate, args.fixed_fee, bill, &args.currency));
    Ok(())
}
