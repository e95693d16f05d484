mod fixed;
mod tiered;

use clap::{Parser, Subcommand};

pub use self::{
    fixed::{FixedArgs, fixed},
    tiered::{TieredArgs, tiered},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Flat tariff: total usage × rate + fixed fee.
    #[clap(name = "fixed")]
    Fixed(Box<FixedArgs>),

    /// Progressive block tariff with a per-tier breakdown.
    #[clap(name = "tiered")]
    Tiered(Box<TieredArgs>),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_command() {
        Args::command().debug_assert();
    }
}
