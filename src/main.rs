#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod cli;
mod fmt;
mod prelude;
mod quantity;
mod tables;
mod tariff;
mod usage;

use clap::{Parser, crate_version};
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Args, Command, fixed, tiered},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Fixed(args) => fixed(&args)?,
        Command::Tiered(args) => tiered(&args)?,
    }

    info!("done!");
    Ok(())
}
