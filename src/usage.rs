//! Meter exports: CSV with a `kWh` column.

use std::{fs::File, io::Read, path::Path};

use csv::{ReaderBuilder, Trim};

use crate::{prelude::*, quantity::energy::KilowattHours, tariff::TariffError};

const USAGE_COLUMN: &str = "kWh";

/// Sum the `kWh` column. Empty cells are missing readings and get skipped.
pub fn total_usage(reader: impl Read) -> Result<KilowattHours> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let column = reader
        .headers()?
        .iter()
        .position(|header| header == USAGE_COLUMN)
        .with_context(|| format!("there is no `{USAGE_COLUMN}` column"))?;

    let mut total = KilowattHours::ZERO;
    let mut n_readings = 0_usize;
    for record in reader.records() {
        let record = record?;
        let Some(cell) = record.get(column).filter(|cell| !cell.is_empty()) else {
            continue;
        };
        let reading: f64 = cell.parse().map_err(|_| TariffError::TypeMismatch {
            field: USAGE_COLUMN,
            value: cell.to_string(),
        })?;
        total += KilowattHours::from(reading);
        n_readings += 1;
    }
    debug!(n_readings, %total, "summed the usage");
    Ok(total)
}

#[instrument(skip_all, fields(path = %path.display()))]
pub fn total_usage_from_path(path: &Path) -> Result<KilowattHours> {
    let file = File::open(path).with_context(|| format!("failed to open `{}`", path.display()))?;
    total_usage(file).with_context(|| format!("failed to read the usage from `{}`", path.display()))
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_total_usage() {
        let csv = "Hour,kWh\n2025-01-01 00:00,1.5\n2025-01-01 01:00, 2.25\n2025-01-01 02:00,\n";
        assert_abs_diff_eq!(total_usage(csv.as_bytes()).unwrap().0, 3.75);
    }

    #[test]
    fn test_header_only() {
        assert_abs_diff_eq!(total_usage("kWh\n".as_bytes()).unwrap().0, 0.0);
    }

    #[test]
    fn test_missing_column() {
        let error = total_usage("Hour,Wh\n00:00,100\n".as_bytes()).unwrap_err();
        assert_eq!(error.to_string(), "there is no `kWh` column");
    }

    #[test]
    fn test_non_numeric_reading() {
        let error = total_usage("kWh\n1.0\nlots\n".as_bytes()).unwrap_err();
        assert!(matches!(
            error.downcast_ref::<TariffError>(),
            Some(TariffError::TypeMismatch { field: "kWh", value }) if value == "lots",
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(total_usage_from_path(Path::new("definitely/not/there.csv")).is_err());
    }
}
