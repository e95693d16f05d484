use itertools::Itertools;
use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::{
    quantity::{energy::KilowattHours, rate::KilowattHourRate},
    tariff::{BlockSize, ParseError, TariffError, Tier},
};

/// Shorthand block sizes standing for an unlimited block, matched literally.
const UNLIMITED_TOKENS: [&str; 3] = ["*", "None", "null"];

/// `[size_or_null, rate]`, numbers may also come as numeric strings.
#[serde_as]
#[derive(Deserialize)]
struct RawTier(
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>", no_default)] Option<f64>,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")] f64,
);

/// Parse tiers from either a JSON array (`[[100, 0.2], [null, 0.3]]`)
/// or the shorthand (`100@0.2, *@0.3`).
pub fn parse_tiers(text: &str) -> Result<Vec<Tier>, TariffError> {
    if text.is_empty() {
        return Err(ParseError::EmptyText.into());
    }
    let text = text.trim();
    if text.starts_with('[') {
        Ok(parse_json(text)?)
    } else {
        Ok(parse_shorthand(text)?)
    }
}

fn parse_json(text: &str) -> Result<Vec<Tier>, ParseError> {
    let raw_tiers: Vec<RawTier> = serde_json::from_str(text)?;
    Ok(raw_tiers.into_iter().map(|RawTier(size, rate)| Tier::from((size, rate))).collect())
}

fn parse_shorthand(text: &str) -> Result<Vec<Tier>, ParseError> {
    text.split(',').map(parse_shorthand_entry).collect()
}

fn parse_shorthand_entry(entry: &str) -> Result<Tier, ParseError> {
    let entry = entry.trim();
    let (size, rate) = entry
        .split('@')
        .map(str::trim)
        .collect_tuple()
        .ok_or_else(|| ParseError::MissingSeparator { entry: entry.to_string() })?;
    let block = if UNLIMITED_TOKENS.contains(&size) {
        BlockSize::Unlimited
    } else {
        BlockSize::Finite(KilowattHours::from(parse_number(size)?))
    };
    Ok(Tier { block, rate: KilowattHourRate::from(parse_number(rate)?) })
}

fn parse_number(text: &str) -> Result<f64, ParseError> {
    text.parse().map_err(|_| ParseError::InvalidNumber { value: text.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand() {
        assert_eq!(
            parse_tiers("100@0.2, *@0.3").unwrap(),
            [Tier::finite(100.0, 0.2), Tier::unlimited(0.3)],
        );
    }

    #[test]
    fn test_json() {
        assert_eq!(
            parse_tiers("[[100, 0.2], [null, 0.3]]").unwrap(),
            [Tier::finite(100.0, 0.2), Tier::unlimited(0.3)],
        );
    }

    #[test]
    fn test_json_matches_shorthand() {
        let json = parse_tiers(" [[100, 0.20], [200, 0.30], [null, 0.40]] ").unwrap();
        let shorthand = parse_tiers("100@0.20,200 @ 0.30,  None@0.40").unwrap();
        assert_eq!(json, shorthand);
        assert_eq!(json.len(), 3);
    }

    #[test]
    fn test_json_null_rate_is_malformed() {
        assert!(matches!(
            parse_tiers("[[100, null]]"),
            Err(TariffError::Parse(ParseError::MalformedJson(_))),
        ));
    }

    #[test]
    fn test_json_numeric_strings() {
        assert_eq!(
            parse_tiers(r#"[["100", "0.2"], [null, 0.3]]"#).unwrap(),
            [Tier::finite(100.0, 0.2), Tier::unlimited(0.3)],
        );
    }

    #[test]
    fn test_unlimited_tokens() {
        for token in UNLIMITED_TOKENS {
            assert_eq!(parse_tiers(&format!("{token}@0.5")).unwrap(), [Tier::unlimited(0.5)]);
        }
    }

    #[test]
    fn test_unlimited_tokens_are_case_sensitive() {
        assert!(matches!(
            parse_tiers("NULL@0.5"),
            Err(TariffError::Parse(ParseError::InvalidNumber { value })) if value == "NULL",
        ));
    }

    #[test]
    fn test_parser_does_not_validate() {
        assert_eq!(parse_tiers("-5@-0.1").unwrap(), [Tier::finite(-5.0, -0.1)]);
    }

    #[test]
    fn test_empty() {
        assert!(matches!(parse_tiers(""), Err(TariffError::Parse(ParseError::EmptyText))));
        assert_eq!(parse_tiers("").unwrap_err().to_string(), "tiers text is empty");
    }

    #[test]
    fn test_missing_separator() {
        assert!(matches!(
            parse_tiers("100@0.2, 0.3"),
            Err(TariffError::Parse(ParseError::MissingSeparator { entry })) if entry == "0.3",
        ));
        assert!(matches!(
            parse_tiers("1@2@3"),
            Err(TariffError::Parse(ParseError::MissingSeparator { .. })),
        ));
        assert!(matches!(
            parse_tiers("   "),
            Err(TariffError::Parse(ParseError::MissingSeparator { .. })),
        ));
    }

    #[test]
    fn test_invalid_number() {
        assert!(matches!(
            parse_tiers("100@cheap"),
            Err(TariffError::Parse(ParseError::InvalidNumber { value })) if value == "cheap",
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_tiers("[[100, 0.2]"),
            Err(TariffError::Parse(ParseError::MalformedJson(_))),
        ));
        assert!(matches!(
            parse_tiers("[[100, 0.2, 1]]"),
            Err(TariffError::Parse(ParseError::MalformedJson(_))),
        ));
        assert!(matches!(
            parse_tiers("[[100]]"),
            Err(TariffError::Parse(ParseError::MalformedJson(_))),
        ));
    }
}
