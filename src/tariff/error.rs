use thiserror::Error;

#[derive(Debug, Error)]
pub enum TariffError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The tiers could not absorb the whole consumption.
    #[error(
        "consumption exceeds defined tiers by {excess:.3} kWh, add a final tier with an unlimited block"
    )]
    Overflow { excess: f64 },

    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Non-numeric input where a number is required.
    #[error("type mismatch: `{field}` expects a number, got `{value}`")]
    TypeMismatch { field: &'static str, value: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("inputs must be non-negative")]
    NegativeInputs,

    #[error("consumption must be non-negative")]
    NegativeConsumption,

    #[error("fixed fee must be non-negative")]
    NegativeFixedFee,

    #[error("tiers must be a non-empty list")]
    EmptyTiers,

    #[error("rate for tier {tier} must be >= 0")]
    NegativeRate { tier: usize },

    #[error("block_kwh for tier {tier} must be > 0 or unlimited")]
    NonPositiveBlock { tier: usize },
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("tiers text is empty")]
    EmptyText,

    #[error("malformed tiers JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("tier `{entry}` must have the `size@rate` format")]
    MissingSeparator { entry: String },

    #[error("`{value}` is not a number")]
    InvalidNumber { value: String },
}
