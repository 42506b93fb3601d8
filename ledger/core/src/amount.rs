//! Numeric Form Input
//!
//! Amount fields keep the text the user typed next to the parsed value, so a
//! surface can echo partial input like `12.` while the ledger only ever sees a
//! validated `f64`.

use thiserror::Error;

/// Why an amount edit was rejected
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Text is not a number
    #[error("Not a number: {0:?}")]
    Invalid(String),

    /// Text parsed to infinity or NaN
    #[error("Not a finite amount: {0:?}")]
    NotFinite(String),
}

/// An optional, validated amount typed into a form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AmountInput {
    raw: String,
    value: Option<f64>,
}

impl AmountInput {
    /// Parse user input
    ///
    /// Empty (or whitespace-only) text is a valid input with no value.
    ///
    /// # Errors
    ///
    /// Returns [`AmountError`] if the text is not a finite number.
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self {
                raw: input.to_string(),
                value: None,
            });
        }

        let value: f64 = trimmed
            .parse()
            .map_err(|_| AmountError::Invalid(input.to_string()))?;
        if !value.is_finite() {
            return Err(AmountError::NotFinite(input.to_string()));
        }

        Ok(Self {
            raw: input.to_string(),
            value: Some(value),
        })
    }

    /// The text as typed
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed value, if any
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.value
    }

    /// Parsed value with a missing amount counted as zero
    #[must_use]
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// Whether a non-zero amount was entered
    #[must_use]
    pub fn is_present(&self) -> bool {
        matches!(self.value, Some(v) if v != 0.0)
    }
}

/// Format an amount the way a person writes it: `53`, `7.5`
#[must_use]
pub fn format_amount(value: f64) -> String {
    // f64's Display already drops a zero fraction
    format!("{value}")
}
