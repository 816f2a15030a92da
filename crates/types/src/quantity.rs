//! Quantity input validation
//!
//! The quantity arrives as an operator-typed string. Two stages apply: the
//! entry field admits only digit strings (or the transient empty string),
//! and submission requires a parsed value of at least 1.

use pokerep_errors::{Error, ReportError};

/// Parse a submitted quantity string.
///
/// Accepts only strings representing integers >= 1. Empty, zero, negative,
/// and non-numeric input is rejected before any dispatch happens.
///
/// # Errors
///
/// Returns `ReportError::InvalidQuantity` for anything else.
pub fn parse_quantity(raw: &str) -> Result<u32, Error> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(qty) if qty >= 1 => Ok(qty),
        _ => Err(ReportError::InvalidQuantity {
            input: raw.to_string(),
        }
        .into()),
    }
}

/// Buffered quantity entry field
///
/// Mirrors the entry-point behavior of the quantity input: intermediate
/// edits may leave the field empty, but a negative sign or non-digit
/// character is refused at the point of entry.
#[derive(Debug, Clone, Default)]
pub struct QuantityField {
    raw: String,
}

impl QuantityField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an edit. Returns whether the new value was accepted; a
    /// rejected edit leaves the previous value in place.
    pub fn set(&mut self, input: &str) -> bool {
        if input.is_empty() || input.bytes().all(|b| b.is_ascii_digit()) {
            self.raw = input.to_string();
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Validate the current value for submission.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidQuantity` when the field is empty or
    /// holds a value below 1.
    pub fn submit(&self) -> Result<u32, Error> {
        parse_quantity(&self.raw)
    }
}
