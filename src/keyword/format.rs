use std::fmt::Write;

use crate::error::FormatError;

use super::{ID_WIDTH, REAL_PRECISION, REAL_WIDTH};

/// One fixed-width record line, built field by field.
///
/// Every field is right-justified in its column. A value whose text is
/// wider than the column is an error rather than a silently shifted line.
#[derive(Debug)]
pub struct Record {
    section: &'static str,
    line: String,
}

impl Record {
    /// Starts an empty record of `section`.
    #[must_use]
    pub fn new(section: &'static str) -> Self {
        Self {
            section,
            line: String::with_capacity(80),
        }
    }

    /// Appends an integer ID field.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` has more digits than the ID column.
    pub fn id(&mut self, value: u32) -> Result<&mut Self, FormatError> {
        self.push(&value.to_string(), ID_WIDTH)
    }

    /// Appends a real in fixed-point notation.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite or does not fit.
    pub fn fixed(&mut self, value: f64) -> Result<&mut Self, FormatError> {
        self.check_finite(value)?;
        self.push(&format!("{value:.prec$}", prec = REAL_PRECISION), REAL_WIDTH)
    }

    /// Appends a real in scientific notation.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not finite or does not fit.
    pub fn scientific(&mut self, value: f64) -> Result<&mut Self, FormatError> {
        self.check_finite(value)?;
        self.push(&scientific(value, REAL_PRECISION), REAL_WIDTH)
    }

    /// The record text, without a line terminator.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.line
    }

    fn check_finite(&self, value: f64) -> Result<(), FormatError> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(FormatError::NonFinite {
                section: self.section,
                value,
            })
        }
    }

    fn push(&mut self, text: &str, width: usize) -> Result<&mut Self, FormatError> {
        if text.len() > width {
            return Err(FormatError::FieldOverflow {
                section: self.section,
                value: text.to_owned(),
                width,
            });
        }
        // Writing to a String cannot fail.
        let _ = write!(self.line, "{text:>width$}");
        Ok(self)
    }
}

/// Formats `value` as `d.dddddde±XX`, with a signed exponent of at least
/// two digits.
#[must_use]
pub fn scientific(value: f64, precision: usize) -> String {
    let text = format!("{value:.precision$e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}
