//! # Number parsing
//!
//! Reading coefficients and bound values from strings. Values are written as decimals (`abc.xyz`,
//! optionally signed), which can be read into a rational number exactly.
use std::convert::TryFrom;

use relp_num::{Rational64, RationalBig, Sign};

use crate::io::error::Parse as ParseError;
use crate::io::error::ParseResult;

/// Parsing a number read from a linear program file.
pub trait Parse: Sized {
    /// Read a string representation from a decimal (abc.xyz) number.
    ///
    /// # Errors
    ///
    /// When the number could not be parsed, an error.
    fn parse(text: &str) -> ParseResult<Self>;
}

impl Parse for f64 {
    fn parse(text: &str) -> ParseResult<Self> {
        let value: Self = text.parse()
            .map_err(|error| ParseError::wrap_other(
                error,
                format!("Failed to parse value text \"{}\" into f64", text),
            ))?;

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ParseError::new(format!("Parsed value \"{}\" is not finite.", text)))
        }
    }
}

impl Parse for Rational64 {
    fn parse(text: &str) -> ParseResult<Self> {
        let raw = Raw::try_from(text)?;

        Ok(raw.into())
    }
}

impl From<Raw> for Rational64 {
    fn from(value: Raw) -> Self {
        let (numerator, denominator) = value.fraction();
        Self::new_signed(value.sign, numerator, denominator)
    }
}

impl Parse for RationalBig {
    fn parse(text: &str) -> ParseResult<Self> {
        let raw = Raw::try_from(text)?;
        let (numerator, denominator) = raw.fraction();

        Self::new_signed(raw.sign, numerator, denominator)
            .ok_or_else(|| ParseError::new(format!(
                "Value text \"{}\" does not describe a rational number.", text,
            )))
    }
}

/// Intermediate form of read number.
///
/// The sign is `Sign::Zero` exactly when the integer is zero.
#[derive(Eq, PartialEq, Clone, Debug)]
pub(crate) struct Raw {
    sign: Sign,
    integer: i64,
    decimal_steps_from_right: u32,
}

impl Raw {
    /// Absolute value as a numerator over a power of ten.
    fn fraction(&self) -> (u64, u64) {
        // `TryFrom` checked that this power fits an `i64`.
        (self.integer.unsigned_abs(), 10_u64.pow(self.decimal_steps_from_right))
    }
}

impl TryFrom<&str> for Raw {
    type Error = ParseError;

    fn try_from(text: &str) -> Result<Self, Self::Error> {
        let (negative, digits) = match text.as_bytes().first() {
            Some(b'-') => (true, &text[1..]),
            Some(b'+') => (false, &text[1..]),
            _ => (false, text),
        };
        if digits.is_empty() || digits == "." {
            return Err(ParseError::new(format!("Value text \"{}\" contains no digits.", text)));
        }
        if !digits.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.') {
            return Err(ParseError::new(format!("Value text \"{}\" is not a decimal number.", text)));
        }

        let parse = |part: &str, number_part| {
            if part.is_empty() {
                Ok(0)
            } else {
                part.parse::<i64>()
                    .map_err(|error| ParseError::wrap_other(
                        error,
                        format!("Failed to parse {} \"{}\" as i64.", number_part, part),
                    ))
            }
        };
        let too_large = || ParseError::new(format!("Value text \"{}\" has too many digits.", text));

        let (integer, decimal_steps_from_right) = match digits.find('.') {
            None => (parse(digits, "entire value")?, 0),
            Some(index) => {
                let from_right = u32::try_from(digits.len() - index - 1).map_err(|_| too_large())?;

                let integer_part = parse(&digits[..index], "integer part")?;
                let mantissa_part = parse(&digits[(index + 1)..], "mantissa part")?;

                let integer = 10_i64.checked_pow(from_right)
                    .and_then(|shift| integer_part.checked_mul(shift))
                    .and_then(|shifted| shifted.checked_add(mantissa_part))
                    .ok_or_else(too_large)?;

                (integer, from_right)
            },
        };

        let sign = match (integer, negative) {
            (0, _) => Sign::Zero,
            (_, true) => Sign::Negative,
            (_, false) => Sign::Positive,
        };

        Ok(Self { sign, integer, decimal_steps_from_right })
    }
}
