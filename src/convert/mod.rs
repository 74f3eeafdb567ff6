//! Integer to base-N conversion by repeated division
//!
//! Works on arbitrary precision integers. Negative values are written as a
//! `-` followed by the digits of their magnitude.

use crate::error::{Result, ToolError};
use crate::input::{strip_digit_separators, Rejection};
use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{ToPrimitive, Zero};
use std::fmt;
use std::ops::RangeInclusive;

pub const DIGIT_SYMBOLS: &[u8; 16] = b"0123456789ABCDEF";
pub const SUPPORTED_BASES: RangeInclusive<u32> = 2..=16;

fn check_base(base: u32) -> Result<()> {
    if SUPPORTED_BASES.contains(&base) {
        Ok(())
    } else {
        Err(ToolError::InvalidBase { base })
    }
}

/// Parse one input line as a signed decimal integer
///
/// `_` is accepted only as a separator between two digits.
pub fn parse_integer(text: &str) -> std::result::Result<BigInt, Rejection> {
    strip_digit_separators(text)
        .and_then(|digits| digits.parse::<BigInt>().ok())
        .ok_or(Rejection::new("integer"))
}

/// Render `value` in `base` using the symbols `0-9A-F`
pub fn convert_to_base(value: &BigInt, base: u32) -> Result<String> {
    check_base(base)?;

    if value.is_zero() {
        return Ok("0".to_string());
    }

    let divisor = BigUint::from(base);
    let mut magnitude = value.magnitude().clone();
    let mut digits = Vec::new();

    while !magnitude.is_zero() {
        let remainder = (&magnitude % &divisor)
            .to_usize()
            .ok_or(ToolError::InvalidBase { base })?;
        digits.push(DIGIT_SYMBOLS[remainder]);
        magnitude /= &divisor;
    }

    let mut converted = String::with_capacity(digits.len() + 1);
    if value.sign() == Sign::Minus {
        converted.push('-');
    }
    converted.extend(digits.iter().rev().map(|&digit| char::from(digit)));
    Ok(converted)
}

/// Rebuild an integer from digits produced by [`convert_to_base`]
///
/// Returns `None` for an empty string or a symbol that is not a digit of
/// `base`.
pub fn expand_from_base(digits: &str, base: u32) -> Result<Option<BigInt>> {
    check_base(base)?;

    let (sign, body) = match digits.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, digits),
    };
    if body.is_empty() {
        return Ok(None);
    }

    let mut magnitude = BigUint::zero();
    for symbol in body.bytes() {
        let Some(position) = DIGIT_SYMBOLS.iter().position(|&s| s == symbol) else {
            return Ok(None);
        };
        if position as u32 >= base {
            return Ok(None);
        }
        magnitude = magnitude * base + BigUint::from(position);
    }

    Ok(Some(BigInt::from_biguint(sign, magnitude)))
}

/// One line of the conversion table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRow {
    /// 1-based position among the valid inputs
    pub item: usize,
    pub value: BigInt,
    pub binary: String,
    pub hex: String,
}

impl ConversionRow {
    pub fn new(item: usize, value: BigInt) -> Result<Self> {
        let binary = convert_to_base(&value, 2)?;
        let hex = convert_to_base(&value, 16)?;
        Ok(Self {
            item,
            value,
            binary,
            hex,
        })
    }
}

impl fmt::Display for ConversionRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.item, self.value, self.binary, self.hex
        )
    }
}

/// Build table rows for every value, numbering from 1
pub fn conversion_rows(values: Vec<BigInt>) -> Result<Vec<ConversionRow>> {
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| ConversionRow::new(index + 1, value))
        .collect()
}
