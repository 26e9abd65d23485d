//! Odd/even checks.
//!
//! The three predicate families are interchangeable, they only differ in how the low bit is
//! inspected. Classification treats zero as its own category.

use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

pub fn is_odd_modulo(n: i64) -> bool {
    n % 2 != 0
}

pub fn is_even_modulo(n: i64) -> bool {
    n % 2 == 0
}

/// Two's complement keeps the low bit set for negative odd numbers too.
pub fn is_odd_bitwise(n: i64) -> bool {
    n & 1 == 1
}

pub fn is_even_bitwise(n: i64) -> bool {
    n & 1 == 0
}

/// Integer division drops the low bit, multiplying back only restores even numbers.
pub fn is_odd_division(n: i64) -> bool {
    n / 2 * 2 != n
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Parity {
    Zero,
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Parity::Zero => "zero",
            Parity::Even => "even",
            Parity::Odd => "odd",
        };
        f.write_str(name)
    }
}

pub fn classify(n: i64) -> Parity {
    if n == 0 {
        Parity::Zero
    } else if is_even_modulo(n) {
        Parity::Even
    } else {
        Parity::Odd
    }
}

/// Human readable classification of `n`.
pub fn describe(n: i64) -> String {
    match classify(n) {
        Parity::Zero => "0 is zero (neither odd nor even)".to_string(),
        parity => format!("{n} is {parity}"),
    }
}

/// Numbers of a batch split by [`classify`], each group in input order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParityBatch {
    pub odd_numbers: Vec<i64>,
    pub even_numbers: Vec<i64>,
    pub zeros: Vec<i64>,
}

pub fn batch_check(numbers: &[i64]) -> ParityBatch {
    let mut batch = ParityBatch::default();

    for &n in numbers {
        let group = match classify(n) {
            Parity::Zero => &mut batch.zeros,
            Parity::Even => &mut batch.even_numbers,
            Parity::Odd => &mut batch.odd_numbers,
        };
        group.push(n);
    }

    batch
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParityStats {
    pub total: usize,
    pub odd_count: usize,
    pub even_count: usize,
    pub zero_count: usize,
}

pub fn parity_stats(numbers: &[i64]) -> ParityStats {
    numbers.iter().fold(
        ParityStats {
            total: numbers.len(),
            ..ParityStats::default()
        },
        |mut stats, &n| {
            match classify(n) {
                Parity::Zero => stats.zero_count += 1,
                Parity::Even => stats.even_count += 1,
                Parity::Odd => stats.odd_count += 1,
            }
            stats
        },
    )
}

/// One line of interactive input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    Number(i64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseInputError {
    #[error("invalid integer {input:?}")]
    InvalidInteger {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("integer {input} does not fit in 64 bits")]
    OutOfRange { input: String },
}

/// Parses a line as either the quit sentinel (`q`, any case) or an integer.
///
/// Numbers are limited to the `i64` domain all checks in this module work on. Well-formed
/// integers outside of it are reported as [`ParseInputError::OutOfRange`].
pub fn parse_input(line: &str) -> Result<Input, ParseInputError> {
    let line = line.trim();

    if line.eq_ignore_ascii_case("q") {
        return Ok(Input::Quit);
    }

    line.parse().map(Input::Number).map_err(|source: ParseIntError| {
        let input = line.to_string();
        match source.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ParseInputError::OutOfRange { input }
            }
            _ => ParseInputError::InvalidInteger { input, source },
        }
    })
}
