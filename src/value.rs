// SPDX-FileCopyrightText: The abadge authors
// SPDX-License-Identifier: MPL-2.0

//! Values

use std::fmt;

use compact_str::{CompactString, ToCompactString as _};

/// A badge value
///
/// Values are displayed in their natural string form and compared
/// according to the [`OrderKind`](crate::threshold::OrderKind) of a
/// threshold.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Text
    Str(CompactString),

    /// An integer number
    Int(i64),

    /// A floating-point number
    Float(f64),
}

impl Value {
    /// Check if two values denote the same key.
    ///
    /// Strings only match strings. Numbers match numerically,
    /// i.e. `Int(1)` matches `Float(1.0)`.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::float_cmp)]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Str(lhs), Self::Str(rhs)) => lhs == rhs,
            (Self::Int(lhs), Self::Int(rhs)) => lhs == rhs,
            (Self::Float(lhs), Self::Float(rhs)) => lhs == rhs,
            (Self::Int(int), Self::Float(float)) | (Self::Float(float), Self::Int(int)) => {
                *int as f64 == *float
            }
            _ => false,
        }
    }

    /// Check for the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Str(text) if text.is_empty())
    }

    /// The displayed text.
    #[must_use]
    pub fn to_text(&self) -> CompactString {
        self.to_compact_string()
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Str(CompactString::default())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(text) => f.write_str(text),
            Self::Int(int) => write!(f, "{int}"),
            Self::Float(float) => fmt_float(*float, f),
        }
    }
}

/// Shortest round-trip form with scientific notation below `1e-4`
/// and from `1e16`, e.g. `1e-05` and `1e+16`.
fn fmt_float(float: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if float.is_nan() {
        return f.write_str("nan");
    }
    if float.is_infinite() {
        return f.write_str(if float < 0.0 { "-inf" } else { "inf" });
    }
    let magnitude = float.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{float:e}");
        let (mantissa, exponent) = scientific
            .split_once('e')
            .unwrap_or((scientific.as_str(), "0"));
        let (sign, digits) = exponent
            .strip_prefix('-')
            .map_or(("+", exponent), |digits| ("-", digits));
        return write!(f, "{mantissa}e{sign}{digits:0>2}");
    }
    if float.fract() == 0.0 {
        // Integral floats keep their fractional digit, e.g. "4.0".
        write!(f, "{float:.1}")
    } else {
        write!(f, "{float}")
    }
}

impl From<&str> for Value {
    fn from(from: &str) -> Self {
        Self::Str(from.into())
    }
}

impl From<String> for Value {
    fn from(from: String) -> Self {
        Self::Str(from.into())
    }
}

impl From<CompactString> for Value {
    fn from(from: CompactString) -> Self {
        Self::Str(from)
    }
}

impl From<i64> for Value {
    fn from(from: i64) -> Self {
        Self::Int(from)
    }
}

impl From<i32> for Value {
    fn from(from: i32) -> Self {
        Self::Int(from.into())
    }
}

impl From<u32> for Value {
    fn from(from: u32) -> Self {
        Self::Int(from.into())
    }
}

impl From<f64> for Value {
    fn from(from: f64) -> Self {
        Self::Float(from)
    }
}

impl From<f32> for Value {
    fn from(from: f32) -> Self {
        Self::Float(from.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Value;

    #[test]
    fn display_natural_form() {
        assert_eq!("bar", Value::from("bar").to_string());
        assert_eq!("4", Value::from(4).to_string());
        assert_eq!("-17", Value::from(-17i64).to_string());
        assert_eq!("1.01", Value::from(1.01).to_string());
        assert_eq!("0.5", Value::from(0.5).to_string());
        assert_eq!("4.0", Value::from(4.0).to_string());
        assert_eq!("inf", Value::from(f64::INFINITY).to_string());
    }

    #[test]
    fn display_floats_at_the_extremes() {
        assert_eq!("0.0", Value::from(0.0).to_string());
        assert_eq!("-0.0", Value::from(-0.0).to_string());
        assert_eq!("0.0001", Value::from(0.0001).to_string());
        assert_eq!("1e-05", Value::from(1e-5).to_string());
        assert_eq!("-2.5e-07", Value::from(-2.5e-7).to_string());
        assert_eq!("9999999999999998.0", Value::from(9_999_999_999_999_998.0).to_string());
        assert_eq!("1e+16", Value::from(1e16).to_string());
        assert_eq!("1.5e+300", Value::from(1.5e300).to_string());
        assert_eq!("1e-300", Value::from(1e-300).to_string());
        assert_eq!("nan", Value::from(f64::NAN).to_string());
        assert_eq!("-inf", Value::from(f64::NEG_INFINITY).to_string());
    }

    #[test]
    fn numbers_match_across_kinds() {
        assert!(Value::from(1).matches(&Value::from(1.0)));
        assert!(Value::from(1.0).matches(&Value::from(1)));
        assert!(!Value::from(1).matches(&Value::from(1.5)));
        assert!(!Value::from(1).matches(&Value::from("1")));
        assert!(Value::from("a").matches(&Value::from("a")));
        assert!(!Value::from("a").matches(&Value::from("b")));
    }

    #[test]
    fn empty() {
        assert!(Value::default().is_empty());
        assert!(!Value::from(0).is_empty());
        assert!(!Value::from(" ").is_empty());
    }
}
