// SPDX-FileCopyrightText: The abadge authors
// SPDX-License-Identifier: MPL-2.0

//! Color resolution by value or threshold

use std::{cmp::Ordering, collections::BTreeMap, fmt, str::FromStr};

use anyhow::{Context as _, anyhow};
use itertools::Itertools as _;

use crate::{Color, Error, Label, Result, Value};

/// How threshold boundaries and values are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    /// Lexicographic order of the displayed text
    Str,

    /// Numeric order of integers
    Int,

    /// Numeric order of floating-point numbers
    Float,
}

impl OrderKind {
    /// The name of the order kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
        }
    }

    /// Find the smallest boundary that is greater than or equal to `value`.
    ///
    /// Returns `None` if `value` exceeds all boundaries.
    fn smallest_upper_bound<'a>(
        self,
        value: &Value,
        boundaries: &'a [(Value, Color)],
    ) -> anyhow::Result<Option<&'a Color>> {
        match self {
            Self::Str => {
                let boundaries = boundaries
                    .iter()
                    .map(|(boundary, color)| (boundary.to_text(), color))
                    .collect();
                Ok(first_upper_bound(&value.to_text(), boundaries, Ord::cmp))
            }
            Self::Int => {
                let value = truncate_int(value).context("value")?;
                let boundaries = boundaries
                    .iter()
                    .map(|(boundary, color)| {
                        coerce_int(boundary)
                            .context("boundary")
                            .map(|boundary| (boundary, color))
                    })
                    .collect::<anyhow::Result<_>>()?;
                Ok(first_upper_bound(&value, boundaries, Ord::cmp))
            }
            Self::Float => {
                let value = coerce_float(value).context("value")?;
                let boundaries = boundaries
                    .iter()
                    .map(|(boundary, color)| {
                        coerce_float(boundary)
                            .context("boundary")
                            .map(|boundary| (boundary, color))
                    })
                    .collect::<anyhow::Result<_>>()?;
                Ok(first_upper_bound(&value, boundaries, f64::total_cmp))
            }
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderKind {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input {
            "str" => Ok(Self::Str),
            "int" => Ok(Self::Int),
            "float" => Ok(Self::Float),
            _ => Err(Error::IncompatibleOrder(anyhow!(
                "unknown order '{input}', expected 'str', 'int', or 'float'"
            ))),
        }
    }
}

fn first_upper_bound<'a, K>(
    value: &K,
    boundaries: Vec<(K, &'a Color)>,
    cmp: impl Fn(&K, &K) -> Ordering,
) -> Option<&'a Color> {
    boundaries
        .into_iter()
        .sorted_by(|(lhs, _), (rhs, _)| cmp(lhs, rhs))
        .find(|(boundary, _)| cmp(value, boundary) != Ordering::Greater)
        .map(|(_, color)| color)
}

// Exclusive upper limit of f64 values that fit into i64, i.e. 2^63.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn coerce_int(value: &Value) -> anyhow::Result<i64> {
    match value {
        Value::Int(int) => Ok(*int),
        Value::Float(float)
            if float.fract() == 0.0 && (-I64_LIMIT..I64_LIMIT).contains(float) =>
        {
            Ok(*float as i64)
        }
        Value::Float(float) => Err(anyhow!("{float} is not an integer")),
        Value::Str(text) => text
            .trim()
            .parse()
            .with_context(|| format!("'{text}' is not an integer")),
    }
}

/// Coerce a compared value, truncating fractional floats toward zero.
///
/// Boundaries are coerced strictly by [`coerce_int`].
#[allow(clippy::cast_possible_truncation)]
fn truncate_int(value: &Value) -> anyhow::Result<i64> {
    match value {
        Value::Float(float) if float.is_nan() => Err(anyhow!("NaN is not comparable")),
        // Saturates at the limits of i64.
        Value::Float(float) => Ok(float.trunc() as i64),
        Value::Int(_) | Value::Str(_) => coerce_int(value),
    }
}

#[allow(clippy::cast_precision_loss)]
fn coerce_float(value: &Value) -> anyhow::Result<f64> {
    let float = match value {
        Value::Int(int) => *int as f64,
        Value::Float(float) => *float,
        Value::Str(text) => text
            .trim()
            .parse()
            .with_context(|| format!("'{text}' is not a number"))?,
    };
    if float.is_nan() {
        return Err(anyhow!("NaN is not comparable"));
    }
    Ok(float)
}

/// Per-label rule that maps boundaries to colors
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThresholdSpec {
    /// Boundaries and their colors
    pub colors: Vec<(Value, Color)>,

    /// How to compare values with the boundaries.
    ///
    /// Without an order only exact matches of a boundary are accepted.
    pub order: Option<OrderKind>,

    /// The color for values that exceed all boundaries
    pub above: Option<Color>,
}

impl ThresholdSpec {
    /// Create an unordered spec from boundaries and colors.
    #[must_use]
    pub fn new<I, V, C>(colors: I) -> Self
    where
        I: IntoIterator<Item = (V, C)>,
        V: Into<Value>,
        C: Into<Color>,
    {
        Self {
            colors: colors
                .into_iter()
                .map(|(boundary, color)| (boundary.into(), color.into()))
                .collect(),
            order: None,
            above: None,
        }
    }

    /// Compare values according to `order`.
    #[must_use]
    pub fn with_order(self, order: OrderKind) -> Self {
        Self {
            order: Some(order),
            ..self
        }
    }

    /// Use `above` for values that exceed all boundaries.
    #[must_use]
    pub fn with_above(self, above: impl Into<Color>) -> Self {
        Self {
            above: Some(above.into()),
            ..self
        }
    }

    /// Resolve the color of `value`.
    ///
    /// Returns `Ok(None)` if the value is neither covered by a boundary
    /// nor by the `above` color.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleOrder`] if either the value or
    /// one of the boundaries cannot be compared according to the order.
    pub fn resolve(&self, value: &Value) -> Result<Option<&Color>> {
        let color = match self.order {
            None => self
                .colors
                .iter()
                .find(|(boundary, _)| boundary.matches(value))
                .map(|(_, color)| color),
            Some(order) => order
                .smallest_upper_bound(value, &self.colors)
                .with_context(|| format!("cannot compare '{value}' in {order} order"))
                .map_err(Error::IncompatibleOrder)?,
        };
        Ok(color.or(self.above.as_ref()))
    }
}

/// Threshold specs by label
pub type Thresholds = BTreeMap<Label, ThresholdSpec>;

/// Background colors for discrete values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueBackgrounds(Vec<(Value, Color)>);

impl ValueBackgrounds {
    /// Create an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Check for an empty mapping.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The number of mapped values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Map `value` to `color`, replacing any color of a matching value.
    pub fn insert(&mut self, value: impl Into<Value>, color: impl Into<Color>) {
        let value = value.into();
        let color = color.into();
        if let Some((_, mapped)) = self.0.iter_mut().find(|(key, _)| key.matches(&value)) {
            *mapped = color;
        } else {
            self.0.push((value, color));
        }
    }

    /// Look up the color of a matching value.
    #[must_use]
    pub fn get(&self, value: &Value) -> Option<&Color> {
        self.0
            .iter()
            .find(|(key, _)| key.matches(value))
            .map(|(_, color)| color)
    }
}

impl<V, C> FromIterator<(V, C)> for ValueBackgrounds
where
    V: Into<Value>,
    C: Into<Color>,
{
    fn from_iter<I: IntoIterator<Item = (V, C)>>(iter: I) -> Self {
        let mut backgrounds = Self::new();
        for (value, color) in iter {
            backgrounds.insert(value, color);
        }
        backgrounds
    }
}

/// Resolves the background color of a badge value
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorResolver<'a> {
    /// Colors of discrete values, with priority over thresholds
    pub value_backgrounds: Option<&'a ValueBackgrounds>,

    /// Threshold specs by label
    pub thresholds: Option<&'a Thresholds>,

    /// The color if neither a value background nor a threshold applies
    pub fallback: Option<&'a Color>,
}

impl<'a> ColorResolver<'a> {
    /// Resolve the background color of `value` for `label`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UndefinedColor`] if no color is found and
    /// [`Error::IncompatibleOrder`] if a threshold cannot be compared.
    pub fn resolve(&self, label: &str, value: &Value) -> Result<&'a Color> {
        if let Some(color) = self
            .value_backgrounds
            .and_then(|backgrounds| backgrounds.get(value))
        {
            tracing::trace!(label, %value, %color, "value background");
            return Ok(color);
        }
        if let Some(spec) = self.thresholds.and_then(|thresholds| thresholds.get(label)) {
            let Some(color) = spec.resolve(value)? else {
                tracing::debug!(label, %value, "no threshold color");
                return Err(Error::UndefinedColor {
                    label: label.into(),
                    value: value.to_text(),
                });
            };
            tracing::trace!(label, %value, %color, "threshold color");
            return Ok(color);
        }
        self.fallback.ok_or_else(|| {
            tracing::debug!(label, %value, "no fallback color");
            Error::UndefinedColor {
                label: label.into(),
                value: value.to_text(),
            }
        })
    }
}

#[cfg(test)]
mod tests;
