// SPDX-FileCopyrightText: The abadge authors
// SPDX-License-Identifier: MPL-2.0

//! Configuration options
//!
//! Options are layered: per-call overrides take precedence over the
//! options of a [`Badge`](crate::Badge), which in turn take precedence
//! over [`Options::defaults()`].

use std::{fmt, str::FromStr};

use compact_str::{CompactString, format_compact};

use crate::{
    Color, Error, Label, Result, Value,
    html::Layout,
    threshold::{Thresholds, ValueBackgrounds},
};

/// Names of all known options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum OptionKey {
    Label,
    Value,
    LabelBackground,
    ValueBackground,
    ValueBackgrounds,
    Thresholds,
    LabelTextColor,
    ValueTextColor,
    LabelTextShadow,
    ValueTextShadow,
    FontFamily,
    FontSize,
    Padding,
    BorderRadius,
    Url,
    LinkTarget,
    LinkDecoration,
    Layout,
}

impl OptionKey {
    /// All keys, i.e. the allow-list for keyword arguments.
    pub const ALL: [Self; 18] = [
        Self::Label,
        Self::Value,
        Self::LabelBackground,
        Self::ValueBackground,
        Self::ValueBackgrounds,
        Self::Thresholds,
        Self::LabelTextColor,
        Self::ValueTextColor,
        Self::LabelTextShadow,
        Self::ValueTextShadow,
        Self::FontFamily,
        Self::FontSize,
        Self::Padding,
        Self::BorderRadius,
        Self::Url,
        Self::LinkTarget,
        Self::LinkDecoration,
        Self::Layout,
    ];

    /// The keyword name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Value => "value",
            Self::LabelBackground => "label_background",
            Self::ValueBackground => "value_background",
            Self::ValueBackgrounds => "value_backgrounds",
            Self::Thresholds => "thresholds",
            Self::LabelTextColor => "label_text_color",
            Self::ValueTextColor => "value_text_color",
            Self::LabelTextShadow => "label_text_shadow",
            Self::ValueTextShadow => "value_text_shadow",
            Self::FontFamily => "font_family",
            Self::FontSize => "font_size",
            Self::Padding => "padding",
            Self::BorderRadius => "border_radius",
            Self::Url => "url",
            Self::LinkTarget => "link_target",
            Self::LinkDecoration => "link_decoration",
            Self::Layout => "layout",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == input)
            .ok_or_else(|| Error::UnknownOption { key: input.into() })
    }
}

/// A keyword argument
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Text or number
    Value(Value),

    /// See [`Options::value_backgrounds`]
    ValueBackgrounds(ValueBackgrounds),

    /// See [`Options::thresholds`]
    Thresholds(Thresholds),
}

impl From<Value> for Arg {
    fn from(from: Value) -> Self {
        Self::Value(from)
    }
}

impl From<&str> for Arg {
    fn from(from: &str) -> Self {
        Self::Value(from.into())
    }
}

impl From<String> for Arg {
    fn from(from: String) -> Self {
        Self::Value(from.into())
    }
}

impl From<CompactString> for Arg {
    fn from(from: CompactString) -> Self {
        Self::Value(from.into())
    }
}

impl From<i32> for Arg {
    fn from(from: i32) -> Self {
        Self::Value(from.into())
    }
}

impl From<i64> for Arg {
    fn from(from: i64) -> Self {
        Self::Value(from.into())
    }
}

impl From<f64> for Arg {
    fn from(from: f64) -> Self {
        Self::Value(from.into())
    }
}

impl From<ValueBackgrounds> for Arg {
    fn from(from: ValueBackgrounds) -> Self {
        Self::ValueBackgrounds(from)
    }
}

impl From<Thresholds> for Arg {
    fn from(from: Thresholds) -> Self {
        Self::Thresholds(from)
    }
}

/// Badge options
///
/// Unset options are inherited from the next lower layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    /// The label text
    pub label: Option<Label>,

    /// The value
    pub value: Option<Value>,

    /// Background color of the label
    pub label_background: Option<Color>,

    /// Background color of the value if no other color applies
    pub value_background: Option<Color>,

    /// Background colors of discrete values
    pub value_backgrounds: Option<ValueBackgrounds>,

    /// Threshold specs by label
    pub thresholds: Option<Thresholds>,

    /// Text color of the label
    pub label_text_color: Option<Color>,

    /// Text color of the value
    pub value_text_color: Option<Color>,

    /// Text shadow of the label
    pub label_text_shadow: Option<CompactString>,

    /// Text shadow of the value
    pub value_text_shadow: Option<CompactString>,

    /// Font family of both label and value
    pub font_family: Option<CompactString>,

    /// Font size of both label and value
    pub font_size: Option<CompactString>,

    /// Padding of both label and value
    pub padding: Option<CompactString>,

    /// Border radius of the badge
    pub border_radius: Option<CompactString>,

    /// Link target. The badge is wrapped into an anchor if non-empty.
    pub url: Option<CompactString>,

    /// The `target` attribute of the anchor
    pub link_target: Option<CompactString>,

    /// The `text-decoration` of the anchor
    pub link_decoration: Option<CompactString>,

    /// The markup layout
    pub layout: Option<Layout>,
}

impl Options {
    /// The built-in defaults.
    #[must_use]
    pub fn defaults() -> Self {
        Self {
            label: Some(Label::default()),
            value: Some(Value::default()),
            label_background: Some("#444".into()),
            value_background: Some("#888".into()),
            value_backgrounds: None,
            thresholds: None,
            label_text_color: Some("white".into()),
            value_text_color: Some("white".into()),
            label_text_shadow: Some("1px 1px black".into()),
            value_text_shadow: Some("1px 1px black".into()),
            font_family: Some("DejaVu Sans, Verdana, sans".into()),
            font_size: Some("80%".into()),
            padding: Some("4px 8px 4px 8px".into()),
            border_radius: Some("4px".into()),
            url: None,
            link_target: None,
            link_decoration: Some("none".into()),
            layout: Some(Layout::default()),
        }
    }

    /// Create options from keyword arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOption`] or [`Error::InvalidOptionType`]
    /// for the first argument that is rejected by [`Options::set()`].
    pub fn from_kwargs<I, K, A>(kwargs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, A)>,
        K: AsRef<str>,
        A: Into<Arg>,
    {
        let mut options = Self::default();
        for (key, arg) in kwargs {
            options.set(key.as_ref(), arg)?;
        }
        Ok(options)
    }

    /// Set an option by its keyword name.
    ///
    /// Text options accept any [`Value`] and store its displayed text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownOption`] if `key` is not a known option
    /// and [`Error::InvalidOptionType`] if `arg` does not fit the option.
    pub fn set(&mut self, key: &str, arg: impl Into<Arg>) -> Result<()> {
        self.set_key(key.parse()?, arg.into())
    }

    /// Set an option.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptionType`] if `arg` does not fit the option.
    pub fn set_key(&mut self, key: OptionKey, arg: Arg) -> Result<()> {
        match (key, arg) {
            (OptionKey::ValueBackgrounds, Arg::ValueBackgrounds(value_backgrounds)) => {
                self.value_backgrounds = Some(value_backgrounds);
            }
            (OptionKey::Thresholds, Arg::Thresholds(thresholds)) => {
                self.thresholds = Some(thresholds);
            }
            (OptionKey::Value, Arg::Value(value)) => {
                self.value = Some(value);
            }
            (OptionKey::Layout, Arg::Value(value)) => {
                self.layout = Some(value.to_text().parse()?);
            }
            (key, Arg::Value(value)) => {
                let Some(field) = self.text_mut(key) else {
                    return Err(invalid_type(key));
                };
                *field = Some(value.to_text());
            }
            (key, Arg::ValueBackgrounds(_) | Arg::Thresholds(_)) => {
                return Err(invalid_type(key));
            }
        }
        Ok(())
    }

    fn text_mut(&mut self, key: OptionKey) -> Option<&mut Option<CompactString>> {
        let field = match key {
            OptionKey::Label => &mut self.label,
            OptionKey::LabelBackground => &mut self.label_background,
            OptionKey::ValueBackground => &mut self.value_background,
            OptionKey::LabelTextColor => &mut self.label_text_color,
            OptionKey::ValueTextColor => &mut self.value_text_color,
            OptionKey::LabelTextShadow => &mut self.label_text_shadow,
            OptionKey::ValueTextShadow => &mut self.value_text_shadow,
            OptionKey::FontFamily => &mut self.font_family,
            OptionKey::FontSize => &mut self.font_size,
            OptionKey::Padding => &mut self.padding,
            OptionKey::BorderRadius => &mut self.border_radius,
            OptionKey::Url => &mut self.url,
            OptionKey::LinkTarget => &mut self.link_target,
            OptionKey::LinkDecoration => &mut self.link_decoration,
            OptionKey::Value
            | OptionKey::ValueBackgrounds
            | OptionKey::Thresholds
            | OptionKey::Layout => return None,
        };
        Some(field)
    }

    /// Overlay `overrides` on top of these options.
    ///
    /// Every option that is set in `overrides` replaces the
    /// corresponding option. Mappings are replaced as a whole.
    #[must_use]
    pub fn overlay(&self, overrides: &Self) -> Self {
        Self {
            label: pick(&overrides.label, &self.label),
            value: pick(&overrides.value, &self.value),
            label_background: pick(&overrides.label_background, &self.label_background),
            value_background: pick(&overrides.value_background, &self.value_background),
            value_backgrounds: pick(&overrides.value_backgrounds, &self.value_backgrounds),
            thresholds: pick(&overrides.thresholds, &self.thresholds),
            label_text_color: pick(&overrides.label_text_color, &self.label_text_color),
            value_text_color: pick(&overrides.value_text_color, &self.value_text_color),
            label_text_shadow: pick(&overrides.label_text_shadow, &self.label_text_shadow),
            value_text_shadow: pick(&overrides.value_text_shadow, &self.value_text_shadow),
            font_family: pick(&overrides.font_family, &self.font_family),
            font_size: pick(&overrides.font_size, &self.font_size),
            padding: pick(&overrides.padding, &self.padding),
            border_radius: pick(&overrides.border_radius, &self.border_radius),
            url: pick(&overrides.url, &self.url),
            link_target: pick(&overrides.link_target, &self.link_target),
            link_decoration: pick(&overrides.link_decoration, &self.link_decoration),
            layout: overrides.layout.or(self.layout),
        }
    }

    /// Replace label and value by positional arguments.
    ///
    /// The first argument is the label and the second the value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for more than two arguments.
    pub fn apply_args(&mut self, args: &[Value]) -> Result<()> {
        match args {
            [] => {}
            [label] => {
                self.label = Some(label.to_text());
            }
            [label, value] => {
                self.label = Some(label.to_text());
                self.value = Some(value.clone());
            }
            _ => {
                return Err(Error::InvalidArgument(format_compact!(
                    "expected at most 2 positional arguments (label, value), got {}",
                    args.len()
                )));
            }
        }
        Ok(())
    }

    /// Both label and value.
    ///
    /// Options merged on top of [`Options::defaults()`] always have both.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if either of them is missing.
    pub(crate) fn label_and_value(&self) -> Result<(&Label, &Value)> {
        let label = self
            .label
            .as_ref()
            .ok_or_else(|| Error::InvalidArgument("missing label".into()))?;
        let value = self
            .value
            .as_ref()
            .ok_or_else(|| Error::InvalidArgument("missing value".into()))?;
        Ok((label, value))
    }
}

fn pick<T: Clone>(overriding: &Option<T>, inherited: &Option<T>) -> Option<T> {
    overriding.as_ref().or(inherited.as_ref()).cloned()
}

const fn invalid_type(key: OptionKey) -> Error {
    let expected = match key {
        OptionKey::ValueBackgrounds => "a mapping from values to colors",
        OptionKey::Thresholds => "a mapping from labels to threshold specs",
        _ => "a text or a number",
    };
    Error::InvalidOptionType {
        key: key.as_str(),
        expected,
    }
}
