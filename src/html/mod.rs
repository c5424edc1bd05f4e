// SPDX-FileCopyrightText: The abadge authors
// SPDX-License-Identifier: MPL-2.0

//! HTML markup
//!
//! Labels, values, and URLs are embedded verbatim, i.e. without
//! escaping. Callers must only pass text that is safe for embedding
//! into HTML.

use std::{borrow::Cow, fmt, str::FromStr};

use itertools::Itertools as _;

use crate::{Error, Options, Result};

/// The link target that requires `rel="noopener noreferer"`
pub const BLANK_TARGET: &str = "_blank";

/// Markup layout presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Label and value are joined into a single shape with rounded
    /// outer corners.
    #[default]
    Joined,

    /// Label and value are separate shapes with uniformly rounded corners.
    Separate,
}

impl Layout {
    /// The name of the layout.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Joined => "joined",
            Self::Separate => "separate",
        }
    }

    fn border_radii(self, radius: &str) -> (Cow<'_, str>, Cow<'_, str>) {
        match self {
            Self::Joined => (
                format!("{radius} 0px 0px {radius}").into(),
                format!("0px {radius} {radius} 0px").into(),
            ),
            Self::Separate => (radius.into(), radius.into()),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self> {
        match input {
            "joined" => Ok(Self::Joined),
            "separate" => Ok(Self::Separate),
            _ => Err(Error::InvalidOptionType {
                key: "layout",
                expected: "either 'joined' or 'separate'",
            }),
        }
    }
}

/// Inline CSS declarations in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDecls<'a>(Vec<(&'static str, Cow<'a, str>)>);

impl<'a> StyleDecls<'a> {
    /// Create an empty list of declarations.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a declaration.
    #[must_use]
    pub fn with(mut self, property: &'static str, value: impl Into<Cow<'a, str>>) -> Self {
        self.0.push((property, value.into()));
        self
    }
}

impl fmt::Display for StyleDecls<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decls = self
            .0
            .iter()
            .format_with("", |(property, value), write| {
                write(&format_args!("{property}:{value};"))
            });
        write!(f, "{decls}")
    }
}

fn text(option: Option<&str>) -> &str {
    option.unwrap_or_default()
}

/// Markup of a badge with resolved options
#[derive(Debug, Clone, Copy)]
pub struct BadgeMarkup<'a> {
    /// The effective options
    pub options: &'a Options,

    /// The label text
    pub label: &'a str,

    /// The displayed value text
    pub value: &'a str,

    /// The resolved background color of the value
    pub value_background: &'a str,
}

impl BadgeMarkup<'_> {
    fn span_style<'s>(
        &'s self,
        background: &'s str,
        border_radius: Cow<'s, str>,
        color: Option<&'s str>,
        text_shadow: Option<&'s str>,
    ) -> StyleDecls<'s> {
        let options = self.options;
        StyleDecls::new()
            .with("background", background)
            .with("border-radius", border_radius)
            .with("color", text(color))
            .with("font-family", text(options.font_family.as_deref()))
            .with("font-size", text(options.font_size.as_deref()))
            .with("padding", text(options.padding.as_deref()))
            .with("text-shadow", text(text_shadow))
    }

    fn write_spans(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.options;
        let layout = options.layout.unwrap_or_default();
        let (label_radius, value_radius) =
            layout.border_radii(text(options.border_radius.as_deref()));
        let label_style = self.span_style(
            text(options.label_background.as_deref()),
            label_radius,
            options.label_text_color.as_deref(),
            options.label_text_shadow.as_deref(),
        );
        let value_style = self.span_style(
            self.value_background,
            value_radius,
            options.value_text_color.as_deref(),
            options.value_text_shadow.as_deref(),
        );
        write!(
            f,
            r#"<span style="{label_style}">{label}</span><span style="{value_style}">{value}</span>"#,
            label = self.label,
            value = self.value,
        )
    }

    /// Write the markup.
    ///
    /// # Errors
    ///
    /// Returns an [`fmt::Error`] if writing into the buffer fails.
    pub fn write_into(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = self.options;
        let url = text(options.url.as_deref());
        if url.is_empty() {
            return self.write_spans(f);
        }
        write!(f, r#"<a href="{url}""#)?;
        let target = text(options.link_target.as_deref());
        if !target.is_empty() {
            write!(f, r#" target="{target}""#)?;
            if target == BLANK_TARGET {
                f.write_str(r#" rel="noopener noreferer""#)?;
            }
        }
        let link_style = StyleDecls::new().with(
            "text-decoration",
            text(options.link_decoration.as_deref()),
        );
        write!(f, r#" style="{link_style}">"#)?;
        self.write_spans(f)?;
        f.write_str("</a>")
    }
}

impl fmt::Display for BadgeMarkup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_into(f)
    }
}

/// Render the markup of a badge.
#[must_use]
pub fn render(options: &Options, label: &str, value: &str, value_background: &str) -> String {
    let markup = BadgeMarkup {
        options,
        label,
        value,
        value_background,
    };
    tracing::trace!(label, value, value_background, "rendering badge");
    markup.to_string()
}
