// SPDX-FileCopyrightText: The abadge authors
// SPDX-License-Identifier: MPL-2.0

#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(unreachable_pub)]
#![warn(unsafe_code)]
#![warn(clippy::pedantic)]
#![warn(rustdoc::broken_intra_doc_links)]
#![cfg_attr(not(test), deny(clippy::panic_in_result_fn))]
#![cfg_attr(not(debug_assertions), deny(clippy::used_underscore_binding))]

//! Badges/shields rendered with pure HTML/CSS.
//!
//! A badge is a pair of inline-styled `<span>` elements, e.g.
//! `build: passing`, optionally wrapped into a link. The background of
//! the value is either fixed or resolved by value or threshold.
//!
//! Refer to [`docs`] for more information.

pub mod docs;

pub mod html;
pub mod options;
pub mod threshold;
pub mod value;

use compact_str::CompactString;

pub use self::{
    options::{Arg, OptionKey, Options},
    threshold::{ColorResolver, OrderKind, ThresholdSpec, Thresholds, ValueBackgrounds},
    value::Value,
};

/// Type of a CSS color
pub type Color = CompactString;

/// Type of a badge label
pub type Label = CompactString;

/// A badge error
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum Error {
    /// Invalid or missing positional arguments.
    #[display("invalid argument: {_0}")]
    InvalidArgument(#[error(not(source))] CompactString),

    /// Unexpected keyword argument.
    #[display("unexpected option '{key}'")]
    UnknownOption {
        /// The rejected key
        key: CompactString,
    },

    /// Keyword argument of the wrong type.
    #[display("option '{key}' expects {expected}")]
    InvalidOptionType {
        /// The key
        key: &'static str,

        /// Description of the accepted arguments
        expected: &'static str,
    },

    /// No color defined for the value.
    #[display("undefined color for value '{value}' of label '{label}'")]
    UndefinedColor {
        /// The label
        label: Label,

        /// The displayed value
        value: CompactString,
    },

    /// Value or boundaries of a threshold cannot be compared.
    #[display("{_0:#}")]
    IncompatibleOrder(#[error(not(source))] anyhow::Error),
}

impl Error {
    /// Check for errors caused by keyword arguments.
    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownOption { .. } | Self::InvalidOptionType { .. }
        )
    }

    /// Check for errors caused by positional arguments.
    #[must_use]
    pub const fn is_value_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

/// Result type with [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// A configured badge
///
/// The options are fixed after construction and rendering never
/// modifies the badge.
#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    options: Options,
}

impl Default for Badge {
    fn default() -> Self {
        Self {
            options: Options::defaults(),
        }
    }
}

impl Badge {
    /// Create a badge with options on top of the defaults.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            options: Options::defaults().overlay(options),
        }
    }

    /// Create a badge from positional arguments and options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for more than two positional
    /// arguments.
    pub fn with_args(args: &[Value], options: &Options) -> Result<Self> {
        let mut badge = Self::new(options);
        badge.options.apply_args(args)?;
        Ok(badge)
    }

    /// Create a badge from keyword arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the keyword arguments is rejected,
    /// see [`Options::set()`].
    pub fn from_kwargs<I, K, A>(kwargs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, A)>,
        K: AsRef<str>,
        A: Into<Arg>,
    {
        Options::from_kwargs(kwargs).map(|options| Self::new(&options))
    }

    /// The effective options.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Render the configured label and value.
    ///
    /// # Errors
    ///
    /// Returns an error if the background of the value cannot be resolved.
    pub fn to_html(&self) -> Result<String> {
        render_options(&self.options)
    }

    /// Render a label and value.
    ///
    /// # Errors
    ///
    /// Returns an error if the background of the value cannot be resolved.
    pub fn render(&self, label: impl Into<Value>, value: impl Into<Value>) -> Result<String> {
        self.render_with(&[label.into(), value.into()], &Options::default())
    }

    /// Render with positional arguments and overrides.
    ///
    /// Both the positional arguments (label, value) and the overrides
    /// only apply to this invocation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for more than two positional
    /// arguments or an error if the background of the value cannot
    /// be resolved.
    pub fn render_with(&self, args: &[Value], overrides: &Options) -> Result<String> {
        let mut options = self.options.overlay(overrides);
        options.apply_args(args)?;
        render_options(&options)
    }
}

fn render_options(options: &Options) -> Result<String> {
    let (label, value) = options.label_and_value()?;
    let resolver = ColorResolver {
        value_backgrounds: options.value_backgrounds.as_ref(),
        thresholds: options.thresholds.as_ref(),
        fallback: options.value_background.as_ref(),
    };
    let value_background = resolver.resolve(label, value)?;
    Ok(html::render(
        options,
        label,
        &value.to_text(),
        value_background,
    ))
}

/// Render a badge with the default options and `overrides`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] for more than two positional
/// arguments or an error if the background of the value cannot
/// be resolved.
pub fn make_badge(args: &[Value], overrides: &Options) -> Result<String> {
    Badge::default().render_with(args, overrides)
}
