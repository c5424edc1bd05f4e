// SPDX-FileCopyrightText: The abadge authors
// SPDX-License-Identifier: MPL-2.0

use super::*;

fn thresholds() -> Thresholds {
    [
        (
            Label::from("foo"),
            ThresholdSpec::new([("a", "ac")])
                .with_order(OrderKind::Str)
                .with_above("xc"),
        ),
        (
            Label::from("bar"),
            ThresholdSpec::new([("b", "bc"), ("d", "dc")]).with_order(OrderKind::Str),
        ),
        (
            Label::from("baz"),
            ThresholdSpec::new([(3, "3c"), (1, "1c")])
                .with_order(OrderKind::Int)
                .with_above("xc"),
        ),
        (
            Label::from("boz"),
            ThresholdSpec::new([(1.1, "1.1c"), (3.2, "3.2c")])
                .with_order(OrderKind::Float)
                .with_above("xc"),
        ),
        (Label::from("qux"), ThresholdSpec::new([("a", "ac")])),
    ]
    .into_iter()
    .collect()
}

fn resolve(label: &str, value: impl Into<Value>) -> Result<String> {
    let thresholds = thresholds();
    let value_backgrounds: ValueBackgrounds = [("u", "uc")].into_iter().collect();
    let fallback = Color::from("#888");
    ColorResolver {
        value_backgrounds: Some(&value_backgrounds),
        thresholds: Some(&thresholds),
        fallback: Some(&fallback),
    }
    .resolve(label, &value.into())
    .map(ToString::to_string)
}

#[test]
fn parse_order_kind() {
    assert_eq!(OrderKind::Str, "str".parse().unwrap());
    assert_eq!(OrderKind::Int, "int".parse().unwrap());
    assert_eq!(OrderKind::Float, "float".parse().unwrap());
    let err = "Int".parse::<OrderKind>().unwrap_err();
    assert!(matches!(err, Error::IncompatibleOrder(_)));
    assert!(!err.is_value_error());
    assert!("".parse::<OrderKind>().is_err());
}

#[test]
fn value_backgrounds_take_priority_over_thresholds() {
    assert_eq!("uc", resolve("bar", "u").unwrap());
    assert_eq!("uc", resolve("baz", "u").unwrap());
    assert_eq!("uc", resolve("unknown", "u").unwrap());
}

#[test]
fn string_order() {
    assert_eq!("ac", resolve("foo", "a").unwrap());
    assert_eq!("xc", resolve("foo", "b").unwrap());
    assert_eq!("bc", resolve("bar", "a").unwrap());
    assert_eq!("bc", resolve("bar", "b").unwrap());
    assert_eq!("dc", resolve("bar", "c").unwrap());
    assert_eq!("dc", resolve("bar", "d").unwrap());
}

#[test]
fn string_order_compares_numbers_lexicographically() {
    let spec = ThresholdSpec::new([("2", "2c"), ("10", "10c")]).with_order(OrderKind::Str);
    assert_eq!(Some(&Color::from("2c")), spec.resolve(&Value::from(11)).unwrap());
    assert_eq!(Some(&Color::from("10c")), spec.resolve(&Value::from(1)).unwrap());
}

#[test]
fn string_order_without_above_is_undefined() {
    assert!(matches!(
        resolve("bar", "e"),
        Err(Error::UndefinedColor { .. })
    ));
}

#[test]
fn int_order() {
    assert_eq!("1c", resolve("baz", 0).unwrap());
    assert_eq!("1c", resolve("baz", 1).unwrap());
    assert_eq!("3c", resolve("baz", 2).unwrap());
    assert_eq!("3c", resolve("baz", 3).unwrap());
    assert_eq!("xc", resolve("baz", 4).unwrap());
    assert_eq!("1c", resolve("baz", -100).unwrap());
}

#[test]
fn int_order_accepts_integral_floats_and_numeric_strings() {
    assert_eq!("3c", resolve("baz", 3.0).unwrap());
    assert_eq!("3c", resolve("baz", "2").unwrap());
    let spec = ThresholdSpec::new([(1.0, "1c"), (3.0, "3c")]).with_order(OrderKind::Int);
    assert_eq!(Some(&Color::from("1c")), spec.resolve(&Value::from(1)).unwrap());
}

#[test]
fn int_order_truncates_fractional_values() {
    assert_eq!("3c", resolve("baz", 2.5).unwrap());
    assert_eq!("1c", resolve("baz", 0.9).unwrap());
    assert_eq!("3c", resolve("baz", 3.7).unwrap());
    assert_eq!("1c", resolve("baz", -0.5).unwrap());
    assert_eq!("xc", resolve("baz", f64::INFINITY).unwrap());
}

#[test]
fn int_order_rejects_incompatible_values() {
    assert!(matches!(
        resolve("baz", f64::NAN),
        Err(Error::IncompatibleOrder(_))
    ));
    assert!(matches!(
        resolve("baz", "two"),
        Err(Error::IncompatibleOrder(_))
    ));
}

#[test]
fn int_order_rejects_incompatible_boundaries_lazily() {
    let spec = ThresholdSpec::new([("one", "1c")]).with_order(OrderKind::Int);
    assert!(matches!(
        spec.resolve(&Value::from(1)),
        Err(Error::IncompatibleOrder(_))
    ));
    let spec = ThresholdSpec::new([(1.5, "1.5c")]).with_order(OrderKind::Int);
    assert!(matches!(
        spec.resolve(&Value::from(1)),
        Err(Error::IncompatibleOrder(_))
    ));
}

#[test]
fn float_order() {
    assert_eq!("1.1c", resolve("boz", 0.5).unwrap());
    assert_eq!("1.1c", resolve("boz", 1.01).unwrap());
    assert_eq!("1.1c", resolve("boz", 1.1).unwrap());
    assert_eq!("3.2c", resolve("boz", 1.11).unwrap());
    assert_eq!("xc", resolve("boz", 4).unwrap());
    assert_eq!("3.2c", resolve("boz", 2).unwrap());
}

#[test]
fn float_order_rejects_nan() {
    assert!(matches!(
        resolve("boz", f64::NAN),
        Err(Error::IncompatibleOrder(_))
    ));
}

#[test]
fn unordered_spec_requires_exact_match() {
    assert_eq!("ac", resolve("qux", "a").unwrap());
    assert!(matches!(
        resolve("qux", "b"),
        Err(Error::UndefinedColor { .. })
    ));
}

#[test]
fn unordered_spec_falls_back_to_above() {
    let spec = ThresholdSpec::new([(1, "1c")]).with_above("xc");
    assert_eq!(Some(&Color::from("1c")), spec.resolve(&Value::from(1.0)).unwrap());
    assert_eq!(Some(&Color::from("xc")), spec.resolve(&Value::from(2)).unwrap());
}

#[test]
fn unknown_label_falls_back() {
    assert_eq!("#888", resolve("unknown", "any").unwrap());
    let resolver = ColorResolver::default();
    assert!(matches!(
        resolver.resolve("unknown", &Value::from("any")),
        Err(Error::UndefinedColor { .. })
    ));
}

#[test]
fn value_backgrounds_replace_matching_values() {
    let mut backgrounds: ValueBackgrounds = [(1, "1c"), (2, "2c")].into_iter().collect();
    backgrounds.insert(1.0, "one");
    assert_eq!(2, backgrounds.len());
    assert_eq!(Some(&Color::from("one")), backgrounds.get(&Value::from(1)));
    assert_eq!(None, backgrounds.get(&Value::from("1")));
}
