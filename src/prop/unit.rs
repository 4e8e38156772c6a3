//! Dimension arithmetic and unit constructors.
//!
//! Values enter as [`PropValue`]s, either bare numbers (unitless) or
//! strings carrying a unit suffix such as `"5px"`. Arithmetic keeps the
//! unit, rejects mixing incompatible units and renders zero as plain `0`.
//!
//! ```
//! use styletree::prop::unit;
//!
//! assert_eq!(unit::px(16.0), "16px");
//! assert_eq!(unit::add("5em", "8em")?, "13em");
//! assert_eq!(unit::sub("5px", "5px")?, "0");
//! # Ok::<(), styletree::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::props::PropValue;

/// A numeric value with an optional unit suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: Option<String>,
}

impl Dimension {
    /// Renders the dimension as a property value string. Zero renders as
    /// `0` regardless of unit.
    pub fn render(&self) -> String {
        if self.value == 0.0 {
            return "0".to_string();
        }
        match &self.unit {
            Some(unit) => format!("{}{}", self.value, unit),
            None => self.value.to_string(),
        }
    }
}

/// Parses a property value into a [`Dimension`].
///
/// Bare numbers are unitless. Strings must carry a unit: an optional sign,
/// digits with an optional fraction, then `%` or an alphabetic unit whose
/// case is preserved. Anything else is [`Error::InvalidValue`].
pub fn parse(value: &PropValue) -> Result<Dimension> {
    match value {
        PropValue::Number(n) if n.is_finite() => Ok(Dimension {
            value: *n,
            unit: None,
        }),
        PropValue::Number(n) => Err(Error::InvalidValue {
            value: n.to_string(),
        }),
        PropValue::Text(text) => {
            split_dimension(text.trim()).ok_or_else(|| Error::InvalidValue {
                value: text.clone(),
            })
        }
    }
}

fn split_dimension(input: &str) -> Option<Dimension> {
    let bytes = input.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(&b'+') | Some(&b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;
    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - frac_start;
        if frac_digits == 0 {
            return None;
        }
        i = j;
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    let (number, unit) = input.split_at(i);
    if unit.is_empty() {
        return None;
    }
    if unit != "%" && !unit.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let value = number.parse().ok()?;
    Some(Dimension {
        value,
        unit: Some(unit.to_string()),
    })
}

fn additive(x: Dimension, y: Dimension, op: impl Fn(f64, f64) -> f64) -> Result<Dimension> {
    if x.unit != y.unit && x.value != 0.0 && y.value != 0.0 {
        return Err(Error::IncompatibleUnits {
            left: x.unit,
            right: y.unit,
        });
    }
    let value = op(x.value, y.value);
    let unit = x.unit.or(y.unit);
    Ok(Dimension { value, unit })
}

fn multiplicative(x: Dimension, factor: f64, op: impl Fn(f64, f64) -> f64) -> Result<Dimension> {
    let value = op(x.value, factor);
    if !value.is_finite() {
        return Err(Error::InvalidValue {
            value: value.to_string(),
        });
    }
    Ok(Dimension {
        value,
        unit: x.unit,
    })
}

/// Adds two dimensions. A zero operand adopts the other's unit.
pub fn add(x: impl Into<PropValue>, y: impl Into<PropValue>) -> Result<String> {
    let x = parse(&x.into())?;
    let y = parse(&y.into())?;
    Ok(additive(x, y, |a, b| a + b)?.render())
}

/// Subtracts `y` from `x`.
pub fn sub(x: impl Into<PropValue>, y: impl Into<PropValue>) -> Result<String> {
    let x = parse(&x.into())?;
    let y = parse(&y.into())?;
    Ok(additive(x, y, |a, b| a - b)?.render())
}

/// Multiplies a dimension by a unitless factor.
pub fn mul(x: impl Into<PropValue>, factor: f64) -> Result<String> {
    let x = parse(&x.into())?;
    Ok(multiplicative(x, factor, |a, b| a * b)?.render())
}

/// Divides a dimension by a unitless factor.
pub fn div(x: impl Into<PropValue>, factor: f64) -> Result<String> {
    let x = parse(&x.into())?;
    Ok(multiplicative(x, factor, |a, b| a / b)?.render())
}

/// Remainder of dividing a dimension by a unitless factor.
pub fn modulo(x: impl Into<PropValue>, factor: f64) -> Result<String> {
    let x = parse(&x.into())?;
    Ok(multiplicative(x, factor, |a, b| a % b)?.render())
}

fn with_unit(n: f64, unit: &str) -> String {
    Dimension {
        value: n,
        unit: Some(unit.to_string()),
    }
    .render()
}

// angle units
pub fn deg(n: f64) -> String {
    with_unit(n, "deg")
}

pub fn grad(n: f64) -> String {
    with_unit(n, "grad")
}

pub fn rad(n: f64) -> String {
    with_unit(n, "rad")
}

pub fn turn(n: f64) -> String {
    with_unit(n, "turn")
}

// font-relative lengths
pub fn em(n: f64) -> String {
    with_unit(n, "em")
}

pub fn ex(n: f64) -> String {
    with_unit(n, "ex")
}

pub fn ch(n: f64) -> String {
    with_unit(n, "ch")
}

pub fn rem(n: f64) -> String {
    with_unit(n, "rem")
}

// viewport-percentage lengths
pub fn vh(n: f64) -> String {
    with_unit(n, "vh")
}

pub fn vw(n: f64) -> String {
    with_unit(n, "vw")
}

pub fn vmin(n: f64) -> String {
    with_unit(n, "vmin")
}

pub fn vmax(n: f64) -> String {
    with_unit(n, "vmax")
}

// absolute lengths
pub fn px(n: f64) -> String {
    with_unit(n, "px")
}

pub fn mm(n: f64) -> String {
    with_unit(n, "mm")
}

pub fn q(n: f64) -> String {
    with_unit(n, "q")
}

pub fn cm(n: f64) -> String {
    with_unit(n, "cm")
}

pub fn inch(n: f64) -> String {
    with_unit(n, "in")
}

pub fn pt(n: f64) -> String {
    with_unit(n, "pt")
}

pub fn pc(n: f64) -> String {
    with_unit(n, "pc")
}

// percentages
pub fn percentage(n: f64) -> String {
    with_unit(n, "%")
}

// resolution units
pub fn dpi(n: f64) -> String {
    with_unit(n, "dpi")
}

pub fn dpcm(n: f64) -> String {
    with_unit(n, "dpcm")
}

pub fn dppx(n: f64) -> String {
    with_unit(n, "dppx")
}

// durations
pub fn s(n: f64) -> String {
    with_unit(n, "s")
}

pub fn ms(n: f64) -> String {
    with_unit(n, "ms")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_adds_compatible_dimensions() {
        assert_eq!(add("5em", "8em").unwrap(), "13em");
    }

    #[test]
    fn test_subtracts_into_negative_values() {
        assert_eq!(sub("-5px", "10px").unwrap(), "-15px");
    }

    #[test]
    fn test_rejects_incompatible_units() {
        let err = add("5em", "8px").unwrap_err();
        assert_eq!(
            err,
            Error::IncompatibleUnits {
                left: Some("em".to_string()),
                right: Some("px".to_string()),
            },
        );
        assert_eq!(err.to_string(), "incompatible units: \"em\" and \"px\"");
    }

    #[test]
    fn test_zero_operand_adopts_the_other_unit() {
        assert_eq!(add("5px", 0).unwrap(), "5px");
        assert_eq!(add(0, "5px").unwrap(), "5px");
        assert_eq!(sub("5px", 0).unwrap(), "5px");
    }

    #[test]
    fn test_zero_result_renders_bare() {
        assert_eq!(sub("5px", "5px").unwrap(), "0");
    }

    #[test]
    fn test_unitless_arithmetic_renders_the_number() {
        assert_eq!(add(5, 8).unwrap(), "13");
        assert_eq!(add(1.25, 0.25).unwrap(), "1.5");
        assert_eq!(sub(3, 3).unwrap(), "0");
    }

    #[test]
    fn test_multiplicative_operations() {
        assert_eq!(mul("5px", 3.0).unwrap(), "15px");
        assert_eq!(div("15px", 3.0).unwrap(), "5px");
        assert_eq!(modulo("7px", 2.0).unwrap(), "1px");
        assert_eq!(mul("5px", 0.0).unwrap(), "0");
    }

    #[test]
    fn test_nonfinite_results_are_invalid() {
        assert!(matches!(
            div("5px", 0.0),
            Err(Error::InvalidValue { .. }),
        ));
        assert!(matches!(
            add(f64::NAN, 1),
            Err(Error::InvalidValue { .. }),
        ));
    }

    #[test]
    fn test_bare_number_strings_are_invalid() {
        assert!(matches!(
            parse(&PropValue::from("16")),
            Err(Error::InvalidValue { .. }),
        ));
        assert!(add("16", "5px").is_err());
    }

    #[test]
    fn test_rejects_malformed_text() {
        for input in ["12foo34", "abc", "1.em", "5 px", ""] {
            assert!(
                parse(&PropValue::from(input)).is_err(),
                "accepted {input:?}",
            );
        }
    }

    #[test]
    fn test_parses_signed_and_fractional_dimensions() {
        assert_eq!(
            parse(&".5em".into()).unwrap(),
            Dimension {
                value: 0.5,
                unit: Some("em".to_string()),
            },
        );
        assert_eq!(
            parse(&"+2.25rem".into()).unwrap(),
            Dimension {
                value: 2.25,
                unit: Some("rem".to_string()),
            },
        );
        assert_eq!(
            parse(&" 50% ".into()).unwrap(),
            Dimension {
                value: 50.0,
                unit: Some("%".to_string()),
            },
        );
        assert_eq!(parse(&"5Px".into()).unwrap().unit.as_deref(), Some("Px"));
    }

    #[test]
    fn test_unit_constructors() {
        assert_eq!(px(16.0), "16px");
        assert_eq!(percentage(50.0), "50%");
        assert_eq!(ms(300.0), "300ms");
        assert_eq!(inch(2.0), "2in");
        assert_eq!(deg(-90.0), "-90deg");
        assert_eq!(rem(1.125), "1.125rem");
        assert_eq!(px(0.0), "0");
    }
}
