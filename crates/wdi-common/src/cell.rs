//! Cell conversions for Polars `AnyValue`s.
//!
//! The indicator table is read with schema inference, so one indicator may
//! come back as `Int64`, another as `Float64`, and a column that is empty for
//! the first rows as `String`. These helpers flatten that variety into the
//! three shapes the rest of the workspace needs: display text, a finite
//! number, or a calendar year.

use polars::prelude::AnyValue;

/// Converts a cell to display text.
///
/// Nulls become an empty string; floats go through [`format_value`].
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use wdi_common::cell_text;
///
/// assert_eq!(cell_text(AnyValue::Null), "");
/// assert_eq!(cell_text(AnyValue::Int64(2010)), "2010");
/// assert_eq!(cell_text(AnyValue::Float64(12.5)), "12.5");
/// assert_eq!(cell_text(AnyValue::String("France")), "France");
/// ```
pub fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_value(f64::from(v)),
        AnyValue::Float64(v) => format_value(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Converts a cell to a finite `f64`.
///
/// Null, NaN, infinities, blank strings and non-numeric strings all yield
/// `None`; a missing observation and an unparseable one are the same thing
/// to a chart.
pub fn cell_number(value: AnyValue<'_>) -> Option<f64> {
    let number = match value {
        AnyValue::Int8(v) => f64::from(v),
        AnyValue::Int16(v) => f64::from(v),
        AnyValue::Int32(v) => f64::from(v),
        AnyValue::Int64(v) => v as f64,
        AnyValue::UInt8(v) => f64::from(v),
        AnyValue::UInt16(v) => f64::from(v),
        AnyValue::UInt32(v) => f64::from(v),
        AnyValue::UInt64(v) => v as f64,
        AnyValue::Float32(v) => f64::from(v),
        AnyValue::Float64(v) => v,
        AnyValue::String(s) => return parse_number(s),
        AnyValue::StringOwned(s) => return parse_number(&s),
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Converts a cell to a calendar year.
///
/// Spreadsheet exports frequently store years as floats (`2010.0`); those
/// are accepted when they carry no fractional part.
pub fn cell_year(value: AnyValue<'_>) -> Option<i32> {
    match value {
        AnyValue::Int8(v) => Some(i32::from(v)),
        AnyValue::Int16(v) => Some(i32::from(v)),
        AnyValue::Int32(v) => Some(v),
        AnyValue::Int64(v) => i32::try_from(v).ok(),
        AnyValue::UInt8(v) => Some(i32::from(v)),
        AnyValue::UInt16(v) => Some(i32::from(v)),
        AnyValue::UInt32(v) => i32::try_from(v).ok(),
        AnyValue::UInt64(v) => i32::try_from(v).ok(),
        AnyValue::Float32(v) => whole_year(f64::from(v)),
        AnyValue::Float64(v) => whole_year(v),
        AnyValue::String(s) => parse_number(s).and_then(whole_year),
        AnyValue::StringOwned(s) => parse_number(&s).and_then(whole_year),
        _ => None,
    }
}

fn whole_year(value: f64) -> Option<i32> {
    if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    Some(value as i32)
}

/// Parses trimmed text as a finite `f64`.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Formats an indicator value for display.
///
/// Whole numbers print without a decimal point, other values keep at most
/// four decimals, and tiny non-zero magnitudes switch to scientific notation
/// so they do not collapse to `0`.
///
/// # Examples
///
/// ```
/// use wdi_common::format_value;
///
/// assert_eq!(format_value(104_258_327.0), "104258327");
/// assert_eq!(format_value(3.14159265), "3.1416");
/// assert_eq!(format_value(2.5), "2.5");
/// assert_eq!(format_value(0.0), "0");
/// ```
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{value:.0}");
    }
    if value != 0.0 && value.abs() < 1e-4 {
        return format!("{value:.3e}");
    }
    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_of_null_is_empty() {
        assert_eq!(cell_text(AnyValue::Null), "");
    }

    #[test]
    fn text_of_floats_is_trimmed() {
        assert_eq!(cell_text(AnyValue::Float64(1.0)), "1");
        assert_eq!(cell_text(AnyValue::Float32(0.5)), "0.5");
        assert_eq!(cell_text(AnyValue::Float64(72.123456)), "72.1235");
    }

    #[test]
    fn number_rejects_nan_and_blank() {
        assert_eq!(cell_number(AnyValue::Null), None);
        assert_eq!(cell_number(AnyValue::Float64(f64::NAN)), None);
        assert_eq!(cell_number(AnyValue::Float64(f64::INFINITY)), None);
        assert_eq!(cell_number(AnyValue::String("  ")), None);
        assert_eq!(cell_number(AnyValue::String("n/a")), None);
    }

    #[test]
    fn number_accepts_mixed_numeric_types() {
        assert_eq!(cell_number(AnyValue::Int64(42)), Some(42.0));
        assert_eq!(cell_number(AnyValue::UInt32(7)), Some(7.0));
        assert_eq!(cell_number(AnyValue::Float64(-1.25)), Some(-1.25));
        assert_eq!(cell_number(AnyValue::String(" 3.5 ")), Some(3.5));
    }

    #[test]
    fn year_accepts_whole_floats_only() {
        assert_eq!(cell_year(AnyValue::Int64(2001)), Some(2001));
        assert_eq!(cell_year(AnyValue::Float64(2010.0)), Some(2010));
        assert_eq!(cell_year(AnyValue::Float64(2010.5)), None);
        assert_eq!(cell_year(AnyValue::String("1999")), Some(1999));
        assert_eq!(cell_year(AnyValue::Int64(i64::MAX)), None);
        assert_eq!(cell_year(AnyValue::Null), None);
    }

    #[test]
    fn format_handles_small_and_negative_values() {
        assert_eq!(format_value(-12.0), "-12");
        assert_eq!(format_value(-0.00001), "-1.000e-5");
        assert_eq!(format_value(0.10), "0.1");
    }
}
