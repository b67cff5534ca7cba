//! Decoding caller-supplied arrays into integers.
//!
//! Both decoders fail on the first bad element and report its index; no
//! partially decoded array is ever returned.

use crate::error::{SortError, SortResult};
use serde_json::Value;

/// Parses a comma-separated (or, without commas, whitespace-separated) list
/// of integers. Blank input is the empty array.
pub fn parse_list(text: &str) -> SortResult<Vec<i64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    if text.contains(',') {
        text.split(',')
            .enumerate()
            .map(|(index, token)| parse_token(index, token.trim()))
            .collect()
    } else {
        text.split_whitespace()
            .enumerate()
            .map(|(index, token)| parse_token(index, token))
            .collect()
    }
}

/// Decodes a JSON array of integers. Integral floats (`3.0`) are accepted
/// while they stay below 2^53, where every integer is still exact.
///
/// Non-integer JSON numbers reach this decoder as `f64`, so a literal such as
/// `1.0000000000000000001` has already been rounded to `1.0` by the JSON
/// parser. Callers holding the raw text should use [`parse_list`], which
/// checks the digits themselves.
pub fn from_json(value: &Value) -> SortResult<Vec<i64>> {
    let items = value.as_array().ok_or_else(|| {
        SortError::invalid_input(
            None,
            format!("expected a JSON array of integers, got {}", kind(value)),
        )
    })?;
    items
        .iter()
        .enumerate()
        .map(|(index, item)| json_item(index, item))
        .collect()
}

fn parse_token(index: usize, token: &str) -> SortResult<i64> {
    if token.is_empty() {
        return Err(SortError::invalid_input(Some(index), "empty entry"));
    }
    if let Ok(value) = token.parse::<i64>() {
        return Ok(value);
    }
    let reason = match token.parse::<f64>() {
        Err(_) => format!("'{token}' is not a number"),
        Ok(f) if !f.is_finite() => format!("{token} is not a finite number"),
        Ok(_) => match decimal_integer(token) {
            Decimal::Integer(value) => return Ok(value),
            Decimal::Fraction => format!("{token} is not an integer"),
            Decimal::OutOfRange => format!("{token} is out of range"),
        },
    };
    Err(SortError::invalid_input(Some(index), reason))
}

enum Decimal {
    Integer(i64),
    Fraction,
    OutOfRange,
}

/// Reads a finite decimal literal (`-12.500e1`) digit by digit, so the
/// integer it denotes never passes through `f64`.
fn decimal_integer(token: &str) -> Decimal {
    let (negative, unsigned) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let (mantissa, exponent) = match unsigned.split_once(|c: char| c == 'e' || c == 'E') {
        Some((mantissa, exp)) => {
            let saturated = if exp.starts_with('-') { i64::MIN } else { i64::MAX };
            (mantissa, exp.parse::<i64>().unwrap_or(saturated))
        }
        None => (unsigned, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let joined = format!("{whole}{fraction}");
    let digits = joined.trim_start_matches('0');
    if digits.is_empty() {
        return Decimal::Integer(0);
    }

    let shift = exponent.saturating_sub(fraction.len() as i64);
    let magnitude = if shift >= 0 {
        // a leading non-zero digit followed by 19 zeros already exceeds i64
        if shift > 19 {
            return Decimal::OutOfRange;
        }
        format!("{digits}{}", "0".repeat(shift as usize))
    } else {
        let cut = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
        if cut >= digits.len() {
            return Decimal::Fraction;
        }
        let (int, frac) = digits.split_at(digits.len() - cut);
        if frac.bytes().any(|b| b != b'0') {
            return Decimal::Fraction;
        }
        int.to_string()
    };
    let signed = if negative { format!("-{magnitude}") } else { magnitude };
    signed
        .parse::<i64>()
        .map_or(Decimal::OutOfRange, Decimal::Integer)
}

fn json_item(index: usize, item: &Value) -> SortResult<i64> {
    match item {
        Value::Number(n) => match n.as_i64() {
            Some(value) => Ok(value),
            None => {
                let f = n.as_f64().ok_or_else(|| {
                    SortError::invalid_input(Some(index), format!("{n} is not representable"))
                })?;
                exact_float(index, f)
            }
        },
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(f) if !f.is_finite() => Err(SortError::invalid_input(
                Some(index),
                format!("'{s}' is not a finite number"),
            )),
            _ => Err(SortError::invalid_input(
                Some(index),
                format!("expected an integer, got string '{s}'"),
            )),
        },
        other => Err(SortError::invalid_input(
            Some(index),
            format!("expected an integer, got {}", kind(other)),
        )),
    }
}

// 2^53: past this, adjacent integers share an f64.
const EXACT_LIMIT: f64 = 9_007_199_254_740_992.0;

fn exact_float(index: usize, f: f64) -> SortResult<i64> {
    if !f.is_finite() {
        return Err(SortError::invalid_input(
            Some(index),
            format!("{f} is not a finite number"),
        ));
    }
    if f.fract() != 0.0 {
        return Err(SortError::invalid_input(
            Some(index),
            format!("{f} is not an integer"),
        ));
    }
    if f.abs() >= EXACT_LIMIT {
        return Err(SortError::invalid_input(
            Some(index),
            format!("{f} is too large to be an exact integer"),
        ));
    }
    Ok(f as i64)
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
