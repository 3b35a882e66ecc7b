//! Literal formatting.

/// Wraps `value` in single quotes. Embedded quotes are not escaped.
pub fn quote_text(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    quoted.push_str(value);
    quoted.push('\'');
    quoted
}

/// Formats a float the way Go's `%v` verb does, then strips every trailing
/// `'0'` character.
///
/// Values print in their shortest round-trip form. Decimal exponents below
/// -4 or at 6 and above switch to exponent form with at least two exponent
/// digits (`1e+06`, `1e-07`). Infinities print as `+Inf`/`-Inf`.
///
/// The strip applies to whole numbers and exponents too: `2.0` formats as
/// `2`, `20.0` as `2`, `0.0` as the empty string and `1e20` as `1e+2`.
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "+Inf" } else { "-Inf" });
    }
    strip_zeros(shortest(&format!("{value:e}"), value.to_string()))
}

/// Like [`format_float`], with the shortest digits of an `f32`.
pub fn format_float32(value: f32) -> String {
    if !value.is_finite() {
        return format_float(f64::from(value));
    }
    strip_zeros(shortest(&format!("{value:e}"), value.to_string()))
}

/// Picks between the exponent form `scientific` (Rust's `{:e}`, e.g.
/// `1.5e-7`) and the plain decimal form `plain`.
fn shortest(scientific: &str, plain: String) -> String {
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return plain;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return plain;
    };
    if (-4..6).contains(&exp) {
        return plain;
    }
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{:02}", exp.unsigned_abs())
}

fn strip_zeros(mut formatted: String) -> String {
    let len = formatted.trim_end_matches('0').len();
    formatted.truncate(len);
    formatted
}

/// Booleans render as quoted strings, never as SQL `TRUE`/`FALSE`.
pub fn format_bool(value: bool) -> String {
    if value {
        String::from("'true'")
    } else {
        String::from("'false'")
    }
}
