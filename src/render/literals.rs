//! Text forms of constant operands.

use std::fmt::Write;

/// Format a float the way C's `%g` does: six significant digits, trailing
/// zeros removed, scientific notation for very small or large magnitudes.
///
/// Negative zero keeps its fraction so it reads back as a float; `-0` would
/// reparse as the integer zero.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0" }.to_string();
    }

    // Round to six significant digits first; the exponent of the rounded
    // value decides the notation.
    let sci = format!("{value:.5e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..6).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (5 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Quote a string constant using the escapes the lexer understands.
///
/// Control characters without a named escape are written as `\xhh` in
/// lower case; the lexer decodes hex digits in either case.
pub(crate) fn quote_string(text: &str, buf: &mut String) {
    buf.push('"');
    for c in text.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\r' => buf.push_str("\\r"),
            '\n' => buf.push_str("\\n"),
            '\u{0c}' => buf.push_str("\\f"),
            '\t' => buf.push_str("\\t"),
            c if c.is_ascii_control() => {
                let _ = write!(buf, "\\x{:02x}", c as u32);
            }
            c => buf.push(c),
        }
    }
    buf.push('"');
}
