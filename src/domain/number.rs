//! Operand parsing and result formatting

/// Maximum number of fractional digits shown for a result.
pub const MAX_FRACTION_DIGITS: usize = 2;

/// Parses raw field text into a finite number.
///
/// Surrounding whitespace is ignored. Empty, partial, non-numeric and
/// non-finite text (`inf`, `NaN`) yields `None`.
pub fn parse_operand(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Formats a result with at most two fractional digits.
///
/// Rounds half-up (away from zero) on the shortest decimal representation of
/// `value`, so `12.345` becomes `"12.35"` even though its binary value is
/// slightly below the midpoint. Trailing zeros and a bare decimal point are
/// dropped. Non-finite values are rendered with their `Display` form.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // `Display` for f64 never switches to exponent notation
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(
            frac_part
                .bytes()
                .chain(std::iter::repeat(b'0'))
                .take(MAX_FRACTION_DIGITS),
        )
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(MAX_FRACTION_DIGITS)
        .is_some_and(|d| *d >= b'5');
    if round_up && !increment(&mut digits) {
        digits.insert(0, 1);
    }

    let split = digits.len() - MAX_FRACTION_DIGITS;
    let int_digits = render_digits(&digits[..split]);
    let frac_digits = render_digits(&digits[split..]);
    let frac_digits = frac_digits.trim_end_matches('0');

    let is_zero = digits.iter().all(|d| *d == 0);
    let sign = if value.is_sign_negative() && !is_zero {
        "-"
    } else {
        ""
    };

    if frac_digits.is_empty() {
        format!("{sign}{int_digits}")
    } else {
        format!("{sign}{int_digits}.{frac_digits}")
    }
}

/// Adds one unit in the last place. Returns `false` when the carry overflows
/// past the most significant digit.
fn increment(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return true;
        }
    }
    false
}

fn render_digits(digits: &[u8]) -> String {
    digits.iter().map(|d| char::from(b'0' + d)).collect()
}
