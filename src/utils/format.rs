/// Renders a sum in its shortest round-trip form.
///
/// Whole numbers keep a `.0` suffix and very large or very small magnitudes
/// switch to scientific notation with a signed, two-digit exponent, so the
/// output reads `5.5`, `0.0`, `1e+16` or `1.5e-05`. When two shortest
/// candidates are equally close, the one with the even last digit wins.
pub fn format_sum(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let mut buffer = ryu::Buffer::new();
    let (negative, digits, decpt) = decompose(buffer.format_finite(value));
    layout(negative, &digits, decpt)
}

/// Splits a decimal rendering into sign, significant digits and the position
/// of the decimal point, so that `|value| = 0.DIGITS * 10^decpt`.
fn decompose(repr: &str) -> (bool, String, i32) {
    let (negative, unsigned) = match repr.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, repr),
    };
    let (mantissa, exponent) = match unsigned.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (unsigned, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let all_digits = format!("{}{}", int_part, frac_part);
    let without_leading = all_digits.trim_start_matches('0');
    let decpt = int_part.len() as i32 + exponent - (all_digits.len() - without_leading.len()) as i32;

    (negative, without_leading.trim_end_matches('0').to_string(), decpt)
}

// Fixed notation for 1e-4 <= |x| < 1e16, scientific otherwise.
fn layout(negative: bool, digits: &str, decpt: i32) -> String {
    let body = if decpt <= -4 || decpt > 16 {
        let exponent = decpt - 1;
        let (lead, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{}", rest)
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}{}e{}{:02}", lead, fraction, exp_sign, exponent.abs())
    } else if decpt <= 0 {
        format!("0.{}{}", "0".repeat(decpt.unsigned_abs() as usize), digits)
    } else {
        let point = decpt as usize;
        if point >= digits.len() {
            format!("{}{}.0", digits, "0".repeat(point - digits.len()))
        } else {
            format!("{}.{}", &digits[..point], &digits[point..])
        }
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}
