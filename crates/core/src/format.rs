/// Formats `value` with `digits` significant digits in the shortest general
/// notation.
///
/// Follows the conventions of `%g`: fixed notation unless the decimal
/// exponent is below -4 or at least `digits`, trailing zeros removed, and
/// exponents written with a sign and at least two digits.
///
/// ```
/// use planar_core::format_significant;
///
/// assert_eq!(format_significant(std::f64::consts::TAU, 10), "6.283185307");
/// assert_eq!(format_significant(0.5, 10), "0.5");
/// assert_eq!(format_significant(1e-5, 10), "1e-05");
/// ```
///
/// # Panics
///
/// Panics if `digits` is zero.
#[must_use]
pub fn format_significant(value: f64, digits: usize) -> String {
    assert!(digits > 0, "at least one significant digit is required");

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // The exponent after rounding to `digits` significant digits decides the
    // notation, e.g. 9.9999999999 rounds up to 1e+01.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .expect("exponent notation always contains 'e'");
    let exponent: i32 = exponent.parse().expect("exponent is an integer");

    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let precision = digits as i32;

    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        #[allow(clippy::cast_sign_loss)]
        let decimals = (precision - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Removes trailing zeros after a decimal point, and the point itself.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
