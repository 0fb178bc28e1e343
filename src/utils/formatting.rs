use std::io::{self, Write};

use crate::{models::product::Product, services::pricing_service::discounted_price};

const SIGNIFICANT_DIGITS: i32 = 6;

/// Render an amount the way a default-configured C++ output stream does:
/// six significant digits, no trailing zeros, and scientific notation once
/// the decimal exponent leaves the `-4..6` range.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Exponent after rounding to the target precision, so 9999999 becomes 1e+07.
    let scientific = format!("{:.*e}", (SIGNIFICANT_DIGITS - 1) as usize, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= SIGNIFICANT_DIGITS {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    } else {
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_trailing_zeros(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

pub fn format_expected_line(index: usize, expected: f64) -> String {
    format!(
        "The expect price of product {} is {}",
        index,
        format_amount(expected)
    )
}

/// Print the discounted price of one product on its own line.
pub fn print_price<W: Write>(out: &mut W, product: &Product) -> io::Result<()> {
    writeln!(
        out,
        "The price of product is {}",
        format_amount(discounted_price(product))
    )
}
