//! Float rendering for the `Result:` line.
//!
//! Shortest round-trip digits, integral values keep a `.0`, and very large or
//! very small magnitudes switch to scientific notation (`1e+16`, `1.5e-07`).

/// Decimal exponents in `[FIXED_MIN_EXP, FIXED_MAX_EXP)` print in fixed notation.
const FIXED_MIN_EXP: i32 = -4;
const FIXED_MAX_EXP: i32 = 16;

pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.25e2", "9e0".
    let sci = format!("{:e}", value.abs());
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (FIXED_MIN_EXP..FIXED_MAX_EXP).contains(&exp) {
        fixed_notation(&digits, exp)
    } else {
        let exp_sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, exp_sign, exp.abs())
    };

    format!("{sign}{body}")
}

fn fixed_notation(digits: &str, exp: i32) -> String {
    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("0.{zeros}{digits}");
    }

    let int_len = exp as usize + 1;
    if digits.len() <= int_len {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{digits}{zeros}.0")
    } else {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{int_part}.{frac_part}")
    }
}
