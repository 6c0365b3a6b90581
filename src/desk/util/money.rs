/// Currency symbol printed in front of every amount.
pub(crate) const CURRENCY: &str = "₹";

/// Render an amount with at most two decimals and no trailing zeros,
/// so `45000.0` prints as `45000` and `590.5` as `590.5`.
pub(crate) fn format_amount(amount: f64) -> String {
    let rounded = (amount * 100.0).round() / 100.0;
    // avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i64)
    } else {
        let text = format!("{:.2}", rounded);
        text.trim_end_matches('0').to_string()
    }
}

pub(crate) fn rupees(amount: f64) -> String {
    format!("{}{}", CURRENCY, format_amount(amount))
}

/// Parse the leading integer of a text field the way a browser number
/// input is read: surrounding whitespace and trailing garbage are ignored.
pub(crate) fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
