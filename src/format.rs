//! Display formatting for metric cards and tables

/// Whole dollars with thousands separators, e.g. `$1,234` or `-$56`
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(&format!("{:.0}", rounded.abs())))
}

/// Fraction as a percentage with two decimals, e.g. `0.0789` -> `7.89%`
pub fn format_percentage(value: f64) -> String {
    let text = format!("{:.2}", (value * 100.0).abs());
    // Values that round to zero print without a sign
    let sign = if value < 0.0 && text != "0.00" { "-" } else { "" };
    match text.split_once('.') {
        Some((whole, decimals)) => format!("{}{}.{}%", sign, group_thousands(whole), decimals),
        // NaN and infinity
        None => format!("{}{}%", sign, text),
    }
}

/// Coverage multiple, e.g. `1.2755` -> `1.28x`
pub fn format_multiple(value: f64) -> String {
    format!("{:.2}x", value)
}

/// Insert separators into a run of ASCII digits; anything else is returned as is
fn group_thousands(digits: &str) -> String {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return digits.to_string();
    }
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
