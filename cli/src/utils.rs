/// Thousands separators for counts shown to the user: `12345` becomes `12,345`.
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}

pub fn format_km(km: f64) -> String {
    format!("{km:.1} km")
}

/// Milliseconds with enough precision for sub-microsecond averages.
pub fn format_ms(ms: f64) -> String {
    if ms >= 1.0 {
        format!("{ms:.3}")
    } else {
        format!("{ms:.6}")
    }
}
