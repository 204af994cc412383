//! Display formatting for amounts and order numbers

/// Ruble sign appended to every amount
const RUB: &str = "₽";

/// Format an amount with space-grouped thousands: `125000.0` -> `"125 000 ₽"`.
///
/// Fractional amounts keep two decimals (`"99,50 ₽"`), whole amounts none.
pub fn format_rub(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("— {RUB}");
    }

    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let mut out = String::new();
    if negative && cents > 0 {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if fraction > 0 {
        out.push_str(&format!(",{fraction:02}"));
    }
    out.push(' ');
    out.push_str(RUB);
    out
}

/// Format an amount for a stat card: `2_400_000.0` -> `"2.4M ₽"`.
pub fn format_compact_rub(amount: f64) -> String {
    let abs = amount.abs();
    if abs >= 1_000_000.0 {
        format!("{}M {RUB}", trim_one_decimal(amount / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{}K {RUB}", trim_one_decimal(amount / 1_000.0))
    } else {
        format_rub(amount)
    }
}

/// Order number as shown in tables: `7` -> `"#007"`
pub fn format_order_number(id: i64) -> String {
    format!("#{id:03}")
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

fn trim_one_decimal(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}

// ============================================================================
// Tests
// ============================================================================
