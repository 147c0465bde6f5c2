//! Форматирование чисел для карточек и таблиц

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// 1247 -> "1,247"
pub fn format_int(n: u64) -> String {
    group_thousands(&n.to_string())
}

/// 284750.0 -> "$284,750.00". Нечисловые значения выводятся как "$0.00".
pub fn format_money(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(&(cents / 100).to_string()),
        cents % 100
    )
}

/// Сокращённая сумма для подписей графиков: "$35.2k"
pub fn format_money_short(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    if value.abs() >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value.abs() >= 1_000.0 {
        format!("${:.1}k", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

/// Изменение в процентах без знака: 12.5 -> "12.5%"
pub fn format_percent_abs(pct: f64) -> String {
    let pct = if pct.is_finite() { pct.abs() } else { 0.0 };
    format!("{:.1}%", pct)
}
