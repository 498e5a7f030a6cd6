//! Display formatting shared by the dashboard and the text report.

use chrono::NaiveDateTime;

/// `15000` -> `$15,000`.
pub fn dollars(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

/// `2000.0` -> `$2,000.00`. Rounds to the nearest cent.
pub fn dollars_cents(amount: f64) -> String {
    let cents = (amount.max(0.0) * 100.0).round() as u64;
    format!("${}.{:02}", group_thousands(cents / 100), cents % 100)
}

/// `60.5556` -> `60.6%`.
pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

/// `"n/a"` when there is nothing to average.
pub fn percent_or_na(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), percent)
}

/// One star per whole rating point, then the rating itself.
pub fn stars(rating: f64) -> String {
    let count = rating.floor().max(0.0) as usize;
    format!("{} {rating:.1}", "★".repeat(count))
}

/// `March 08, 2025`.
pub fn show_date(date: NaiveDateTime) -> String {
    date.format("%B %d, %Y").to_string()
}

/// `March 08, 2025 at 08:00 PM`.
pub fn show_date_time(date: NaiveDateTime) -> String {
    date.format("%B %d, %Y at %I:%M %p").to_string()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
