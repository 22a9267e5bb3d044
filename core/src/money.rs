//! Currency-style number formatting for the console summary.

/// Round to whole units and group thousands with commas.
/// `-1647189.8` formats as `-1,647,190`.
pub fn format_grouped(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
