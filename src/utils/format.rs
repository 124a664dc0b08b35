//! Display formatting helpers

/// Format minor units as `1,234.56`
pub fn format_money(cents: i64) -> String {
    let negative = cents < 0;
    let abs = cents.unsigned_abs();
    let whole = (abs / 100).to_string();
    let frac = abs % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if negative {
        format!("-{}.{:02}", grouped, frac)
    } else {
        format!("{}.{:02}", grouped, frac)
    }
}

/// Plain decimal for editing, e.g. `1234.50`
pub fn format_money_plain(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Truncate to at most `max` characters, respecting char boundaries
pub fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_grouping() {
        assert_eq!(format_money(0), "0.00");
        assert_eq!(format_money(5), "0.05");
        assert_eq!(format_money(100000), "1,000.00");
        assert_eq!(format_money(123456789), "1,234,567.89");
        assert_eq!(format_money(-250000), "-2,500.00");
    }

    #[test]
    fn plain_money() {
        assert_eq!(format_money_plain(123450), "1234.50");
    }

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Perera", 3), "Per");
        assert_eq!(truncate("Ünïcode", 2), "Ün");
        assert_eq!(truncate("ab", 5), "ab");
    }
}
