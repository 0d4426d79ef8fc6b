//! Display Formatting
//!
//! pt-BR formatting helpers for the stat cards and table cells.

/// Format a monetary value as pt-BR currency, e.g. `R$ 1.234,56`
pub fn currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let grouped = group_thousands(whole);
    let sign = if negative { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, grouped, frac)
}

/// Format a percentage with one decimal, e.g. `8,5%`
pub fn percent(value: f64) -> String {
    format!("{:.1}%", value).replace('.', ",")
}

/// Group an integer with `.` thousands separators
fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while value > 0 {
        groups.push((value % 1000) as u16);
        value /= 1000;
    }

    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(group) = groups.pop() {
        out.push_str(&format!(".{:03}", group));
    }
    out
}

/// Truncate long product names for chart labels and top-product lists
pub fn short_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    let truncated: String = name.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_pt_br() {
        assert_eq!(currency(0.0), "R$ 0,00");
        assert_eq!(currency(9.9), "R$ 9,90");
        assert_eq!(currency(1234.56), "R$ 1.234,56");
        assert_eq!(currency(1_000_000.0), "R$ 1.000.000,00");
    }

    #[test]
    fn currency_rounds_to_cents() {
        assert_eq!(currency(19.999), "R$ 20,00");
        assert_eq!(currency(0.005), "R$ 0,01");
    }

    #[test]
    fn currency_handles_negative_values() {
        assert_eq!(currency(-1500.5), "-R$ 1.500,50");
    }

    #[test]
    fn percent_uses_comma_decimal() {
        assert_eq!(percent(8.5), "8,5%");
        assert_eq!(percent(0.0), "0,0%");
        assert_eq!(percent(78.04), "78,0%");
    }

    #[test]
    fn short_name_truncates_on_char_boundary() {
        assert_eq!(short_name("Cabo USB-C", 30), "Cabo USB-C");
        assert_eq!(short_name("Notebook Dell Inspiron 15 3000 Series", 10), "Notebook D...");
        // Multi-byte characters must not split
        assert_eq!(short_name("Xícara Térmica", 6), "Xícara...");
    }
}
