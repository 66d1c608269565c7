/// Formats an area with thousands separators, e.g. `12,500` or `1,234.5`.
#[must_use]
pub fn format_area(area: f64) -> String {
    let fixed = format!("{:.2}", area.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    if area < 0.0 && fixed != "0.00" {
        out.push('-');
    }
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// Formats a percentage value without a trailing `.0`.
#[must_use]
pub fn format_pct(pct: f64) -> String {
    let text = format!("{pct:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn areas_are_grouped_by_thousands() {
        assert_eq!(format_area(0.0), "0");
        assert_eq!(format_area(999.0), "999");
        assert_eq!(format_area(12_500.0), "12,500");
        assert_eq!(format_area(1_234_567.0), "1,234,567");
        assert_eq!(format_area(1_234.5), "1,234.5");
        assert_eq!(format_area(-2_000.0), "-2,000");
    }

    #[test]
    fn percentages_drop_trailing_zeros() {
        assert_eq!(format_pct(60.0), "60");
        assert_eq!(format_pct(33.5), "33.5");
        assert_eq!(format_pct(12.25), "12.25");
    }
}
