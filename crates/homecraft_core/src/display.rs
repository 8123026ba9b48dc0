//! Display formatting for catalog listings.

/// Format a price as Indonesian rupiah.
///
/// Rounds to whole rupiah and groups digits with dots, e.g. `Rp 1.234.567`.
///
/// # Examples
///
/// ```
/// use homecraft_core::format_price;
///
/// assert_eq!(format_price(100000.0), "Rp 100.000");
/// ```
pub fn format_price(price: f64) -> String {
    let whole = price.round().abs() as u64;
    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("Rp {grouped}")
}

/// Truncate text to at most `max_chars` characters.
///
/// Cuts on character boundaries with no ellipsis; listings use 55 characters
/// for description previews.
pub fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// Render a rating as filled and hollow stars, e.g. `★★★★☆`.
///
/// Ratings outside [0, 5] are clamped.
pub fn stars(rate: u8) -> String {
    let filled = usize::from(rate.min(5));
    "★".repeat(filled) + &"☆".repeat(5 - filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_digits() {
        assert_eq!(format_price(0.0), "Rp 0");
        assert_eq!(format_price(999.0), "Rp 999");
        assert_eq!(format_price(1000.0), "Rp 1.000");
        assert_eq!(format_price(100000.0), "Rp 100.000");
        assert_eq!(format_price(1234567.0), "Rp 1.234.567");
    }

    #[test]
    fn test_format_price_rounds_fractions() {
        assert_eq!(format_price(99.5), "Rp 100");
        assert_eq!(format_price(1500.4), "Rp 1.500");
    }

    #[test]
    fn test_preview_cuts_long_text() {
        let text = "x".repeat(80);
        assert_eq!(preview(&text, 55).chars().count(), 55);
    }

    #[test]
    fn test_preview_keeps_short_text() {
        assert_eq!(preview("desc", 55), "desc");
        assert_eq!(preview("", 55), "");
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        // Multibyte characters count as one each
        assert_eq!(preview("héllo wörld", 5), "héllo");
    }

    #[test]
    fn test_stars() {
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(1), "★☆☆☆☆");
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(0), "☆☆☆☆☆");
        assert_eq!(stars(9), "★★★★★"); // Clamped
    }
}
