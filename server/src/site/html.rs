//! Small HTML helpers shared by the page renderers and component views

/// Escape text for use in HTML element content and double-quoted attributes.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Format a percentage for CSS without trailing zeros (`50`, `12.5`, `33.333`).
pub fn percent(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Capitalize the first character of a niche or category key for display.
pub fn capitalize(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
        assert_eq!(escape("写真"), "写真");
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(percent(50.0), "50");
        assert_eq!(percent(12.5), "12.5");
        assert_eq!(percent(100.0 / 3.0), "33.333");
        assert_eq!(percent(0.0), "0");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("dog"), "Dog");
        assert_eq!(capitalize(""), "");
    }
}
