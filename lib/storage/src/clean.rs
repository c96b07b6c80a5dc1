//! Cell-level cleaning for the product dataset
//!
//! Exported datasets spell "no value" several ways and wrap some fields in
//! list literals; these helpers turn raw cells into typed optional values.

const MISSING: &[&str] = &["", "nan", "none", "n/a", "null"];

/// Trimmed cell, or `None` for blank and placeholder values
pub fn clean_value(raw: &str) -> Option<String> {
    let s = raw.trim();
    if MISSING.iter().any(|m| s.eq_ignore_ascii_case(m)) {
        None
    } else {
        Some(s.to_string())
    }
}

/// Non-negative finite price
pub fn parse_price(raw: &str) -> Option<f64> {
    clean_value(raw)
        .and_then(|s| s.replace(',', "").parse::<f64>().ok())
        .filter(|p| p.is_finite() && *p >= 0.0)
}

/// Finite rating; text such as "No rating available" is missing
pub fn parse_rating(raw: &str) -> Option<f64> {
    clean_value(raw)
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|r| r.is_finite())
}

/// First http(s) URL of a cell that may hold a plain URL or a list literal
/// like `["http://a.jpg", "http://b.jpg"]`
pub fn clean_image(raw: &str) -> Option<String> {
    let s = clean_value(raw)?;
    let first = if s.starts_with('[') {
        s.trim_start_matches('[')
            .split(',')
            .next()
            .unwrap_or("")
            .trim()
            .trim_matches(|c| c == '"' || c == '\'' || c == ']')
            .to_string()
    } else {
        s
    };
    if first.starts_with("http://") || first.starts_with("https://") {
        Some(first)
    } else {
        None
    }
}

/// First segment of a `A >> B >> C` taxonomy path.
///
/// Strips list decoration such as `["Clothing >> Women"]`. Missing values
/// become the empty category.
pub fn normalize_category(raw: &str) -> String {
    let Some(s) = clean_value(raw) else {
        return String::new();
    };
    let path = match s.strip_prefix('[') {
        Some(inner) => first_list_item(inner.trim_start()),
        None => s.as_str(),
    };
    path.split(">>").next().unwrap_or("").trim().to_string()
}

/// First element of a list literal body such as `'A >> B', 'C']`.
///
/// A quote only closes the element when followed by `,` or `]`, so
/// apostrophes inside the text are kept.
fn first_list_item(body: &str) -> &str {
    match body.chars().next() {
        Some(q @ ('"' | '\'')) => {
            let text = &body[1..];
            text.match_indices(q)
                .find(|(at, _)| {
                    let rest = text[at + 1..].trim_start();
                    rest.is_empty() || rest.starts_with(',') || rest.starts_with(']')
                })
                .map_or(text, |(at, _)| &text[..at])
        }
        _ => body.split([',', ']']).next().unwrap_or(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_value() {
        assert_eq!(clean_value("  Boat "), Some("Boat".to_string()));
        assert_eq!(clean_value("NaN"), None);
        assert_eq!(clean_value("n/a"), None);
        assert_eq!(clean_value("   "), None);
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("1,299"), Some(1299.0));
        assert_eq!(parse_price("499.5"), Some(499.5));
        assert_eq!(parse_price("-3"), None);
        assert_eq!(parse_price("free"), None);
    }

    #[test]
    fn test_parse_rating() {
        assert_eq!(parse_rating("4.2"), Some(4.2));
        assert_eq!(parse_rating("No rating available"), None);
    }

    #[test]
    fn test_clean_image() {
        assert_eq!(
            clean_image(r#"["http://img.example/a.jpg", "http://img.example/b.jpg"]"#),
            Some("http://img.example/a.jpg".to_string())
        );
        assert_eq!(
            clean_image("https://img.example/c.jpg"),
            Some("https://img.example/c.jpg".to_string())
        );
        assert_eq!(clean_image("not a url"), None);
        assert_eq!(clean_image("[]"), None);
    }

    #[test]
    fn test_normalize_category() {
        assert_eq!(normalize_category("Clothing >> Women's Clothing >> Kurtis"), "Clothing");
        assert_eq!(normalize_category(r#"["Footwear >> Men's Footwear"]"#), "Footwear");
        assert_eq!(normalize_category("Electronics"), "Electronics");
        assert_eq!(normalize_category("Men's Footwear"), "Men's Footwear");
        assert_eq!(normalize_category("['Men's Footwear >> Sports']"), "Men's Footwear");
        assert_eq!(normalize_category("['Kids' Wear']"), "Kids' Wear");
        assert_eq!(normalize_category("['Home >> Decor', 'Gifts']"), "Home");
        assert_eq!(normalize_category("['Watches', 'Gifts']"), "Watches");
        assert_eq!(normalize_category("[Toys >> Games]"), "Toys");
        assert_eq!(normalize_category(""), "");
        assert_eq!(normalize_category("nan"), "");
    }
}
