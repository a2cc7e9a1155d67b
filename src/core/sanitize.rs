// src/core/sanitize.rs

/// Collapse runs of whitespace (including `&nbsp;` once decoded) into one
/// space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Read the longest leading decimal (`digits[.digits]`) from free text.
/// `"50.5 km"` → 50.5, `"12"` → 12. No leading number, a sign, or a
/// non-finite result gives 0.
pub fn parse_decimal_lenient(s: &str) -> f64 {
    let t = s.trim();
    let mut end = 0usize;
    let mut seen_dot = false;

    for (i, ch) in t.char_indices() {
        match ch {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
    }
    if end == 0 {
        return 0.0;
    }
    t[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Safe file stem from a free-text name ("Max Muster" → "Max_Muster").
pub fn sanitize_filename(name: &str, fallback: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut last_us = false;
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' { out.push(ch); last_us = false; }
        else if (ch.is_whitespace() || ch == '_') && !last_us { out.push('_'); last_us = true; }
    }
    let out = out.trim_matches('_').to_string();
    if out.is_empty() { s!(fallback) } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_collapses() {
        assert_eq!(normalize_ws("  Brauneck \n\t Süd  "), "Brauneck Süd");
        assert_eq!(normalize_ws("\u{a0}12\u{a0}"), "12");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn decimals_take_leading_number() {
        assert_eq!(parse_decimal_lenient("50"), 50.0);
        assert_eq!(parse_decimal_lenient(" 50.5 km"), 50.5);
        assert_eq!(parse_decimal_lenient("1.2.3"), 1.2);
        assert_eq!(parse_decimal_lenient("12."), 12.0);
    }

    #[test]
    fn decimals_decay_to_zero() {
        assert_eq!(parse_decimal_lenient(""), 0.0);
        assert_eq!(parse_decimal_lenient("n/a"), 0.0);
        assert_eq!(parse_decimal_lenient("km 50"), 0.0);
        assert_eq!(parse_decimal_lenient("-5"), 0.0);
        assert_eq!(parse_decimal_lenient("."), 0.0);
    }

    #[test]
    fn filenames_are_tamed() {
        assert_eq!(sanitize_filename("Max  Muster", "flights"), "Max_Muster");
        assert_eq!(sanitize_filename("***", "flights"), "flights");
    }
}
