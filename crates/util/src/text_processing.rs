use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Interpret common truthy spellings used in environment variables.
pub fn is_truthy(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Truncate `text` to at most `max_width` display columns, appending `…`
/// when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let width = ch.width().unwrap_or(0);
        if used + width > budget {
            break;
        }
        used += width;
        out.push(ch);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthy_values() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(is_truthy(value), "{value}");
        }
        for value in ["0", "false", "", "nope"] {
            assert!(!is_truthy(value), "{value}");
        }
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("creative title", 8), "creativ…");
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
