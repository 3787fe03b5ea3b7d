//! Text helpers for the domain layer.

/// Shorten `s` to at most `max_chars` characters, appending `...` when cut.
///
/// Counts characters rather than bytes, so multi-byte text is never split.
pub fn preview(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}

/// Returns `None` for empty or whitespace-only input, otherwise the trimmed text.
pub fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hola", 10), "hola");
    }

    #[test]
    fn test_preview_truncates_with_ellipsis() {
        assert_eq!(preview("hello world", 8), "hello...");
    }

    #[test]
    fn test_preview_multibyte() {
        assert_eq!(preview("¿Qué es un PCB?", 8), "¿Qué ...");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("  hi  "), Some("hi"));
        assert_eq!(non_blank(" \t\n "), None);
        assert_eq!(non_blank(""), None);
    }
}
