//! Shared string utilities for code generation.

/// Upper-case the first character of a string, leaving the rest untouched
/// (e.g., "users" -> "Users", "hElLo" -> "HElLo").
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Escape a string for inclusion in a double-quoted source literal.
///
/// Backslashes and double quotes are the only characters that can terminate
/// or corrupt a double-quoted literal in any of the supported targets.
pub fn escape_double_quoted(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            '"' => result.push_str("\\\""),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("users"), "Users");
        assert_eq!(capitalize("id"), "Id");
        assert_eq!(capitalize("hElLo"), "HElLo");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_escape_double_quoted() {
        assert_eq!(escape_double_quoted("admin"), "admin");
        assert_eq!(escape_double_quoted(r#"ad"min"#), r#"ad\"min"#);
        assert_eq!(escape_double_quoted(r"back\slash"), r"back\\slash");
    }
}
