/// Normalize free text into a sequence of tokens
///
/// Lowercases the input, replaces every character that is not an ASCII
/// letter, ASCII digit, or whitespace with a space, splits on whitespace
/// runs, and drops empty fragments. `None` and `""` yield an empty
/// sequence rather than an error.
///
/// Case folding is ASCII-only; non-ASCII characters are treated as
/// separators.
pub fn normalize(text: Option<&str>) -> Vec<String> {
    let text = match text {
        Some(text) if !text.is_empty() => text,
        _ => return Vec::new(),
    };

    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else if c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_none_and_empty() {
        assert!(normalize(None).is_empty());
        assert!(normalize(Some("")).is_empty());
    }

    #[test]
    fn test_normalize_strips_punctuation_and_folds_case() {
        assert_eq!(normalize(Some("C++ is great!")), vec!["c", "is", "great"]);
    }

    #[test]
    fn test_normalize_keeps_digits() {
        assert_eq!(normalize(Some("Rust 2021 edition")), vec!["rust", "2021", "edition"]);
    }

    #[test]
    fn test_normalize_collapses_separator_runs() {
        assert_eq!(
            normalize(Some("senior-engineer,  remote\t(EU)")),
            vec!["senior", "engineer", "remote", "eu"]
        );
    }

    #[test]
    fn test_normalize_non_ascii_is_a_separator() {
        assert_eq!(normalize(Some("café crème")), vec!["caf", "cr", "me"]);
    }

    #[test]
    fn test_normalize_only_punctuation() {
        assert!(normalize(Some("+++ --- !!!")).is_empty());
    }
}
