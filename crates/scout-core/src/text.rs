//! Small text helpers shared across the pipeline crates.

/// Uppercase the first character of a word.
#[must_use]
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_letter() {
        assert_eq!(capitalize("rust"), "Rust");
        assert_eq!(capitalize("already Upper"), "Already Upper");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn capitalize_handles_multibyte_first_char() {
        assert_eq!(capitalize("über"), "Über");
    }
}
