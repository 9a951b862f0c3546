use unidecode::unidecode;

/// Folds a location name to a comparison key: ASCII transliteration,
/// lowercase, single spaces.
pub fn clean_str(input: &str) -> String {
    unidecode(input)
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::clean_str;

    #[test]
    fn folds_accents_case_and_spacing() {
        assert_eq!(clean_str("  Kota   Bharu "), "kota bharu");
        assert_eq!(clean_str("São\tPaulo"), "sao paulo");
        assert_eq!(clean_str("   "), "");
    }
}
