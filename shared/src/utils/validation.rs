//! Common validation utilities

/// Check if a string is not empty after trimming
pub fn not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Name of the first field whose value is blank, in declaration order
pub fn first_blank<'a, I>(fields: I) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    fields
        .into_iter()
        .find(|(_, value)| !not_blank(value))
        .map(|(name, _)| name)
}

/// Check that a one-time code is exactly six ASCII digits
pub fn is_six_digit_code(code: &str) -> bool {
    code.len() == 6 && code.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_blank_reports_in_order() {
        let fields = [("name", "Asha"), ("year", "  "), ("email", "")];
        assert_eq!(first_blank(fields), Some("year"));
        assert_eq!(first_blank([("name", "Asha")]), None);
    }

    #[test]
    fn test_six_digit_code() {
        assert!(is_six_digit_code("012345"));
        assert!(!is_six_digit_code("12345"));
        assert!(!is_six_digit_code("1234567"));
        assert!(!is_six_digit_code("12a456"));
        assert!(!is_six_digit_code("１２３４５６"));
    }
}
