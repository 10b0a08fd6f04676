//! Magnet wire grade codes used in part numbers.

/// Grade labels with a dedicated insulated part-number code
const INSULATED_GRADE_CODES: [(&str, &str); 5] = [
    ("MW 79-C", "79"),
    ("MW 80-C", "80"),
    ("MW 77-C", "77"),
    ("MW 35-C", "35"),
    ("MW 16-C", "16"),
];

/// Placeholder code when a grade cannot be encoded
pub const UNKNOWN_GRADE_CODE: &str = "XX";

/// Default magnet wire grade
pub const DEFAULT_MAGNET_WIRE_GRADE: &str = "MW 79-C";

/// Grade code for insulated part numbers. Only the mapped grades are encoded.
pub fn insulated_grade_code(grade: &str) -> &'static str {
    INSULATED_GRADE_CODES
        .iter()
        .find(|(label, _)| *label == grade)
        .map(|(_, code)| *code)
        .unwrap_or(UNKNOWN_GRADE_CODE)
}

/// Grade code for bare part numbers: the first run of digits in the label.
pub fn bare_grade_code(grade: &str) -> String {
    let digits: String = grade
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        UNKNOWN_GRADE_CODE.to_string()
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insulated_codes() {
        assert_eq!(insulated_grade_code("MW 79-C"), "79");
        assert_eq!(insulated_grade_code("MW 16-C"), "16");
        assert_eq!(insulated_grade_code("MW 73-C"), "XX");
        assert_eq!(insulated_grade_code(""), "XX");
    }

    #[test]
    fn test_bare_codes() {
        assert_eq!(bare_grade_code("MW 80-C"), "80");
        assert_eq!(bare_grade_code("MW 1000-C"), "1000");
        assert_eq!(bare_grade_code("Class 200 / 2"), "200");
        assert_eq!(bare_grade_code("custom"), "XX");
    }
}
