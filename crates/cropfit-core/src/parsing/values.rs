use crate::error::CropfitError;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a form value into a decimal.
///
/// Handles formats like:
/// - "68" -> 68
/// - "6.5" -> 6.5
/// - "6,5" -> 6.5 (decimal comma)
/// - "-4" -> -4
/// - "1e2" -> 100
///
/// Empty input is reported as a missing field.
pub fn parse_number(field: &'static str, s: &str) -> Result<Decimal, CropfitError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(CropfitError::MissingField(field));
    }

    let normalized = s.replace(',', ".");
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|e| CropfitError::InvalidNumber {
            field,
            value: s.to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_integer() {
        assert_eq!(parse_number("nitrogen", "68").unwrap(), dec!(68));
    }

    #[test]
    fn test_decimal_point() {
        assert_eq!(parse_number("soilPh", "6.5").unwrap(), dec!(6.5));
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_number("soilPh", "6,5").unwrap(), dec!(6.5));
    }

    #[test]
    fn test_negative() {
        assert_eq!(parse_number("temperature", "-4").unwrap(), dec!(-4));
    }

    #[test]
    fn test_scientific() {
        assert_eq!(parse_number("rainfall", "1.2e2").unwrap(), dec!(120));
    }

    #[test]
    fn test_whitespace_trimming() {
        assert_eq!(parse_number("humidity", "  60  ").unwrap(), dec!(60));
    }

    #[test]
    fn test_empty_is_missing() {
        assert!(matches!(
            parse_number("humidity", "   "),
            Err(CropfitError::MissingField("humidity"))
        ));
    }

    #[test]
    fn test_invalid_returns_error() {
        let err = parse_number("potassium", "abc").unwrap_err();
        assert!(err.to_string().contains("potassium"));
        assert!(err.to_string().contains("abc"));
    }
}
