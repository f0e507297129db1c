//! Validation utilities for user input

/// Longest city name accepted from the search form
pub const MAX_CITY_NAME_LEN: usize = 100;

/// Validate a city or place name typed into the search form.
///
/// Accepts letters, spaces, hyphens, apostrophes, full stops and commas
/// (so "Stoke-on-Trent" and "St. Andrews" pass).
pub fn validate_city_name(city: &str) -> Result<(), &'static str> {
    let city = city.trim();
    if city.is_empty() {
        return Err("City name cannot be empty");
    }
    if city.chars().count() > MAX_CITY_NAME_LEN {
        return Err("City name is too long");
    }
    if !city
        .chars()
        .all(|c| c.is_alphabetic() || matches!(c, ' ' | '-' | '\'' | '.' | ','))
    {
        return Err("City name contains invalid characters");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_city_name_valid() {
        assert!(validate_city_name("London").is_ok());
        assert!(validate_city_name("Stoke-on-Trent").is_ok());
        assert!(validate_city_name("St. Andrews").is_ok());
        assert!(validate_city_name("Bishop's Stortford").is_ok());
        assert!(validate_city_name("Westminster,London").is_ok());
        assert!(validate_city_name("  Leeds  ").is_ok());
    }

    #[test]
    fn test_validate_city_name_empty() {
        assert!(validate_city_name("").is_err());
        assert!(validate_city_name("   ").is_err());
    }

    #[test]
    fn test_validate_city_name_invalid_chars() {
        assert!(validate_city_name("London&appid=x").is_err());
        assert!(validate_city_name("<script>").is_err());
        assert!(validate_city_name("Leeds 2").is_err());
    }

    #[test]
    fn test_validate_city_name_too_long() {
        let long = "a".repeat(MAX_CITY_NAME_LEN + 1);
        assert_eq!(validate_city_name(&long), Err("City name is too long"));
        assert!(validate_city_name(&"a".repeat(MAX_CITY_NAME_LEN)).is_ok());
    }
}
