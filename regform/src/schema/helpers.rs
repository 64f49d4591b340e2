use std::sync::Arc;

use regex::Regex;

pub type Validator = Arc<dyn Fn(&str) -> Result<(), String>>;

pub fn validate_with_pattern(pattern: Regex, error_msg: String) -> Validator {
    Arc::new(move |input: &str| {
        if pattern.is_match(input) {
            Ok(())
        } else {
            Err(error_msg.clone())
        }
    })
}

/// Bounds on the character count of a value; `None` leaves a side open.
pub fn validate_range(
    min: Option<(usize, &str)>,
    max: Option<(usize, &str)>,
) -> Validator {
    let min = min.map(|(n, msg)| (n, msg.to_string()));
    let max = max.map(|(n, msg)| (n, msg.to_string()));
    Arc::new(move |input: &str| {
        let length = input.chars().count();
        if let Some((n, msg)) = &min {
            if length < *n {
                return Err(msg.clone());
            }
        }
        if let Some((n, msg)) = &max {
            if length > *n {
                return Err(msg.clone());
            }
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_with_pattern() {
        let validator = validate_with_pattern(
            Regex::new(r"^\d+$").unwrap(),
            "digits only".to_string(),
        );
        assert!(validator("123").is_ok());
        assert_eq!(validator("12a"), Err("digits only".to_string()));
    }

    #[test]
    fn test_validate_range_counts_chars() {
        let validator =
            validate_range(Some((3, "too short")), Some((4, "too long")));
        assert_eq!(validator("ab"), Err("too short".to_string()));
        assert!(validator("äöü").is_ok());
        assert!(validator("abcd").is_ok());
        assert_eq!(validator("abcde"), Err("too long".to_string()));
    }
}
