use std::fmt;
use std::str::FromStr;

/// The fixed set of form fields, in declaration order.
///
/// Ordering follows declaration order, which is also the order in which
/// server-reported errors are matched against fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Email,
    GithubUrl,
    YearsOfExperience,
    Password,
    ConfirmPassword,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Email,
        FieldName::GithubUrl,
        FieldName::YearsOfExperience,
        FieldName::Password,
        FieldName::ConfirmPassword,
    ];

    /// Position in declaration order.
    pub fn index(&self) -> usize {
        match self {
            FieldName::Email => 0,
            FieldName::GithubUrl => 1,
            FieldName::YearsOfExperience => 2,
            FieldName::Password => 3,
            FieldName::ConfirmPassword => 4,
        }
    }

    /// Key used on the wire and in the response `errors` object.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::GithubUrl => "githubUrl",
            FieldName::YearsOfExperience => "yearsOfExperience",
            FieldName::Password => "password",
            FieldName::ConfirmPassword => "confirmPassword",
        }
    }

    /// HTML input type used to render the field.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldName::Email => "email",
            FieldName::GithubUrl => "text",
            FieldName::YearsOfExperience => "number",
            FieldName::Password | FieldName::ConfirmPassword => "password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FieldName::Email => "Email",
            FieldName::GithubUrl => "GitHub URL",
            FieldName::YearsOfExperience => "Years of Experience (1 - 10)",
            FieldName::Password => "Password",
            FieldName::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldName::YearsOfExperience)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown field: {}", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .iter()
            .find(|field| field.as_str() == s)
            .copied()
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        let mut sorted = FieldName::ALL.to_vec();
        sorted.sort();
        assert_eq!(sorted, FieldName::ALL.to_vec());
        assert_eq!(FieldName::ALL[0], FieldName::Email);
        assert_eq!(FieldName::ALL[4], FieldName::ConfirmPassword);
        for (index, field) in FieldName::ALL.iter().enumerate() {
            assert_eq!(field.index(), index);
        }
    }

    #[test]
    fn test_parse_known_keys() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_case_variants() {
        assert!("username".parse::<FieldName>().is_err());
        assert!("githuburl".parse::<FieldName>().is_err());
        assert!("Email".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_only_years_is_numeric() {
        let numeric: Vec<_> =
            FieldName::ALL.iter().filter(|f| f.is_numeric()).collect();
        assert_eq!(numeric, vec![&FieldName::YearsOfExperience]);
        assert_eq!(FieldName::YearsOfExperience.input_type(), "number");
    }
}
