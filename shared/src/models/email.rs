use std::fmt;

use thiserror::Error;

/// Rejections produced while parsing request input, kept apart from the
/// directory's own errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email must not be empty")]
    Empty,

    #[error("Invalid email address: {0}")]
    Malformed(String),
}

/// An email address that passed boundary validation.
///
/// Only presence and a single `@` are checked. The value is kept verbatim,
/// inner spaces included; comparison against a roster is exact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantEmail(String);

impl ParticipantEmail {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::Empty);
        }

        // Exactly one '@' with something on both sides
        match raw.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(raw.to_string()))
            }
            _ => Err(ValidationError::Malformed(raw.to_string())),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        let email = ParticipantEmail::parse("michael@mergington.edu").unwrap();
        assert_eq!(email.as_str(), "michael@mergington.edu");
        assert_eq!(email.to_string(), "michael@mergington.edu");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!(ParticipantEmail::parse(""), Err(ValidationError::Empty));
        assert_eq!(ParticipantEmail::parse("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for raw in [
            "no-at-sign",
            "@mergington.edu",
            "student@",
            "a@b@c",
        ] {
            assert!(
                matches!(
                    ParticipantEmail::parse(raw),
                    Err(ValidationError::Malformed(_))
                ),
                "expected {raw:?} to be rejected"
            );
        }
    }

    #[test]
    fn keeps_inner_spaces_verbatim() {
        // An unencoded '+' in a query string arrives as a space
        let email = ParticipantEmail::parse("john doe@example.com").unwrap();
        assert_eq!(email.as_str(), "john doe@example.com");
    }
}
