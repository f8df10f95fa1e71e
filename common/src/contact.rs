//! Contact form submission

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A message from the contact form, validated before it is handed to the
/// external mail relay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// All three fields are required and must be non-empty after trimming;
    /// the email must at least carry an `@`. Delivery itself is the relay's
    /// concern, not ours.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(Error::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(Error::MissingField("message"));
        }
        if !self.email.contains('@') {
            return Err(Error::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_complete_submission() {
        let submission =
            ContactSubmission::new("Ada", "ada@example.com", "Hello, I'd like to connect.");
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let submission = ContactSubmission::new("   ", "ada@example.com", "Hi");
        assert_eq!(submission.validate(), Err(Error::MissingField("name")));
    }

    #[test]
    fn test_validate_rejects_empty_email() {
        let submission = ContactSubmission::new("Ada", "", "Hi");
        assert_eq!(submission.validate(), Err(Error::MissingField("email")));
    }

    #[test]
    fn test_validate_rejects_empty_message() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "\n  ");
        assert_eq!(submission.validate(), Err(Error::MissingField("message")));
    }

    #[test]
    fn test_validate_rejects_email_without_at() {
        let submission = ContactSubmission::new("Ada", "ada.example.com", "Hi");
        assert_eq!(
            submission.validate(),
            Err(Error::InvalidEmail("ada.example.com".to_string()))
        );
    }

    #[test]
    fn test_serialize_camel_case() {
        let submission = ContactSubmission::new("Ada", "ada@example.com", "Hi");
        let json = serde_json::to_string(&submission).expect("serialize failed");
        assert!(json.contains("\"name\":\"Ada\""));
        assert!(json.contains("\"email\":\"ada@example.com\""));
        assert!(json.contains("\"message\":\"Hi\""));
    }
}
