use thiserror::Error;

/// How long the "Message Sent!" confirmation stays up before the form is
/// cleared and shown again.
pub const CONFIRMATION_MS: u64 = 3000;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a message")]
    MissingMessage,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Same rules the browser applies to `required` fields and
    /// `type="email"`, checked in field order. `required` only rejects an
    /// empty value; the email value is stripped of surrounding whitespace
    /// first, as the browser does for email inputs.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.is_empty() {
            return Err(ContactError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// The HTML "valid e-mail address" production: a local part of atext
/// characters and dots, then dot-separated domain labels of letters, digits
/// and inner hyphens.
fn looks_like_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty() && local.chars().all(is_local_char) && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && !label.starts_with('-')
        && !label.ends_with('-')
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactStatus {
    #[default]
    Editing,
    Invalid(ContactError),
    Submitted,
}

impl ContactStatus {
    pub fn is_submitted(self) -> bool {
        self == ContactStatus::Submitted
    }

    pub fn error(self) -> Option<ContactError> {
        match self {
            ContactStatus::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

/// Simulated submission: nothing leaves the browser. Returns the status the
/// form should move to.
pub fn submit(form: &ContactForm) -> ContactStatus {
    match form.validate() {
        Ok(()) => ContactStatus::Submitted,
        Err(e) => ContactStatus::Invalid(e),
    }
}

/// What happens when the confirmation timer fires.
pub fn reset(form: &mut ContactForm) -> ContactStatus {
    form.clear();
    ContactStatus::Editing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_filled_form_submits_then_clears() {
        let mut form = filled();
        let status = submit(&form);
        assert!(status.is_submitted());
        assert_eq!(status.error(), None);

        let status = reset(&mut form);
        assert_eq!(status, ContactStatus::Editing);
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_missing_fields_reported_in_order() {
        let form = ContactForm::default();
        assert_eq!(form.validate(), Err(ContactError::MissingName));

        let form = ContactForm {
            email: "   ".to_string(),
            ..filled()
        };
        assert_eq!(form.validate(), Err(ContactError::MissingEmail));

        let form = ContactForm {
            message: String::new(),
            ..filled()
        };
        assert_eq!(
            submit(&form),
            ContactStatus::Invalid(ContactError::MissingMessage)
        );
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let form = ContactForm {
            name: "   ".to_string(),
            email: " a@b.io ".to_string(),
            message: "\n".to_string(),
        };
        assert_eq!(form.validate(), Ok(()));
        assert!(submit(&form).is_submitted());
    }

    #[test]
    fn test_email_shape() {
        for bad in [
            "ada",
            "@example.com",
            "ada@",
            "ada@@example.com",
            "a da@x.io",
            "ada@.com",
            "ada@x..com",
            "ada@example.com.",
            "ada@-x.com",
            "ada@x-.com",
            "ada@ex_ample.com",
        ] {
            let form = ContactForm {
                email: bad.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        for good in [
            "ada@example.com",
            "a.b+c@sub.example.org",
            "x@localhost",
            "o'neil@my-host.io",
        ] {
            let form = ContactForm {
                email: good.to_string(),
                ..filled()
            };
            assert_eq!(form.validate(), Ok(()), "{good}");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
        assert_eq!(CONFIRMATION_MS, 3000);
    }
}
