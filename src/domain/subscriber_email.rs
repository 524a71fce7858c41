//! src/domain/subscriber_email.rs

#[derive(Debug, Clone)]
pub struct SubscriberEmail(String);

impl SubscriberEmail {
    /// Returns `Ok(SubscriberEmail)` if the input satisfies our syntactic
    /// constraints on email addresses, `Err(String)` otherwise.
    ///
    /// The check is purely syntactic, equivalent to the pattern
    /// `^[^\s@]+@[^\s@]+\.[^\s@]+$`: no whitespace, exactly one `@`, a
    /// non-empty local part, and a domain part containing at least one `.`
    /// with characters on both sides. The address is stored exactly as
    /// given; no case folding or other normalization is applied, so
    /// uniqueness downstream is by exact string match.
    pub fn parse(email: String) -> Result<Self, String> {
        if is_valid_email(&email) {
            Ok(Self(email))
        } else {
            Err(format!("{} is not a valid email address.", email))
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain needs a `.` with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + c.len_utf8() < domain.len())
}

impl AsRef<str> for SubscriberEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SubscriberEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
