use std::fmt;

/// The `From` identity of an outgoing email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SenderIdentity {
    email: String,
    name: String,
}

impl SenderIdentity {
    pub fn new(email: String, name: String) -> Self {
        Self { email, name }
    }

    /// The part of the address after the `@`, if there is one.
    pub fn domain(&self) -> Option<&str> {
        self.email
            .rsplit_once('@')
            .map(|(_, domain)| domain)
            .filter(|domain| !domain.is_empty())
    }
}

impl fmt::Display for SenderIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.trim().is_empty() {
            write!(f, "{}", self.email)
        } else {
            write!(f, "{} <{}>", self.name, self.email)
        }
    }
}
