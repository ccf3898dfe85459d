use std::fmt::{self, Debug, Formatter};

use crate::SteganoError;

/// A password that never shows up in debug output, not even its length.
#[derive(Default, Clone)]
pub struct Password(Option<String>);

impl Password {
    /// the password for the cipher, an absent or empty password is refused
    pub fn expose(&self) -> Result<&str, SteganoError> {
        match self.0.as_deref() {
            Some(password) if !password.is_empty() => Ok(password),
            _ => Err(SteganoError::MissingPassword),
        }
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_some() {
            write!(f, "Password(********)")
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(Some(password))
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}
