//! Person names produced by the name feed.

/// A first name and surname, either of which may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Name {
    pub first: Option<String>,
    pub surname: Option<String>,
}

impl Name {
    pub fn new(first: impl Into<String>, surname: impl Into<String>) -> Self {
        Self { first: Some(first.into()), surname: Some(surname.into()) }
    }

    /// First name and surname joined by a single space.
    ///
    /// Missing parts count as empty strings, and the separator is always kept,
    /// so a name with no surname renders as `"Ann "`.
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first.as_deref().unwrap_or_default(),
            self.surname.as_deref().unwrap_or_default()
        )
    }
}
