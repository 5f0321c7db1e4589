//! Name feed port definition.

use crate::domain::FeedError;

/// Port for an external provider of random person names.
pub trait NameFeed {
    /// Fetch a random full name (first name and surname).
    fn random_full_name(&self) -> Result<String, FeedError>;
}

impl<T: NameFeed + ?Sized> NameFeed for &T {
    fn random_full_name(&self) -> Result<String, FeedError> {
        (**self).random_full_name()
    }
}
