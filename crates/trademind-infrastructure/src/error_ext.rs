//! Error context helpers for infrastructure operations

use trademind_domain::error::{Error, Result};

/// Attach a message to an external error, converting it to a configuration
/// error with the original as source
pub(crate) trait ErrorContext<T> {
    fn context(self, message: &str) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, message: &str) -> Result<T> {
        self.map_err(|e| Error::configuration_with_source(message, e))
    }
}
