use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
///
/// Configuration errors are fatal at engine construction; lookup errors are
/// recoverable by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Lookup,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Empty corpus: no product descriptions to build a vocabulary from")]
    EmptyCorpus,

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid record at row {row}: {message}")]
    InvalidRecord { row: usize, message: String },

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Product index out of range: {index} (catalog has {len} products)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::IndexOutOfRange { .. } => ErrorKind::Lookup,
            _ => ErrorKind::Configuration,
        }
    }

    #[inline]
    pub fn is_lookup(&self) -> bool {
        self.kind() == ErrorKind::Lookup
    }

    #[inline]
    pub fn is_configuration(&self) -> bool {
        self.kind() == ErrorKind::Configuration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert!(Error::IndexOutOfRange { index: 3, len: 3 }.is_lookup());
        assert!(Error::EmptyCorpus.is_configuration());
        assert!(Error::MissingColumn("description".into()).is_configuration());
        assert_eq!(
            Error::DataSource("unreadable".into()).kind(),
            ErrorKind::Configuration
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            err.to_string(),
            "Product index out of range: 7 (catalog has 3 products)"
        );
    }
}
