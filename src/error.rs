use std::error;
use std::fmt;
use std::result;

/// Errors returned by the order-statistic queries of the trees in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested 1-indexed rank `k` does not fall in `[1, len]`.
    OutOfRange { k: usize, len: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::OutOfRange { k, len } => {
                write!(f, "rank {} is out of range for a tree with {} entries", k, len)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn test_display() {
        let error = Error::OutOfRange { k: 3, len: 2 };
        assert_eq!(
            error.to_string(),
            "rank 3 is out of range for a tree with 2 entries",
        );
    }
}
