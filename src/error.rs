use thiserror::Error;

/// Errors raised while building or querying an interval tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The closure mode string is not one of `left`, `right`, `both` or
    /// `neither`.
    #[error("invalid option for 'closed': {0}")]
    InvalidClosureMode(String),

    /// The left and right bound arrays have different lengths.
    #[error("left and right bounds differ in length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },

    /// `get_loc` found no interval containing the key.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    /// A query point passed to `get_indexer` lies in more than one interval.
    #[error(
        "indexer does not intersect a unique set of intervals \
         (target {position} matched {matches} intervals)"
    )]
    NonUniqueMatch { position: usize, matches: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::InvalidClosureMode("open".to_string()).to_string(),
        "invalid option for 'closed': open"
    );
    assert_eq!(
        Error::LengthMismatch { left: 3, right: 2 }.to_string(),
        "left and right bounds differ in length (3 != 2)"
    );
    assert_eq!(Error::KeyNotFound("7".to_string()).to_string(), "key not found: 7");
    assert_eq!(
        Error::NonUniqueMatch { position: 4, matches: 2 }.to_string(),
        "indexer does not intersect a unique set of intervals (target 4 matched 2 intervals)"
    );
}
