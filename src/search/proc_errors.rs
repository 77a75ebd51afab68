/// Search process error type.
#[derive(Debug)]
pub enum SearchError {
    /// Lattice index outside `0..count`.
    OutOfRange {
        index: usize,
        count: usize,
    },
    /// Candidate that breaks the strictly-increasing index invariant.
    InvalidCandidate(String),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::OutOfRange{index, count} => write!(f, "Lattice index {} out of range (lattice has {} points)", index, count),
            SearchError::InvalidCandidate(error) => write!(f, "Invalid candidate: {}", error),
            SearchError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<String> for SearchError {
    fn from(error: String) -> Self {
        SearchError::StringOnly(error)
    }
}

/// Result type for the `search` module.
pub type ProcResult<T> = std::result::Result<T, SearchError>;

/// Create a `SearchError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(SearchError::StringOnly(error_str.to_string()))
}
