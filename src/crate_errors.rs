use crate::{
    args,
    io,
    report,
    search,
};

/// Error-type enum for the `lattice_planes` crate.
/// Wraps the error of each module.
#[derive(Debug)]
pub enum PlanesError {
    ArgError(args::ArgError),
    IoError(io::IoError),
    SearchError(search::SearchError),
    ReportError(report::ReportError),
    StringOnly(String),
}
impl std::fmt::Display for PlanesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanesError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            PlanesError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            PlanesError::SearchError(error) => write!(f, "! SEARCH ERROR:\n- {}", error),
            PlanesError::ReportError(error) => write!(f, "! REPORT ERROR:\n- {}", error),
            PlanesError::StringOnly(error) => write!(f, "! LATTICE PLANES ERROR:\n- {}", error),
        }
    }
}
impl From<String> for PlanesError {
    fn from(error: String) -> Self {
        PlanesError::StringOnly(error)
    }
}
impl From<args::ArgError> for PlanesError {
    fn from(error: args::ArgError) -> Self {
        PlanesError::ArgError(error)
    }
}
impl From<io::IoError> for PlanesError {
    fn from(error: io::IoError) -> Self {
        PlanesError::IoError(error)
    }
}
impl From<search::SearchError> for PlanesError {
    fn from(error: search::SearchError) -> Self {
        PlanesError::SearchError(error)
    }
}
impl From<report::ReportError> for PlanesError {
    fn from(error: report::ReportError) -> Self {
        PlanesError::ReportError(error)
    }
}

/// Result type for the `lattice_planes` crate.
pub type PlanesResult<T> = std::result::Result<T, PlanesError>;
