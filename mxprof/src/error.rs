use strum::EnumIs;
use thiserror::Error;

use mxir::PassError;

/// Fatal failures of the profile-annotation pass.
///
/// "No sample matched this operation" is deliberately not represented here:
/// it resolves to the absent record and never interrupts a traversal. Only a
/// broken data source is fatal, and it aborts the invocation before any
/// operation is annotated.
#[derive(Debug, EnumIs, Error)]
pub enum AnnotateError {
    /// The configured profile data file could not be opened or read.
    #[error("profile data source `{path}` could not be read: {source}")]
    DataSourceUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The profile data file was read but a line violates the expected
    /// `qualified_name,location,timestamp,duration` schema.
    #[error("profile data source `{path}` is malformed at line {line_no}: `{line}`")]
    DataSourceMalformed {
        path: String,
        line_no: usize,
        line: String,
    },
}

pub type AnnotateResult<T> = Result<T, AnnotateError>;

impl From<AnnotateError> for PassError {
    fn from(err: AnnotateError) -> Self {
        PassError::new(crate::pass::PASS_NAME, err)
    }
}
