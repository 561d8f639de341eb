//! Engine-level error types.
//!
//! Malformed input data is detected as early as possible (at mask encoding
//! time) and surfaced to the caller; provider failures abort the whole
//! generation call. Empty inputs and zero matching schedules are normal,
//! successful results, not errors.

use crate::catalog::CatalogError;
use crate::models::{MeetingTimeDefect, SectionId};

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Error type for engine operations.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A section carried a meeting time the encoder refuses to turn into an
    /// occupancy pattern. Never downgraded to a guess; a wrong mask would
    /// corrupt every downstream conflict answer.
    #[error("Malformed meeting time on section {crn}: {defect}")]
    MalformedMeetingTime {
        crn: SectionId,
        #[source]
        defect: MeetingTimeDefect,
    },

    /// The external section provider failed. Distinct from a course with
    /// zero sections, which is a valid empty result.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}
