//! Course sections and their identifiers.

use serde::{Deserialize, Serialize};

use super::MeetingTime;

/// Course Reference Number: the registrar's unique id for one section.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct SectionId(pub i64);

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SectionId {
    fn from(v: i64) -> Self {
        SectionId(v)
    }
}

impl From<SectionId> for i64 {
    fn from(id: SectionId) -> Self {
        id.0
    }
}

/// Catalog identifier of a course, e.g. `"CSCI-1200"`.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CourseId(pub String);

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CourseId {
    fn from(v: String) -> Self {
        CourseId(v)
    }
}

impl From<&str> for CourseId {
    fn from(v: &str) -> Self {
        CourseId(v.to_string())
    }
}

/// Seat and waitlist availability for one section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub seats_capacity: i32,
    pub seats_available: i32,
    pub waitlist_capacity: i32,
    pub waitlist_available: i32,
}

/// One offered instance of a course for the active term.
///
/// A section with no meeting times is fully asynchronous; it occupies no
/// weekly time and can coexist with anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub crn: SectionId,
    pub course_id: CourseId,
    #[serde(default)]
    pub faculty: Vec<String>,
    #[serde(default)]
    pub campus: String,
    #[serde(default)]
    pub enrollment: Enrollment,
    #[serde(default)]
    pub meeting_times: Vec<MeetingTime>,
}

impl Section {
    /// Whether the section has no weekly meetings at all.
    pub fn is_asynchronous(&self) -> bool {
        self.meeting_times.is_empty()
    }
}
