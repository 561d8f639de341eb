//! A course and the sections it offers this term.

use serde::{Deserialize, Serialize};

use super::{CourseId, Section};

/// One course together with its sections, as returned by a
/// [`SectionProvider`](crate::catalog::SectionProvider) for one term.
///
/// Slots are created per generation call and read-only thereafter. A slot
/// with zero sections is valid; a locked course in that state makes every
/// schedule structurally impossible, which surfaces as an empty result set
/// rather than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseSlot {
    pub course_id: CourseId,
    pub sections: Vec<Section>,
}

impl CourseSlot {
    pub fn new(course_id: CourseId, sections: Vec<Section>) -> Self {
        Self {
            course_id,
            sections,
        }
    }

    /// Number of sections offered.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
