//! Generated schedules.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{Section, SectionId};

/// A conflict-free selection of sections, one per included course.
///
/// Schedules are produced by the generation engine and owned by the caller
/// thereafter. Every pair of sections in a schedule has disjoint weekly
/// occupancy; when a target course count was requested, the length matches
/// it exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub sections: Vec<Section>,
}

impl Schedule {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Number of sections in the schedule.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// CRNs of the included sections, in schedule order.
    pub fn crns(&self) -> Vec<SectionId> {
        self.sections.iter().map(|s| s.crn).collect()
    }

    /// Stable content identity for this schedule.
    ///
    /// SHA-256 over the sorted CRNs, hex-encoded. Two schedules containing
    /// the same sections have the same fingerprint regardless of section
    /// order, which lets callers deduplicate before persisting.
    pub fn fingerprint(&self) -> String {
        let mut crns: Vec<i64> = self.sections.iter().map(|s| s.crn.0).collect();
        crns.sort_unstable();
        let mut hasher = Sha256::new();
        for crn in crns {
            hasher.update(crn.to_be_bytes());
        }
        hex::encode(hasher.finalize())
    }
}

impl From<Vec<Section>> for Schedule {
    fn from(sections: Vec<Section>) -> Self {
        Schedule::new(sections)
    }
}
