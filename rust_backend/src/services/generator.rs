//! Schedule generation orchestration.
//!
//! The orchestrator is the only place where I/O and the pure search meet:
//! it resolves course identifiers to section lists through a
//! [`SectionProvider`], encodes every section's occupancy mask up front,
//! and dispatches to the locked-combination and optional-expansion
//! searches. Each call operates on freshly fetched data and its own budget,
//! so concurrent calls never interfere.

use futures::future::try_join_all;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::algorithms::{
    expand_optional, generate_locked_combinations, SearchBudget, SearchStatus, SectionCandidate,
    WeekMask,
};
use crate::catalog::{CatalogError, SectionProvider};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::models::{CourseId, CourseSlot, Schedule, SectionId};

/// One schedule generation request.
///
/// Locked courses must each contribute exactly one section to every
/// returned schedule; optional courses contribute zero or one. When
/// `target_count` is set, only schedules of exactly that many sections are
/// returned; otherwise all locked courses plus any subset of the optional
/// courses is an acceptable length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub locked: Vec<CourseId>,
    pub optional: Vec<CourseId>,
    #[serde(default)]
    pub target_count: Option<usize>,
}

/// Result of one generation call.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    /// Every valid schedule found. The order carries no meaning.
    pub schedules: Vec<Schedule>,
    /// Whether the search ran to completion or hit a configured bound.
    pub status: SearchStatus,
}

/// Generate every valid schedule for a request.
///
/// All course fetches are issued concurrently; the search starts once every
/// fetch has resolved. A provider failure aborts the whole call — it is not
/// the same thing as a course with zero sections, which merely produces an
/// empty product. A malformed meeting time anywhere in the fetched data
/// aborts the call before any searching.
///
/// # Arguments
/// * `provider` - Source of section data for the active term
/// * `request` - Locked/optional course ids and optional target count
/// * `config` - Search bounds
///
/// # Returns
/// * `Ok(GenerationOutcome)` - schedules plus completion status
/// * `Err(EngineError)` - provider failure, malformed data
pub async fn generate_schedules<P: SectionProvider>(
    provider: &P,
    request: &GenerationRequest,
    config: &EngineConfig,
) -> Result<GenerationOutcome, EngineError> {
    let (locked_slots, optional_slots) = futures::try_join!(
        fetch_slots(provider, &request.locked),
        fetch_slots(provider, &request.optional),
    )?;
    info!(
        "fetched sections for {} locked and {} optional courses",
        locked_slots.len(),
        optional_slots.len()
    );

    let locked_candidates = encode_slots(&locked_slots)?;
    let optional_candidates = encode_slots(&optional_slots)?;

    let mut budget = SearchBudget::new(config.search.max_iterations);

    let mut schedules = if request.optional.is_empty() {
        let locked = generate_locked_combinations(&locked_candidates, &mut budget);
        match request.target_count {
            Some(target) => locked.into_iter().filter(|s| s.len() == target).collect(),
            None => locked,
        }
    } else if request.locked.is_empty() {
        expand_optional(&[], &optional_candidates, request.target_count, &mut budget)
    } else {
        let locked = generate_locked_combinations(&locked_candidates, &mut budget);
        let mask_index: HashMap<SectionId, WeekMask> = locked_candidates
            .iter()
            .flatten()
            .map(|c| (c.section.crn, c.mask))
            .collect();

        let mut expanded = Vec::new();
        for base in &locked {
            // A base already longer than the target can never shrink.
            if request.target_count.is_some_and(|target| base.len() > target) {
                continue;
            }
            let base_candidates: Vec<SectionCandidate> = base
                .sections
                .iter()
                .map(|s| SectionCandidate {
                    section: s.clone(),
                    mask: mask_index[&s.crn],
                })
                .collect();
            expanded.extend(expand_optional(
                &base_candidates,
                &optional_candidates,
                request.target_count,
                &mut budget,
            ));
        }
        expanded
    };

    let mut truncated = budget.is_exhausted();
    if schedules.len() > config.search.max_schedules {
        schedules.truncate(config.search.max_schedules);
        truncated = true;
    }

    let status = if truncated {
        warn!(
            "schedule search truncated after {} iterations; returning {} schedules",
            budget.used(),
            schedules.len()
        );
        SearchStatus::Truncated {
            iterations: budget.used(),
        }
    } else {
        SearchStatus::Complete
    };

    info!(
        "generated {} schedules in {} iterations",
        schedules.len(),
        budget.used()
    );
    Ok(GenerationOutcome { schedules, status })
}

/// Fetch one slot per course id, all fetches in flight at once.
async fn fetch_slots<P: SectionProvider>(
    provider: &P,
    course_ids: &[CourseId],
) -> Result<Vec<CourseSlot>, EngineError> {
    let slots = try_join_all(course_ids.iter().map(|course_id| async move {
        let sections = provider.fetch_sections(course_id).await?;
        Ok::<_, CatalogError>(CourseSlot::new(course_id.clone(), sections))
    }))
    .await?;
    Ok(slots)
}

fn encode_slots(slots: &[CourseSlot]) -> Result<Vec<Vec<SectionCandidate>>, EngineError> {
    slots
        .iter()
        .map(|slot| {
            slot.sections
                .iter()
                .cloned()
                .map(SectionCandidate::new)
                .collect()
        })
        .collect()
}
