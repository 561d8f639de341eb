//! Locked-course combination search.
//!
//! Locked courses must each contribute exactly one section to every
//! schedule, so the search space is the cartesian product of their section
//! lists. The product is walked with an odometer over per-course section
//! indices; a conflict at course position `k` advances the odometer at `k`
//! directly, skipping every downstream digit combination for the unchanged
//! prefix. Courses are visited fewest-sections-first, which tends to move
//! conflicts toward the front of the combination where pruning pays most.

use log::debug;

use super::budget::SearchBudget;
use super::mask::SectionCandidate;
use crate::models::Schedule;

/// Explicit odometer state over per-course section indices.
///
/// Digit `i` ranges over `[0, sizes[i])`. Advancing a digit resets every
/// digit after it and carries into earlier digits on overflow, like a
/// multi-digit counter read left to right.
#[derive(Debug)]
struct Odometer {
    indices: Vec<usize>,
    sizes: Vec<usize>,
}

impl Odometer {
    fn new(sizes: Vec<usize>) -> Self {
        Self {
            indices: vec![0; sizes.len()],
            sizes,
        }
    }

    /// Advance the digit at `position`. Returns `true` when the counter has
    /// wrapped past its first digit, i.e. the enumeration is finished.
    fn advance_from(&mut self, position: usize) -> bool {
        for digit in self.indices[position + 1..].iter_mut() {
            *digit = 0;
        }
        let mut pos = position;
        loop {
            self.indices[pos] += 1;
            if self.indices[pos] < self.sizes[pos] {
                return false;
            }
            self.indices[pos] = 0;
            if pos == 0 {
                return true;
            }
            pos -= 1;
        }
    }
}

/// Enumerate every pairwise conflict-free combination taking one section
/// per locked course.
///
/// The order combinations are discovered in follows the internal
/// fewest-sections-first course ordering and is not part of the contract;
/// only the set of returned schedules is. A course with zero sections makes
/// the product empty. When the budget runs out the enumeration stops and
/// the combinations found so far are returned.
pub fn generate_locked_combinations(
    courses: &[Vec<SectionCandidate>],
    budget: &mut SearchBudget,
) -> Vec<Schedule> {
    if courses.is_empty() {
        return Vec::new();
    }
    if courses.iter().any(|course| course.is_empty()) {
        // A locked course with no offerings is structurally unsatisfiable.
        return Vec::new();
    }

    let mut ordered: Vec<&Vec<SectionCandidate>> = courses.iter().collect();
    ordered.sort_by_key(|course| course.len());

    if ordered.len() == 1 {
        let mut singletons = Vec::with_capacity(ordered[0].len());
        for candidate in ordered[0] {
            if !budget.consume() {
                break;
            }
            singletons.push(Schedule::new(vec![candidate.section.clone()]));
        }
        return singletons;
    }

    let last = ordered.len() - 1;
    let mut odometer = Odometer::new(ordered.iter().map(|course| course.len()).collect());
    let mut results = Vec::new();
    let mut accepted: Vec<&SectionCandidate> = Vec::with_capacity(ordered.len());

    'search: loop {
        accepted.clear();
        let mut conflict_at = None;

        for (position, course) in ordered.iter().enumerate() {
            if !budget.consume() {
                break 'search;
            }
            let candidate = &course[odometer.indices[position]];
            if accepted
                .iter()
                .any(|prev| prev.mask.conflicts_with(&candidate.mask))
            {
                conflict_at = Some(position);
                break;
            }
            accepted.push(candidate);
        }

        let advance_position = match conflict_at {
            None => {
                results.push(Schedule::new(
                    accepted.iter().map(|c| c.section.clone()).collect(),
                ));
                last
            }
            Some(position) => position,
        };
        if odometer.advance_from(advance_position) {
            break;
        }
    }

    debug!(
        "locked combination search: {} courses, {} valid, {} iterations",
        courses.len(),
        results.len(),
        budget.used()
    );
    results
}
