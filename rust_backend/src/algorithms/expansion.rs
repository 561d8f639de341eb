//! Optional-course expansion.
//!
//! Optional courses contribute zero or one section to a schedule. Starting
//! from a conflict-free base (typically one locked combination), the
//! expander walks the courses depth-first with a binary choice per course:
//! skip it, or take one of its non-conflicting sections. Branches that can
//! no longer reach a requested target count are cut immediately, and once
//! the target is met the remaining courses are skipped wholesale instead of
//! being branched over.

use log::debug;

use super::budget::SearchBudget;
use super::mask::SectionCandidate;
use crate::models::Schedule;

/// Expand a base schedule with every admissible subset of optional courses.
///
/// When `target_count` is given, only schedules of exactly that length are
/// produced; otherwise the base plus any subset of optional courses is
/// acceptable, including the empty subset. The skip branch is explored
/// before the take branches and sections are tried in list order, but
/// emission order is not part of the contract. When the budget runs out the
/// walk stops and the schedules found so far are returned.
pub fn expand_optional(
    base: &[SectionCandidate],
    optional: &[Vec<SectionCandidate>],
    target_count: Option<usize>,
    budget: &mut SearchBudget,
) -> Vec<Schedule> {
    let mut ordered: Vec<&Vec<SectionCandidate>> = optional.iter().collect();
    ordered.sort_by_key(|course| course.len());

    let mut current: Vec<&SectionCandidate> = base.iter().collect();
    let mut results = Vec::new();
    expand(
        &ordered,
        0,
        &mut current,
        target_count,
        budget,
        &mut results,
    );

    debug!(
        "optional expansion: base {} + {} courses, {} schedules, {} iterations",
        base.len(),
        optional.len(),
        results.len(),
        budget.used()
    );
    results
}

fn expand<'a>(
    courses: &[&'a Vec<SectionCandidate>],
    position: usize,
    current: &mut Vec<&'a SectionCandidate>,
    target_count: Option<usize>,
    budget: &mut SearchBudget,
    results: &mut Vec<Schedule>,
) {
    if let Some(target) = target_count {
        // Even taking every remaining course cannot reach the target.
        if current.len() + (courses.len() - position) < target {
            return;
        }
        // Saturated: skip the remaining courses outright.
        if current.len() == target {
            results.push(collect(current));
            return;
        }
    }

    if position == courses.len() {
        if target_count.map_or(true, |target| current.len() == target) {
            results.push(collect(current));
        }
        return;
    }

    // Skip this course.
    expand(courses, position + 1, current, target_count, budget, results);
    if budget.is_exhausted() {
        return;
    }

    // Take each section that fits.
    for candidate in courses[position] {
        if !budget.consume() {
            return;
        }
        if current
            .iter()
            .any(|prev| prev.mask.conflicts_with(&candidate.mask))
        {
            continue;
        }
        current.push(candidate);
        expand(courses, position + 1, current, target_count, budget, results);
        current.pop();
        if budget.is_exhausted() {
            return;
        }
    }
}

fn collect(current: &[&SectionCandidate]) -> Schedule {
    Schedule::new(current.iter().map(|c| c.section.clone()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseId, Enrollment, MeetingTime, Section, SectionId};
    use std::collections::BTreeSet;

    fn candidate(crn: i64, course: &str, meetings: Vec<MeetingTime>) -> SectionCandidate {
        SectionCandidate::new(Section {
            crn: SectionId(crn),
            course_id: CourseId::from(course),
            faculty: vec![],
            campus: String::new(),
            enrollment: Enrollment::default(),
            meeting_times: meetings,
        })
        .unwrap()
    }

    fn crn_sets(schedules: &[Schedule]) -> BTreeSet<Vec<i64>> {
        schedules
            .iter()
            .map(|s| {
                let mut crns: Vec<i64> = s.sections.iter().map(|x| x.crn.0).collect();
                crns.sort_unstable();
                crns
            })
            .collect()
    }

    #[test]
    fn test_no_target_emits_every_subset() {
        let x = vec![candidate(1, "X", vec![MeetingTime::new(vec![1], 900, 950)])];
        let y = vec![candidate(2, "Y", vec![MeetingTime::new(vec![2], 900, 950)])];
        let mut budget = SearchBudget::unlimited();
        let schedules = expand_optional(&[], &[x, y], None, &mut budget);
        assert_eq!(
            crn_sets(&schedules),
            BTreeSet::from([vec![], vec![1], vec![2], vec![1, 2]])
        );
    }

    #[test]
    fn test_target_count_is_exact() {
        let x = vec![candidate(1, "X", vec![MeetingTime::new(vec![1], 900, 950)])];
        let y = vec![candidate(2, "Y", vec![MeetingTime::new(vec![2], 900, 950)])];
        let mut budget = SearchBudget::unlimited();
        let schedules = expand_optional(&[], &[x, y], Some(1), &mut budget);
        assert_eq!(crn_sets(&schedules), BTreeSet::from([vec![1], vec![2]]));
        for schedule in &schedules {
            assert_eq!(schedule.len(), 1);
        }
    }

    #[test]
    fn test_conflicting_sections_are_not_taken() {
        let base = vec![candidate(9, "L", vec![MeetingTime::new(vec![1], 900, 1000)])];
        let x = vec![
            candidate(1, "X", vec![MeetingTime::new(vec![1], 930, 1030)]),
            candidate(2, "X", vec![MeetingTime::new(vec![3], 900, 950)]),
        ];
        let mut budget = SearchBudget::unlimited();
        let schedules = expand_optional(&base, &[x], None, &mut budget);
        assert_eq!(
            crn_sets(&schedules),
            BTreeSet::from([vec![9], vec![2, 9]])
        );
    }

    #[test]
    fn test_unreachable_target_yields_nothing() {
        let x = vec![candidate(1, "X", vec![MeetingTime::new(vec![1], 900, 950)])];
        let mut budget = SearchBudget::unlimited();
        let schedules = expand_optional(&[], &[x], Some(3), &mut budget);
        assert!(schedules.is_empty());
    }

    #[test]
    fn test_saturated_base_skips_all_optionals() {
        let base = vec![candidate(9, "L", vec![MeetingTime::new(vec![1], 900, 950)])];
        let x = vec![candidate(1, "X", vec![MeetingTime::new(vec![2], 900, 950)])];
        let y = vec![candidate(2, "Y", vec![MeetingTime::new(vec![3], 900, 950)])];
        let mut budget = SearchBudget::unlimited();
        let schedules = expand_optional(&base, &[x, y], Some(1), &mut budget);
        assert_eq!(crn_sets(&schedules), BTreeSet::from([vec![9]]));
        // Saturation short-circuits before any section placement attempt.
        assert_eq!(budget.used(), 0);
    }

    #[test]
    fn test_multiple_sections_per_optional_course() {
        let x = vec![
            candidate(1, "X", vec![MeetingTime::new(vec![1], 900, 950)]),
            candidate(2, "X", vec![MeetingTime::new(vec![2], 900, 950)]),
        ];
        let y = vec![candidate(3, "Y", vec![MeetingTime::new(vec![1], 900, 950)])];
        let mut budget = SearchBudget::unlimited();
        let schedules = expand_optional(&[], &[x, y], Some(2), &mut budget);
        // Y's only section clashes with X section 1 but not section 2.
        assert_eq!(crn_sets(&schedules), BTreeSet::from([vec![2, 3]]));
    }
}
