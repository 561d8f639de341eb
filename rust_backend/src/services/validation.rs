//! Validation service for generated schedules.
//!
//! Re-checks the engine's output invariants over a result set before it is
//! persisted or displayed: pairwise conflict freedom, one section per
//! course, and the exact target count when one was requested. The engine is
//! expected to always produce valid schedules; this service exists so that
//! callers storing results can prove it rather than assume it.

use std::collections::HashSet;

use crate::algorithms::WeekMask;
use crate::error::EngineError;
use crate::models::Schedule;

/// Validation status for a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationStatus {
    Valid,
    Invalid,
}

impl ValidationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationStatus::Valid => "valid",
            ValidationStatus::Invalid => "invalid",
        }
    }
}

/// Issue category for grouping validation problems
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueCategory {
    Conflict,
    CourseCount,
    Duplication,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Conflict => "conflict",
            IssueCategory::CourseCount => "course_count",
            IssueCategory::Duplication => "duplication",
        }
    }
}

/// A single validation issue found in a result set
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Index of the offending schedule within the checked set.
    pub schedule_index: usize,
    pub category: IssueCategory,
    pub description: String,
}

/// Outcome of validating one result set
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub schedules_checked: usize,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn status(&self) -> ValidationStatus {
        if self.issues.is_empty() {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        }
    }

    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validate every schedule in a result set.
///
/// # Arguments
/// * `schedules` - The result set to check
/// * `target_count` - The exact section count requested, if any
///
/// # Returns
/// * `Ok(ValidationReport)` - all findings, empty when the set is valid
/// * `Err(EngineError)` - a schedule contained a malformed meeting time
pub fn validate_schedules(
    schedules: &[Schedule],
    target_count: Option<usize>,
) -> Result<ValidationReport, EngineError> {
    let mut issues = Vec::new();

    for (index, schedule) in schedules.iter().enumerate() {
        let mut seen_courses = HashSet::new();
        for section in &schedule.sections {
            if !seen_courses.insert(&section.course_id) {
                issues.push(ValidationIssue {
                    schedule_index: index,
                    category: IssueCategory::Duplication,
                    description: format!(
                        "course {} appears more than once",
                        section.course_id
                    ),
                });
            }
        }

        if let Some(target) = target_count {
            if schedule.len() != target {
                issues.push(ValidationIssue {
                    schedule_index: index,
                    category: IssueCategory::CourseCount,
                    description: format!(
                        "expected exactly {} sections, found {}",
                        target,
                        schedule.len()
                    ),
                });
            }
        }

        let masks = schedule
            .sections
            .iter()
            .map(|s| WeekMask::for_section(s).map(|mask| (s.crn, mask)))
            .collect::<Result<Vec<_>, _>>()?;
        for i in 0..masks.len() {
            for j in (i + 1)..masks.len() {
                if masks[i].1.conflicts_with(&masks[j].1) {
                    issues.push(ValidationIssue {
                        schedule_index: index,
                        category: IssueCategory::Conflict,
                        description: format!(
                            "sections {} and {} overlap in time",
                            masks[i].0, masks[j].0
                        ),
                    });
                }
            }
        }
    }

    Ok(ValidationReport {
        schedules_checked: schedules.len(),
        issues,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseId, Enrollment, MeetingTime, Section, SectionId};

    fn section(crn: i64, course: &str, meetings: Vec<MeetingTime>) -> Section {
        Section {
            crn: SectionId(crn),
            course_id: CourseId::from(course),
            faculty: vec![],
            campus: String::new(),
            enrollment: Enrollment::default(),
            meeting_times: meetings,
        }
    }

    #[test]
    fn test_clean_set_is_valid() {
        let schedule = Schedule::new(vec![
            section(1, "A", vec![MeetingTime::new(vec![1], 900, 950)]),
            section(2, "B", vec![MeetingTime::new(vec![2], 900, 950)]),
        ]);
        let report = validate_schedules(&[schedule], Some(2)).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.status(), ValidationStatus::Valid);
        assert_eq!(report.schedules_checked, 1);
    }

    #[test]
    fn test_overlap_is_reported() {
        let schedule = Schedule::new(vec![
            section(1, "A", vec![MeetingTime::new(vec![1], 900, 1000)]),
            section(2, "B", vec![MeetingTime::new(vec![1], 930, 1030)]),
        ]);
        let report = validate_schedules(&[schedule], None).unwrap();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].category, IssueCategory::Conflict);
    }

    #[test]
    fn test_count_mismatch_is_reported() {
        let schedule = Schedule::new(vec![section(1, "A", vec![])]);
        let report = validate_schedules(&[schedule], Some(2)).unwrap();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].category, IssueCategory::CourseCount);
    }

    #[test]
    fn test_duplicate_course_is_reported() {
        let schedule = Schedule::new(vec![
            section(1, "A", vec![MeetingTime::new(vec![1], 900, 950)]),
            section(2, "A", vec![MeetingTime::new(vec![2], 900, 950)]),
        ]);
        let report = validate_schedules(&[schedule], None).unwrap();
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].category, IssueCategory::Duplication);
    }
}
