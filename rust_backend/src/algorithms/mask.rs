//! Fixed-width weekly occupancy masks.
//!
//! Every section's meeting schedule is encoded once into a 2016-bit pattern
//! (7 days × 288 five-minute granules per day) so that any two sections can
//! be tested for a time conflict with a handful of word-wise ANDs,
//! independent of how many meetings either section has. The week is a fixed,
//! known domain, so the mask lives in a stack-allocated `[u64; 32]` rather
//! than a heap-backed big integer.

use crate::error::EngineError;
use crate::models::{hhmm_to_minutes, Section, DAYS_PER_WEEK};

/// Width of one time granule in minutes.
pub const SLOT_MINUTES: u32 = 5;

/// Number of granules per day (24h × 60min / 5min).
pub const SLOTS_PER_DAY: usize = 288;

/// Total granules across the week.
pub const WEEK_SLOTS: usize = DAYS_PER_WEEK * SLOTS_PER_DAY;

const MASK_WORDS: usize = (WEEK_SLOTS + 63) / 64;

/// Weekly occupancy of one section as a fixed bit pattern.
///
/// Bit `day * 288 + slot` is set iff some meeting time of the section
/// occupies day `day` (0 = Sunday) during five-minute granule `slot`. Masks
/// are pure derived data: computed from a [`Section`], never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekMask {
    words: [u64; MASK_WORDS],
}

impl WeekMask {
    /// The all-zero mask: no occupied time at all.
    pub fn empty() -> Self {
        Self {
            words: [0; MASK_WORDS],
        }
    }

    /// Encode a section's meeting times.
    ///
    /// Every meeting occupies the granules from `slot(start)` (inclusive) to
    /// `slot(end)` (exclusive) on each of its days. A section with no
    /// meeting times yields the empty mask. Malformed meeting times are
    /// rejected with the offending CRN rather than clamped or skipped.
    pub fn for_section(section: &Section) -> Result<Self, EngineError> {
        let mut mask = Self::empty();
        for meeting in &section.meeting_times {
            meeting
                .validate()
                .map_err(|defect| EngineError::MalformedMeetingTime {
                    crn: section.crn,
                    defect,
                })?;
            let start_slot = (meeting.start_minutes() / SLOT_MINUTES) as usize;
            let end_slot = (meeting.end_minutes() / SLOT_MINUTES) as usize;
            for &day in &meeting.days {
                mask.set_range(day as usize, start_slot, end_slot);
            }
        }
        Ok(mask)
    }

    /// Whether the two masks share any occupied granule.
    ///
    /// Symmetric and O(1) in the number of meetings behind each mask; this
    /// is the primitive that keeps the combination search from comparing
    /// meeting lists pairwise.
    pub fn conflicts_with(&self, other: &WeekMask) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Whether no granule is occupied.
    pub fn is_unoccupied(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Number of occupied granules across the week.
    pub fn occupied_slots(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// Whether granule `slot` on day `day` is occupied.
    pub fn slot_occupied(&self, day: usize, slot: usize) -> bool {
        let index = day * SLOTS_PER_DAY + slot;
        self.words[index / 64] & (1u64 << (index % 64)) != 0
    }

    fn set_range(&mut self, day: usize, start_slot: usize, end_slot: usize) {
        for slot in start_slot..end_slot {
            let index = day * SLOTS_PER_DAY + slot;
            self.words[index / 64] |= 1u64 << (index % 64);
        }
    }
}

/// A section paired with its precomputed occupancy mask.
///
/// Candidates are built once per generation call so the search never
/// re-derives a mask.
#[derive(Debug, Clone)]
pub struct SectionCandidate {
    pub section: Section,
    pub mask: WeekMask,
}

impl SectionCandidate {
    pub fn new(section: Section) -> Result<Self, EngineError> {
        let mask = WeekMask::for_section(&section)?;
        Ok(Self { section, mask })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CourseId, Enrollment, MeetingTime, SectionId};
    use proptest::prelude::*;

    fn section(crn: i64, meetings: Vec<MeetingTime>) -> Section {
        Section {
            crn: SectionId(crn),
            course_id: CourseId::from("TEST-1000"),
            faculty: vec![],
            campus: String::new(),
            enrollment: Enrollment::default(),
            meeting_times: meetings,
        }
    }

    #[test]
    fn test_mwf_lecture_sets_exactly_expected_bits() {
        // Mon/Wed/Fri 10:00-10:50 -> minutes 600..650 -> slots 120..130
        let s = section(1, vec![MeetingTime::new(vec![1, 3, 5], 1000, 1050)]);
        let mask = WeekMask::for_section(&s).unwrap();

        assert_eq!(mask.occupied_slots(), 30);
        for day in [1, 3, 5] {
            assert!(!mask.slot_occupied(day, 119));
            for slot in 120..130 {
                assert!(mask.slot_occupied(day, slot));
            }
            assert!(!mask.slot_occupied(day, 130));
        }
        for day in [0, 2, 4, 6] {
            for slot in 115..135 {
                assert!(!mask.slot_occupied(day, slot));
            }
        }
    }

    #[test]
    fn test_asynchronous_section_is_empty() {
        let s = section(2, vec![]);
        let mask = WeekMask::for_section(&s).unwrap();
        assert!(mask.is_unoccupied());
    }

    #[test]
    fn test_adjacent_ranges_do_not_conflict() {
        // One ends at 10:50 where the other starts; end slot is exclusive.
        let a = WeekMask::for_section(&section(
            3,
            vec![MeetingTime::new(vec![2], 1000, 1050)],
        ))
        .unwrap();
        let b = WeekMask::for_section(&section(
            4,
            vec![MeetingTime::new(vec![2], 1050, 1140)],
        ))
        .unwrap();
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn test_single_granule_overlap_conflicts() {
        let a = WeekMask::for_section(&section(
            5,
            vec![MeetingTime::new(vec![4], 900, 1000)],
        ))
        .unwrap();
        let b = WeekMask::for_section(&section(
            6,
            vec![MeetingTime::new(vec![4], 955, 1030)],
        ))
        .unwrap();
        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
    }

    #[test]
    fn test_disjoint_days_never_conflict() {
        let a = WeekMask::for_section(&section(
            7,
            vec![MeetingTime::new(vec![1], 900, 1700)],
        ))
        .unwrap();
        let b = WeekMask::for_section(&section(
            8,
            vec![MeetingTime::new(vec![2], 900, 1700)],
        ))
        .unwrap();
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn test_malformed_meeting_rejected_with_crn() {
        let s = section(42, vec![MeetingTime::new(vec![1], 1100, 1000)]);
        match WeekMask::for_section(&s) {
            Err(EngineError::MalformedMeetingTime { crn, .. }) => {
                assert_eq!(crn, SectionId(42));
            }
            other => panic!("expected MalformedMeetingTime, got {:?}", other),
        }
    }

    prop_compose! {
        fn arb_meeting()(
            day in 0u8..7,
            start_hour in 0u16..23,
            start_min in 0u16..60,
            duration_slots in 1u32..24,
        ) -> MeetingTime {
            let start = start_hour * 100 + (start_min / 5) * 5;
            let start_minutes = hhmm_to_minutes(start) + duration_slots * SLOT_MINUTES;
            let end_minutes = start_minutes.min(23 * 60 + 55);
            let end = ((end_minutes / 60) * 100 + end_minutes % 60) as u16;
            MeetingTime::new(vec![day], start, end.max(start))
        }
    }

    proptest! {
        #[test]
        fn prop_conflict_is_symmetric(m1 in arb_meeting(), m2 in arb_meeting()) {
            let a = WeekMask::for_section(&section(100, vec![m1])).unwrap();
            let b = WeekMask::for_section(&section(101, vec![m2])).unwrap();
            prop_assert_eq!(a.conflicts_with(&b), b.conflicts_with(&a));
        }

        #[test]
        fn prop_encoding_is_deterministic(m in arb_meeting()) {
            let s = section(102, vec![m]);
            let a = WeekMask::for_section(&s).unwrap();
            let b = WeekMask::for_section(&s).unwrap();
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_occupancy_matches_duration(m in arb_meeting()) {
            let expected = (hhmm_to_minutes(m.end_time) - hhmm_to_minutes(m.start_time))
                / SLOT_MINUTES;
            let s = section(103, vec![m]);
            let mask = WeekMask::for_section(&s).unwrap();
            prop_assert_eq!(mask.occupied_slots(), expected);
        }
    }
}
