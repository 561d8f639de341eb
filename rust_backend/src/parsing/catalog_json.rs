//! Term-catalog JSON parsing.
//!
//! Mirrors the JSON the surrounding system exports per term: a list of
//! courses, each with its sections and resolved meeting times. The raw
//! structures below track that wire shape field-for-field; conversion into
//! the internal model types happens in one place at the bottom.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::path::Path;

use crate::models::{
    CourseId, CourseSlot, Enrollment, MeetingTime, Section, SectionId,
};

/// Custom deserializer that accepts either string or integer for a CRN.
fn deserialize_crn<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrInt {
        String(String),
        Int(i64),
    }

    match StringOrInt::deserialize(deserializer)? {
        StringOrInt::String(s) => s.parse::<i64>().map_err(D::Error::custom),
        StringOrInt::Int(i) => Ok(i),
    }
}

/// Raw JSON structure for one meeting time
#[derive(Debug, Deserialize)]
struct RawMeetingTime {
    days: Vec<u8>,
    #[serde(rename = "startTime")]
    start_time: u16,
    #[serde(rename = "endTime")]
    end_time: u16,
    #[serde(default)]
    location: Option<String>,
}

/// Raw JSON structure for one section
#[derive(Debug, Deserialize)]
struct RawSection {
    #[serde(deserialize_with = "deserialize_crn")]
    crn: i64,
    #[serde(default)]
    faculty: Vec<String>,
    #[serde(default)]
    campus: String,
    #[serde(rename = "seatsCapacity", default)]
    seats_capacity: i32,
    #[serde(rename = "seatsAvailable", default)]
    seats_available: i32,
    #[serde(rename = "waitlistCapacity", default)]
    waitlist_capacity: i32,
    #[serde(rename = "waitlistAvailable", default)]
    waitlist_available: i32,
    #[serde(rename = "meetingTimes", default)]
    meeting_times: Vec<RawMeetingTime>,
}

/// Raw JSON structure for one course
#[derive(Debug, Deserialize)]
struct RawCourse {
    #[serde(rename = "courseId")]
    course_id: String,
    #[serde(default)]
    sections: Vec<RawSection>,
}

/// Container for the catalog file structure
#[derive(Debug, Deserialize)]
struct RawCatalog {
    courses: Vec<RawCourse>,
}

/// Parse a term catalog from a JSON string.
///
/// Deserialization failures are reported with the JSON path to the
/// offending field, not just the serde message.
pub fn parse_catalog_str(json: &str) -> Result<Vec<CourseSlot>> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    let raw: RawCatalog = serde_path_to_error::deserialize(&mut deserializer)
        .map_err(|e| anyhow::anyhow!("invalid catalog JSON at {}: {}", e.path(), e.inner()))?;
    Ok(raw.courses.into_iter().map(convert_course).collect())
}

/// Parse a term catalog from a JSON file.
pub fn parse_catalog_file(path: &Path) -> Result<Vec<CourseSlot>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
    parse_catalog_str(&json)
}

fn convert_course(raw: RawCourse) -> CourseSlot {
    let course_id = CourseId::from(raw.course_id);
    let sections = raw
        .sections
        .into_iter()
        .map(|s| convert_section(s, &course_id))
        .collect();
    CourseSlot::new(course_id, sections)
}

fn convert_section(raw: RawSection, course_id: &CourseId) -> Section {
    Section {
        crn: SectionId(raw.crn),
        course_id: course_id.clone(),
        faculty: raw.faculty,
        campus: raw.campus,
        enrollment: Enrollment {
            seats_capacity: raw.seats_capacity,
            seats_available: raw.seats_available,
            waitlist_capacity: raw.waitlist_capacity,
            waitlist_available: raw.waitlist_available,
        },
        meeting_times: raw
            .meeting_times
            .into_iter()
            .map(|m| MeetingTime {
                days: m.days,
                start_time: m.start_time,
                end_time: m.end_time,
                location: m.location,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "courses": [
            {
                "courseId": "CSCI-1200",
                "sections": [
                    {
                        "crn": 86753,
                        "faculty": ["B. Cutler"],
                        "campus": "Troy",
                        "seatsCapacity": 30,
                        "seatsAvailable": 3,
                        "waitlistCapacity": 10,
                        "waitlistAvailable": 10,
                        "meetingTimes": [
                            { "days": [1, 4], "startTime": 1000, "endTime": 1150, "location": "DCC 308" }
                        ]
                    },
                    {
                        "crn": "86754",
                        "meetingTimes": []
                    }
                ]
            },
            {
                "courseId": "GHOST-1000",
                "sections": []
            }
        ]
    }"#;

    #[test]
    fn test_parse_catalog_fixture() {
        let slots = parse_catalog_str(FIXTURE).unwrap();
        assert_eq!(slots.len(), 2);

        let csci = &slots[0];
        assert_eq!(csci.course_id, CourseId::from("CSCI-1200"));
        assert_eq!(csci.section_count(), 2);

        let first = &csci.sections[0];
        assert_eq!(first.crn, SectionId(86753));
        assert_eq!(first.enrollment.seats_available, 3);
        assert_eq!(first.meeting_times[0].days, vec![1, 4]);
        assert_eq!(
            first.meeting_times[0].location.as_deref(),
            Some("DCC 308")
        );

        // String CRN is accepted, omitted fields default.
        let second = &csci.sections[1];
        assert_eq!(second.crn, SectionId(86754));
        assert!(second.is_asynchronous());

        assert_eq!(slots[1].section_count(), 0);
    }

    #[test]
    fn test_parse_error_carries_json_path() {
        let bad = r#"{ "courses": [ { "courseId": "X", "sections": [ { "crn": true } ] } ] }"#;
        let err = parse_catalog_str(bad).unwrap_err();
        assert!(err.to_string().contains("courses[0].sections[0]"));
    }
}
