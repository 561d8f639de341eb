//! Command-line schedule generator.
//!
//! Loads a term catalog JSON file into an in-memory catalog, runs the
//! generation engine, and prints every valid schedule.
//!
//! Usage:
//!   generate_schedules <catalog.json> <locked-ids> [optional-ids] [count] [--json]
//!
//! Course id lists are comma-separated; pass `-` for an empty list.

use anyhow::{Context, Result};
use std::path::Path;

use planner_rust::catalog::CachingProvider;
use planner_rust::io::CatalogLoader;
use planner_rust::models::{weekday, CourseId, Schedule};
use planner_rust::services::{generate_schedules, GenerationRequest};
use planner_rust::EngineConfig;

fn parse_course_ids(arg: &str) -> Vec<CourseId> {
    if arg == "-" {
        return Vec::new();
    }
    arg.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(CourseId::from)
        .collect()
}

fn print_schedule(index: usize, schedule: &Schedule) {
    println!("Schedule {} [{}]", index + 1, &schedule.fingerprint()[..12]);
    for section in &schedule.sections {
        let meetings = if section.is_asynchronous() {
            "asynchronous".to_string()
        } else {
            section
                .meeting_times
                .iter()
                .map(|m| {
                    let days: String = m
                        .days
                        .iter()
                        .filter_map(|&d| weekday(d))
                        .map(|w| w.to_string())
                        .collect::<Vec<_>>()
                        .join("/");
                    format!("{} {:04}-{:04}", days, m.start_time, m.end_time)
                })
                .collect::<Vec<_>>()
                .join(", ")
        };
        println!(
            "  {} {} ({}) {}",
            section.crn,
            section.course_id,
            section.faculty.join(", "),
            meetings
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let json_output = args.iter().any(|a| a == "--json");
    let positional: Vec<&String> = args[1..].iter().filter(|a| *a != "--json").collect();

    if positional.len() < 2 {
        eprintln!(
            "usage: generate_schedules <catalog.json> <locked-ids> [optional-ids] [count] [--json]"
        );
        std::process::exit(2);
    }

    let catalog_path = Path::new(positional[0].as_str());
    let locked = parse_course_ids(positional[1]);
    let optional = positional
        .get(2)
        .map(|s| parse_course_ids(s))
        .unwrap_or_default();
    let target_count = positional
        .get(3)
        .map(|s| s.parse::<usize>().context("count must be an integer"))
        .transpose()?;

    let config = match std::env::var("PLANNER_CONFIG") {
        Ok(path) => EngineConfig::from_file(Path::new(&path))?,
        Err(_) => EngineConfig::default(),
    };

    let catalog = CatalogLoader::load_into_catalog(catalog_path)?;
    let provider = CachingProvider::new(catalog);

    let request = GenerationRequest {
        locked,
        optional,
        target_count,
    };
    let outcome = generate_schedules(&provider, &request, &config).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    for (index, schedule) in outcome.schedules.iter().enumerate() {
        print_schedule(index, schedule);
        println!();
    }
    println!("{} schedules", outcome.schedules.len());
    if !outcome.status.is_complete() {
        eprintln!("warning: search truncated; result set may be incomplete");
    }
    Ok(())
}
