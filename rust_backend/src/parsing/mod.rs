//! Parsers for term catalog data formats.
//!
//! # Parsers
//!
//! - [`catalog_json`]: Parse JSON-formatted term catalogs into course slots
//!
//! # Example
//!
//! ```no_run
//! use planner_rust::parsing::catalog_json::parse_catalog_file;
//! use std::path::Path;
//!
//! let slots = parse_catalog_file(Path::new("fall2026.json"))
//!     .expect("Failed to parse catalog");
//! ```

pub mod catalog_json;

pub use catalog_json::{parse_catalog_file, parse_catalog_str};
