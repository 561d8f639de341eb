//! Service layer for orchestration and result checking.
//!
//! Services sit between callers and the pure algorithms: the generator
//! resolves course data through a provider and drives the searches, and the
//! validation service re-proves the output invariants for callers that
//! persist results.

pub mod generator;
pub mod validation;

pub use generator::{generate_schedules, GenerationOutcome, GenerationRequest};
pub use validation::{validate_schedules, ValidationReport, ValidationStatus};
