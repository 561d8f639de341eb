//! Provider trait for term section data.
//!
//! The engine does not own section storage; the surrounding system does.
//! This trait is the seam: given a course identifier it yields that course's
//! sections for the active term, with meeting times already resolved.

use async_trait::async_trait;

use super::error::CatalogResult;
use crate::models::{CourseId, Section};

/// Source of section data for the active term.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust; fetches
/// for distinct courses are independent and may be issued concurrently.
///
/// # Semantics
/// A course the provider has never heard of is an error
/// ([`CatalogError::NotFound`](super::CatalogError::NotFound)) — the caller
/// asked about data that is unavailable. A known course that simply offers
/// no sections this term is `Ok(vec![])`: a valid, deterministic cause of an
/// empty result set downstream. The two must never be conflated.
#[async_trait]
pub trait SectionProvider: Send + Sync {
    /// Check if the backing data source is reachable.
    ///
    /// # Returns
    /// - `Ok(true)` if the source is healthy
    /// - `Ok(false)` if unhealthy but no error occurred
    /// - `Err(CatalogError)` if the check itself failed
    async fn health_check(&self) -> CatalogResult<bool>;

    /// Fetch all sections of `course_id` for the active term.
    ///
    /// # Returns
    /// * `Ok(Vec<Section>)` - every offered section, order unspecified
    /// * `Err(CatalogError::NotFound)` - the course id is unknown
    /// * `Err(CatalogError)` - the fetch failed
    async fn fetch_sections(&self, course_id: &CourseId) -> CatalogResult<Vec<Section>>;
}
