//! Request-scoped section cache.
//!
//! The engine never keeps hidden global caches; callers that want to avoid
//! re-fetching a course within one request wrap their provider in a
//! [`CachingProvider`] and drop it when the request ends. Concurrent
//! generation calls each own their wrapper, so there is no cross-call
//! interference to reason about.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

use super::error::CatalogResult;
use super::provider::SectionProvider;
use crate::models::{CourseId, Section};

/// Memoizing wrapper over any [`SectionProvider`].
///
/// Successful fetches are cached by course id; failures are not, so a
/// transient provider error does not poison the request. Health checks pass
/// straight through.
pub struct CachingProvider<P> {
    inner: P,
    cache: RwLock<HashMap<CourseId, Vec<Section>>>,
}

impl<P> CachingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Number of courses currently held in the cache.
    pub fn cached_courses(&self) -> usize {
        self.cache.read().unwrap().len()
    }

    /// Unwrap back into the inner provider.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

#[async_trait]
impl<P: SectionProvider> SectionProvider for CachingProvider<P> {
    async fn health_check(&self) -> CatalogResult<bool> {
        self.inner.health_check().await
    }

    async fn fetch_sections(&self, course_id: &CourseId) -> CatalogResult<Vec<Section>> {
        if let Some(sections) = self.cache.read().unwrap().get(course_id) {
            return Ok(sections.clone());
        }
        let sections = self.inner.fetch_sections(course_id).await?;
        self.cache
            .write()
            .unwrap()
            .insert(course_id.clone(), sections.clone());
        Ok(sections)
    }
}
