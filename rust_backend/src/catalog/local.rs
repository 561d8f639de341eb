//! In-memory local catalog implementation.
//!
//! This module provides a local implementation of [`SectionProvider`]
//! suitable for unit testing and local development. All data is stored in
//! memory using a HashMap, providing fast, deterministic, and isolated
//! execution.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::error::{CatalogError, CatalogResult};
use super::provider::SectionProvider;
use crate::models::{CourseId, CourseSlot, Section};

/// In-memory catalog of course sections.
///
/// # Example
/// ```
/// use planner_rust::catalog::LocalCatalog;
/// use planner_rust::models::CourseId;
///
/// let catalog = LocalCatalog::new();
/// catalog.register_course(CourseId::from("CSCI-1200"), vec![]);
/// ```
#[derive(Clone)]
pub struct LocalCatalog {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    courses: HashMap<CourseId, Vec<Section>>,
    is_healthy: bool,
}

impl Default for LocalCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(LocalData {
                courses: HashMap::new(),
                is_healthy: true,
            })),
        }
    }

    /// Register a course and its sections.
    ///
    /// Registering an empty section list is meaningful: the course exists
    /// this term but offers nothing, which is distinct from an unknown
    /// course id.
    pub fn register_course(&self, course_id: CourseId, sections: Vec<Section>) {
        let mut data = self.data.write().unwrap();
        data.courses.insert(course_id, sections);
    }

    /// Register a whole slot as loaded from a term catalog file.
    pub fn register_slot(&self, slot: CourseSlot) {
        self.register_course(slot.course_id, slot.sections);
    }

    /// Number of registered courses.
    pub fn course_count(&self) -> usize {
        self.data.read().unwrap().courses.len()
    }

    /// Toggle the simulated connection health. Fetches fail while unhealthy;
    /// used to exercise provider-failure paths in tests.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().unwrap().is_healthy = healthy;
    }
}

#[async_trait]
impl SectionProvider for LocalCatalog {
    async fn health_check(&self) -> CatalogResult<bool> {
        Ok(self.data.read().unwrap().is_healthy)
    }

    async fn fetch_sections(&self, course_id: &CourseId) -> CatalogResult<Vec<Section>> {
        let data = self.data.read().unwrap();
        if !data.is_healthy {
            return Err(CatalogError::ConnectionError(
                "local catalog marked unhealthy".to_string(),
            ));
        }
        data.courses
            .get(course_id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(course_id.to_string()))
    }
}
