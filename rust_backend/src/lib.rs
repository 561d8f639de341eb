//! Planner Rust Backend - high-performance course schedule generation.
//!
//! Given a set of locked courses (each must appear), a set of optional
//! courses (each may appear), and an optional exact course count, the
//! engine enumerates every conflict-free combination of sections. Section
//! data comes from a [`catalog::SectionProvider`]; everything after the
//! fetch is pure, synchronous CPU work.

pub mod algorithms;
pub mod catalog;
pub mod config;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod services;

pub use config::EngineConfig;
pub use error::{EngineError, EngineResult};
