//! Job model.
//!
//! A job is a rigid request: it occupies a fixed amount of every resource
//! for `length` consecutive time steps starting at placement.

use serde::{Deserialize, Serialize};

/// A pending job waiting in the job window.
///
/// Jobs are created by the arrival process and never mutated by the
/// dispatcher; selectors only read `length` and `resource_vector`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Duration in discrete time steps (must be positive).
    pub length: usize,
    /// Demand per resource dimension (non-negative).
    pub resource_vector: Vec<f64>,
}

impl Job {
    /// Creates a job.
    pub fn new(length: usize, resource_vector: impl Into<Vec<f64>>) -> Self {
        Self {
            length,
            resource_vector: resource_vector.into(),
        }
    }

    /// Number of resource dimensions.
    pub fn dimensions(&self) -> usize {
        self.resource_vector.len()
    }
}
