//! Machine model.
//!
//! A machine exposes its residual capacity as a `[T, R]` matrix: row `t`
//! holds the capacity still free `t` steps from now, one column per
//! resource dimension. The matrix is maintained by the caller's commit
//! step; the dispatcher only reads it.

use serde::{Deserialize, Serialize};

/// A machine with time-varying residual capacity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Machine {
    /// Machine identifier (used in diagnostics).
    pub id: String,
    /// Residual capacity, `available_capacity[t][r]`.
    pub available_capacity: Vec<Vec<f64>>,
}

impl Machine {
    /// Creates a machine from explicit capacity rows.
    pub fn new(id: impl Into<String>, available_capacity: Vec<Vec<f64>>) -> Self {
        Self {
            id: id.into(),
            available_capacity,
        }
    }

    /// Creates an idle machine with the same capacity at every time step.
    pub fn uniform(id: impl Into<String>, horizon: usize, capacity: impl Into<Vec<f64>>) -> Self {
        let row = capacity.into();
        Self::new(id, vec![row; horizon])
    }

    /// Planning horizon `T` in time steps.
    pub fn horizon(&self) -> usize {
        self.available_capacity.len()
    }

    /// Resource dimensionality `R` (taken from the first row).
    pub fn dimensions(&self) -> usize {
        self.available_capacity.first().map_or(0, Vec::len)
    }

    /// Capacity available right now (row 0). Empty if the horizon is zero.
    pub fn immediate(&self) -> &[f64] {
        self.available_capacity
            .first()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Capacity rows for offsets `[0, steps)`, or `None` if the horizon is shorter.
    pub fn window(&self, steps: usize) -> Option<&[Vec<f64>]> {
        self.available_capacity.get(..steps)
    }
}
