//! Feasibility check.
//!
//! A job fits a machine when, for each of the job's `length` time steps,
//! the machine's residual capacity covers the job's demand in every
//! resource dimension. This is the gate for every scoring rule: a job that
//! does not fit is never selectable.

use crate::models::{Job, Machine};

/// Whether `job` can be placed on `machine` starting now.
///
/// A job longer than the machine's horizon does not fit, since there is no
/// capacity information past the horizon. Never mutates either argument.
pub fn fits(machine: &Machine, job: &Job) -> bool {
    let Some(rows) = machine.window(job.length) else {
        return false;
    };
    rows.iter().all(|row| {
        row.iter()
            .zip(&job.resource_vector)
            .all(|(available, demand)| available - demand >= 0.0)
    })
}

/// Slot-level variant of [`fits`]. An empty slot never fits.
pub fn fits_slot(machine: &Machine, job: Option<&Job>) -> bool {
    job.is_some_and(|job| fits(machine, job))
}
