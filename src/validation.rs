//! Input validation for dispatching calls.
//!
//! Checks caller contracts before any scoring happens. Detects:
//! - Empty or ragged capacity matrices
//! - Jobs of zero length
//! - Negative or non-finite demands
//! - Resource dimensionality disagreements between jobs and machines
//! - Blend weights outside `[0, 1]`
//!
//! Validation stops at the first violation: a call with broken inputs is
//! rejected as a whole, never partially evaluated.

use crate::error::{DispatchError, Result};
use crate::models::{JobSlot, Machine};

/// Validates a machine's capacity matrix.
///
/// # Returns
/// The machine's resource dimensionality `R`.
pub fn validate_machine(machine: &Machine) -> Result<usize> {
    let dims = machine.dimensions();
    if machine.horizon() == 0 {
        return Err(DispatchError::MalformedCapacity {
            machine: machine.id.clone(),
            reason: "no time steps".into(),
        });
    }
    if let Some((t, row)) = machine
        .available_capacity
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != dims)
    {
        return Err(DispatchError::MalformedCapacity {
            machine: machine.id.clone(),
            reason: format!("row {t} has {} columns, expected {dims}", row.len()),
        });
    }
    Ok(dims)
}

/// Validates a set of machines used together in one call.
///
/// Checks:
/// 1. At least one machine
/// 2. Every capacity matrix is well formed
/// 3. All machines share the same dimensionality
///
/// # Returns
/// The shared resource dimensionality `R`.
pub fn validate_machines(machines: &[Machine]) -> Result<usize> {
    let first = machines.first().ok_or(DispatchError::NoMachines)?;
    let expected = validate_machine(first)?;
    for machine in &machines[1..] {
        let found = validate_machine(machine)?;
        if found != expected {
            return Err(DispatchError::MachineDimensionMismatch {
                machine: machine.id.clone(),
                expected,
                found,
            });
        }
    }
    Ok(expected)
}

/// Validates every occupied slot of a window against a machine.
///
/// Checks:
/// 1. Job length is positive
/// 2. Resource vector length equals the machine's dimensionality
/// 3. Every demand is finite and non-negative
pub fn validate_window(window: &JobSlot, machine: &Machine) -> Result<()> {
    let machine_dims = validate_machine(machine)?;
    for (slot, job) in window.occupied() {
        if job.length == 0 {
            return Err(DispatchError::ZeroLengthJob { slot });
        }
        if job.dimensions() != machine_dims {
            return Err(DispatchError::DimensionMismatch {
                slot,
                machine: machine.id.clone(),
                job_dims: job.dimensions(),
                machine_dims,
            });
        }
        if let Some((dimension, &value)) = job
            .resource_vector
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(DispatchError::InvalidDemand {
                slot,
                dimension,
                value,
            });
        }
    }
    Ok(())
}

/// Validates the blend weight of the combined policy.
pub fn validate_knob(knob: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&knob) {
        Ok(knob)
    } else {
        Err(DispatchError::KnobOutOfRange(knob))
    }
}
