//! Error types for dispatching calls.
//!
//! "Nothing to place" is never an error: selectors report it with the hold
//! action. Errors are reserved for caller contract violations, which are
//! rejected up front instead of producing meaningless scores.

use thiserror::Error;

/// Contract violations detected before a selection runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DispatchError {
    /// A job in the window has a length of zero time steps.
    #[error("Job in slot {slot} has zero length")]
    ZeroLengthJob { slot: usize },

    /// A job demands a negative or non-finite amount of some resource.
    #[error("Job in slot {slot} has invalid demand {value} in dimension {dimension}")]
    InvalidDemand {
        slot: usize,
        dimension: usize,
        value: f64,
    },

    /// A job's resource vector does not match the machine's dimensionality.
    #[error("Job in slot {slot} has {job_dims} resource dimensions, machine '{machine}' has {machine_dims}")]
    DimensionMismatch {
        slot: usize,
        machine: String,
        job_dims: usize,
        machine_dims: usize,
    },

    /// A machine's capacity matrix has no rows or rows of differing width.
    #[error("Machine '{machine}' has a malformed capacity matrix: {reason}")]
    MalformedCapacity { machine: String, reason: String },

    /// Machines in one call disagree on resource dimensionality.
    #[error("Machine '{machine}' has {found} resource dimensions, expected {expected}")]
    MachineDimensionMismatch {
        machine: String,
        expected: usize,
        found: usize,
    },

    /// The blend weight of the combined policy lies outside `[0, 1]`.
    #[error("Knob {0} is outside [0, 1]")]
    KnobOutOfRange(f64),

    /// A multi-machine selection was given no machines.
    #[error("Machine set is empty")]
    NoMachines,

    /// A turn holder index outside the machine set.
    #[error("Turn holder {holder} is out of range for {machines} machines")]
    InvalidTurnHolder { holder: usize, machines: usize },

    /// The round-robin state does not match the machine set.
    #[error("Turn state covers {expected} machines, got {found}")]
    TurnMismatch { expected: usize, found: usize },
}

/// Result type alias for dispatching operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
