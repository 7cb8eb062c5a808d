//! Uniform random selection.
//!
//! Samples the whole action space, hold included, with no feasibility
//! filtering. An infeasible draw is left to the caller's commit step to
//! reject or treat as a no-op.

use rand::Rng;

use crate::models::{Action, ActionSpace, JobSlot, Machine};

/// Uniform action in `[0, S]` for a single machine.
pub fn random_action<R: Rng>(window: &JobSlot, rng: &mut R) -> Action {
    let space = ActionSpace::single(window.capacity());
    rng.random_range(0..space.size())
}

/// Uniform action in `[0, S*M]` across `machines`.
pub fn random_action_multi<R: Rng>(
    machines: &[Machine],
    window: &JobSlot,
    rng: &mut R,
) -> Action {
    let space = ActionSpace::new(window.capacity(), machines.len());
    rng.random_range(0..space.size())
}
