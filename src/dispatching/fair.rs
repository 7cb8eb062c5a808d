//! Round-robin multi-machine selection.
//!
//! # Algorithm
//!
//! 1. Start at the machine holding the turn.
//! 2. Run the single-machine search on that machine.
//! 3. On success, return `slot + S*m` and pass the turn to `(m+1) mod M`.
//! 4. Otherwise move to the next machine; after all `M` machines have been
//!    tried once, return the hold action `S*M` with the turn unchanged.
//!
//! The first machine in turn order that can place its own best job wins,
//! even if a later machine would have scored higher. This bounds the search
//! and keeps every machine's turn coming around. [`Combined`] runs through
//! the same search as [`Packer`] and [`Sjf`]: the chosen slot gets its
//! machine offset and the turn passes on success.
//!
//! [`Combined`]: super::rules::Combined
//! [`Packer`]: super::rules::Packer
//! [`Sjf`]: super::rules::Sjf
//!
//! # Complexity
//! O(M * S * T * R).

use tracing::{debug, trace};

use super::engine::best_slot;
use super::{FitRule, RoundRobin};
use crate::error::{DispatchError, Result};
use crate::models::{Action, ActionSpace, Decision, JobSlot, Machine};
use crate::validation::{validate_machines, validate_window};

/// Selects a job and a target machine under `rule` with round-robin fairness.
///
/// `turn` is advanced only when a job is placed.
///
/// # Errors
/// Rejects empty machine sets, machines of differing dimensionality, turn
/// state sized for a different machine count, and invalid jobs or knobs.
pub fn select_multi(
    machines: &[Machine],
    window: &JobSlot,
    rule: &dyn FitRule,
    turn: &mut RoundRobin,
) -> Result<Action> {
    rule.validate()?;
    validate_machines(machines)?;
    if turn.machines() != machines.len() {
        return Err(DispatchError::TurnMismatch {
            expected: turn.machines(),
            found: machines.len(),
        });
    }
    if turn.holder() >= machines.len() {
        return Err(DispatchError::InvalidTurnHolder {
            holder: turn.holder(),
            machines: machines.len(),
        });
    }
    // Machines share one dimensionality, so checking against the first covers all.
    validate_window(window, &machines[0])?;

    let space = ActionSpace::new(window.capacity(), machines.len());
    let start = turn.holder();

    for (tried, index) in turn.order().enumerate() {
        let machine = &machines[index];

        if let Some((slot, score)) = best_slot(machine, window, rule) {
            let action = space
                .encode(Decision::Place {
                    slot,
                    machine: index,
                })
                .ok_or(DispatchError::InvalidTurnHolder {
                    holder: index,
                    machines: machines.len(),
                })?;
            turn.pass_from(index);
            debug!(
                rule = rule.name(),
                machine = %machine.id,
                slot,
                score,
                next_turn = turn.holder(),
                "job placed"
            );
            return Ok(action);
        }
        trace!(rule = rule.name(), machine = %machine.id, tried, "no feasible job, trying next machine");
    }

    debug!(rule = rule.name(), holder = start, "no machine accepts a job, holding");
    Ok(space.hold())
}
