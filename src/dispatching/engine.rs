//! Single-machine selection.
//!
//! One pass over the job window in slot order: each occupied slot that fits
//! is scored, and the running best is replaced only on a strictly greater
//! score. Ties therefore go to the earliest slot, and since the running best
//! starts at zero, a window whose feasible jobs all score zero holds.
//!
//! # Complexity
//! O(S * T * R) where S=slots, T=job length, R=resource dimensions.

use tracing::{debug, trace};

use super::{fits, FitRule, RuleScore};
use crate::error::Result;
use crate::models::{Action, ActionSpace, JobSlot, Machine};
use crate::validation::validate_window;

/// Selects the best job in `window` for `machine` under `rule`.
///
/// # Returns
/// The slot index of the chosen job, or `S` (hold) if no job is feasible
/// with a positive score.
///
/// # Errors
/// Rejects the call on any contract violation (see [`crate::validation`]).
pub fn select(machine: &Machine, window: &JobSlot, rule: &dyn FitRule) -> Result<Action> {
    rule.validate()?;
    validate_window(window, machine)?;

    let space = ActionSpace::single(window.capacity());
    let action = match best_slot(machine, window, rule) {
        Some((slot, score)) => {
            debug!(rule = rule.name(), machine = %machine.id, slot, score, "job selected");
            slot
        }
        None => {
            debug!(rule = rule.name(), machine = %machine.id, "no feasible job, holding");
            space.hold()
        }
    };
    Ok(action)
}

/// Scores every slot of `window` against `machine`.
///
/// Empty and infeasible slots map to `None`. The result has one entry per
/// slot, in slot order.
pub fn evaluate_window(
    machine: &Machine,
    window: &JobSlot,
    rule: &dyn FitRule,
) -> Result<Vec<Option<RuleScore>>> {
    rule.validate()?;
    validate_window(window, machine)?;

    Ok(window
        .slots
        .iter()
        .map(|slot| {
            slot.as_ref()
                .filter(|job| fits(machine, job))
                .map(|job| rule.score(machine, job))
        })
        .collect())
}

/// Best `(slot, score)` on an already-validated machine and window.
pub(crate) fn best_slot(
    machine: &Machine,
    window: &JobSlot,
    rule: &dyn FitRule,
) -> Option<(usize, RuleScore)> {
    let mut best: Option<(usize, RuleScore)> = None;
    let mut best_score: RuleScore = 0.0;

    for (slot, job) in window.occupied() {
        if !fits(machine, job) {
            trace!(machine = %machine.id, slot, "job does not fit");
            continue;
        }
        let score = rule.score(machine, job);
        trace!(machine = %machine.id, slot, score, "job scored");
        if score > best_score {
            best_score = score;
            best = Some((slot, score));
        }
    }

    best
}
