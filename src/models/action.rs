//! Action encoding.
//!
//! Selectors return a flat integer action. For `S` slots and `M` machines,
//! action `i + S*m` places slot `i` on machine `m` and `S*M` holds. A
//! single machine is the `M = 1` case, where the hold action is `S`.

use serde::{Deserialize, Serialize};

/// Flat action index as consumed by the external commit step.
pub type Action = usize;

/// Structured view of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    /// Place the job in `slot` on `machine`.
    Place { slot: usize, machine: usize },
    /// Place nothing this step.
    Hold,
}

/// Shape of an action space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionSpace {
    /// Job window capacity `S`.
    pub slots: usize,
    /// Machine count `M`.
    pub machines: usize,
}

impl ActionSpace {
    /// Action space for `slots` jobs across `machines` machines.
    pub fn new(slots: usize, machines: usize) -> Self {
        Self { slots, machines }
    }

    /// Single-machine action space.
    pub fn single(slots: usize) -> Self {
        Self::new(slots, 1)
    }

    /// The hold action, `S*M`.
    pub fn hold(&self) -> Action {
        self.slots * self.machines
    }

    /// Number of distinct actions, hold included.
    pub fn size(&self) -> usize {
        self.hold() + 1
    }

    /// Whether `action` is the hold action.
    pub fn is_hold(&self, action: Action) -> bool {
        action == self.hold()
    }

    /// Flattens a decision. Returns `None` for out-of-range slots or machines.
    pub fn encode(&self, decision: Decision) -> Option<Action> {
        match decision {
            Decision::Hold => Some(self.hold()),
            Decision::Place { slot, machine } => {
                (slot < self.slots && machine < self.machines).then(|| slot + self.slots * machine)
            }
        }
    }

    /// Expands a flat action. Returns `None` for actions beyond the hold.
    pub fn decode(&self, action: Action) -> Option<Decision> {
        let hold = self.hold();
        if action == hold {
            Some(Decision::Hold)
        } else if action < hold {
            Some(Decision::Place {
                slot: action % self.slots,
                machine: action / self.slots,
            })
        } else {
            None
        }
    }
}
