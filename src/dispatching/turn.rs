//! Round-robin turn state for multi-machine selection.

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, Result};

/// Which machine is tried first on the next multi-machine selection.
///
/// Stores the holder's index rather than a flag per machine, so exactly one
/// machine holds the turn at any time. The state is owned by the caller and
/// carried across selection calls; only a successful placement advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRoundRobin")]
pub struct RoundRobin {
    pub(crate) holder: usize,
    pub(crate) machines: usize,
}

/// Unchecked wire form, validated on conversion.
#[derive(Deserialize)]
struct RawRoundRobin {
    holder: usize,
    machines: usize,
}

impl TryFrom<RawRoundRobin> for RoundRobin {
    type Error = DispatchError;

    fn try_from(raw: RawRoundRobin) -> Result<Self> {
        // `new(0)` is the one valid state with no holder.
        if raw.machines == 0 && raw.holder == 0 {
            return Ok(Self::new(0));
        }
        Self::starting_at(raw.holder, raw.machines)
    }
}

impl RoundRobin {
    /// Turn state for `machines` machines, starting at machine 0.
    pub fn new(machines: usize) -> Self {
        Self {
            holder: 0,
            machines,
        }
    }

    /// Turn state starting at `holder`.
    pub fn starting_at(holder: usize, machines: usize) -> Result<Self> {
        if holder >= machines {
            return Err(DispatchError::InvalidTurnHolder { holder, machines });
        }
        Ok(Self { holder, machines })
    }

    /// Index of the machine holding the turn.
    pub fn holder(&self) -> usize {
        self.holder
    }

    /// Number of machines in rotation.
    pub fn machines(&self) -> usize {
        self.machines
    }

    /// Whether machine `index` holds the turn.
    pub fn has_turn(&self, index: usize) -> bool {
        index == self.holder
    }

    /// Passes the turn to the cyclic successor of `index`.
    pub fn pass_from(&mut self, index: usize) {
        if self.machines > 0 {
            self.holder = (index + 1) % self.machines;
        }
    }

    /// Machine indices in trial order: the holder first, then cyclically on.
    ///
    /// The iterator does not borrow `self`, so the turn may be passed while
    /// walking it.
    pub fn order(&self) -> impl Iterator<Item = usize> {
        let (holder, machines) = (self.holder, self.machines);
        (0..machines).map(move |offset| (holder + offset) % machines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_holder() {
        let turn = RoundRobin::new(3);
        assert_eq!(turn.holder(), 0);
        let holders: Vec<bool> = (0..3).map(|m| turn.has_turn(m)).collect();
        assert_eq!(holders, vec![true, false, false]);
    }

    #[test]
    fn test_pass_wraps() {
        let mut turn = RoundRobin::new(3);
        turn.pass_from(2);
        assert_eq!(turn.holder(), 0);
        turn.pass_from(0);
        assert_eq!(turn.holder(), 1);
    }

    #[test]
    fn test_order_from_holder() {
        let turn = RoundRobin::starting_at(2, 4).unwrap();
        let order: Vec<usize> = turn.order().collect();
        assert_eq!(order, vec![2, 3, 0, 1]);
    }

    #[test]
    fn test_starting_at_out_of_range() {
        assert_eq!(
            RoundRobin::starting_at(3, 3),
            Err(DispatchError::InvalidTurnHolder {
                holder: 3,
                machines: 3
            })
        );
    }

    #[test]
    fn test_deserialize_checks_holder() {
        let turn: RoundRobin = serde_json::from_str(r#"{"holder":1,"machines":2}"#).unwrap();
        assert!(turn.has_turn(1));

        let err = serde_json::from_str::<RoundRobin>(r#"{"holder":5,"machines":2}"#);
        assert!(err.is_err());
        let err = serde_json::from_str::<RoundRobin>(r#"{"holder":1,"machines":0}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        for turn in [RoundRobin::new(0), RoundRobin::starting_at(2, 3).unwrap()] {
            let json = serde_json::to_string(&turn).unwrap();
            let back: RoundRobin = serde_json::from_str(&json).unwrap();
            assert_eq!(back, turn);
        }
    }

    #[test]
    fn test_no_machines() {
        let mut turn = RoundRobin::new(0);
        turn.pass_from(0);
        assert_eq!(turn.holder(), 0);
        assert_eq!(turn.order().count(), 0);
    }
}
