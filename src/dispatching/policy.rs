//! Policy selection and the stateful dispatcher.
//!
//! [`Policy`] names a selection strategy as it appears in configuration.
//! [`Dispatcher`] binds a policy to the state that outlives a single call:
//! the random number generator and the round-robin turn.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules::{Combined, Packer, Sjf};
use super::{random_action, random_action_multi, select, select_multi, FitRule, RoundRobin};
use crate::config::DispatchConfig;
use crate::error::Result;
use crate::models::{Action, JobSlot, Machine};
use crate::validation::{validate_knob, validate_machines};

/// Selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Policy {
    /// Best-fit resource alignment.
    #[default]
    Packer,
    /// Shortest job first.
    Sjf,
    /// Weighted blend; `knob = 1` is pure packer, `knob = 0` pure SJF.
    Combined { knob: f64 },
    /// Uniform over the whole action space, no feasibility filtering.
    Random,
}

impl Policy {
    /// Policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Packer => "PACKER",
            Policy::Sjf => "SJF",
            Policy::Combined { .. } => "COMBINED",
            Policy::Random => "RANDOM",
        }
    }

    /// Checks policy parameters.
    pub fn validate(&self) -> Result<()> {
        match self {
            Policy::Combined { knob } => validate_knob(*knob).map(|_| ()),
            _ => Ok(()),
        }
    }

    /// Scoring rule backing this policy. `None` for [`Policy::Random`].
    pub fn rule(&self) -> Result<Option<Arc<dyn FitRule>>> {
        let rule: Option<Arc<dyn FitRule>> = match *self {
            Policy::Packer => Some(Arc::new(Packer)),
            Policy::Sjf => Some(Arc::new(Sjf)),
            Policy::Combined { knob } => Some(Arc::new(Combined::new(knob)?)),
            Policy::Random => None,
        };
        Ok(rule)
    }
}

/// A policy together with the state it carries between steps.
///
/// # Example
/// ```
/// use u_dispatch::dispatching::{Dispatcher, Policy};
/// use u_dispatch::models::{Job, JobSlot, Machine};
///
/// let machines = vec![
///     Machine::uniform("M0", 2, vec![1.0]),
///     Machine::uniform("M1", 2, vec![4.0]),
/// ];
/// let window = JobSlot::from_jobs(vec![Job::new(1, vec![3.0])]);
///
/// let mut dispatcher = Dispatcher::new(Policy::Packer, machines.len()).unwrap();
/// // Only M1 fits the job: slot 0 on machine 1 is action 0 + 1*1.
/// assert_eq!(dispatcher.decide_multi(&machines, &window).unwrap(), 1);
/// assert_eq!(dispatcher.turn().holder(), 0);
/// ```
#[derive(Clone)]
pub struct Dispatcher {
    policy: Policy,
    rule: Option<Arc<dyn FitRule>>,
    rng: SmallRng,
    turn: RoundRobin,
}

impl Dispatcher {
    /// Creates a dispatcher for `machines` machines with an OS-seeded RNG.
    pub fn new(policy: Policy, machines: usize) -> Result<Self> {
        Ok(Self {
            policy,
            rule: policy.rule()?,
            rng: SmallRng::from_os_rng(),
            turn: RoundRobin::new(machines),
        })
    }

    /// Creates a dispatcher from configuration.
    pub fn from_config(config: &DispatchConfig, machines: usize) -> Result<Self> {
        let mut dispatcher = Self::new(config.policy, machines)?;
        dispatcher.turn = RoundRobin::starting_at(config.initial_turn, machines)?;
        if let Some(seed) = config.seed {
            dispatcher = dispatcher.with_seed(seed);
        }
        Ok(dispatcher)
    }

    /// Reseeds the RNG for reproducible random decisions.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Replaces the turn state.
    pub fn with_turn(mut self, turn: RoundRobin) -> Self {
        self.turn = turn;
        self
    }

    /// Active policy.
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Current turn state.
    pub fn turn(&self) -> &RoundRobin {
        &self.turn
    }

    /// Single-machine decision: a slot index, or `S` to hold.
    pub fn decide(&mut self, machine: &Machine, window: &JobSlot) -> Result<Action> {
        match &self.rule {
            Some(rule) => select(machine, window, rule.as_ref()),
            None => {
                let action = random_action(window, &mut self.rng);
                debug!(policy = self.policy.name(), action, "random action drawn");
                Ok(action)
            }
        }
    }

    /// Multi-machine decision: `slot + S*machine`, or `S*M` to hold.
    pub fn decide_multi(&mut self, machines: &[Machine], window: &JobSlot) -> Result<Action> {
        match &self.rule {
            Some(rule) => select_multi(machines, window, rule.as_ref(), &mut self.turn),
            None => {
                validate_machines(machines)?;
                let action = random_action_multi(machines, window, &mut self.rng);
                debug!(policy = self.policy.name(), action, "random action drawn");
                Ok(action)
            }
        }
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("policy", &self.policy)
            .field("turn", &self.turn)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;
    use crate::models::Job;

    fn scenario() -> (Machine, JobSlot) {
        let machine = Machine::uniform("M1", 2, vec![4.0]);
        let window = JobSlot::from_jobs(vec![Job::new(1, vec![2.0]), Job::new(2, vec![5.0])]);
        (machine, window)
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(Policy::default(), Policy::Packer);
        assert_eq!(Policy::Combined { knob: 0.5 }.name(), "COMBINED");
        assert_eq!(Policy::Random.name(), "RANDOM");
    }

    #[test]
    fn test_policy_rule() {
        assert!(Policy::Random.rule().unwrap().is_none());
        assert_eq!(Policy::Sjf.rule().unwrap().unwrap().name(), "SJF");
        assert!(Policy::Combined { knob: 3.0 }.rule().is_err());
    }

    #[test]
    fn test_policy_serde() {
        let json = r#"{"type":"combined","knob":0.25}"#;
        let policy: Policy = serde_json::from_str(json).unwrap();
        assert_eq!(policy, Policy::Combined { knob: 0.25 });
        assert_eq!(
            serde_json::to_string(&Policy::Sjf).unwrap(),
            r#"{"type":"sjf"}"#
        );
    }

    #[test]
    fn test_new_rejects_bad_knob() {
        assert_eq!(
            Dispatcher::new(Policy::Combined { knob: -1.0 }, 1).unwrap_err(),
            DispatchError::KnobOutOfRange(-1.0)
        );
    }

    #[test]
    fn test_decide_scoring_policies() {
        let (machine, window) = scenario();
        for policy in [Policy::Packer, Policy::Sjf, Policy::Combined { knob: 0.5 }] {
            let mut d = Dispatcher::new(policy, 1).unwrap();
            assert_eq!(d.decide(&machine, &window).unwrap(), 0);
        }
    }

    #[test]
    fn test_decide_random_is_seeded() {
        let (machine, window) = scenario();
        let mut a = Dispatcher::new(Policy::Random, 1).unwrap().with_seed(5);
        let mut b = Dispatcher::new(Policy::Random, 1).unwrap().with_seed(5);
        for _ in 0..20 {
            let x = a.decide(&machine, &window).unwrap();
            assert!(x <= 2);
            assert_eq!(x, b.decide(&machine, &window).unwrap());
        }
    }

    #[test]
    fn test_decide_multi_random_range() {
        let machines = vec![
            Machine::uniform("M0", 2, vec![1.0]),
            Machine::uniform("M1", 2, vec![1.0]),
        ];
        let (_, window) = scenario();
        let mut d = Dispatcher::new(Policy::Random, 2).unwrap().with_seed(11);
        for _ in 0..50 {
            assert!(d.decide_multi(&machines, &window).unwrap() <= 4);
        }
        assert_eq!(d.turn().holder(), 0);
        assert_eq!(
            d.decide_multi(&[], &window),
            Err(DispatchError::NoMachines)
        );
    }

    #[test]
    fn test_decide_multi_advances_turn() {
        let machines = vec![
            Machine::uniform("M0", 2, vec![4.0]),
            Machine::uniform("M1", 2, vec![4.0]),
            Machine::uniform("M2", 2, vec![4.0]),
        ];
        let (_, window) = scenario();
        let mut d = Dispatcher::new(Policy::Sjf, 3)
            .unwrap()
            .with_turn(RoundRobin::starting_at(1, 3).unwrap());

        // Slot 0 on M1, then M2, then M0.
        assert_eq!(d.decide_multi(&machines, &window).unwrap(), 2);
        assert_eq!(d.decide_multi(&machines, &window).unwrap(), 4);
        assert_eq!(d.decide_multi(&machines, &window).unwrap(), 0);
        assert_eq!(d.turn().holder(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = DispatchConfig {
            policy: Policy::Combined { knob: 1.0 },
            seed: Some(3),
            initial_turn: 1,
        };
        let d = Dispatcher::from_config(&config, 2).unwrap();
        assert_eq!(d.policy(), Policy::Combined { knob: 1.0 });
        assert_eq!(d.turn().holder(), 1);

        let bad_turn = DispatchConfig {
            initial_turn: 4,
            ..config
        };
        assert!(matches!(
            Dispatcher::from_config(&bad_turn, 2),
            Err(DispatchError::InvalidTurnHolder { .. })
        ));
    }
}
