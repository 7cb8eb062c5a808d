//! Fit rules and job selectors.
//!
//! Provides greedy scoring rules (PACKER, SJF, COMBINED), the single-machine
//! selector, the round-robin multi-machine selector, and uniform random
//! selection over the action space.
//!
//! # Usage
//!
//! ```
//! use u_dispatch::dispatching::{rules, select};
//! use u_dispatch::models::{Job, JobSlot, Machine};
//!
//! let machine = Machine::uniform("M1", 2, vec![4.0]);
//! let window = JobSlot::from_jobs(vec![Job::new(1, vec![2.0]), Job::new(2, vec![5.0])]);
//!
//! // Slot 1 demands more than the machine has, so slot 0 wins.
//! assert_eq!(select(&machine, &window, &rules::Packer).unwrap(), 0);
//! ```
//!
//! # References
//!
//! - Grandl et al. (2014), "Multi-Resource Packing for Cluster Schedulers"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod engine;
mod fair;
mod fit;
mod policy;
mod random;
pub mod rules;
mod turn;

pub use engine::{evaluate_window, select};
pub use fair::select_multi;
pub use fit::{fits, fits_slot};
pub use policy::{Dispatcher, Policy};
pub use random::{random_action, random_action_multi};
pub use turn::RoundRobin;

use crate::error::Result;
use crate::models::{Job, Machine};
use std::fmt::Debug;

/// Score returned by a fit rule.
///
/// Higher scores = higher priority. A selector only picks a job whose score
/// is strictly greater than zero.
pub type RuleScore = f64;

/// A scoring rule for feasible `(machine, job)` pairs.
///
/// # Score Convention
/// **Higher score = higher priority.** Selectors call [`FitRule::score`]
/// only after [`fits`] has accepted the pair.
pub trait FitRule: Send + Sync + Debug {
    /// Rule name (e.g., "PACKER", "SJF").
    fn name(&self) -> &'static str;

    /// Scores a job that fits the machine.
    fn score(&self, machine: &Machine, job: &Job) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }

    /// Checks the rule's own parameters before a selection runs.
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}
