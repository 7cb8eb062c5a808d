//! Built-in fit rules.
//!
//! # Categories
//!
//! - **Packing**: PACKER (alignment of demand with idle capacity)
//! - **Time-based**: SJF (shortest job first)
//! - **Blended**: COMBINED (weighted PACKER + SJF)
//!
//! # Score Convention
//! All rules return higher scores for higher priority jobs. Scores are only
//! comparable within one selection call.
//!
//! # References
//! - Grandl et al. (2014), "Multi-Resource Packing for Cluster Schedulers"
//! - Mao et al. (2016), "Resource Management with Deep Reinforcement Learning"

use super::{FitRule, RuleScore};
use crate::error::Result;
use crate::models::{Job, Machine};
use crate::validation::validate_knob;

// ======================== Packing rules ========================

/// Best-fit packer.
///
/// Scores a job by the dot product of the machine's immediate (offset-0)
/// residual capacity and the job's demand vector. Jobs that line up with
/// what is idle right now score highest, which reduces fragmentation.
/// Units are resource².
///
/// # Reference
/// Grandl et al. (2014), Tetris alignment score.
#[derive(Debug, Clone, Copy)]
pub struct Packer;

impl FitRule for Packer {
    fn name(&self) -> &'static str {
        "PACKER"
    }

    fn score(&self, machine: &Machine, job: &Job) -> RuleScore {
        machine
            .immediate()
            .iter()
            .zip(&job.resource_vector)
            .map(|(available, demand)| available * demand)
            .sum()
    }

    fn description(&self) -> &'static str {
        "Best-Fit Resource Alignment"
    }
}

// ======================== Time-based rules ========================

/// Shortest Job First.
///
/// Score is `1 / length`, so shorter jobs rank higher.
/// Minimizes average turnaround time.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl FitRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn score(&self, _machine: &Machine, job: &Job) -> RuleScore {
        1.0 / job.length as f64
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

// ======================== Blended rules ========================

/// Weighted blend of PACKER and SJF.
///
/// `score = knob * packer + (1 - knob) * sjf`. The knob must lie in
/// `[0, 1]`: `1.0` is pure PACKER, `0.0` is pure SJF.
#[derive(Debug, Clone, Copy)]
pub struct Combined {
    /// Weight of the packer term.
    pub knob: f64,
}

impl Combined {
    /// Creates a blend, rejecting knobs outside `[0, 1]`.
    pub fn new(knob: f64) -> Result<Self> {
        validate_knob(knob).map(|knob| Self { knob })
    }
}

impl FitRule for Combined {
    fn name(&self) -> &'static str {
        "COMBINED"
    }

    fn score(&self, machine: &Machine, job: &Job) -> RuleScore {
        self.knob * Packer.score(machine, job) + (1.0 - self.knob) * Sjf.score(machine, job)
    }

    fn description(&self) -> &'static str {
        "Weighted Packer + Shortest Job First"
    }

    fn validate(&self) -> Result<()> {
        validate_knob(self.knob).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DispatchError;

    #[test]
    fn test_packer_dot_product() {
        let m = Machine::new("M1", vec![vec![4.0, 2.0], vec![1.0, 1.0]]);
        let job = Job::new(2, vec![1.0, 3.0]);
        // Uses row 0 only: 4*1 + 2*3
        assert!((Packer.score(&m, &job) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_packer_zero_vector() {
        let m = Machine::uniform("M1", 1, vec![4.0]);
        assert_eq!(Packer.score(&m, &Job::new(1, vec![0.0])), 0.0);
    }

    #[test]
    fn test_sjf() {
        let m = Machine::uniform("M1", 4, vec![4.0]);
        let short = Job::new(1, vec![1.0]);
        let long = Job::new(4, vec![1.0]);
        assert!(Sjf.score(&m, &short) > Sjf.score(&m, &long));
        assert!((Sjf.score(&m, &long) - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_combined_blend() {
        let m = Machine::uniform("M1", 2, vec![4.0]);
        let job = Job::new(2, vec![2.0]);
        // packer = 8, sjf = 0.5
        let half = Combined::new(0.5).unwrap();
        assert!((half.score(&m, &job) - 4.25).abs() < 1e-10);
    }

    #[test]
    fn test_combined_extremes() {
        let m = Machine::uniform("M1", 2, vec![4.0]);
        let job = Job::new(2, vec![2.0]);
        let packer_only = Combined::new(1.0).unwrap();
        let sjf_only = Combined::new(0.0).unwrap();
        assert!((packer_only.score(&m, &job) - Packer.score(&m, &job)).abs() < 1e-10);
        assert!((sjf_only.score(&m, &job) - Sjf.score(&m, &job)).abs() < 1e-10);
    }

    #[test]
    fn test_combined_rejects_bad_knob() {
        assert_eq!(
            Combined::new(-0.1).unwrap_err(),
            DispatchError::KnobOutOfRange(-0.1)
        );
        let raw = Combined { knob: 2.0 };
        assert!(raw.validate().is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(Packer.name(), "PACKER");
        assert_eq!(Sjf.description(), "Shortest Job First");
        assert_eq!(Combined { knob: 0.5 }.name(), "COMBINED");
    }
}
