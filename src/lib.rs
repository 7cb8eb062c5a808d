//! Resource-fit dispatching for the U-Engine ecosystem.
//!
//! Decides, once per scheduling step, which pending job to place next on
//! one or more machines with time-varying residual capacity. The crate is a
//! pure decision function: it does not advance time, execute jobs, or
//! apply its own decisions.
//!
//! # Modules
//!
//! - **`models`**: Domain types (`Job`, `JobSlot`, `Machine`, `ActionSpace`)
//! - **`dispatching`**: Fit check, scoring rules (PACKER, SJF, COMBINED),
//!   single- and multi-machine selectors, random selection, `Dispatcher`
//! - **`validation`**: Fail-fast contract checks (dimensions, lengths, knob)
//! - **`config`**: TOML-backed policy configuration
//! - **`error`**: `DispatchError` and the crate `Result` alias
//!
//! # Architecture
//!
//! Selectors return a flat integer action (see [`models::ActionSpace`]).
//! "Nothing to place" is the hold action, never an error; errors are
//! reserved for malformed inputs. Multi-machine fairness state lives in
//! [`dispatching::RoundRobin`], owned by the caller.
//!
//! # References
//!
//! - Grandl et al. (2014), "Multi-Resource Packing for Cluster Schedulers"
//! - Mao et al. (2016), "Resource Management with Deep Reinforcement Learning"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod validation;

pub use error::{DispatchError, Result};
