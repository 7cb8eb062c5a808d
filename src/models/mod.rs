//! Dispatching domain models.
//!
//! Provides the data the dispatcher reads: pending jobs, the job window,
//! machines with residual capacity, and the flat action encoding that
//! selectors produce.
//!
//! # Domain Mappings
//!
//! | u-dispatch | Cluster | Manufacturing | Cloud |
//! |------------|---------|---------------|-------|
//! | Job | Batch job | Work order | VM request |
//! | JobSlot | Visible queue | Dispatch list | Pending pool |
//! | Machine | Node | Work center | Host |
//! | Action | Placement | Release | Allocation |

mod action;
mod job;
mod job_slot;
mod machine;

pub use action::{Action, ActionSpace, Decision};
pub use job::Job;
pub use job_slot::JobSlot;
pub use machine::Machine;
