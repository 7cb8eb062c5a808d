//! Job window model.
//!
//! The window is the fixed-capacity set of pending jobs visible to the
//! dispatcher. Slot `i` is addressed by action `i`, so the position of a
//! job matters even though the window has no other ordering semantics.

use serde::{Deserialize, Serialize};

use super::Job;

/// Fixed-capacity window of optional jobs.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobSlot {
    /// Slots in action order. `None` = empty slot.
    pub slots: Vec<Option<Job>>,
}

impl JobSlot {
    /// Creates a window of `capacity` empty slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    /// Creates a window from pre-filled slots.
    pub fn from_slots(slots: Vec<Option<Job>>) -> Self {
        Self { slots }
    }

    /// Creates a fully occupied window from a list of jobs.
    pub fn from_jobs(jobs: impl IntoIterator<Item = Job>) -> Self {
        Self {
            slots: jobs.into_iter().map(Some).collect(),
        }
    }

    /// Window capacity `S`.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Places a job into slot `index`, returning the previous occupant.
    ///
    /// Returns `None` without changes if `index` is out of range.
    pub fn insert(&mut self, index: usize, job: Job) -> Option<Job> {
        self.slots.get_mut(index).and_then(|s| s.replace(job))
    }

    /// Empties slot `index`, returning its job.
    pub fn clear(&mut self, index: usize) -> Option<Job> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Job in slot `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Job> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Occupied slots in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Job)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.as_ref().map(|job| (i, job)))
    }

    /// Whether every slot is empty.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_capacity_is_empty() {
        let window = JobSlot::with_capacity(4);
        assert_eq!(window.capacity(), 4);
        assert!(window.is_empty());
        assert_eq!(window.occupied().count(), 0);
    }

    #[test]
    fn test_insert_and_clear() {
        let mut window = JobSlot::with_capacity(3);
        assert!(window.insert(1, Job::new(2, vec![1.0])).is_none());
        assert!(!window.is_empty());
        assert_eq!(window.get(1).map(|j| j.length), Some(2));

        let previous = window.insert(1, Job::new(5, vec![1.0]));
        assert_eq!(previous.map(|j| j.length), Some(2));

        assert_eq!(window.clear(1).map(|j| j.length), Some(5));
        assert!(window.is_empty());
    }

    #[test]
    fn test_insert_out_of_range() {
        let mut window = JobSlot::with_capacity(1);
        assert!(window.insert(5, Job::new(1, vec![1.0])).is_none());
        assert!(window.is_empty());
        assert!(window.clear(5).is_none());
    }

    #[test]
    fn test_occupied_order() {
        let window = JobSlot::from_slots(vec![
            None,
            Some(Job::new(1, vec![1.0])),
            None,
            Some(Job::new(2, vec![1.0])),
        ]);
        let indices: Vec<usize> = window.occupied().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 3]);
    }
}
