//! Process model.
//!
//! A process is a single CPU-bound unit of work: it becomes ready at its
//! arrival time and needs its whole burst on the CPU, uninterrupted.
//!
//! # Time Representation
//! All times are integer time units relative to the simulation epoch (t=0).
//! The consumer decides what a unit means (reports default to "ms").

use serde::{Deserialize, Serialize};

/// Input tuple describing a process before it is scheduled.
///
/// This is the shape exchanged with collaborators (prompt loops, JSON files,
/// generators). Validation happens when it is handed to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process name (need not be unique).
    pub name: String,
    /// Instant the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
}

impl ProcessSpec {
    /// Creates a new process spec.
    pub fn new(name: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
        }
    }
}

impl From<(&str, i64, i64)> for ProcessSpec {
    fn from((name, arrival_time, burst_time): (&str, i64, i64)) -> Self {
        Self::new(name, arrival_time, burst_time)
    }
}

/// Timing results of a scheduled process.
///
/// Invariants after a correct pass: `turnaround_time >= burst_time`
/// and `waiting_time >= 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Instant the process got the CPU.
    pub start_time: i64,
    /// Instant the process finished.
    pub completion_time: i64,
    /// completion - arrival.
    pub turnaround_time: i64,
    /// turnaround - burst.
    pub waiting_time: i64,
}

impl ProcessMetrics {
    /// Time from arrival to first run. Equal to waiting time without preemption.
    #[inline]
    pub fn response_time(&self, arrival_time: i64) -> i64 {
        self.start_time - arrival_time
    }
}

/// A process owned by the scheduler.
///
/// `metrics` is `None` until a scheduling pass has run over the current
/// process set, so an unscheduled process is never mistaken for one that
/// completed at t=0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process name.
    pub name: String,
    /// Instant the process becomes ready.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Computed timings. `None` = not yet scheduled.
    pub metrics: Option<ProcessMetrics>,
}

impl Process {
    /// Creates an unscheduled process.
    pub fn new(name: impl Into<String>, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            name: name.into(),
            arrival_time,
            burst_time,
            metrics: None,
        }
    }

    /// Whether timings have been computed.
    pub fn is_scheduled(&self) -> bool {
        self.metrics.is_some()
    }

    /// Completion time, if scheduled.
    pub fn completion_time(&self) -> Option<i64> {
        self.metrics.map(|m| m.completion_time)
    }

    /// Turnaround time, if scheduled.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.metrics.map(|m| m.turnaround_time)
    }

    /// Waiting time, if scheduled.
    pub fn waiting_time(&self) -> Option<i64> {
        self.metrics.map(|m| m.waiting_time)
    }

    /// Response time, if scheduled.
    pub fn response_time(&self) -> Option<i64> {
        self.metrics.map(|m| m.response_time(self.arrival_time))
    }

    /// The input tuple this process was built from.
    pub fn spec(&self) -> ProcessSpec {
        ProcessSpec::new(self.name.clone(), self.arrival_time, self.burst_time)
    }
}

impl From<ProcessSpec> for Process {
    fn from(spec: ProcessSpec) -> Self {
        Self::new(spec.name, spec.arrival_time, spec.burst_time)
    }
}
