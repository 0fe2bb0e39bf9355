//! Schedule (solution) model.
//!
//! A schedule is the single-CPU timeline produced by a scheduling pass:
//! one Gantt segment per process, in execution order. Segments never
//! overlap; gaps between them are CPU idle time.

use serde::{Deserialize, Serialize};

/// A computed single-CPU timeline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Segments in execution order (nondecreasing start time).
    pub segments: Vec<GanttSegment>,
}

/// One contiguous execution interval on the CPU timeline.
///
/// `end_time - start_time` equals the burst of the process, and
/// `start_time` is never before its arrival.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Name of the executing process.
    pub process_name: String,
    /// Index of the process in scheduler insertion order.
    pub process_index: usize,
    /// Start of execution.
    pub start_time: i64,
    /// End of execution (= completion time).
    pub end_time: i64,
}

/// An interval where no process was ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdleGap {
    /// First idle instant.
    pub start_time: i64,
    /// Instant the next process arrived.
    pub end_time: i64,
}

impl GanttSegment {
    /// Creates a new segment.
    pub fn new(
        process_name: impl Into<String>,
        process_index: usize,
        start_time: i64,
        end_time: i64,
    ) -> Self {
        Self {
            process_name: process_name.into(),
            process_index,
            start_time,
            end_time,
        }
    }

    /// Length of the segment.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

impl IdleGap {
    /// Length of the gap.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    pub fn add_segment(&mut self, segment: GanttSegment) {
        self.segments.push(segment);
    }

    /// Whether no segment has been placed.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Makespan: end of the last segment (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.segments.iter().map(|s| s.end_time).max().unwrap_or(0)
    }

    /// Total time the CPU spent executing.
    pub fn busy_time(&self) -> i64 {
        self.segments.iter().map(|s| s.duration()).sum()
    }

    /// Total idle time between t=0 and the makespan.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// Idle intervals, including a leading one when the first arrival is after t=0.
    pub fn idle_gaps(&self) -> Vec<IdleGap> {
        let mut gaps = Vec::new();
        let mut clock = 0;
        for seg in &self.segments {
            if seg.start_time > clock {
                gaps.push(IdleGap {
                    start_time: clock,
                    end_time: seg.start_time,
                });
            }
            clock = clock.max(seg.end_time);
        }
        gaps
    }

    /// CPU utilization: busy_time / makespan.
    ///
    /// Returns `None` for an empty schedule.
    pub fn utilization(&self) -> Option<f64> {
        let makespan = self.makespan();
        if makespan <= 0 {
            return None;
        }
        Some(self.busy_time() as f64 / makespan as f64)
    }

    /// Finds the first segment of the named process.
    pub fn segment_for(&self, process_name: &str) -> Option<&GanttSegment> {
        self.segments
            .iter()
            .find(|s| s.process_name == process_name)
    }

    /// Process names in execution order.
    pub fn execution_order(&self) -> Vec<&str> {
        self.segments
            .iter()
            .map(|s| s.process_name.as_str())
            .collect()
    }

    /// Whether segments are sorted by start time and pairwise disjoint.
    pub fn is_well_formed(&self) -> bool {
        self.segments
            .windows(2)
            .all(|w| w[0].end_time <= w[1].start_time)
    }
}
