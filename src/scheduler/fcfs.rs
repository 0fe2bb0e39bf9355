//! First-Come-First-Served single-CPU scheduler.
//!
//! # Algorithm
//!
//! 1. Stable-sort process indices by arrival time (ties keep insertion order).
//! 2. Walk the sorted view once with a clock starting at t=0.
//! 3. If the next process has not arrived yet, the CPU idles until it does.
//! 4. The process runs its whole burst; the clock advances to its completion.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.1

use std::fmt;

use log::{debug, trace, warn};

use super::ScheduleKpi;
use crate::models::{GanttSegment, Process, ProcessMetrics, ProcessSpec, Schedule};
use crate::validation::{
    timeline_bound, validate_batch, validate_process, ValidationError, ValidationErrorKind,
};

/// Errors reported when reading results of a scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleError {
    /// Processes were added since the last `compute_schedule` (or it never ran).
    NotComputed,
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::NotComputed => {
                f.write_str("schedule has not been computed for the current process set")
            }
        }
    }
}

impl std::error::Error for ScheduleError {}

/// FCFS scheduler over a single CPU.
///
/// Owns the processes in insertion order. `compute_schedule` never reorders
/// them; the arrival order is a separate index view.
///
/// # Example
///
/// ```
/// use u_fcfs::scheduler::FcfsScheduler;
///
/// let mut scheduler = FcfsScheduler::new();
/// scheduler.add_process("P1", 0, 8).unwrap();
/// scheduler.add_process("P2", 1, 4).unwrap();
///
/// let schedule = scheduler.compute_schedule();
/// assert_eq!(schedule.makespan(), 12);
///
/// let (avg_turnaround, avg_waiting) = scheduler.average_turnaround_and_waiting().unwrap();
/// assert!((avg_turnaround - 9.5).abs() < 1e-10);
/// assert!((avg_waiting - 3.5).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FcfsScheduler {
    processes: Vec<Process>,
    schedule: Schedule,
    computed: bool,
    max_arrival: i64,
    total_burst: i64,
}

impl FcfsScheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scheduler from a batch of process definitions.
    ///
    /// All definitions are validated first; nothing is added if any fails.
    pub fn from_specs<I>(specs: I) -> Result<Self, Vec<ValidationError>>
    where
        I: IntoIterator<Item = ProcessSpec>,
    {
        let specs: Vec<ProcessSpec> = specs.into_iter().collect();
        validate_batch(&specs)?;

        let mut scheduler = Self::new();
        for spec in specs {
            scheduler.max_arrival = scheduler.max_arrival.max(spec.arrival_time);
            scheduler.total_burst += spec.burst_time;
            scheduler.processes.push(Process::from(spec));
        }
        Ok(scheduler)
    }

    /// Appends a process.
    ///
    /// Fails if `arrival_time < 0`, `burst_time <= 0`, or the process set
    /// could no longer be simulated without overflowing the timeline.
    /// Invalidates any previously computed schedule.
    pub fn add_process(
        &mut self,
        name: impl Into<String>,
        arrival_time: i64,
        burst_time: i64,
    ) -> Result<(), ValidationError> {
        self.add_spec(ProcessSpec::new(name, arrival_time, burst_time))
    }

    /// Appends a process from its definition. See [`add_process`](Self::add_process).
    pub fn add_spec(&mut self, spec: ProcessSpec) -> Result<(), ValidationError> {
        validate_process(&spec)?;

        let max_arrival = self.max_arrival.max(spec.arrival_time);
        let total_burst = self
            .total_burst
            .checked_add(spec.burst_time)
            .filter(|&total| timeline_bound(max_arrival, total).is_some())
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::TimelineOverflow,
                    format!(
                        "Adding process '{}' would push completion beyond the representable timeline",
                        spec.name
                    ),
                )
            })?;

        self.max_arrival = max_arrival;
        self.total_burst = total_burst;
        self.invalidate();
        self.processes.push(Process::from(spec));
        Ok(())
    }

    /// Runs the FCFS pass and returns the resulting timeline.
    ///
    /// Recomputes from scratch on every call; the result depends only on the
    /// process set and its insertion order.
    pub fn compute_schedule(&mut self) -> &Schedule {
        let order = arrival_order(&self.processes);
        let mut schedule = Schedule::new();
        let mut current_time: i64 = 0;

        for idx in order {
            let process = &mut self.processes[idx];

            // Nothing ready yet, so the CPU idles until the next arrival
            if process.arrival_time > current_time {
                trace!("idle [{}, {})", current_time, process.arrival_time);
                current_time = process.arrival_time;
            }

            let start_time = current_time;
            let completion_time = start_time + process.burst_time;
            current_time = completion_time;

            let turnaround_time = completion_time - process.arrival_time;
            let waiting_time = turnaround_time - process.burst_time;

            process.metrics = Some(ProcessMetrics {
                start_time,
                completion_time,
                turnaround_time,
                waiting_time,
            });

            trace!("{} [{}, {})", process.name, start_time, completion_time);
            schedule.add_segment(GanttSegment::new(
                process.name.clone(),
                idx,
                start_time,
                completion_time,
            ));
        }

        debug!(
            "computed FCFS schedule: {} processes, makespan {}, idle {}",
            schedule.segment_count(),
            schedule.makespan(),
            schedule.idle_time()
        );

        self.schedule = schedule;
        self.computed = true;
        &self.schedule
    }

    /// Mean turnaround and mean waiting time over all processes.
    ///
    /// Returns `(0.0, 0.0)` for an empty process set, and
    /// `ScheduleError::NotComputed` if the current set has not been scheduled.
    pub fn average_turnaround_and_waiting(&self) -> Result<(f64, f64), ScheduleError> {
        if self.processes.is_empty() {
            return Ok((0.0, 0.0));
        }
        if !self.computed {
            warn!(
                "averages requested before scheduling {} processes",
                self.processes.len()
            );
            return Err(ScheduleError::NotComputed);
        }

        // Each term fits in i64, their sum may not
        let (total_turnaround, total_waiting) = self
            .processes
            .iter()
            .filter_map(|p| p.metrics)
            .fold((0i128, 0i128), |(t, w), m| {
                (
                    t + i128::from(m.turnaround_time),
                    w + i128::from(m.waiting_time),
                )
            });

        let n = self.processes.len() as f64;
        Ok((total_turnaround as f64 / n, total_waiting as f64 / n))
    }

    /// Aggregate KPIs of the current timeline. See [`ScheduleKpi::calculate`].
    pub fn kpi(&self) -> Result<ScheduleKpi, ScheduleError> {
        ScheduleKpi::calculate(self)
    }

    /// Processes in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Processes in FCFS execution order (arrival time, then insertion order).
    pub fn execution_order(&self) -> Vec<&Process> {
        arrival_order(&self.processes)
            .into_iter()
            .map(|idx| &self.processes[idx])
            .collect()
    }

    /// The last computed timeline (empty if stale or never computed).
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Gantt segments of the last computed timeline.
    pub fn segments(&self) -> &[GanttSegment] {
        &self.schedule.segments
    }

    /// Number of processes.
    pub fn process_count(&self) -> usize {
        self.processes.len()
    }

    /// Whether no process has been added.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Whether results reflect the current process set.
    pub fn is_computed(&self) -> bool {
        self.computed
    }

    fn invalidate(&mut self) {
        if self.computed {
            debug!("process set changed, discarding computed schedule");
        }
        self.computed = false;
        self.schedule = Schedule::new();
        for p in &mut self.processes {
            p.metrics = None;
        }
    }
}

/// Indices of `processes` stably sorted by arrival time.
fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn textbook_scheduler() -> FcfsScheduler {
        let mut s = FcfsScheduler::new();
        s.add_process("P1", 0, 8).unwrap();
        s.add_process("P2", 1, 4).unwrap();
        s.add_process("P3", 2, 2).unwrap();
        s.add_process("P4", 3, 5).unwrap();
        s.add_process("P5", 4, 1).unwrap();
        s
    }

    fn metrics_of<'a>(s: &'a FcfsScheduler, name: &str) -> &'a ProcessMetrics {
        s.processes()
            .iter()
            .find(|p| p.name == name)
            .and_then(|p| p.metrics.as_ref())
            .unwrap()
    }

    #[test]
    fn test_single_process() {
        let mut s = FcfsScheduler::new();
        s.add_process("P1", 0, 8).unwrap();
        s.compute_schedule();

        let m = metrics_of(&s, "P1");
        assert_eq!(m.start_time, 0);
        assert_eq!(m.completion_time, 8);
        assert_eq!(m.turnaround_time, 8);
        assert_eq!(m.waiting_time, 0);
    }

    #[test]
    fn test_idle_gap_before_first_arrival() {
        let mut s = FcfsScheduler::new();
        s.add_process("P1", 5, 3).unwrap();
        let schedule = s.compute_schedule();

        assert_eq!(schedule.segments[0].start_time, 5);
        assert_eq!(schedule.segments[0].end_time, 8);
        let m = metrics_of(&s, "P1");
        assert_eq!(m.completion_time, 8);
        assert_eq!(m.waiting_time, 0);
    }

    #[test]
    fn test_idle_gap_between_processes() {
        let mut s = FcfsScheduler::new();
        s.add_process("A", 0, 2).unwrap();
        s.add_process("B", 10, 3).unwrap();
        let schedule = s.compute_schedule();

        assert_eq!(schedule.segments[1].start_time, 10);
        assert_eq!(schedule.idle_time(), 8);
        assert_eq!(metrics_of(&s, "B").waiting_time, 0);
    }

    #[test]
    fn test_textbook_five_processes() {
        let mut s = textbook_scheduler();
        s.compute_schedule();

        let expected = [
            ("P1", 8, 8, 0),
            ("P2", 12, 11, 7),
            ("P3", 14, 12, 10),
            ("P4", 19, 16, 11),
            ("P5", 20, 16, 15),
        ];
        for (name, completion, turnaround, waiting) in expected {
            let m = metrics_of(&s, name);
            assert_eq!(m.completion_time, completion, "{name} completion");
            assert_eq!(m.turnaround_time, turnaround, "{name} turnaround");
            assert_eq!(m.waiting_time, waiting, "{name} waiting");
        }

        let (avg_t, avg_w) = s.average_turnaround_and_waiting().unwrap();
        assert!((avg_t - 12.6).abs() < 1e-10);
        assert!((avg_w - 8.6).abs() < 1e-10);
    }

    #[test]
    fn test_sorts_by_arrival_without_reordering_input() {
        let mut s = FcfsScheduler::new();
        s.add_process("late", 6, 1).unwrap();
        s.add_process("early", 0, 2).unwrap();
        s.add_process("mid", 3, 1).unwrap();
        let schedule = s.compute_schedule();

        assert_eq!(schedule.execution_order(), vec!["early", "mid", "late"]);
        let names: Vec<&str> = s.processes().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["late", "early", "mid"]);
        assert_eq!(s.segments()[0].process_index, 1);
    }

    #[test]
    fn test_tie_break_is_insertion_order() {
        let mut s = FcfsScheduler::new();
        s.add_process("long", 0, 9).unwrap();
        s.add_process("short", 0, 1).unwrap();
        s.add_process("zeta", 2, 1).unwrap();
        s.add_process("alpha", 2, 1).unwrap();
        let schedule = s.compute_schedule();

        assert_eq!(
            schedule.execution_order(),
            vec!["long", "short", "zeta", "alpha"]
        );
    }

    #[test]
    fn test_empty_schedule() {
        let mut s = FcfsScheduler::new();
        assert!(s.compute_schedule().is_empty());
        assert!(s.segments().is_empty());
        assert_eq!(s.average_turnaround_and_waiting(), Ok((0.0, 0.0)));
    }

    #[test]
    fn test_averages_before_compute() {
        let s = textbook_scheduler();
        assert_eq!(
            s.average_turnaround_and_waiting(),
            Err(ScheduleError::NotComputed)
        );
    }

    #[test]
    fn test_add_invalidates_results() {
        let mut s = textbook_scheduler();
        s.compute_schedule();
        assert!(s.is_computed());

        s.add_process("P6", 25, 2).unwrap();
        assert!(!s.is_computed());
        assert!(s.segments().is_empty());
        assert!(s.processes().iter().all(|p| p.metrics.is_none()));
        assert!(s.average_turnaround_and_waiting().is_err());

        let schedule = s.compute_schedule();
        assert_eq!(schedule.segment_count(), 6);
        assert_eq!(schedule.segments[5].start_time, 25);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let mut s = textbook_scheduler();
        let first = s.compute_schedule().clone();
        let first_processes = s.processes().to_vec();
        let second = s.compute_schedule().clone();

        assert_eq!(first, second);
        assert_eq!(first_processes, s.processes());
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut s = FcfsScheduler::new();
        let err = s.add_process("neg", -1, 5).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NegativeArrivalTime);

        let err = s.add_process("zero", 0, 0).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::NonPositiveBurstTime);

        assert!(s.is_empty());
    }

    #[test]
    fn test_overflow_rejected() {
        let mut s = FcfsScheduler::new();
        s.add_process("P1", i64::MAX - 4, 2).unwrap();
        let err = s.add_process("P2", 0, 10).unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::TimelineOverflow);
        assert_eq!(s.process_count(), 1);
    }

    #[test]
    fn test_from_specs() {
        let specs = vec![ProcessSpec::new("B", 2, 1), ProcessSpec::new("A", 0, 3)];
        let mut s = FcfsScheduler::from_specs(specs).unwrap();
        assert_eq!(s.process_count(), 2);
        assert_eq!(s.compute_schedule().execution_order(), vec!["A", "B"]);
    }

    #[test]
    fn test_from_specs_reports_all_errors() {
        let specs = vec![
            ProcessSpec::new("A", -1, 3),
            ProcessSpec::new("B", 0, 0),
            ProcessSpec::new("C", 0, 1),
        ];
        let errors = FcfsScheduler::from_specs(specs).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_execution_order_view() {
        let mut s = FcfsScheduler::new();
        s.add_process("B", 4, 1).unwrap();
        s.add_process("A", 1, 1).unwrap();
        let order: Vec<&str> = s.execution_order().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(order, vec!["A", "B"]);
    }

    #[test]
    fn test_averages_near_timeline_bound() {
        let half = i64::MAX / 2;
        let mut s = FcfsScheduler::new();
        s.add_process("A", 0, half).unwrap();
        s.add_process("B", 0, half).unwrap();
        s.compute_schedule();

        // Turnarounds: half and 2*half; waitings: 0 and half
        let (avg_t, avg_w) = s.average_turnaround_and_waiting().unwrap();
        let expected_t = (half as f64 + 2.0 * half as f64) / 2.0;
        let expected_w = half as f64 / 2.0;
        assert!((avg_t - expected_t).abs() / expected_t < 1e-12);
        assert!((avg_w - expected_w).abs() / expected_w < 1e-12);

        let kpi = s.kpi().unwrap();
        assert_eq!(kpi.makespan, 2 * half);
        assert!((kpi.avg_response - expected_w).abs() / expected_w < 1e-12);
    }

    #[test]
    fn test_kpi_accessor() {
        let mut s = textbook_scheduler();
        assert_eq!(s.kpi().unwrap_err(), ScheduleError::NotComputed);

        s.compute_schedule();
        let kpi = s.kpi().unwrap();
        assert_eq!(kpi, ScheduleKpi::calculate(&s).unwrap());
        assert_eq!(kpi.makespan, 20);
        assert!((kpi.avg_waiting - 8.6).abs() < 1e-10);
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut s = FcfsScheduler::new();
        s.add_process("P", 0, 1).unwrap();
        s.add_process("P", 0, 2).unwrap();
        let schedule = s.compute_schedule();
        assert_eq!(schedule.segments[0].process_index, 0);
        assert_eq!(schedule.segments[1].process_index, 1);
        assert_eq!(schedule.makespan(), 3);
    }
}
