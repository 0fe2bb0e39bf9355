//! Schedule quality metrics (KPIs).
//!
//! Computes standard single-CPU performance indicators from a scheduler
//! whose timeline has been computed.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last segment |
//! | Idle Time | Makespan minus busy time |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Processes completed per time unit |
//! | Avg Turnaround | Mean(completion - arrival) |
//! | Avg Waiting | Mean(turnaround - burst) |
//! | Avg Response | Mean(start - arrival) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::{FcfsScheduler, ScheduleError};

/// Schedule performance indicators.
///
/// All time values are in simulation time units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of scheduled processes.
    pub process_count: usize,
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of all bursts.
    pub total_burst: i64,
    /// Time the CPU had no ready process.
    pub idle_time: i64,
    /// Busy time / makespan (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes per time unit.
    pub throughput: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Largest single waiting time.
    pub max_waiting: i64,
}

impl ScheduleKpi {
    /// Computes KPIs from a scheduled process set.
    ///
    /// An empty process set yields all-zero KPIs. Fails with
    /// `ScheduleError::NotComputed` if the timeline is stale.
    pub fn calculate(scheduler: &FcfsScheduler) -> Result<Self, ScheduleError> {
        let (avg_turnaround, avg_waiting) = scheduler.average_turnaround_and_waiting()?;
        if scheduler.is_empty() {
            return Ok(Self::default());
        }

        let schedule = scheduler.schedule();
        let makespan = schedule.makespan();
        let total_burst = schedule.busy_time();
        let process_count = scheduler.process_count();

        let mut total_response: i128 = 0;
        let mut max_waiting: i64 = 0;
        for p in scheduler.processes() {
            if let Some(m) = p.metrics {
                total_response += i128::from(m.response_time(p.arrival_time));
                max_waiting = max_waiting.max(m.waiting_time);
            }
        }

        let throughput = if makespan > 0 {
            process_count as f64 / makespan as f64
        } else {
            0.0
        };

        Ok(Self {
            process_count,
            makespan,
            total_burst,
            idle_time: schedule.idle_time(),
            cpu_utilization: schedule.utilization().unwrap_or(0.0),
            throughput,
            avg_turnaround,
            avg_waiting,
            avg_response: total_response as f64 / process_count as f64,
            max_waiting,
        })
    }

    /// Whether the schedule meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_waiting: i64, min_utilization: f64) -> bool {
        self.max_waiting <= max_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheduled(processes: &[(&str, i64, i64)]) -> FcfsScheduler {
        let mut s = FcfsScheduler::new();
        for &(name, arrival, burst) in processes {
            s.add_process(name, arrival, burst).unwrap();
        }
        s.compute_schedule();
        s
    }

    #[test]
    fn test_kpi_textbook() {
        let s = scheduled(&[
            ("P1", 0, 8),
            ("P2", 1, 4),
            ("P3", 2, 2),
            ("P4", 3, 5),
            ("P5", 4, 1),
        ]);
        let kpi = ScheduleKpi::calculate(&s).unwrap();
        assert_eq!(kpi.process_count, 5);
        assert_eq!(kpi.makespan, 20);
        assert_eq!(kpi.total_burst, 20);
        assert_eq!(kpi.idle_time, 0);
        assert_eq!(kpi.max_waiting, 15);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
        assert!((kpi.avg_turnaround - 12.6).abs() < 1e-10);
        assert!((kpi.avg_waiting - 8.6).abs() < 1e-10);
        // Without preemption, response equals waiting
        assert!((kpi.avg_response - kpi.avg_waiting).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_with_idle() {
        // A [0,2), idle [2,6), B [6,8)
        let s = scheduled(&[("A", 0, 2), ("B", 6, 2)]);
        let kpi = ScheduleKpi::calculate(&s).unwrap();
        assert_eq!(kpi.makespan, 8);
        assert_eq!(kpi.idle_time, 4);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let s = scheduled(&[]);
        let kpi = ScheduleKpi::calculate(&s).unwrap();
        assert_eq!(kpi, ScheduleKpi::default());
        assert_eq!(kpi.makespan, 0);
    }

    #[test]
    fn test_kpi_not_computed() {
        let mut s = FcfsScheduler::new();
        s.add_process("P1", 0, 3).unwrap();
        assert_eq!(
            ScheduleKpi::calculate(&s).unwrap_err(),
            ScheduleError::NotComputed
        );
    }

    #[test]
    fn test_kpi_near_timeline_bound() {
        let third = i64::MAX / 3;
        let s = scheduled(&[("A", 0, third), ("B", 0, third), ("C", 0, third)]);
        let kpi = ScheduleKpi::calculate(&s).unwrap();
        assert_eq!(kpi.makespan, 3 * third);
        assert_eq!(kpi.max_waiting, 2 * third);
        assert_eq!(kpi.idle_time, 0);
        // Waitings 0, third, 2*third average to third
        assert!((kpi.avg_waiting - third as f64).abs() / (third as f64) < 1e-12);
        assert!((kpi.avg_response - third as f64).abs() / (third as f64) < 1e-12);
        assert!((kpi.avg_turnaround - 2.0 * third as f64).abs() / (third as f64) < 1e-12);
    }

    #[test]
    fn test_meets_thresholds() {
        let s = scheduled(&[("A", 0, 4), ("B", 0, 1)]); // B waits 4
        let kpi = ScheduleKpi::calculate(&s).unwrap();
        assert!(kpi.meets_thresholds(4, 1.0));
        assert!(!kpi.meets_thresholds(3, 0.0));
        assert!(!kpi.meets_thresholds(10, 1.5));
    }
}
