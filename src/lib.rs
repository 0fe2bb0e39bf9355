//! First-Come-First-Served CPU scheduling for the U-Engine ecosystem.
//!
//! Simulates a single CPU running processes to completion in arrival order,
//! computes per-process timing metrics, and renders textual reports.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessSpec`, `ProcessMetrics`,
//!   `GanttSegment`, `Schedule`
//! - **`validation`**: Input integrity checks (arrival, burst, timeline bounds)
//! - **`scheduler`**: `FcfsScheduler` and `ScheduleKpi`
//! - **`workload`**: Textbook example and seeded random workloads
//! - **`input`**: Line-format and JSON process list parsing
//! - **`report`**: Gantt chart, results table, and summary rendering
//!
//! # Example
//!
//! ```
//! use u_fcfs::scheduler::FcfsScheduler;
//! use u_fcfs::workload::textbook_example;
//!
//! let mut scheduler = FcfsScheduler::from_specs(textbook_example()).unwrap();
//! scheduler.compute_schedule();
//!
//! let (turnaround, waiting) = scheduler.average_turnaround_and_waiting().unwrap();
//! assert!((turnaround - 12.6).abs() < 1e-10);
//! assert!((waiting - 8.6).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod input;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
