//! FCFS scheduler and KPI evaluation.
//!
//! # Algorithm
//!
//! `FcfsScheduler` runs processes to completion in arrival order on a single
//! CPU, idling when nothing has arrived. Ties on arrival time are broken by
//! insertion order.
//!
//! # KPI
//!
//! `ScheduleKpi` summarizes a computed timeline: makespan, idle time,
//! utilization, throughput, and mean turnaround/waiting/response times.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod kpi;

pub use fcfs::{FcfsScheduler, ScheduleError};
pub use kpi::ScheduleKpi;
