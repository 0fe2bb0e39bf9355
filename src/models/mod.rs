//! FCFS scheduling domain models.
//!
//! Provides the data types for a single-CPU scheduling problem and its
//! solution.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Input tuple `(name, arrival, burst)` |
//! | `Process` | Scheduler-owned process with optional computed metrics |
//! | `ProcessMetrics` | Start, completion, turnaround, waiting |
//! | `GanttSegment` | One execution interval on the CPU timeline |
//! | `Schedule` | Ordered segments with timeline queries |

mod process;
mod schedule;

pub use process::{Process, ProcessMetrics, ProcessSpec};
pub use schedule::{GanttSegment, IdleGap, Schedule};
