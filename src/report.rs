//! Text reports over computed schedules.
//!
//! Renders the Gantt chart, the per-process results table, and a narrative
//! summary. Rendering is pure: every function returns a `String` and never
//! touches the scheduler state.
//!
//! # Gantt layout
//!
//! ```text
//! |   P1    |  idle   |  P2   |
//! 0         4         8       11
//! ```
//!
//! Each time unit takes `unit_width` columns; a cell is never narrower than
//! its label. Idle gaps get their own `idle` cell.

use crate::models::Schedule;
use crate::scheduler::{FcfsScheduler, ScheduleKpi};

const IDLE_LABEL: &str = "idle";
const RULE_WIDTH: usize = 60;

/// Report formatting options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Columns per time unit in the Gantt chart.
    pub unit_width: usize,
    /// Unit label appended to averages in the summary.
    pub time_unit: String,
    /// Decimal places for averages.
    pub decimals: usize,
}

impl ReportConfig {
    /// Creates the default configuration (2 columns/unit, "ms", 1 decimal).
    pub fn new() -> Self {
        Self {
            unit_width: 2,
            time_unit: "ms".to_string(),
            decimals: 1,
        }
    }

    /// Sets the columns per time unit.
    pub fn with_unit_width(mut self, unit_width: usize) -> Self {
        self.unit_width = unit_width;
        self
    }

    /// Sets the time unit label.
    pub fn with_time_unit(mut self, time_unit: impl Into<String>) -> Self {
        self.time_unit = time_unit.into();
        self
    }

    /// Sets the decimal places for averages.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self::new()
    }
}

struct Block<'a> {
    label: &'a str,
    idle: bool,
    start: i64,
    end: i64,
}

fn banner(title: &str) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("{rule}\n{title}\n{rule}\n")
}

/// Timeline blocks (segments and idle gaps) in time order.
fn blocks(schedule: &Schedule) -> Vec<Block<'_>> {
    let mut out = Vec::with_capacity(schedule.segment_count());
    let mut clock = 0;
    for seg in &schedule.segments {
        if seg.start_time > clock {
            out.push(Block {
                label: IDLE_LABEL,
                idle: true,
                start: clock,
                end: seg.start_time,
            });
        }
        out.push(Block {
            label: &seg.process_name,
            idle: false,
            start: seg.start_time,
            end: seg.end_time,
        });
        clock = clock.max(seg.end_time);
    }
    out
}

fn cell_width(block: &Block<'_>, unit_width: usize) -> usize {
    let units = usize::try_from(block.end - block.start).unwrap_or(usize::MAX);
    units
        .saturating_mul(unit_width)
        .saturating_sub(1)
        .max(block.label.chars().count())
        .max(1)
}

/// Places `label` at column `col`, or one space after the current end if
/// that column is already taken.
fn place_label(axis: &mut String, col: usize, label: &str) {
    let len = axis.chars().count();
    if len < col {
        axis.push_str(&" ".repeat(col - len));
    } else if len > 0 {
        axis.push(' ');
    }
    axis.push_str(label);
}

/// Renders the Gantt chart and per-segment execution details.
pub fn render_gantt(schedule: &Schedule, config: &ReportConfig) -> String {
    let mut out = banner("GANTT CHART");
    if schedule.is_empty() {
        out.push_str("No processes scheduled.\n");
        return out;
    }

    let blocks = blocks(schedule);
    let mut bar = String::from("|");
    let mut axis = String::new();
    let mut col = 0;

    place_label(&mut axis, 0, "0");
    for block in &blocks {
        let width = cell_width(block, config.unit_width);
        bar.push_str(&format!(" {:^width$} |", block.label));
        col += width + 3;
        place_label(&mut axis, col, &block.end.to_string());
    }

    out.push_str(&bar);
    out.push('\n');
    out.push_str(&axis);
    out.push('\n');

    out.push_str("\nExecution details:\n");
    for block in &blocks {
        if block.idle {
            out.push_str(&format!(
                "- CPU idle from {} to {}\n",
                block.start, block.end
            ));
        } else {
            out.push_str(&format!(
                "- {} starts at {} and ends at {}\n",
                block.label, block.start, block.end
            ));
        }
    }
    out
}

fn opt_cell(value: Option<i64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Renders the per-process results table in execution order, with averages.
pub fn render_table(scheduler: &FcfsScheduler, config: &ReportConfig) -> String {
    let mut out = banner("RESULTS TABLE");

    let name_width = scheduler
        .processes()
        .iter()
        .map(|p| p.name.chars().count())
        .chain(std::iter::once("AVERAGE".len()))
        .max()
        .unwrap_or(0)
        + 3;

    let header = format!(
        "{:<name_width$}{:<10}{:<8}{:<13}{:<13}{:<10}",
        "Process", "Arrival", "Burst", "Completion", "Turnaround", "Waiting"
    );
    let rule = "-".repeat(header.trim_end().len());
    out.push_str(header.trim_end());
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');

    for p in scheduler.execution_order() {
        let row = format!(
            "{:<name_width$}{:<10}{:<8}{:<13}{:<13}{:<10}",
            p.name,
            p.arrival_time,
            p.burst_time,
            opt_cell(p.completion_time()),
            opt_cell(p.turnaround_time()),
            opt_cell(p.waiting_time()),
        );
        out.push_str(row.trim_end());
        out.push('\n');
    }

    out.push_str(&rule);
    out.push('\n');

    let decimals = config.decimals;
    let (turnaround, waiting) = match scheduler.average_turnaround_and_waiting() {
        Ok((t, w)) => (format!("{t:.decimals$}"), format!("{w:.decimals$}")),
        Err(_) => ("-".to_string(), "-".to_string()),
    };
    let averages = format!(
        "{:<name_width$}{:<10}{:<8}{:<13}{:<13}{:<10}",
        "AVERAGE", "", "", "", turnaround, waiting
    );
    out.push_str(averages.trim_end());
    out.push('\n');
    out
}

/// Renders the narrative summary: algorithm, order, averages, utilization.
pub fn render_summary(scheduler: &FcfsScheduler, config: &ReportConfig) -> String {
    let mut out = banner("SUMMARY");
    out.push_str("Algorithm: FCFS (First Come First Served)\n");
    out.push_str(&format!("Processes: {}\n", scheduler.process_count()));

    let order: Vec<&str> = scheduler
        .execution_order()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    out.push_str(&format!("Execution order: {}\n", order.join(" → ")));

    let decimals = config.decimals;
    let unit = &config.time_unit;
    match ScheduleKpi::calculate(scheduler) {
        Ok(kpi) => {
            out.push_str(&format!(
                "Average turnaround time: {:.decimals$} {unit}\n",
                kpi.avg_turnaround
            ));
            out.push_str(&format!(
                "Average waiting time: {:.decimals$} {unit}\n",
                kpi.avg_waiting
            ));
            out.push_str(&format!("Makespan: {} {unit}\n", kpi.makespan));
            out.push_str(&format!("CPU idle time: {} {unit}\n", kpi.idle_time));
            out.push_str(&format!(
                "CPU utilization: {:.1}%\n",
                kpi.cpu_utilization * 100.0
            ));
        }
        Err(e) => {
            out.push_str(&format!("Metrics unavailable: {e}\n"));
        }
    }
    out
}

/// Renders the full report: Gantt chart, results table, and summary.
pub fn render_report(scheduler: &FcfsScheduler, config: &ReportConfig) -> String {
    let mut out = render_gantt(scheduler.schedule(), config);
    out.push('\n');
    out.push_str(&render_table(scheduler, config));
    out.push('\n');
    out.push_str(&render_summary(scheduler, config));
    out
}
