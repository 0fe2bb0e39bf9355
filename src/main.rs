//! `u-fcfs` command line front end.
//!
//! Reads a process list, runs the FCFS pass, and prints the report.
//!
//! ```bash
//! u-fcfs --example
//! u-fcfs --file processes.json --json
//! u-fcfs --random 8 --seed 3 --max-burst 6
//! printf 'P1 0 8\nP2 1 4\nfin\n' | u-fcfs
//! ```
//!
//! The library logs through the `log` facade. This binary installs no logger
//! backend, so those records are discarded here; embedders that want them
//! register their own logger before calling into `u_fcfs`.

use std::error::Error;
use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;

use clap::Parser;
use serde::Serialize;

use u_fcfs::input::{is_terminator, parse_json, parse_process_line, parse_process_list};
use u_fcfs::models::{Process, ProcessSpec, Schedule};
use u_fcfs::report::{render_report, ReportConfig};
use u_fcfs::scheduler::{FcfsScheduler, ScheduleKpi};
use u_fcfs::workload::{textbook_example, WorkloadGenerator};

/// FCFS CPU scheduling simulator.
#[derive(Debug, Parser)]
#[command(name = "u-fcfs")]
#[command(about = "First-Come-First-Served CPU scheduling: Gantt chart and timing metrics")]
#[command(version)]
struct Cli {
    /// Use the five-process textbook example
    #[arg(long, conflicts_with_all = ["file", "random"])]
    example: bool,

    /// Read processes from a JSON array file
    #[arg(long, conflicts_with = "random")]
    file: Option<PathBuf>,

    /// Generate N random processes
    #[arg(long, value_name = "N")]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Latest arrival time for --random
    #[arg(long, default_value_t = 20)]
    max_arrival: i64,

    /// Longest burst for --random
    #[arg(long, default_value_t = 10)]
    max_burst: i64,

    /// Gantt chart columns per time unit
    #[arg(long, default_value_t = 2)]
    unit_width: usize,

    /// Time unit label used in the summary
    #[arg(long, default_value = "ms")]
    time_unit: String,

    /// Print the computed schedule as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    processes: &'a [Process],
    schedule: &'a Schedule,
    kpi: ScheduleKpi,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let specs = load_specs(cli)?;
    if specs.is_empty() {
        println!("No processes entered. Nothing to schedule.");
        return Ok(());
    }

    let mut scheduler = FcfsScheduler::from_specs(specs).map_err(|errors| {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        messages.join("; ")
    })?;
    scheduler.compute_schedule();

    if cli.json {
        let report = JsonReport {
            processes: scheduler.processes(),
            schedule: scheduler.schedule(),
            kpi: ScheduleKpi::calculate(&scheduler)?,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let config = ReportConfig::new()
            .with_unit_width(cli.unit_width)
            .with_time_unit(cli.time_unit.clone());
        print!("{}", render_report(&scheduler, &config));
    }
    Ok(())
}

fn load_specs(cli: &Cli) -> Result<Vec<ProcessSpec>, Box<dyn Error>> {
    if cli.example {
        return Ok(textbook_example());
    }
    if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path)?;
        return Ok(parse_json(&text)?);
    }
    if let Some(count) = cli.random {
        return Ok(WorkloadGenerator::new(count)
            .with_max_arrival(cli.max_arrival)
            .with_max_burst(cli.max_burst)
            .with_seed(cli.seed)
            .generate());
    }

    let stdin = io::stdin();
    if stdin.is_terminal() {
        read_interactive(stdin.lock(), &mut io::stdout())
    } else {
        let text = io::read_to_string(stdin.lock())?;
        Ok(parse_process_list(&text)?)
    }
}

/// Prompt loop: bad lines are reported and re-asked, `fin`/`end` finishes.
///
/// Errors name the line as typed, counting blank and rejected lines.
fn read_interactive<R: BufRead, W: Write>(
    mut reader: R,
    out: &mut W,
) -> Result<Vec<ProcessSpec>, Box<dyn Error>> {
    writeln!(out, "Enter processes as: name arrival burst (e.g. P1 0 8)")?;
    writeln!(out, "Type 'fin' to finish.\n")?;

    let mut specs = Vec::new();
    let mut line = String::new();
    let mut line_no = 0;
    loop {
        write!(out, "Process: ")?;
        out.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 || is_terminator(&line) {
            break;
        }
        line_no += 1;
        if line.trim().is_empty() {
            continue;
        }

        match parse_process_line(&line, line_no) {
            Ok(spec) => {
                writeln!(out, "Added process {}", spec.name)?;
                specs.push(spec);
            }
            Err(e) => writeln!(out, "Error: {e}")?,
        }
    }
    Ok(specs)
}
