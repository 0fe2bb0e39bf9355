//! Process workloads.
//!
//! Provides the classic five-process textbook example and a seeded random
//! generator for experiments and randomized tests.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::ProcessSpec;

/// Five-process textbook example.
///
/// FCFS averages: turnaround 12.6, waiting 8.6.
pub fn textbook_example() -> Vec<ProcessSpec> {
    vec![
        ProcessSpec::new("P1", 0, 8),
        ProcessSpec::new("P2", 1, 4),
        ProcessSpec::new("P3", 2, 2),
        ProcessSpec::new("P4", 3, 5),
        ProcessSpec::new("P5", 4, 1),
    ]
}

/// Reproducible random workload generator.
///
/// Processes are named `P1..Pn` in generation order, with arrivals drawn
/// from `0..=max_arrival` and bursts from `1..=max_burst`.
///
/// # Example
///
/// ```
/// use u_fcfs::workload::WorkloadGenerator;
///
/// let specs = WorkloadGenerator::new(10).with_seed(7).generate();
/// assert_eq!(specs.len(), 10);
/// assert!(specs.iter().all(|p| p.burst_time >= 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadGenerator {
    /// Number of processes.
    pub count: usize,
    /// Latest possible arrival time.
    pub max_arrival: i64,
    /// Longest possible burst.
    pub max_burst: i64,
    /// RNG seed.
    pub seed: u64,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 20,
            max_burst: 10,
            seed: 42,
        }
    }

    /// Sets the latest arrival time (negative values are treated as 0).
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest burst (values below 1 are treated as 1).
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process set.
    pub fn generate(&self) -> Vec<ProcessSpec> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        self.generate_with(&mut rng)
    }

    /// Generates the process set from a caller-provided RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Vec<ProcessSpec> {
        let max_arrival = self.max_arrival.max(0);
        let max_burst = self.max_burst.max(1);
        (1..=self.count)
            .map(|i| {
                ProcessSpec::new(
                    format!("P{i}"),
                    rng.random_range(0..=max_arrival),
                    rng.random_range(1..=max_burst),
                )
            })
            .collect()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new(5)
    }
}
