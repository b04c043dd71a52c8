//! Run quality metrics (KPIs).
//!
//! Computes standard CPU-scheduling performance indicators from the
//! completion records of a run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg / Max Turnaround | end - start (admission to completion) |
//! | Avg Wait | turnaround - time required |
//! | Avg Priority Boost | Levels moved by aging |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use crate::models::{CompletionRecord, Ticks};

/// Run performance indicators.
///
/// All time values are in simulation ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationKpi {
    /// Number of completed processes.
    pub completed: usize,
    /// Latest completion time.
    pub makespan: Ticks,
    /// Mean time from admission to completion.
    pub avg_turnaround: f64,
    /// Longest time from admission to completion.
    pub max_turnaround: Ticks,
    /// Mean time spent ready but not running.
    pub avg_wait: f64,
    /// Mean number of levels a process aged before finishing.
    pub avg_priority_boost: f64,
}

impl SimulationKpi {
    /// Computes KPIs from completion records.
    pub fn calculate(records: &[CompletionRecord]) -> Self {
        let completed = records.len();
        let makespan = records.iter().map(|r| r.end_time).max().unwrap_or(0);
        let max_turnaround = records.iter().map(|r| r.turnaround()).max().unwrap_or(0);

        let mean = |total: f64| {
            if completed == 0 {
                0.0
            } else {
                total / completed as f64
            }
        };

        let total_turnaround: f64 = records.iter().map(|r| r.turnaround() as f64).sum();
        let total_wait: f64 = records.iter().map(|r| r.wait_time() as f64).sum();
        let total_boost: f64 = records.iter().map(|r| r.priority_boost() as f64).sum();

        Self {
            completed,
            makespan,
            avg_turnaround: mean(total_turnaround),
            max_turnaround,
            avg_wait: mean(total_wait),
            avg_priority_boost: mean(total_boost),
        }
    }

    /// Completed processes per tick of makespan.
    pub fn throughput(&self) -> f64 {
        if self.makespan == 0 {
            0.0
        } else {
            self.completed as f64 / self.makespan as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::JobSpec;
    use crate::scheduler::{simulate, SimConfig};

    #[test]
    fn test_kpi_reference_scenario() {
        let records = simulate(
            &SimConfig::new(10, 15, 2),
            [JobSpec::new(5, 50), JobSpec::new(7, 100), JobSpec::new(1, 100)],
        )
        .unwrap();

        let kpi = SimulationKpi::calculate(&records);
        assert_eq!(kpi.completed, 3);
        assert_eq!(kpi.makespan, 250);
        assert_eq!(kpi.max_turnaround, 220);
        // Turnarounds 50, 115, 220
        assert!((kpi.avg_turnaround - 385.0 / 3.0).abs() < 1e-10);
        // Waits 0, 15, 120
        assert!((kpi.avg_wait - 45.0).abs() < 1e-10);
        // Boosts 3, 1, 6
        assert!((kpi.avg_priority_boost - 10.0 / 3.0).abs() < 1e-10);
        assert!((kpi.throughput() - 3.0 / 250.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = SimulationKpi::calculate(&[]);
        assert_eq!(kpi.completed, 0);
        assert_eq!(kpi.makespan, 0);
        assert_eq!(kpi.max_turnaround, 0);
        assert!((kpi.avg_turnaround - 0.0).abs() < 1e-10);
        assert!((kpi.throughput() - 0.0).abs() < 1e-10);
    }
}
