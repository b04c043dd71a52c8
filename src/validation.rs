//! Input validation for simulation runs.
//!
//! Checks simulation parameters and job descriptors before a run starts.
//! Detects:
//! - Zero queue levels, slice length, or pull frequency
//! - Jobs that need no work
//! - Jobs whose initial priority has no queue bucket
//! - Runs whose worst-case clock does not fit in `Ticks`
//!
//! All problems are collected, not just the first, so a loader can report
//! a bad job file in one pass.

use crate::error::SchedError;
use crate::models::{JobSpec, Ticks};
use crate::scheduler::SimConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<SchedError>>;

/// Validates simulation parameters.
///
/// # Returns
/// `Ok(())` if levels, slice, and pull frequency are all positive,
/// `Err(errors)` with one `Construction` error per zero parameter.
pub fn validate_config(config: &SimConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.levels == 0 {
        errors.push(SchedError::construction("LEVELS must be greater than zero"));
    }
    if config.slice == 0 {
        errors.push(SchedError::construction("SLICE must be greater than zero"));
    }
    if config.pull_freq == 0 {
        errors.push(SchedError::construction("PULL_FREQ must be greater than zero"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a whole run: parameters first, then every job.
///
/// Checks:
/// 1. Parameters are positive (see [`validate_config`])
/// 2. Every job needs at least one tick of work
/// 3. Every job's initial priority is below `levels`
/// 4. The worst-case clock fits in [`Ticks`] (see [`check_clock_range`])
///
/// Priority checks are skipped when `levels` is itself invalid.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(config: &SimConfig, jobs: &[JobSpec]) -> ValidationResult {
    let mut errors = validate_config(config).err().unwrap_or_default();

    for (index, job) in jobs.iter().enumerate() {
        if job.time_required == 0 {
            errors.push(SchedError::malformed_job(format!(
                "Job {index} requires no work"
            )));
        }
        if config.levels > 0 && job.initial_priority >= config.levels {
            errors.push(SchedError::malformed_job(format!(
                "Job {index} has priority {} but only {} levels exist",
                job.initial_priority, config.levels
            )));
        }
    }

    if errors.is_empty() {
        if let Some(err) = check_clock_range(config, jobs) {
            errors.push(err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that no run over `jobs` can overflow the simulated clock.
///
/// The clock advances by the work done plus idle jumps. Every job admitted
/// after the first can cause at most two idle jumps of one admission
/// interval each, so the worst case is
/// `sum(time_required) + 2 * (jobs - 1) * pull_freq * slice`.
///
/// # Returns
/// - `MalformedJob` if the total work alone overflows.
/// - `Construction` if the idle allowance pushes it past the range.
pub fn check_clock_range(config: &SimConfig, jobs: &[JobSpec]) -> Option<SchedError> {
    let Some(work) = jobs
        .iter()
        .try_fold(0 as Ticks, |acc, job| acc.checked_add(job.time_required))
    else {
        return Some(SchedError::malformed_job(
            "Total time_required of all jobs exceeds the clock range",
        ));
    };

    let idle_jumps = (jobs.len().saturating_sub(1) as Ticks).saturating_mul(2);
    if idle_jumps == 0 {
        return None;
    }
    let worst_case = config
        .admission_interval()
        .and_then(|interval| interval.checked_mul(idle_jumps))
        .and_then(|idle| idle.checked_add(work));

    match worst_case {
        Some(_) => None,
        None => Some(SchedError::construction(format!(
            "SLICE {} x PULL_FREQ {} over {} jobs can exceed the clock range",
            config.slice,
            config.pull_freq,
            jobs.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample_jobs() -> Vec<JobSpec> {
        vec![JobSpec::new(5, 50), JobSpec::new(7, 100), JobSpec::new(1, 100)]
    }

    #[test]
    fn test_valid_input() {
        let config = SimConfig::new(10, 15, 2);
        assert!(validate_input(&config, &sample_jobs()).is_ok());
    }

    #[test]
    fn test_empty_job_list_is_valid() {
        assert!(validate_input(&SimConfig::new(1, 1, 1), &[]).is_ok());
    }

    #[test]
    fn test_zero_parameters() {
        let errors = validate_config(&SimConfig::new(0, 0, 0)).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().all(|e| e.kind == ErrorKind::Construction));
    }

    #[test]
    fn test_zero_time_required() {
        let jobs = vec![JobSpec::new(0, 0)];
        let errors = validate_input(&SimConfig::new(2, 10, 1), &jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::MalformedJob);
        assert!(errors[0].message.contains("Job 0"));
    }

    #[test]
    fn test_priority_out_of_range() {
        let jobs = vec![JobSpec::new(1, 10), JobSpec::new(2, 10)];
        let errors = validate_input(&SimConfig::new(2, 10, 1), &jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains("Job 1"));
    }

    #[test]
    fn test_zero_levels_skips_priority_checks() {
        let jobs = vec![JobSpec::new(3, 10)];
        let errors = validate_input(&SimConfig::new(0, 10, 1), &jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Construction);
    }

    #[test]
    fn test_idle_allowance_overflow() {
        let config = SimConfig::new(1, u64::MAX / 2, 4);
        let jobs = vec![JobSpec::new(0, 1), JobSpec::new(0, 1)];
        let errors = validate_input(&config, &jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::Construction);
        assert!(errors[0].message.contains("clock range"));
    }

    #[test]
    fn test_total_work_overflow() {
        let jobs = vec![JobSpec::new(0, u64::MAX), JobSpec::new(0, 1)];
        let errors = validate_input(&SimConfig::new(1, 10, 1), &jobs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ErrorKind::MalformedJob);
    }

    #[test]
    fn test_huge_slice_single_job_is_valid() {
        // A lone job never waits for an admission, so no idle allowance
        let config = SimConfig::new(1, u64::MAX, 4);
        assert!(validate_input(&config, &[JobSpec::new(0, u64::MAX)]).is_ok());
    }

    #[test]
    fn test_worst_case_clock_at_limit() {
        // 2 idle jumps of 10 ticks plus the work fill the range exactly
        let config = SimConfig::new(1, 10, 1);
        let jobs = vec![JobSpec::new(0, u64::MAX - 21), JobSpec::new(0, 1)];
        assert!(validate_input(&config, &jobs).is_ok());

        let jobs = vec![JobSpec::new(0, u64::MAX - 20), JobSpec::new(0, 1)];
        let errors = validate_input(&config, &jobs).unwrap_err();
        assert_eq!(errors[0].kind, ErrorKind::Construction);
    }

    #[test]
    fn test_multiple_errors() {
        let jobs = vec![JobSpec::new(9, 0), JobSpec::new(1, 10)];
        let errors = validate_input(&SimConfig::new(4, 0, 1), &jobs).unwrap_err();
        // SLICE, zero work, priority 9
        assert_eq!(errors.len(), 3);
    }
}
