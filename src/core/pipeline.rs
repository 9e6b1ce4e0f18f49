//! Fail-fast sequencing of named build steps.
//!
//! A pipeline runs its steps strictly in order on the calling thread. The
//! first step to report failure halts the run; later steps are never invoked.
//! There are no retries and no rollback: steps own their side-effect safety.
//! Timing wraps the whole run, not individual steps, and is observational
//! only.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::output;

/// A named, boolean-returning unit of build work. The closure is invoked at
/// most once.
pub struct BuildStep {
    label: String,
    run: Box<dyn FnOnce() -> bool>,
}

impl BuildStep {
    pub fn new(label: impl Into<String>, run: impl FnOnce() -> bool + 'static) -> Self {
        Self {
            label: label.into(),
            run: Box::new(run),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Succeeded,
    Failed,
}

/// Outcome of one pipeline run.
#[derive(Debug)]
pub struct RunReport {
    pub status: RunStatus,
    /// Steps that were actually invoked (= total on success).
    pub steps_run: usize,
    pub total: usize,
    /// Label of the step that failed, if any.
    pub failed_step: Option<String>,
    pub started_at: DateTime<Utc>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn succeeded(&self) -> bool {
        self.status == RunStatus::Succeeded
    }
}

/// Execute the steps in order, stopping at the first failure.
pub fn run(steps: Vec<BuildStep>) -> RunReport {
    let started_at = Utc::now();
    let start = Instant::now();
    let total = steps.len();
    let mut steps_run = 0usize;

    for step in steps {
        let label = step.label;
        steps_run += 1;
        if !(step.run)() {
            output::error(&format!("Build step '{}' failed, aborting...", label));
            return RunReport {
                status: RunStatus::Failed,
                steps_run,
                total,
                failed_step: Some(label),
                started_at,
                elapsed: start.elapsed(),
            };
        }
    }

    RunReport {
        status: RunStatus::Succeeded,
        steps_run,
        total,
        failed_step: None,
        started_at,
        elapsed: start.elapsed(),
    }
}

/// Seconds with two decimals, for "built in 12.34s" style reporting.
pub fn elapsed_secs(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tracking_step(
        label: &str,
        ok: bool,
        order: &Rc<RefCell<Vec<String>>>,
    ) -> BuildStep {
        let order = Rc::clone(order);
        let name = label.to_string();
        BuildStep::new(label, move || {
            order.borrow_mut().push(name.clone());
            ok
        })
    }

    #[test]
    fn all_steps_run_in_order_on_success() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let report = run(vec![
            tracking_step("a", true, &order),
            tracking_step("b", true, &order),
        ]);

        assert!(report.succeeded());
        assert_eq!(report.steps_run, 2);
        assert_eq!(report.total, 2);
        assert!(report.failed_step.is_none());
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn failure_halts_remaining_steps() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let report = run(vec![
            tracking_step("a", true, &order),
            tracking_step("b", false, &order),
            tracking_step("c", true, &order),
        ]);

        assert!(!report.succeeded());
        assert_eq!(report.status, RunStatus::Failed);
        assert_eq!(report.steps_run, 2);
        assert_eq!(report.failed_step.as_deref(), Some("b"));
        // c never ran
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn first_step_failure_runs_nothing_else() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let report = run(vec![
            tracking_step("a", false, &order),
            tracking_step("b", true, &order),
        ]);

        assert_eq!(report.steps_run, 1);
        assert_eq!(*order.borrow(), vec!["a"]);
    }

    #[test]
    fn empty_pipeline_succeeds() {
        let report = run(Vec::new());
        assert!(report.succeeded());
        assert_eq!(report.steps_run, 0);
        assert_eq!(report.total, 0);
    }

    #[test]
    fn steps_run_exactly_once() {
        let count = Rc::new(RefCell::new(0));
        let c = Rc::clone(&count);
        let report = run(vec![BuildStep::new("once", move || {
            *c.borrow_mut() += 1;
            true
        })]);
        assert!(report.succeeded());
        assert_eq!(*count.borrow(), 1);
    }

    #[test]
    fn elapsed_secs_rounds_to_two_decimals() {
        assert_eq!(elapsed_secs(Duration::from_millis(1500)), 1.5);
        assert_eq!(elapsed_secs(Duration::from_micros(1_234_900)), 1.23);
        assert_eq!(elapsed_secs(Duration::ZERO), 0.0);
    }
}
