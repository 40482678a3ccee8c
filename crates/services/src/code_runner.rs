use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use prep_core::model::{Language, Problem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const PASSED_MESSAGE: &str = "All test cases passed!";
pub const FAILED_MESSAGE: &str = "Test case failed: Expected [0, 1] but got [1, 0]";
pub const SUBMITTED_MESSAGE: &str = "Solution submitted successfully!";

/// Outcome of a simulated test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestRun {
    pub passed: bool,
    pub message: &'static str,
}

impl TestRun {
    #[must_use]
    pub fn from_outcome(passed: bool) -> Self {
        Self {
            passed,
            message: if passed { PASSED_MESSAGE } else { FAILED_MESSAGE },
        }
    }
}

/// Stand-in for a remote judge. Outcomes are random; code is never executed.
pub struct CodeRunner {
    latency: Duration,
    pass_probability: f64,
    rng: Mutex<StdRng>,
}

impl CodeRunner {
    #[must_use]
    pub fn new(latency: Duration) -> Self {
        Self::with_rng(latency, StdRng::from_os_rng())
    }

    #[must_use]
    pub fn with_rng(latency: Duration, rng: StdRng) -> Self {
        Self {
            latency,
            pass_probability: 0.5,
            rng: Mutex::new(rng),
        }
    }

    /// Override the pass probability, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn with_pass_probability(mut self, probability: f64) -> Self {
        self.pass_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Pretend to run `code` against the problem's tests.
    pub async fn run(&self, problem: &Problem, language: Language, code: &str) -> TestRun {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let passed = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            rng.random_bool(self.pass_probability)
        };
        tracing::debug!(
            problem_id = %problem.id,
            language = language.label(),
            code_len = code.len(),
            passed,
            "simulated test run"
        );
        TestRun::from_outcome(passed)
    }

    /// Accept a solution. The catalog is left as it is.
    #[must_use]
    pub fn submit(&self, problem: &Problem, language: Language) -> &'static str {
        tracing::info!(problem_id = %problem.id, language = language.label(), "solution submitted");
        SUBMITTED_MESSAGE
    }
}
