//! A module which collects metrics about search execution and reports progress through the logger.

#[cfg(test)]
#[path = "../../tests/unit/wrapper/telemetry_test.rs"]
mod telemetry_test;

use crate::utils::{InfoLogger, Timer};
use crate::wrapper::SubsetScore;

/// Represents information about a single search iteration.
#[derive(Clone, Debug)]
pub struct IterationMetrics {
    /// Iteration sequence number, starting from zero.
    pub number: usize,
    /// Global best score after the iteration.
    pub best: SubsetScore,
    /// True if the global best was replaced during the iteration.
    pub is_improvement: bool,
    /// Amount of fitness evaluations requested during the iteration.
    pub evaluations: usize,
    /// Iteration duration in milliseconds.
    pub duration: u128,
}

/// Collects iteration metrics and logs them.
pub(crate) struct Telemetry {
    logger: InfoLogger,
    timer: Timer,
    history: Vec<IterationMetrics>,
}

impl Telemetry {
    pub fn new(logger: InfoLogger) -> Self {
        Self { logger, timer: Timer::start(), history: vec![] }
    }

    pub fn on_start(&mut self, name: &str, size: usize, dimension: usize, max_iterations: usize) {
        self.timer = Timer::start();
        self.log(&format!(
            "{name} search started: candidates: {size}, features: {dimension}, iterations: {max_iterations}"
        ));
    }

    pub fn on_iteration(&mut self, metrics: IterationMetrics) {
        self.log(&format!(
            "[{}s] iteration {} took {}ms, evaluations: {}, best fitness: {:.5}, size: {}{}",
            self.elapsed_secs(),
            metrics.number,
            metrics.duration,
            metrics.evaluations,
            metrics.best.fitness,
            metrics.best.size,
            if metrics.is_improvement { " (improved)" } else { "" }
        ));

        self.history.push(metrics);
    }

    pub fn on_result(self, features: &[usize], evaluations: usize) -> Vec<IterationMetrics> {
        let features = features.iter().map(|feature| feature.to_string()).collect::<Vec<_>>().join(",");
        let iterations = self.history.len();
        let improvements = self.history.iter().filter(|metrics| metrics.is_improvement).count();

        self.log(&format!(
            "[{}s] search finished: iterations: {iterations}, improvements: {improvements}, \
             evaluations: {evaluations}, selected features: [{features}]",
            self.elapsed_secs()
        ));

        self.history
    }

    fn elapsed_secs(&self) -> String {
        format!("{:.2}", self.timer.elapsed_secs_as_float())
    }

    fn log(&self, message: &str) {
        (self.logger)(message)
    }
}
