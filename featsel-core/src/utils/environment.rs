use crate::utils::{DefaultRandom, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the search.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random + Send + Sync>,

    /// Amount of threads used to evaluate candidates in parallel.
    pub parallelism: usize,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment` with repeatable random sequence.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), ..Self::default() }
    }

    /// Creates an instance of `Environment` with given random, parallelism and logger.
    pub fn new(random: Arc<dyn Random + Send + Sync>, parallelism: usize, logger: InfoLogger) -> Self {
        Self { random, parallelism: parallelism.max(1), logger }
    }

    /// Creates a logger which ignores all messages.
    pub fn silent_logger() -> InfoLogger {
        Arc::new(|_: &str| {})
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), get_cpus(), Arc::new(|msg: &str| println!("{msg}")))
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
