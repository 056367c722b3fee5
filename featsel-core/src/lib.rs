//! This crate contains building blocks to select an informative subset of features from a labeled
//! tabular dataset.
//!
//! Two families of methods are provided:
//! - **filter** methods rank every feature independently using an information-theoretic score,
//!   see [`filter`];
//! - **wrapper** methods search the space of feature subsets using population-based metaheuristics
//!   (particle swarm and ant colony optimization) and score every candidate subset by cross-validated
//!   accuracy of an actual classifier, see [`wrapper`] and [`evaluation`].
//!
//! A typical wrapper run:
//!
//! ```
//! use featsel_core::prelude::*;
//! use std::sync::Arc;
//!
//! # fn main() -> GenericResult<()> {
//! let rows = (0..20)
//!     .map(|idx| {
//!         let label = (idx % 2) as f64;
//!         vec![label * 10. + (idx % 3) as f64, (idx % 5) as f64, label]
//!     })
//!     .collect::<Vec<_>>();
//! let dataset = Arc::new(Dataset::from_rows(rows)?);
//! let environment = Arc::new(Environment::new_repeatable(7));
//!
//! let evaluator = CrossValidation::new(
//!     dataset.clone(),
//!     Arc::new(KNearestNeighbors::new(1)?),
//!     4,
//!     environment.random.as_ref(),
//! )?;
//! let swarm_config = SwarmConfig { population_size: 6, ..SwarmConfig::default() };
//! let strategy = ParticleSwarm::new(swarm_config, dataset.num_features())?;
//! let config = SearchConfig { max_iterations: 3, num_selected: 1, use_cache: true };
//!
//! let result = WrapperSearch::new(strategy, Arc::new(evaluator), config, environment)?.run()?;
//!
//! assert_eq!(result.features.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evaluation;
pub mod filter;
pub mod models;
pub mod prelude;
pub mod utils;
pub mod wrapper;
