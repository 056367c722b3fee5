//! A library part of the command line interface: dataset import, json configuration and a selection
//! runner which wires them to the methods of `featsel-core`.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

pub use featsel_core as core;

pub mod extensions;
