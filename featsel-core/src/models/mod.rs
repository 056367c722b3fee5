//! Contains the data model shared by filter and wrapper methods.

mod dataset;
pub use self::dataset::*;

mod subset;
pub use self::subset::*;
